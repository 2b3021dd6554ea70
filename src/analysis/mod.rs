//! Analyzer stages.
//!
//! Each stage is a pure function `(messages, prior) -> next` over the same
//! message slice. Stages run in the order of [`Stage::all`]:
//!
//! | Stage | Adds |
//! |---|---|
//! | [`Stage::Statistics`] | participants, counts, histograms, response times, silence, media |
//! | [`Stage::Emoji`] | global and per-user emoji counts, top list |
//! | [`Stage::TimePatterns`] | year-month, day-part, weekday/weekend, season views |
//! | [`Stage::Sentiment`] | lexicon sentiment per message, user and date |
//! | [`Stage::Dynamics`] | response-time distributions, interaction flow |
//! | [`Stage::Lexical`] | word frequency, active days, media cadence, topics |
//! | [`Stage::Relationship`] | profiles, winners, compatibility, titles |

pub mod dynamics;
pub mod emoji;
pub mod lexical;
pub mod model;
pub mod relationship;
pub mod sentiment;
pub mod stats;
pub mod time;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::error::{ChatpulseError, Result};

pub use model::ChatAnalysis;

/// One enrichment step of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Statistics,
    Emoji,
    TimePatterns,
    Sentiment,
    Dynamics,
    Lexical,
    Relationship,
}

impl Stage {
    /// All stages in execution order.
    pub fn all() -> &'static [Stage] {
        &[
            Stage::Statistics,
            Stage::Emoji,
            Stage::TimePatterns,
            Stage::Sentiment,
            Stage::Dynamics,
            Stage::Lexical,
            Stage::Relationship,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::Statistics => "statistics",
            Stage::Emoji => "emoji",
            Stage::TimePatterns => "time_patterns",
            Stage::Sentiment => "sentiment",
            Stage::Dynamics => "dynamics",
            Stage::Lexical => "lexical",
            Stage::Relationship => "relationship",
        }
    }

    /// Stages whose output this stage reads.
    pub fn prerequisites(self) -> &'static [Stage] {
        match self {
            Stage::Statistics => &[],
            Stage::Relationship => &[Stage::Statistics, Stage::Emoji],
            _ => &[Stage::Statistics],
        }
    }

    /// Applies this stage to `prior`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatpulseError::StageFailure`] if the stage already ran,
    /// a prerequisite is missing, or `messages` has senders the aggregate
    /// does not know about.
    pub fn apply(self, messages: &[Message], prior: ChatAnalysis) -> Result<ChatAnalysis> {
        if prior.has_stage(self) {
            return Err(ChatpulseError::stage_failure(self.name(), "stage already applied"));
        }
        if let Some(missing) = self.prerequisites().iter().find(|s| !prior.has_stage(**s)) {
            return Err(ChatpulseError::stage_failure(
                self.name(),
                format!("requires the {missing} stage"),
            ));
        }
        if self != Stage::Statistics {
            ensure_known_senders(self, messages, &prior)?;
        }

        let mut next = match self {
            Stage::Statistics => stats::analyze(messages),
            Stage::Emoji => emoji::analyze(messages, prior),
            Stage::TimePatterns => time::analyze(messages, prior),
            Stage::Sentiment => sentiment::analyze(messages, prior),
            Stage::Dynamics => dynamics::analyze(messages, prior),
            Stage::Lexical => lexical::analyze(messages, prior),
            Stage::Relationship => relationship::analyze(messages, prior),
        };
        next.stages.push(self);
        Ok(next)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A map with one default entry per participant.
pub fn per_participant<T: Default>(participants: &[String]) -> BTreeMap<String, T> {
    participants
        .iter()
        .map(|p| (p.clone(), T::default()))
        .collect()
}

/// Later stages must not introduce participants.
fn ensure_known_senders(stage: Stage, messages: &[Message], prior: &ChatAnalysis) -> Result<()> {
    let known: BTreeSet<&str> = prior.participants.iter().map(String::as_str).collect();
    match messages.iter().find(|m| !known.contains(m.sender.as_str())) {
        Some(m) => Err(ChatpulseError::stage_failure(
            stage.name(),
            format!("sender '{}' is not a participant", m.sender),
        )),
        None => Ok(()),
    }
}

/// Index of the first maximum, or `None` if every value is zero.
pub(crate) fn first_max_index(values: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v > 0 && best.is_none_or(|(_, b)| v > b) {
            best = Some((i, v));
        }
    }
    best.map(|(i, _)| i)
}

/// Participant with the highest score; ties go to the earlier participant.
pub(crate) fn leader<F>(participants: &[String], score: F) -> Option<String>
where
    F: Fn(&str) -> usize,
{
    let scores: Vec<usize> = participants.iter().map(|p| score(p)).collect();
    first_max_index(&scores).map(|i| participants[i].clone())
}

/// Minutes between two timestamps.
pub(crate) fn minutes_between(earlier: &Message, later: &Message) -> f64 {
    (later.timestamp - earlier.timestamp).num_seconds() as f64 / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn msg(minute: u32, sender: &str) -> Message {
        Message::new(
            Utc.with_ymd_and_hms(2023, 1, 1, 9, minute, 0).unwrap(),
            sender,
            "merhaba",
        )
    }

    #[test]
    fn test_stage_order() {
        let names: Vec<&str> = Stage::all().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "statistics",
                "emoji",
                "time_patterns",
                "sentiment",
                "dynamics",
                "lexical",
                "relationship"
            ]
        );
    }

    #[test]
    fn test_apply_records_stage() {
        let messages = vec![msg(0, "Alice"), msg(1, "Bob")];
        let analysis = Stage::Statistics
            .apply(&messages, ChatAnalysis::default())
            .unwrap();
        assert_eq!(analysis.stages, vec![Stage::Statistics]);
        let analysis = Stage::Emoji.apply(&messages, analysis).unwrap();
        assert_eq!(analysis.stages, vec![Stage::Statistics, Stage::Emoji]);
    }

    #[test]
    fn test_missing_prerequisite_is_stage_failure() {
        let messages = vec![msg(0, "Alice")];
        let err = Stage::Sentiment
            .apply(&messages, ChatAnalysis::default())
            .unwrap_err();
        assert!(err.is_internal());
        assert!(err.to_string().contains("statistics"));
    }

    #[test]
    fn test_relationship_needs_emoji() {
        let messages = vec![msg(0, "Alice")];
        let base = Stage::Statistics
            .apply(&messages, ChatAnalysis::default())
            .unwrap();
        let err = Stage::Relationship.apply(&messages, base).unwrap_err();
        assert!(err.to_string().contains("emoji"));
    }

    #[test]
    fn test_stage_cannot_run_twice() {
        let messages = vec![msg(0, "Alice")];
        let base = Stage::Statistics
            .apply(&messages, ChatAnalysis::default())
            .unwrap();
        assert!(Stage::Statistics.apply(&messages, base).is_err());
    }

    #[test]
    fn test_unknown_sender_is_stage_failure() {
        let base = Stage::Statistics
            .apply(&[msg(0, "Alice")], ChatAnalysis::default())
            .unwrap();
        let err = Stage::Emoji
            .apply(&[msg(0, "Alice"), msg(1, "Mallory")], base)
            .unwrap_err();
        assert!(err.to_string().contains("Mallory"));
    }

    #[test]
    fn test_per_participant_defaults() {
        let people = vec!["Alice".to_string(), "Bob".to_string()];
        let map: BTreeMap<String, usize> = per_participant(&people);
        assert_eq!(map.len(), 2);
        assert_eq!(map["Bob"], 0);
    }

    #[test]
    fn test_first_max_index() {
        assert_eq!(first_max_index(&[0, 3, 3, 1]), Some(1));
        assert_eq!(first_max_index(&[0, 0]), None);
        assert_eq!(first_max_index(&[]), None);
    }
}
