//! Communication dynamics: response-time distributions, who follows whom,
//! and who starts conversations.

use std::collections::BTreeMap;

use chrono::Duration;

use super::model::{ChatAnalysis, CommunicationDynamics, ResponseTimeStats};
use super::stats::{conversation_initiations, response_gaps};
use super::{leader, per_participant};
use crate::Message;

/// Silence after which a message counts as starting a conversation here.
///
/// Shorter than the statistics stage's gap; the two views are kept apart.
pub const DYNAMICS_CONVERSATION_GAP: Duration = Duration::hours(2);

pub fn analyze(messages: &[Message], prior: ChatAnalysis) -> ChatAnalysis {
    let dynamics = communication_dynamics(messages, &prior.participants);
    ChatAnalysis {
        communication_dynamics: Some(dynamics),
        ..prior
    }
}

pub fn communication_dynamics(messages: &[Message], participants: &[String]) -> CommunicationDynamics {
    let initiations = conversation_initiations(messages, participants, DYNAMICS_CONVERSATION_GAP);
    let most_active_conversator = leader(participants, |p| initiations.get(p).copied().unwrap_or(0));

    CommunicationDynamics {
        response_times: response_times(messages, participants),
        interaction_flow: interaction_flow(messages, participants),
        initiations,
        most_active_conversator,
    }
}

/// Mean, median, min and max reply time per sender.
pub fn response_times(messages: &[Message], participants: &[String]) -> BTreeMap<String, ResponseTimeStats> {
    let mut samples: BTreeMap<String, Vec<f64>> = per_participant(participants);
    for (sender, minutes) in response_gaps(messages) {
        if let Some(list) = samples.get_mut(sender) {
            list.push(minutes);
        }
    }

    samples
        .into_iter()
        .map(|(sender, mut list)| (sender, distribution(&mut list)))
        .collect()
}

fn distribution(samples: &mut [f64]) -> ResponseTimeStats {
    if samples.is_empty() {
        return ResponseTimeStats::default();
    }
    samples.sort_by(f64::total_cmp);

    let n = samples.len();
    let median = if n % 2 == 0 {
        (samples[n / 2 - 1] + samples[n / 2]) / 2.0
    } else {
        samples[n / 2]
    };

    ResponseTimeStats {
        count: n,
        mean: samples.iter().sum::<f64>() / n as f64,
        median,
        min: samples[0],
        max: samples[n - 1],
    }
}

/// `flow[a][b]` counts messages from `a` that directly follow one from `b`.
pub fn interaction_flow(
    messages: &[Message],
    participants: &[String],
) -> BTreeMap<String, BTreeMap<String, usize>> {
    let mut flow: BTreeMap<String, BTreeMap<String, usize>> = participants
        .iter()
        .map(|a| (a.clone(), per_participant(participants)))
        .collect();

    for pair in messages.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if let Some(count) = flow
            .get_mut(&next.sender)
            .and_then(|row| row.get_mut(&prev.sender))
        {
            *count += 1;
        }
    }
    flow
}
