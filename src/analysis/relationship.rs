//! Relationship heuristics: per-participant profiles, category winners,
//! personality labels, pairwise compatibility and funny titles.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Timelike;

use super::emoji::favorite_emoji;
use super::model::{
    ChatAnalysis, Compatibility, DayParts, FunnyTitles, LongestMessage, ParticipantProfile,
    RelationshipAnalysis, SleepPattern, Winners,
};
use super::{leader, per_participant};
use crate::Message;
use crate::lexicon::{self, APOLOGY_WORDS, ARGUMENT_WORDS, EXCUSE_GROUPS, FOOD_WORDS, HUMOR_WORDS, ROMANTIC_WORDS};
use crate::message::MediaType;
use crate::text::{preview, to_lower_tr, tokenize};

const PREVIEW_CHARS: usize = 50;

/// Sub-score used when neither participant has anything to compare.
const NEUTRAL_SUBSCORE: f64 = 50.0;
const SAME_RHYTHM_SCORE: f64 = 90.0;
const DIFFERENT_RHYTHM_SCORE: f64 = 40.0;

pub const NO_EMOJI_PERSONALITY: &str = "does not use emoji";
pub const MIXED_EMOJI_PERSONALITY: &str = "mixed";

pub fn analyze(messages: &[Message], prior: ChatAnalysis) -> ChatAnalysis {
    let relationship = relationship_analysis(messages, &prior);
    ChatAnalysis {
        relationship_analysis: Some(relationship),
        ..prior
    }
}

/// 22:00-03:00 counts toward the night score.
fn is_night(hour: u32) -> bool {
    hour >= 22 || hour < 3
}

/// 05:00-09:00 counts toward the morning score.
fn is_morning(hour: u32) -> bool {
    (5..9).contains(&hour)
}

pub fn sleep_pattern(night: usize, morning: usize) -> SleepPattern {
    if night > 2 * morning {
        SleepPattern::NightOwl
    } else if morning > 2 * night {
        SleepPattern::EarlyBird
    } else {
        SleepPattern::Balanced
    }
}

pub fn relationship_analysis(messages: &[Message], prior: &ChatAnalysis) -> RelationshipAnalysis {
    let participants = &prior.participants;
    let mut profiles: BTreeMap<String, ParticipantProfile> = participants
        .iter()
        .map(|p| {
            let profile = ParticipantProfile {
                excuses: EXCUSE_GROUPS
                    .iter()
                    .map(|(group, _)| ((*group).to_string(), 0))
                    .collect(),
                ..ParticipantProfile::default()
            };
            (p.clone(), profile)
        })
        .collect();
    let mut day_parts: BTreeMap<String, DayParts> = per_participant(participants);
    let mut longest: Option<LongestMessage> = None;

    for msg in messages {
        let Some(profile) = profiles.get_mut(&msg.sender) else {
            continue;
        };

        let hour = msg.timestamp.hour();
        if is_night(hour) {
            profile.night_score += 1;
        }
        if is_morning(hour) {
            profile.morning_score += 1;
        }
        if let Some(parts) = day_parts.get_mut(&msg.sender) {
            parts.record(hour);
        }

        if msg.is_media() && msg.media_type == Some(MediaType::Image) {
            profile.photos += 1;
        }
        if !msg.is_text() {
            continue;
        }

        count_words(profile, &msg.content);
        count_excuses(profile, &msg.content);
        for emoji in &msg.emojis {
            if lexicon::is_heart_emoji(emoji) {
                profile.heart_emojis += 1;
            }
            if lexicon::is_laugh_emoji(emoji) {
                profile.laugh_emojis += 1;
            }
        }

        let length = msg.char_len();
        if longest.as_ref().is_none_or(|l| length > l.length) {
            longest = Some(LongestMessage {
                sender: msg.sender.clone(),
                length,
                preview: preview(&msg.content, PREVIEW_CHARS),
            });
        }
    }

    for (name, profile) in &mut profiles {
        profile.sleep_pattern = sleep_pattern(profile.night_score, profile.morning_score);
        profile.average_length = prior.message_stats.get(name).map_or(0.0, |s| s.average_length);
        profile.favorite_excuse = favorite_excuse(&profile.excuses);
        profile.emoji_personality = emoji_personality(prior.emoji_stats.by_user.get(name));

        let parts = day_parts.get(name).copied().unwrap_or_default();
        let traits = PersonalityTraits::new(name, prior, parts);
        profile.personality_type = classify_personality(&traits).to_string();
    }

    let winners = winners(participants, &profiles);
    let pair_score = match participants.as_slice() {
        [a, b] => profiles.get(a).zip(profiles.get(b)).map(|(pa, pb)| {
            compatibility(pa, pb, &distinct_emojis(prior, a), &distinct_emojis(prior, b))
        }),
        _ => None,
    };
    let funny_titles = funny_titles(prior, &profiles, longest.as_ref());

    RelationshipAnalysis {
        profiles,
        longest_message: longest,
        winners,
        compatibility: pair_score,
        funny_titles,
    }
}

/// One count per token that starts with a listed word.
fn count_words(profile: &mut ParticipantProfile, content: &str) {
    for token in tokenize(content) {
        if lexicon::matches_prefix(ROMANTIC_WORDS, &token) {
            profile.romantic_words += 1;
        }
        if lexicon::matches_prefix(APOLOGY_WORDS, &token) {
            profile.apology_words += 1;
        }
        if lexicon::matches_prefix(ARGUMENT_WORDS, &token) {
            profile.argument_words += 1;
        }
        if lexicon::matches_prefix(HUMOR_WORDS, &token) {
            profile.funny_words += 1;
        }
        if lexicon::matches_prefix(FOOD_WORDS, &token) {
            profile.food_words += 1;
        }
    }
}

/// Every occurrence of an excuse phrase counts.
fn count_excuses(profile: &mut ParticipantProfile, content: &str) {
    let lower = to_lower_tr(content);
    for (group, phrases) in EXCUSE_GROUPS {
        let hits: usize = phrases.iter().map(|p| lower.matches(p).count()).sum();
        if hits > 0 {
            *profile.excuses.entry((*group).to_string()).or_default() += hits;
        }
    }
}

/// Most used excuse category; ties follow the category list order.
fn favorite_excuse(excuses: &BTreeMap<String, usize>) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for (group, _) in EXCUSE_GROUPS {
        let count = excuses.get(*group).copied().unwrap_or(0);
        if count > 0 && best.is_none_or(|(_, b)| count > b) {
            best = Some((*group, count));
        }
    }
    best.map(|(group, _)| group.to_string())
}

fn emoji_personality(counts: Option<&BTreeMap<String, usize>>) -> String {
    match counts.and_then(favorite_emoji) {
        None => NO_EMOJI_PERSONALITY.to_string(),
        Some(emoji) => lexicon::emoji_personality(emoji)
            .unwrap_or(MIXED_EMOJI_PERSONALITY)
            .to_string(),
    }
}

fn distinct_emojis(prior: &ChatAnalysis, name: &str) -> BTreeSet<String> {
    prior
        .emoji_stats
        .by_user
        .get(name)
        .map(|counts| counts.keys().cloned().collect())
        .unwrap_or_default()
}

fn winners(participants: &[String], profiles: &BTreeMap<String, ParticipantProfile>) -> Winners {
    let by = |f: fn(&ParticipantProfile) -> usize| {
        leader(participants, |p| profiles.get(p).map_or(0, f))
    };
    Winners {
        most_romantic: by(ParticipantProfile::romance_score),
        most_apologetic: by(|p| p.apology_words),
        most_argumentative: by(|p| p.argument_words),
        funniest: by(ParticipantProfile::humor_score),
        food_obsessed: by(|p| p.food_words),
        most_photos: by(|p| p.photos),
    }
}

/// Smaller over larger as a percentage, neutral when both are zero.
fn ratio_score(a: f64, b: f64) -> f64 {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    if high <= 0.0 {
        NEUTRAL_SUBSCORE
    } else {
        low / high * 100.0
    }
}

/// Symmetric compatibility of two profiles.
pub fn compatibility(
    a: &ParticipantProfile,
    b: &ParticipantProfile,
    emojis_a: &BTreeSet<String>,
    emojis_b: &BTreeSet<String>,
) -> Compatibility {
    let comedy = ratio_score(a.funny_words as f64, b.funny_words as f64);
    let time = if a.sleep_pattern == b.sleep_pattern {
        SAME_RHYTHM_SCORE
    } else {
        DIFFERENT_RHYTHM_SCORE
    };
    let communication = ratio_score(a.average_length, b.average_length);

    let union = emojis_a.union(emojis_b).count();
    let emoji = if union == 0 {
        NEUTRAL_SUBSCORE
    } else {
        emojis_a.intersection(emojis_b).count() as f64 / union as f64 * 100.0
    };

    Compatibility {
        comedy,
        time,
        communication,
        emoji,
        overall: (comedy + time + communication + emoji) / 4.0,
    }
}

fn funny_titles(
    prior: &ChatAnalysis,
    profiles: &BTreeMap<String, ParticipantProfile>,
    longest: Option<&LongestMessage>,
) -> FunnyTitles {
    let participants = &prior.participants;

    let mut fastest: Option<(&String, f64)> = None;
    for name in participants {
        let minutes = prior.response_time_average.get(name).copied().unwrap_or(0.0);
        if minutes > 0.0 && fastest.is_none_or(|(_, best)| minutes < best) {
            fastest = Some((name, minutes));
        }
    }

    FunnyTitles {
        shakespeare: longest.map(|l| l.sender.clone()),
        emoji_artist: leader(participants, |p| {
            prior.emoji_stats.by_user.get(p).map_or(0, BTreeMap::len)
        }),
        patience_test: fastest.map(|(name, _)| name.clone()),
        night_bomber: leader(participants, |p| profiles.get(p).map_or(0, |pr| pr.night_score)),
    }
}

// ============================================================================
// Personality cascade
// ============================================================================

/// What the personality rules look at.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PersonalityTraits {
    pub message_count: usize,
    pub average_length: f64,
    /// Emojis per message
    pub emoji_ratio: f64,
    pub morning_share: f64,
    pub afternoon_share: f64,
    pub evening_share: f64,
    pub night_share: f64,
    /// Average response time in minutes, 0 if they never replied
    pub response_minutes: f64,
    /// Share of all messages in the chat
    pub chat_share: f64,
}

impl PersonalityTraits {
    fn new(name: &str, analysis: &ChatAnalysis, parts: DayParts) -> Self {
        let message_count = analysis.message_stats.get(name).map_or(0, |s| s.count);
        let emojis: usize = analysis
            .emoji_stats
            .by_user
            .get(name)
            .map_or(0, |counts| counts.values().sum());
        let share = |n: usize, of: usize| if of == 0 { 0.0 } else { n as f64 / of as f64 };
        let hours = parts.total();

        Self {
            message_count,
            average_length: analysis.message_stats.get(name).map_or(0.0, |s| s.average_length),
            emoji_ratio: share(emojis, message_count),
            morning_share: share(parts.morning, hours),
            afternoon_share: share(parts.afternoon, hours),
            evening_share: share(parts.evening, hours),
            night_share: share(parts.night, hours),
            response_minutes: analysis.response_time_average.get(name).copied().unwrap_or(0.0),
            chat_share: share(message_count, analysis.total_messages),
        }
    }
}

pub struct PersonalityRule {
    pub label: &'static str,
    pub applies: fn(&PersonalityTraits) -> bool,
}

/// Evaluated top to bottom; the first rule that applies names the personality.
pub static PERSONALITY_RULES: &[PersonalityRule] = &[
    PersonalityRule {
        label: "night vampire",
        applies: |t| t.night_share >= 0.5 && t.message_count >= 20,
    },
    PersonalityRule {
        label: "sunrise herald",
        applies: |t| t.morning_share >= 0.4 && t.message_count >= 20,
    },
    PersonalityRule {
        label: "quick-draw specialist",
        applies: |t| t.response_minutes > 0.0 && t.response_minutes < 2.0,
    },
    PersonalityRule {
        label: "emoji volcano",
        applies: |t| t.emoji_ratio >= 2.0,
    },
    PersonalityRule {
        label: "novelist",
        applies: |t| t.average_length >= 200.0,
    },
    PersonalityRule {
        label: "serious essayist",
        applies: |t| t.average_length >= 120.0 && t.emoji_ratio < 0.1,
    },
    PersonalityRule {
        label: "storyteller",
        applies: |t| t.average_length >= 80.0,
    },
    PersonalityRule {
        label: "one-word machine gun",
        applies: |t| t.average_length < 8.0 && t.message_count >= 50,
    },
    PersonalityRule {
        label: "emoji whisperer",
        applies: |t| t.average_length < 15.0 && t.emoji_ratio >= 1.0,
    },
    PersonalityRule {
        label: "monologue master",
        applies: |t| t.chat_share >= 0.7 && t.message_count >= 10,
    },
    PersonalityRule {
        label: "silent observer",
        applies: |t| t.chat_share <= 0.15 && t.message_count >= 5,
    },
    PersonalityRule {
        label: "slow burner",
        applies: |t| t.response_minutes >= 180.0,
    },
    PersonalityRule {
        label: "fashionably late",
        applies: |t| t.response_minutes >= 60.0,
    },
    PersonalityRule {
        label: "chat legend",
        applies: |t| t.message_count >= 5000,
    },
    PersonalityRule {
        label: "chat addict",
        applies: |t| t.message_count >= 1000,
    },
    PersonalityRule {
        label: "evening chatter",
        applies: |t| t.evening_share >= 0.5,
    },
    PersonalityRule {
        label: "lunch break texter",
        applies: |t| t.afternoon_share >= 0.5,
    },
    PersonalityRule {
        label: "expressive writer",
        applies: |t| t.emoji_ratio >= 0.5 && t.average_length >= 40.0,
    },
    PersonalityRule {
        label: "emoji minimalist",
        applies: |t| t.emoji_ratio == 0.0 && t.message_count >= 10,
    },
    PersonalityRule {
        label: "ping-pong player",
        applies: |t| t.average_length < 20.0 && t.response_minutes > 0.0 && t.response_minutes < 10.0,
    },
    PersonalityRule {
        label: "mysterious stranger",
        applies: |t| t.message_count < 10,
    },
    PersonalityRule {
        label: "midnight philosopher",
        applies: |t| t.night_share >= 0.3,
    },
    PersonalityRule {
        label: "cheerful chatter",
        applies: |t| t.emoji_ratio >= 0.3,
    },
];

/// Used when no rule applies, picked by message count.
pub static FALLBACK_PERSONALITIES: &[&str] = &[
    "balanced communicator",
    "steady companion",
    "casual texter",
    "easygoing friend",
    "reliable responder",
];

pub fn classify_personality(traits: &PersonalityTraits) -> &'static str {
    PERSONALITY_RULES
        .iter()
        .find(|rule| (rule.applies)(traits))
        .map_or_else(
            || FALLBACK_PERSONALITIES[traits.message_count % FALLBACK_PERSONALITIES.len()],
            |rule| rule.label,
        )
}
