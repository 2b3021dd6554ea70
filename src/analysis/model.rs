//! The analysis aggregate and every nested result type.
//!
//! [`ChatAnalysis`] starts as the output of the statistics stage and gains
//! one optional section per later stage. All per-user maps are keyed by
//! participant name and hold exactly one entry per participant.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::Stage;
use crate::lexicon::EmotionCategory;
use crate::message::MediaType;

/// The progressively enriched analysis of one chat (or one date window).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatAnalysis {
    /// Unique senders in order of first appearance.
    pub participants: Vec<String>,
    pub total_messages: usize,
    /// `None` only for an empty window.
    pub date_range: Option<DateRange>,
    pub message_stats: BTreeMap<String, MessageStats>,
    pub emoji_stats: EmojiStats,
    pub time_stats: TimeStats,
    pub media_stats: MediaStats,
    /// Conversations started per sender (3 h gap rule).
    pub conversation_initiations: BTreeMap<String, usize>,
    /// Mean response time per sender, in minutes.
    pub response_time_average: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longest_silence: Option<Silence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_analysis: Option<SentimentAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication_dynamics: Option<CommunicationDynamics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_features: Option<PremiumFeatures>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_analysis: Option<RelationshipAnalysis>,
    /// Stages applied so far, in order.
    #[serde(default)]
    pub stages: Vec<Stage>,
}

impl ChatAnalysis {
    /// Returns `true` if `stage` has already been applied.
    pub fn has_stage(&self, stage: Stage) -> bool {
        self.stages.contains(&stage)
    }

    /// Returns `true` once every stage has run.
    pub fn is_complete(&self) -> bool {
        Stage::all().iter().all(|stage| self.has_stage(*stage))
    }

    /// Returns `true` if `name` is a participant.
    pub fn is_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Number of calendar days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end.date_naive() - self.start.date_naive()).num_days() + 1
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageStats {
    pub count: usize,
    /// Mean content length in characters.
    pub average_length: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiStats {
    pub total_count: usize,
    pub counts: BTreeMap<String, usize>,
    pub by_user: BTreeMap<String, BTreeMap<String, usize>>,
    /// Most used emojis, descending; ties keep first-seen order.
    pub top: Vec<EmojiCount>,
}

/// Activity histograms.
///
/// Weekdays are numbered from Sunday (0) to Saturday (6), months from
/// January (0) to December (11).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeStats {
    pub by_hour: [usize; 24],
    pub by_weekday: [usize; 7],
    pub by_month: [usize; 12],
    pub by_date: BTreeMap<String, usize>,
    pub most_active_hour: usize,
    pub most_active_weekday: usize,
    pub most_active_date: Option<String>,
    /// Added by the time-pattern stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<TimePatterns>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePatterns {
    /// Counts keyed by `YYYY-MM`.
    pub by_year_month: BTreeMap<String, usize>,
    pub day_parts: DayParts,
    pub week_split: WeekSplit,
    pub seasons: Seasons,
}

/// Morning 06-12, afternoon 12-18, evening 18-22, night 22-06.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayParts {
    pub morning: usize,
    pub afternoon: usize,
    pub evening: usize,
    pub night: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSplit {
    /// Monday to Friday
    pub weekday: usize,
    /// Saturday and Sunday
    pub weekend: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seasons {
    pub winter: usize,
    pub spring: usize,
    pub summer: usize,
    pub autumn: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaStats {
    pub total: usize,
    /// Media messages without a recognizable subtype.
    pub untyped: usize,
    pub by_type: BTreeMap<MediaType, usize>,
    pub by_user: BTreeMap<String, BTreeMap<MediaType, usize>>,
    /// All media per sender, untyped included.
    #[serde(default)]
    pub by_user_total: BTreeMap<String, usize>,
}

/// The largest gap between two consecutive messages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Silence {
    pub hours: f64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

// ============================================================================
// Sentiment
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl SentimentLabel {
    /// Label for a normalized score in `[-1, 1]`.
    pub fn from_score(score: f64) -> Self {
        if score > 0.2 {
            SentimentLabel::Positive
        } else if score < -0.2 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Sentiment of a single message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSentiment {
    pub score: f64,
    pub sentiment: SentimentLabel,
    pub emotional_categories: BTreeMap<EmotionCategory, f64>,
    pub dominant_category: Option<EmotionCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSentiment {
    pub score: f64,
    pub message_count: usize,
    pub dominant_emotion: Option<EmotionCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySentiment {
    pub date: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntenseMessage {
    pub sender: String,
    pub timestamp: DateTime<Utc>,
    pub preview: String,
    pub score: f64,
    pub intensity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysis {
    pub overall_score: f64,
    pub overall: SentimentLabel,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub by_user: BTreeMap<String, UserSentiment>,
    pub by_date: BTreeMap<String, f64>,
    pub happiest_day: Option<DaySentiment>,
    pub saddest_day: Option<DaySentiment>,
    pub emotion_totals: BTreeMap<EmotionCategory, f64>,
    pub most_intense: Vec<IntenseMessage>,
}

// ============================================================================
// Communication dynamics
// ============================================================================

/// Response time distribution in minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseTimeStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationDynamics {
    pub response_times: BTreeMap<String, ResponseTimeStats>,
    /// `interaction_flow[a][b]`: how often a message from `a` directly follows one from `b`.
    pub interaction_flow: BTreeMap<String, BTreeMap<String, usize>>,
    /// Conversations started per sender (2 h gap rule).
    pub initiations: BTreeMap<String, usize>,
    pub most_active_conversator: Option<String>,
}

// ============================================================================
// Lexical features
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    pub date: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaCadence {
    pub total: usize,
    /// Media messages per day of the analyzed window.
    pub daily_average: f64,
    pub peak_day: Option<String>,
    pub peak_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumFeatures {
    pub word_frequency: Vec<WordCount>,
    pub top_active_days: Vec<DayCount>,
    pub media_cadence: BTreeMap<String, MediaCadence>,
    pub topics: Vec<String>,
}

// ============================================================================
// Relationship
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SleepPattern {
    NightOwl,
    EarlyBird,
    #[default]
    Balanced,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantProfile {
    pub romantic_words: usize,
    pub apology_words: usize,
    pub argument_words: usize,
    pub funny_words: usize,
    pub food_words: usize,
    pub heart_emojis: usize,
    pub laugh_emojis: usize,
    pub photos: usize,
    pub excuses: BTreeMap<String, usize>,
    pub favorite_excuse: Option<String>,
    pub night_score: usize,
    pub morning_score: usize,
    pub sleep_pattern: SleepPattern,
    pub average_length: f64,
    pub emoji_personality: String,
    pub personality_type: String,
}

impl ParticipantProfile {
    pub fn romance_score(&self) -> usize {
        self.romantic_words + 2 * self.heart_emojis
    }

    pub fn humor_score(&self) -> usize {
        self.funny_words + 2 * self.laugh_emojis
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongestMessage {
    pub sender: String,
    pub length: usize,
    pub preview: String,
}

/// Participant leading each category; `None` when nobody scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Winners {
    pub most_romantic: Option<String>,
    pub most_apologetic: Option<String>,
    pub most_argumentative: Option<String>,
    pub funniest: Option<String>,
    pub food_obsessed: Option<String>,
    pub most_photos: Option<String>,
}

/// Sub-scores in `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Compatibility {
    pub comedy: f64,
    pub time: f64,
    pub communication: f64,
    pub emoji: f64,
    pub overall: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnyTitles {
    /// Sender of the longest message
    pub shakespeare: Option<String>,
    /// Most distinct emojis
    pub emoji_artist: Option<String>,
    /// Lowest positive average response time
    pub patience_test: Option<String>,
    /// Highest night score
    pub night_bomber: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipAnalysis {
    pub profiles: BTreeMap<String, ParticipantProfile>,
    pub longest_message: Option<LongestMessage>,
    pub winners: Winners,
    /// Only for chats with exactly two participants.
    pub compatibility: Option<Compatibility>,
    pub funny_titles: FunnyTitles,
}
