//! Lexicon-based sentiment.
//!
//! A message is tokenized, every word and two-word phrase is looked up in the
//! lexicon, and matches are adjusted:
//!
//! - a negator among the three preceding tokens, or a Turkish post-positive
//!   negator right after the match (`mutlu değilim`), flips the sign;
//! - a modifier right before the match (`çok`, `biraz`) scales it.
//!
//! The sum is clamped to ±5 and divided by 5. Intensity is scored separately
//! from capitals, exclamation marks and fixed markers.
//!
//! ```
//! use chatpulse::analysis::sentiment::analyze_message_sentiment;
//! use chatpulse::analysis::model::SentimentLabel;
//!
//! assert_eq!(analyze_message_sentiment("çok mutluyum").sentiment, SentimentLabel::Positive);
//! assert!(analyze_message_sentiment("mutlu değilim").score <= 0.0);
//! ```

use std::collections::BTreeMap;

use super::model::{
    ChatAnalysis, DaySentiment, IntenseMessage, MessageSentiment, SentimentAnalysis,
    SentimentLabel, UserSentiment,
};
use super::per_participant;
use crate::Message;
use crate::lexicon::{self, EmotionCategory, LexiconEntry};
use crate::text::{preview, tokenize};

/// Number of most intense messages kept.
pub const TOP_INTENSE: usize = 5;

const NEGATION_WINDOW: usize = 3;
const SCORE_CLAMP: f64 = 5.0;
const PREVIEW_CHARS: usize = 100;

pub fn analyze(messages: &[Message], prior: ChatAnalysis) -> ChatAnalysis {
    let sentiment = sentiment_analysis(messages, &prior.participants);
    ChatAnalysis {
        sentiment_analysis: Some(sentiment),
        ..prior
    }
}

/// Scores a single message.
pub fn analyze_message_sentiment(content: &str) -> MessageSentiment {
    let tokens = tokenize(content);
    let mut raw = 0.0;
    let mut categories: BTreeMap<EmotionCategory, f64> = BTreeMap::new();

    let mut i = 0;
    while i < tokens.len() {
        let phrase = tokens
            .get(i + 1)
            .and_then(|next| lexicon::sentiment_phrase(&format!("{} {next}", tokens[i])));
        let (entry, width) = match phrase {
            Some(entry) => (entry, 2),
            None => match lexicon::sentiment_word(&tokens[i]) {
                Some(entry) => (entry, 1),
                None => {
                    i += 1;
                    continue;
                }
            },
        };

        let score = adjusted_score(entry, &tokens, i, width);
        raw += score;
        if let Some(category) = entry.category {
            *categories.entry(category).or_default() += score.abs();
        }
        i += width;
    }

    let score = raw.clamp(-SCORE_CLAMP, SCORE_CLAMP) / SCORE_CLAMP;
    MessageSentiment {
        score,
        sentiment: SentimentLabel::from_score(score),
        dominant_category: dominant(&categories),
        emotional_categories: categories,
    }
}

/// Applies negation and modifiers to a match spanning `tokens[start..start + width]`.
fn adjusted_score(entry: &LexiconEntry, tokens: &[String], start: usize, width: usize) -> f64 {
    let mut score = entry.score;

    let before = &tokens[start.saturating_sub(NEGATION_WINDOW)..start];
    let negated_before = before.iter().any(|t| lexicon::is_negation(t));
    let negated_after = tokens
        .get(start + width)
        .is_some_and(|t| lexicon::is_postfix_negation(t));
    if negated_before || negated_after {
        score = -score;
    }

    if let Some(factor) = start
        .checked_sub(1)
        .and_then(|prev| lexicon::modifier(&tokens[prev]))
    {
        score *= factor;
    }
    score
}

/// First category with the highest tally, in declaration order.
fn dominant(categories: &BTreeMap<EmotionCategory, f64>) -> Option<EmotionCategory> {
    let mut best: Option<(EmotionCategory, f64)> = None;
    for (&category, &total) in categories {
        if total > 0.0 && best.is_none_or(|(_, b)| total > b) {
            best = Some((category, total));
        }
    }
    best.map(|(category, _)| category)
}

/// How loud a message is, in `[0, 1]`.
///
/// Two times the share of all-caps words (three letters or more), 0.2 per
/// exclamation mark and 0.3 per intensity marker present.
pub fn message_intensity(content: &str) -> f64 {
    let words: Vec<&str> = content.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }

    let caps = words.iter().filter(|w| is_shouted(w)).count();
    let caps_ratio = caps as f64 / words.len() as f64;
    let exclamations = content.chars().filter(|c| *c == '!').count();
    let markers = lexicon::INTENSITY_MARKERS
        .iter()
        .filter(|marker| content.contains(*marker))
        .count();

    (caps_ratio * 2.0 + exclamations as f64 * 0.2 + markers as f64 * 0.3).clamp(0.0, 1.0)
}

fn is_shouted(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 3 && letters.iter().all(|c| c.is_uppercase())
}

/// Aggregates message scores overall, per user and per date.
pub fn sentiment_analysis(messages: &[Message], participants: &[String]) -> SentimentAnalysis {
    let mut analysis = SentimentAnalysis::default();
    let mut user_sums: BTreeMap<String, (f64, usize)> = per_participant(participants);
    let mut user_emotions: BTreeMap<String, BTreeMap<EmotionCategory, f64>> =
        per_participant(participants);
    let mut date_sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    let mut intense: Vec<(f64, IntenseMessage)> = Vec::new();
    let mut total = 0.0;
    let mut scored = 0usize;

    for msg in messages.iter().filter(|m| m.is_text()) {
        let result = analyze_message_sentiment(&msg.content);
        total += result.score;
        scored += 1;

        match result.sentiment {
            SentimentLabel::Positive => analysis.positive_count += 1,
            SentimentLabel::Negative => analysis.negative_count += 1,
            SentimentLabel::Neutral => analysis.neutral_count += 1,
        }

        if let Some((sum, n)) = user_sums.get_mut(&msg.sender) {
            *sum += result.score;
            *n += 1;
        }
        if let Some(emotions) = user_emotions.get_mut(&msg.sender) {
            for (category, value) in &result.emotional_categories {
                *emotions.entry(*category).or_default() += value;
            }
        }
        for (category, value) in &result.emotional_categories {
            *analysis.emotion_totals.entry(*category).or_default() += value;
        }

        let (sum, n) = date_sums.entry(msg.date_key()).or_default();
        *sum += result.score;
        *n += 1;

        let intensity = message_intensity(&msg.content);
        let product = intensity * result.score.abs();
        if product > 0.0 {
            intense.push((
                product,
                IntenseMessage {
                    sender: msg.sender.clone(),
                    timestamp: msg.timestamp,
                    preview: preview(&msg.content, PREVIEW_CHARS),
                    score: result.score,
                    intensity,
                },
            ));
        }
    }

    analysis.overall_score = if scored == 0 { 0.0 } else { total / scored as f64 };
    analysis.overall = SentimentLabel::from_score(analysis.overall_score);

    analysis.by_user = user_sums
        .into_iter()
        .map(|(user, (sum, n))| {
            let dominant_emotion = user_emotions.get(&user).and_then(dominant);
            let score = if n == 0 { 0.0 } else { sum / n as f64 };
            (
                user,
                UserSentiment {
                    score,
                    message_count: n,
                    dominant_emotion,
                },
            )
        })
        .collect();

    analysis.by_date = date_sums
        .into_iter()
        .map(|(date, (sum, n))| (date, sum / n as f64))
        .collect();
    analysis.happiest_day = extreme_day(&analysis.by_date, |score, best| score > best);
    analysis.saddest_day = extreme_day(&analysis.by_date, |score, best| score < best);

    intense.sort_by(|a, b| b.0.total_cmp(&a.0));
    analysis.most_intense = intense
        .into_iter()
        .take(TOP_INTENSE)
        .map(|(_, message)| message)
        .collect();

    analysis
}

/// Earliest date whose score beats every other under `better`.
fn extreme_day<F>(by_date: &BTreeMap<String, f64>, better: F) -> Option<DaySentiment>
where
    F: Fn(f64, f64) -> bool,
{
    let mut best: Option<(&String, f64)> = None;
    for (date, &score) in by_date {
        if best.is_none_or(|(_, b)| better(score, b)) {
            best = Some((date, score));
        }
    }
    best.map(|(date, score)| DaySentiment {
        date: date.clone(),
        score,
    })
}
