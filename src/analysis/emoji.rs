//! Emoji usage.

use std::collections::BTreeMap;

use super::model::{ChatAnalysis, EmojiCount, EmojiStats};
use super::per_participant;
use crate::Message;

/// Length of the top emoji list.
pub const TOP_EMOJIS: usize = 20;

pub fn analyze(messages: &[Message], prior: ChatAnalysis) -> ChatAnalysis {
    let emoji_stats = emoji_stats(messages, &prior.participants);
    ChatAnalysis {
        emoji_stats,
        ..prior
    }
}

/// Counts pre-extracted emojis globally and per sender.
pub fn emoji_stats(messages: &[Message], participants: &[String]) -> EmojiStats {
    let mut stats = EmojiStats {
        by_user: per_participant(participants),
        ..EmojiStats::default()
    };
    let mut first_seen: Vec<&str> = Vec::new();

    for msg in messages {
        for emoji in &msg.emojis {
            stats.total_count += 1;
            let count = stats.counts.entry(emoji.clone()).or_default();
            if *count == 0 {
                first_seen.push(emoji);
            }
            *count += 1;
            if let Some(user) = stats.by_user.get_mut(&msg.sender) {
                *user.entry(emoji.clone()).or_default() += 1;
            }
        }
    }

    stats.top = top_emojis(&stats.counts, &first_seen, TOP_EMOJIS);
    stats
}

/// Highest counts first; the stable sort keeps first-seen order for ties.
fn top_emojis(counts: &BTreeMap<String, usize>, first_seen: &[&str], n: usize) -> Vec<EmojiCount> {
    let mut ranked: Vec<EmojiCount> = first_seen
        .iter()
        .map(|emoji| EmojiCount {
            emoji: (*emoji).to_string(),
            count: counts.get(*emoji).copied().unwrap_or(0),
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked
}

/// A sender's most used emoji; ties go to the lexicographically smallest.
pub fn favorite_emoji(per_user: &BTreeMap<String, usize>) -> Option<&str> {
    let mut best: Option<(&str, usize)> = None;
    for (emoji, &count) in per_user {
        if best.is_none_or(|(_, b)| count > b) {
            best = Some((emoji, count));
        }
    }
    best.map(|(emoji, _)| emoji)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn with_emojis(sender: &str, emojis: &[&str]) -> Message {
        Message::new(Utc.with_ymd_and_hms(2023, 1, 1, 9, 0, 0).unwrap(), sender, "x")
            .with_emojis(emojis.iter().map(|e| (*e).to_string()).collect())
    }

    #[test]
    fn test_counts_and_per_user() {
        let messages = vec![
            with_emojis("Alice", &["😂", "❤️"]),
            with_emojis("Bob", &["😂"]),
        ];
        let people = vec!["Alice".to_string(), "Bob".to_string(), "Cem".to_string()];
        let stats = emoji_stats(&messages, &people);

        assert_eq!(stats.total_count, 3);
        assert_eq!(stats.counts["😂"], 2);
        assert_eq!(stats.by_user["Alice"]["❤️"], 1);
        assert_eq!(stats.by_user["Bob"]["😂"], 1);
        assert!(stats.by_user["Cem"].is_empty());
    }

    #[test]
    fn test_top_ties_keep_first_seen_order() {
        let messages = vec![
            with_emojis("Alice", &["🔥", "😂"]),
            with_emojis("Bob", &["👍", "😂"]),
            with_emojis("Bob", &["👍", "🔥"]),
        ];
        let people = vec!["Alice".to_string(), "Bob".to_string()];
        let stats = emoji_stats(&messages, &people);
        let top: Vec<&str> = stats.top.iter().map(|e| e.emoji.as_str()).collect();
        assert_eq!(top, vec!["🔥", "😂", "👍"]);
    }

    #[test]
    fn test_top_is_truncated() {
        let all: Vec<String> = (0..30).map(|i| char::from_u32(0x1F600 + i).unwrap().to_string()).collect();
        let msg = Message::new(Utc.with_ymd_and_hms(2023, 1, 1, 9, 0, 0).unwrap(), "Alice", "x")
            .with_emojis(all);
        let stats = emoji_stats(&[msg], &["Alice".to_string()]);
        assert_eq!(stats.top.len(), TOP_EMOJIS);
    }

    #[test]
    fn test_favorite_emoji() {
        let mut counts = BTreeMap::new();
        counts.insert("😂".to_string(), 2);
        counts.insert("❤️".to_string(), 2);
        counts.insert("👍".to_string(), 1);
        assert_eq!(favorite_emoji(&counts), Some("❤️"));
        assert_eq!(favorite_emoji(&BTreeMap::new()), None);
    }
}
