//! Word frequency, busiest days, media cadence and topics.

use std::collections::BTreeMap;

use super::model::{ChatAnalysis, DayCount, MediaCadence, PremiumFeatures, WordCount};
use super::per_participant;
use crate::Message;
use crate::text::content_words;

/// Length of the word frequency list.
pub const TOP_WORDS: usize = 100;

/// Length of the busiest-days list.
pub const TOP_DAYS: usize = 10;

/// Number of words reported as topics.
pub const TOP_TOPICS: usize = 15;

pub fn analyze(messages: &[Message], prior: ChatAnalysis) -> ChatAnalysis {
    let days = prior.date_range.map_or(0, |range| range.days());
    let words = word_frequency(messages);

    let features = PremiumFeatures {
        topics: words.iter().take(TOP_TOPICS).map(|w| w.word.clone()).collect(),
        word_frequency: words.into_iter().take(TOP_WORDS).collect(),
        top_active_days: top_active_days(&prior.time_stats.by_date, TOP_DAYS),
        media_cadence: media_cadence(messages, &prior.participants, days),
    };
    ChatAnalysis {
        premium_features: Some(features),
        ..prior
    }
}

/// Content words across text messages, most frequent first, then alphabetical.
pub fn word_frequency(messages: &[Message]) -> Vec<WordCount> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for msg in messages.iter().filter(|m| m.is_text()) {
        for word in content_words(&msg.content) {
            *counts.entry(word).or_default() += 1;
        }
    }

    let mut words: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    words.sort_by(|a, b| b.count.cmp(&a.count));
    words
}

/// Busiest dates, earliest first among equals.
pub fn top_active_days(by_date: &BTreeMap<String, usize>, n: usize) -> Vec<DayCount> {
    let mut days: Vec<DayCount> = by_date
        .iter()
        .map(|(date, &count)| DayCount {
            date: date.clone(),
            count,
        })
        .collect();
    days.sort_by(|a, b| b.count.cmp(&a.count));
    days.truncate(n);
    days
}

/// Media per sender: total, average per day of the window and the peak day.
pub fn media_cadence(
    messages: &[Message],
    participants: &[String],
    days: i64,
) -> BTreeMap<String, MediaCadence> {
    let mut per_day: BTreeMap<String, BTreeMap<String, usize>> = per_participant(participants);
    for msg in messages.iter().filter(|m| m.is_media()) {
        if let Some(dates) = per_day.get_mut(&msg.sender) {
            *dates.entry(msg.date_key()).or_default() += 1;
        }
    }

    per_day
        .into_iter()
        .map(|(sender, dates)| {
            let total: usize = dates.values().sum();
            let mut cadence = MediaCadence {
                total,
                daily_average: if days > 0 {
                    total as f64 / days as f64
                } else {
                    0.0
                },
                ..MediaCadence::default()
            };
            for (date, count) in dates {
                if count > cadence.peak_count {
                    cadence.peak_count = count;
                    cadence.peak_day = Some(date);
                }
            }
            (sender, cadence)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MediaType;
    use chrono::{TimeZone, Utc};

    fn at(day: u32, sender: &str, content: &str) -> Message {
        Message::new(
            Utc.with_ymd_and_hms(2023, 1, day, 9, 0, 0).unwrap(),
            sender,
            content,
        )
    }

    #[test]
    fn test_word_frequency() {
        let messages = vec![
            at(1, "Alice", "Sinemaya gidelim mi? Sinemaya!"),
            at(1, "Bob", "ve bu akşam sinemaya"),
            at(1, "Bob", "image omitted").with_media(Some(MediaType::Image)),
        ];
        let words = word_frequency(&messages);
        assert_eq!(words[0], WordCount { word: "sinemaya".into(), count: 3 });
        assert!(words.iter().all(|w| w.word != "ve" && w.word != "mi"));
        assert!(words.iter().all(|w| w.word != "image"));
    }

    #[test]
    fn test_word_frequency_ties_alphabetical() {
        let words = word_frequency(&[at(1, "Alice", "zeytin elma")]);
        let order: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(order, vec!["elma", "zeytin"]);
    }

    #[test]
    fn test_top_active_days() {
        let mut by_date = BTreeMap::new();
        by_date.insert("2023-01-01".to_string(), 2);
        by_date.insert("2023-01-02".to_string(), 5);
        by_date.insert("2023-01-03".to_string(), 2);
        let days = top_active_days(&by_date, 2);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2023-01-02");
        assert_eq!(days[1].date, "2023-01-01");
    }

    #[test]
    fn test_media_cadence() {
        let messages = vec![
            at(1, "Alice", "image omitted").with_media(Some(MediaType::Image)),
            at(2, "Alice", "video omitted").with_media(Some(MediaType::Video)),
            at(2, "Alice", "image omitted").with_media(Some(MediaType::Image)),
            at(4, "Bob", "merhaba"),
        ];
        let people = vec!["Alice".to_string(), "Bob".to_string()];
        let cadence = media_cadence(&messages, &people, 4);
        assert_eq!(cadence["Alice"].total, 3);
        assert!((cadence["Alice"].daily_average - 0.75).abs() < 1e-9);
        assert_eq!(cadence["Alice"].peak_day.as_deref(), Some("2023-01-02"));
        assert_eq!(cadence["Alice"].peak_count, 2);
        assert_eq!(cadence["Bob"], MediaCadence::default());
    }

    #[test]
    fn test_analyze_topics_subset_of_words() {
        let messages = vec![at(1, "Alice", "kahve içelim kahve güzel")];
        let base = crate::analysis::stats::analyze(&messages);
        let features = analyze(&messages, base).premium_features.unwrap();
        assert_eq!(features.topics[0], "kahve");
        assert!(features.topics.len() <= TOP_TOPICS);
        assert_eq!(features.top_active_days[0].count, 1);
    }
}
