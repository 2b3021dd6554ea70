//! Statistical core: participants, counts, histograms, conversation starts,
//! response times, silences and media.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, Timelike};

use super::model::{ChatAnalysis, DateRange, MediaStats, MessageStats, Silence, TimeStats};
use super::{first_max_index, minutes_between, per_participant};
use crate::Message;

/// Silence after which a message starts a new conversation.
pub const CONVERSATION_GAP: Duration = Duration::hours(3);

/// Replies slower than this are outliers and ignored.
pub const RESPONSE_CUTOFF: Duration = Duration::hours(24);

/// Builds the base aggregate.
pub fn analyze(messages: &[Message]) -> ChatAnalysis {
    let participants = participants(messages);

    ChatAnalysis {
        total_messages: messages.len(),
        date_range: date_range(messages),
        message_stats: message_stats(messages, &participants),
        time_stats: time_stats(messages),
        media_stats: media_stats(messages, &participants),
        conversation_initiations: conversation_initiations(messages, &participants, CONVERSATION_GAP),
        response_time_average: response_time_average(messages, &participants),
        longest_silence: longest_silence(messages),
        participants,
        ..ChatAnalysis::default()
    }
}

/// Unique senders in order of first appearance.
pub fn participants(messages: &[Message]) -> Vec<String> {
    let mut seen = Vec::new();
    for msg in messages {
        if !seen.contains(&msg.sender) {
            seen.push(msg.sender.clone());
        }
    }
    seen
}

/// Earliest and latest timestamp, independent of slice order.
pub fn date_range(messages: &[Message]) -> Option<DateRange> {
    let start = messages.iter().map(|m| m.timestamp).min()?;
    let end = messages.iter().map(|m| m.timestamp).max()?;
    Some(DateRange { start, end })
}

pub fn message_stats(messages: &[Message], participants: &[String]) -> BTreeMap<String, MessageStats> {
    let mut totals: BTreeMap<String, (usize, usize)> = per_participant(participants);
    for msg in messages {
        if let Some((count, chars)) = totals.get_mut(&msg.sender) {
            *count += 1;
            *chars += msg.char_len();
        }
    }

    totals
        .into_iter()
        .map(|(sender, (count, chars))| {
            let average_length = if count == 0 {
                0.0
            } else {
                chars as f64 / count as f64
            };
            (sender, MessageStats { count, average_length })
        })
        .collect()
}

/// Hour, weekday, month and date histograms.
///
/// The most active bucket is the first maximum: lowest hour, weekday or
/// month index, earliest date.
pub fn time_stats(messages: &[Message]) -> TimeStats {
    let mut stats = TimeStats::default();

    for msg in messages {
        let ts = msg.timestamp;
        stats.by_hour[ts.hour() as usize] += 1;
        stats.by_weekday[ts.weekday().num_days_from_sunday() as usize] += 1;
        stats.by_month[ts.month0() as usize] += 1;
        *stats.by_date.entry(msg.date_key()).or_default() += 1;
    }

    stats.most_active_hour = first_max_index(&stats.by_hour).unwrap_or(0);
    stats.most_active_weekday = first_max_index(&stats.by_weekday).unwrap_or(0);
    stats.most_active_date = most_active_date(&stats.by_date);
    stats
}

/// Date with the highest count; the earliest wins ties.
pub fn most_active_date(by_date: &BTreeMap<String, usize>) -> Option<String> {
    let mut best: Option<(&String, usize)> = None;
    for (date, &count) in by_date {
        if best.is_none_or(|(_, b)| count > b) {
            best = Some((date, count));
        }
    }
    best.map(|(date, _)| date.clone())
}

/// Counts, per sender, messages that open a conversation.
///
/// The first message always does; later ones do when the silence before
/// them is longer than `gap`.
pub fn conversation_initiations(
    messages: &[Message],
    participants: &[String],
    gap: Duration,
) -> BTreeMap<String, usize> {
    let mut starts: BTreeMap<String, usize> = per_participant(participants);
    let mut previous: Option<&Message> = None;

    for msg in messages {
        let opens = previous.is_none_or(|prev| msg.timestamp - prev.timestamp > gap);
        if opens {
            if let Some(count) = starts.get_mut(&msg.sender) {
                *count += 1;
            }
        }
        previous = Some(msg);
    }
    starts
}

/// Replies: `(responder, minutes)` for each adjacent pair with different
/// senders and a gap no longer than [`RESPONSE_CUTOFF`].
pub fn response_gaps(messages: &[Message]) -> impl Iterator<Item = (&str, f64)> {
    let cutoff = RESPONSE_CUTOFF.num_seconds() as f64 / 60.0;
    messages.windows(2).filter_map(move |pair| {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev.sender == next.sender {
            return None;
        }
        let minutes = minutes_between(prev, next);
        (minutes <= cutoff).then_some((next.sender.as_str(), minutes))
    })
}

/// Mean response time per sender in minutes, 0 when they never replied.
pub fn response_time_average(messages: &[Message], participants: &[String]) -> BTreeMap<String, f64> {
    let mut sums: BTreeMap<String, (f64, usize)> = per_participant(participants);
    for (sender, minutes) in response_gaps(messages) {
        if let Some((sum, n)) = sums.get_mut(sender) {
            *sum += minutes;
            *n += 1;
        }
    }

    sums.into_iter()
        .map(|(sender, (sum, n))| {
            let average = if n == 0 { 0.0 } else { sum / n as f64 };
            (sender, average)
        })
        .collect()
}

/// The largest gap between consecutive messages; the first one wins ties.
pub fn longest_silence(messages: &[Message]) -> Option<Silence> {
    let mut longest: Option<(&Message, &Message)> = None;
    for pair in messages.windows(2) {
        let gap = pair[1].timestamp - pair[0].timestamp;
        if longest.is_none_or(|(a, b)| gap > b.timestamp - a.timestamp) {
            longest = Some((&pair[0], &pair[1]));
        }
    }

    longest.map(|(start, end)| Silence {
        hours: minutes_between(start, end) / 60.0,
        start: start.timestamp,
        end: end.timestamp,
    })
}

pub fn media_stats(messages: &[Message], participants: &[String]) -> MediaStats {
    let mut stats = MediaStats {
        by_user: per_participant(participants),
        by_user_total: per_participant(participants),
        ..MediaStats::default()
    };

    for msg in messages.iter().filter(|m| m.is_media()) {
        stats.total += 1;
        if let Some(total) = stats.by_user_total.get_mut(&msg.sender) {
            *total += 1;
        }
        match msg.media_type {
            Some(media_type) => {
                *stats.by_type.entry(media_type).or_default() += 1;
                if let Some(user) = stats.by_user.get_mut(&msg.sender) {
                    *user.entry(media_type).or_default() += 1;
                }
            }
            None => stats.untyped += 1,
        }
    }
    stats
}
