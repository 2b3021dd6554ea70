//! WhatsApp export grammar.
//!
//! A message header looks like
//! `[DD.MM.YY, HH:MM] Sender: Content` with optional seconds and a 2- or
//! 4-digit year. Everything else is a continuation of the previous message.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use regex::Regex;

use crate::message::{MediaType, MessageKind};

/// Full header: day, month, year, hour, minute, optional second, sender, content.
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[(\d{1,2})\.(\d{1,2})\.(\d{4}|\d{2}),\s(\d{1,2}):(\d{2})(?::(\d{2}))?\]\s([^:]+):\s?(.*)$",
    )
    .expect("header pattern is valid")
});

/// Just the bracketed timestamp, used to tell "not an export" from "no messages".
static TIMESTAMP_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[\d{1,2}\.\d{1,2}\.(?:\d{4}|\d{2}),\s\d{1,2}:\d{2}")
        .expect("timestamp pattern is valid")
});

/// Flags, then pictographs with optional selector, skin tone and ZWJ tail.
static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\x{1F1E6}-\x{1F1FF}]{2}|(?:\p{Extended_Pictographic}|\p{Emoji_Presentation})\x{FE0F}?\p{Emoji_Modifier}?(?:\x{200D}(?:\p{Extended_Pictographic}|\p{Emoji_Presentation})\x{FE0F}?\p{Emoji_Modifier}?)*",
    )
    .expect("emoji pattern is valid")
});

const MEDIA_MARKERS: &[&str] = &[
    "<media omitted>",
    "omitted",
    "<attached:",
    "<medya dahil edilmedi>",
    "dahil edilmedi",
];

/// Substrings that decide the media subtype, checked in order.
const MEDIA_SUBTYPES: &[(MediaType, &[&str])] = &[
    (
        MediaType::Image,
        &["image", "photo", "sticker", "gif", "görüntü", "fotoğraf", "çıkartma"],
    ),
    (MediaType::Video, &["video"]),
    (MediaType::Audio, &["audio", "opus", "ses"]),
    (MediaType::Document, &["document", "belge", ".pdf"]),
];

const SYSTEM_MARKERS: &[&str] = &[
    "joined",
    "left",
    "removed",
    "added",
    "created",
    "changed",
    "group",
    "end-to-end encrypted",
    "gruba katıldı",
    "gruptan ayrıldı",
    "grubu oluşturdu",
    "uçtan uca şifreli",
];

/// A matched header line.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderLine<'a> {
    /// `None` when the date or time is not a real calendar value
    pub timestamp: Option<DateTime<Utc>>,
    pub sender: &'a str,
    pub content: &'a str,
}

/// Removes direction marks and BOMs that iOS puts in front of some lines.
pub fn strip_marks(line: &str) -> &str {
    line.trim_start_matches(['\u{200E}', '\u{200F}', '\u{FEFF}'])
}

/// Returns `true` if the line starts with a bracketed export timestamp.
pub fn has_timestamp_prefix(line: &str) -> bool {
    TIMESTAMP_PREFIX.is_match(strip_marks(line))
}

/// Parses a header line, or returns `None` for continuation lines.
pub fn parse_header(line: &str) -> Option<HeaderLine<'_>> {
    let caps = HEADER.captures(strip_marks(line))?;
    let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());

    let timestamp = build_timestamp(
        field(1),
        field(2),
        field(3),
        field(4),
        field(5),
        caps.get(6).map(|m| m.as_str()),
    );

    Some(HeaderLine {
        timestamp,
        sender: caps.get(7).map_or("", |m| m.as_str().trim()),
        content: caps.get(8).map_or("", |m| m.as_str()),
    })
}

/// Builds a timestamp from header fields.
///
/// Two-digit years are read as 20YY.
pub fn build_timestamp(
    day: &str,
    month: &str,
    year: &str,
    hour: &str,
    minute: &str,
    second: Option<&str>,
) -> Option<DateTime<Utc>> {
    let mut year: i32 = year.parse().ok()?;
    if year < 100 {
        year += 2000;
    }
    let date = NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)?;
    let second = match second {
        Some(s) => s.parse().ok()?,
        None => 0,
    };
    let time = NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, second)?;
    Some(NaiveDateTime::new(date, time).and_utc())
}

/// Classifies message content as text, media or system.
pub fn classify(content: &str) -> (MessageKind, Option<MediaType>) {
    let lower = content.to_lowercase();

    if MEDIA_MARKERS.iter().any(|marker| lower.contains(marker)) {
        let subtype = MEDIA_SUBTYPES
            .iter()
            .find(|(_, needles)| needles.iter().any(|needle| lower.contains(needle)))
            .map(|(media_type, _)| *media_type);
        return (MessageKind::Media, subtype);
    }

    if SYSTEM_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return (MessageKind::System, None);
    }

    (MessageKind::Text, None)
}

/// Extracts emojis in order of appearance.
pub fn extract_emojis(content: &str) -> Vec<String> {
    EMOJI
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect()
}
