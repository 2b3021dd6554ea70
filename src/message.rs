//! Typed message records produced by the parser.
//!
//! A [`Message`] is created once during parsing and never modified afterwards.
//! Every analyzer stage reads the same slice of messages.
//!
//! # Examples
//!
//! ```
//! use chatpulse::message::{Message, MessageKind, MediaType};
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2023, 1, 1, 9, 0, 0).unwrap();
//! let msg = Message::new(ts, "Alice", "merhaba");
//! assert_eq!(msg.kind, MessageKind::Text);
//!
//! let photo = Message::new(ts, "Bob", "<Media omitted>").with_media(Some(MediaType::Image));
//! assert!(photo.is_media());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a message line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Ordinary text typed by a participant
    #[default]
    Text,
    /// A "media omitted" placeholder
    Media,
    /// Group membership / settings event
    System,
}

/// Subtype of an omitted media attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Photo, GIF or sticker
    Image,
    /// Video clip
    Video,
    /// Voice note or audio file
    Audio,
    /// PDF or any other document
    Document,
}

impl MediaType {
    /// Returns all media types in display order.
    pub fn all() -> &'static [MediaType] {
        &[
            MediaType::Image,
            MediaType::Video,
            MediaType::Audio,
            MediaType::Document,
        ]
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Image => write!(f, "image"),
            MediaType::Video => write!(f, "video"),
            MediaType::Audio => write!(f, "audio"),
            MediaType::Document => write!(f, "document"),
        }
    }
}

/// A single chat message.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `DateTime<Utc>` | Wall-clock time from the export header |
/// | `sender` | `String` | Display name as written in the export |
/// | `content` | `String` | Text, may contain newlines for multi-line messages |
/// | `kind` | [`MessageKind`] | Text, media placeholder or system event |
/// | `media_type` | `Option<MediaType>` | Set only for media with a recognizable subtype |
/// | `emojis` | `Vec<String>` | Emojis found in text messages, in order |
///
/// Export timestamps carry no zone; they are stored as UTC so that hour and
/// weekday buckets reflect the sender's local clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent (export wall-clock time).
    pub timestamp: DateTime<Utc>,

    /// Display name of the author.
    pub sender: String,

    /// Message body.
    pub content: String,

    /// Classification of the message.
    #[serde(rename = "type", default)]
    pub kind: MessageKind,

    /// Media subtype, when `kind` is [`MessageKind::Media`].
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub media_type: Option<MediaType>,

    /// Extracted emojis (text messages only).
    #[serde(default)]
    pub emojis: Vec<String>,
}

impl Message {
    /// Creates a plain text message with no emojis.
    pub fn new(
        timestamp: DateTime<Utc>,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            content: content.into(),
            kind: MessageKind::Text,
            media_type: None,
            emojis: Vec::new(),
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Marks the message as a media placeholder with an optional subtype.
    #[must_use]
    pub fn with_media(mut self, media_type: Option<MediaType>) -> Self {
        self.kind = MessageKind::Media;
        self.media_type = media_type;
        self.emojis.clear();
        self
    }

    /// Marks the message as a system event.
    #[must_use]
    pub fn as_system(mut self) -> Self {
        self.kind = MessageKind::System;
        self.media_type = None;
        self.emojis.clear();
        self
    }

    /// Sets the extracted emoji list.
    #[must_use]
    pub fn with_emojis(mut self, emojis: Vec<String>) -> Self {
        self.emojis = emojis;
        self
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns `true` for ordinary text messages.
    pub fn is_text(&self) -> bool {
        self.kind == MessageKind::Text
    }

    /// Returns `true` for media placeholders.
    pub fn is_media(&self) -> bool {
        self.kind == MessageKind::Media
    }

    /// Returns `true` for system events.
    pub fn is_system(&self) -> bool {
        self.kind == MessageKind::System
    }

    /// Content length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// ISO calendar date of the message, `YYYY-MM-DD`.
    pub fn date_key(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }
}
