//! WhatsApp export parser.
//!
//! Turns raw export text into an ordered list of [`Message`] records:
//!
//! 1. Reject empty input and text without a single export timestamp.
//! 2. Repair Turkish mojibake (optional, on by default).
//! 3. Fold lines into messages; lines without a header continue the open message.
//! 4. Classify each message and extract emojis from text messages.
//! 5. Stable-sort by timestamp.
//!
//! # Example
//!
//! ```rust
//! use chatpulse::parser::ChatParser;
//!
//! let export = "[01.01.23, 09:00] Alice: merhaba\n[01.01.23, 09:05] Bob: selam\nnasılsın?";
//! let messages = ChatParser::new().parse(export)?;
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[1].content, "selam\nnasılsın?");
//! # Ok::<(), chatpulse::ChatpulseError>(())
//! ```

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Local, Utc};
use tracing::{debug, warn};

use crate::Message;
use crate::config::ParserConfig;
use crate::error::{ChatpulseError, Result};
use crate::message::MessageKind;
use crate::parsing::encoding::{looks_mojibaked, repair_turkish_encoding};
use crate::parsing::whatsapp::{classify, extract_emojis, has_timestamp_prefix, parse_header};
use crate::progress::{Phase, ProgressCallback, ProgressTracker};

/// Share of the parser's own progress spent scanning lines.
const SCAN_SHARE: usize = 95;

/// Parser for WhatsApp TXT exports.
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    config: ParserConfig,
}

/// A message whose header has been seen but whose body may still grow.
struct Pending<'a> {
    timestamp: DateTime<Utc>,
    sender: &'a str,
    content: String,
}

impl Pending<'_> {
    fn finish(self) -> Message {
        let content = self.content.trim_end_matches('\n');
        Message::new(self.timestamp, self.sender, content)
    }
}

impl ChatParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses export text.
    ///
    /// # Errors
    ///
    /// - [`ChatpulseError::EmptyInput`] for empty or whitespace-only text
    /// - [`ChatpulseError::UnrecognizedFormat`] if no line carries an export timestamp
    /// - [`ChatpulseError::NoMessagesParsed`] if no complete header was found
    pub fn parse(&self, text: &str) -> Result<Vec<Message>> {
        self.parse_tracked(text, &mut ProgressTracker::silent())
    }

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatpulseError::Io`] if the file cannot be read, otherwise
    /// the same errors as [`parse`](Self::parse).
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<Message>> {
        let text = fs::read_to_string(path)?;
        self.parse(&text)
    }

    /// Parses export text, reporting progress through `tracker`.
    ///
    /// Line scanning reports 0-95 % and classification 95-100 % of
    /// whatever window the tracker is set to.
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse).
    pub fn parse_tracked(
        &self,
        text: &str,
        tracker: &mut ProgressTracker<'_>,
    ) -> Result<Vec<Message>> {
        if text.trim().is_empty() {
            return Err(ChatpulseError::EmptyInput);
        }

        let text: Cow<'_, str> = if self.config.repair_encoding && looks_mojibaked(text) {
            warn!("input looks mis-decoded, repairing Turkish characters");
            repair_turkish_encoding(text)
        } else {
            Cow::Borrowed(text)
        };

        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let lines: Vec<&str> = normalized.split('\n').collect();

        if !lines.iter().any(|line| has_timestamp_prefix(line)) {
            return Err(ChatpulseError::UnrecognizedFormat {
                lines_checked: lines.len(),
            });
        }

        tracker.report(Phase::Parsing, 0);
        let drafts = self.scan_lines(&lines, tracker);
        if drafts.is_empty() {
            return Err(ChatpulseError::NoMessagesParsed);
        }

        let mut messages = self.classify_all(drafts, tracker);
        messages.sort_by_key(|m| m.timestamp);
        tracker.report(Phase::Classifying, 100);

        debug!(
            lines = lines.len(),
            messages = messages.len(),
            "parsed export"
        );
        Ok(messages)
    }

    /// Chunk size for progress reporting; deserialized configs may carry 0.
    fn chunk_lines(&self) -> usize {
        self.config.chunk_lines.max(1)
    }

    /// Folds lines into messages, one chunk at a time.
    fn scan_lines(&self, lines: &[&str], tracker: &mut ProgressTracker<'_>) -> Vec<Message> {
        let total = lines.len().max(1);
        let mut done = 0;
        let mut drafts = Vec::new();
        let mut pending: Option<Pending<'_>> = None;

        for chunk in lines.chunks(self.chunk_lines()) {
            for line in chunk {
                match parse_header(line) {
                    Some(header) => {
                        if let Some(open) = pending.take() {
                            drafts.push(open.finish());
                        }
                        let timestamp = header.timestamp.unwrap_or_else(|| {
                            debug!(line = *line, "invalid export date, using current time");
                            fallback_timestamp()
                        });
                        pending = Some(Pending {
                            timestamp,
                            sender: header.sender,
                            content: header.content.to_string(),
                        });
                    }
                    None => {
                        // Lines before the first header have nothing to attach to
                        if let Some(open) = pending.as_mut() {
                            open.content.push('\n');
                            open.content.push_str(line);
                        }
                    }
                }
            }
            done += chunk.len();
            tracker.report(Phase::Parsing, (done * SCAN_SHARE / total) as u8);
        }

        if let Some(open) = pending {
            drafts.push(open.finish());
        }
        drafts
    }

    /// Assigns message kinds and extracts emojis from text messages.
    fn classify_all(&self, drafts: Vec<Message>, tracker: &mut ProgressTracker<'_>) -> Vec<Message> {
        let total = drafts.len().max(1);
        let chunk_size = self.chunk_lines();
        let mut messages = Vec::with_capacity(drafts.len());

        for (i, draft) in drafts.into_iter().enumerate() {
            let (kind, media_type) = classify(&draft.content);
            let message = match kind {
                MessageKind::Media => draft.with_media(media_type),
                MessageKind::System => draft.as_system(),
                MessageKind::Text => {
                    let emojis = extract_emojis(&draft.content);
                    draft.with_emojis(emojis)
                }
            };
            messages.push(message);

            if (i + 1) % chunk_size == 0 {
                let local = SCAN_SHARE + (i + 1) * (100 - SCAN_SHARE) / total;
                tracker.report(Phase::Classifying, local as u8);
            }
        }
        messages
    }
}

/// Wall-clock "now" in the same zone-less convention as export timestamps.
fn fallback_timestamp() -> DateTime<Utc> {
    Local::now().naive_local().and_utc()
}

/// Parses export text with the default configuration.
///
/// # Errors
///
/// Same as [`ChatParser::parse`].
pub fn parse(text: &str, on_progress: Option<&ProgressCallback>) -> Result<Vec<Message>> {
    let mut tracker = ProgressTracker::new(on_progress);
    ChatParser::new().parse_tracked(text, &mut tracker)
}
