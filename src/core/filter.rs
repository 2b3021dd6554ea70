//! Restrict messages to an inclusive date window.
//!
//! Used by [`crate::pipeline::analyze_range`] to re-analyze part of a chat.
//!
//! # Example
//!
//! ```
//! use chatpulse::core::filter::{FilterConfig, apply_filters};
//! use chatpulse::Message;
//! use chrono::{TimeZone, Utc};
//!
//! # fn main() -> chatpulse::Result<()> {
//! let messages = vec![
//!     Message::new(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(), "Alice", "eski"),
//!     Message::new(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(), "Alice", "yeni"),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = apply_filters(&messages, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].content, "yeni");
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::Message;
use crate::error::{ChatpulseError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive bounds on message timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only messages on or after this timestamp.
    pub after: Option<DateTime<Utc>>,

    /// Include only messages on or before this timestamp.
    pub before: Option<DateTime<Utc>>,
}

impl FilterConfig {
    /// Creates a filter that lets everything through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whole days from `start` through `end`, both included.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            after: Some(start_of_day(start)),
            before: Some(end_of_day(end)),
        }
    }

    /// Sets the first day to include, `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatpulseError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(start_of_day(parse_date(date_str)?));
        Ok(self)
    }

    /// Sets the last day to include, `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatpulseError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        self.before = Some(end_of_day(parse_date(date_str)?));
        Ok(self)
    }

    /// Returns `true` if any bound is set.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `msg` falls inside the window.
    pub fn matches(&self, msg: &Message) -> bool {
        let ts = msg.timestamp;
        !self.after.is_some_and(|after| ts < after) && !self.before.is_some_and(|before| ts > before)
    }
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`ChatpulseError::InvalidDate`] if the format is invalid.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT)
        .map_err(|_| ChatpulseError::invalid_date(date_str))
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    let last_second = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
    date.and_time(last_second).and_utc()
}

/// Returns the messages inside the window, in their original order.
pub fn apply_filters(messages: &[Message], config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages.to_vec();
    }
    messages
        .iter()
        .filter(|msg| config.matches(msg))
        .cloned()
        .collect()
}
