//! Unified error types for chatpulse.
//!
//! This module provides a single [`ChatpulseError`] enum that covers all error
//! cases in the library.
//!
//! # Error Kinds
//!
//! Three kinds are **user-facing**: the input itself is not a usable export.
//! - [`EmptyInput`](ChatpulseError::EmptyInput) - nothing but whitespace
//! - [`UnrecognizedFormat`](ChatpulseError::UnrecognizedFormat) - no `[DD.MM.YY, HH:MM]` line anywhere
//! - [`NoMessagesParsed`](ChatpulseError::NoMessagesParsed) - timestamps found, but no `Sender: text` lines
//!
//! [`StageFailure`](ChatpulseError::StageFailure) is **internal**: an analyzer stage
//! received an aggregate that breaks its contract. It is never caused by user input.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatpulse operations.
///
/// # Example
///
/// ```rust
/// use chatpulse::error::Result;
/// use chatpulse::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatpulseError>;

/// The error type for all chatpulse operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatpulseError {
    /// The raw export text is empty or whitespace-only.
    #[error("The chat export is empty")]
    EmptyInput,

    /// No line matched the `[DD.MM.YY, HH:MM] ...` timestamp grammar.
    #[error(
        "Unrecognized chat export format: none of {lines_checked} lines start with a [DD.MM.YY, HH:MM] timestamp"
    )]
    UnrecognizedFormat {
        /// Number of lines that were inspected
        lines_checked: usize,
    },

    /// Parsing finished without producing a single message.
    #[error("No messages could be parsed from the chat export")]
    NoMessagesParsed,

    /// An analyzer stage received an aggregate that violates its contract.
    #[error("Internal error in {stage} stage: {message}")]
    StageFailure {
        /// Name of the failing stage
        stage: &'static str,
        /// What went wrong
        message: String,
    },

    /// Invalid date in a range query.
    ///
    /// Range bounds expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// An I/O error occurred while reading an export or writing a report.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error while saving or restoring a report.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatpulseError {
    /// Creates a stage failure error.
    pub fn stage_failure(stage: &'static str, message: impl Into<String>) -> Self {
        ChatpulseError::StageFailure {
            stage,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatpulseError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` for errors caused by the export itself.
    ///
    /// These map to actionable guidance ("re-export the chat without media")
    /// rather than a generic retry message.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ChatpulseError::EmptyInput
                | ChatpulseError::UnrecognizedFormat { .. }
                | ChatpulseError::NoMessagesParsed
        )
    }

    /// Returns `true` if this is an internal stage contract violation.
    pub fn is_internal(&self) -> bool {
        matches!(self, ChatpulseError::StageFailure { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatpulseError::Io(_))
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatpulseError::InvalidDate { .. })
    }

    /// Short guidance for the person who supplied the export.
    pub fn hint(&self) -> &'static str {
        match self {
            ChatpulseError::EmptyInput => "Export the chat again and make sure the .txt file is not empty.",
            ChatpulseError::UnrecognizedFormat { .. } => {
                "Use WhatsApp's \"Export chat\" option and choose \"Without media\"."
            }
            ChatpulseError::NoMessagesParsed => {
                "The file has timestamps but no messages; re-export the chat without media."
            }
            ChatpulseError::InvalidDate { .. } => "Dates must look like 2024-01-31.",
            _ => "Please try again.",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
