//! # Chatpulse
//!
//! A Rust library for turning WhatsApp chat exports into an analytics report:
//! who talks when, which emojis they reach for, how the mood swings, how fast
//! people answer each other and a handful of playful relationship heuristics.
//!
//! ## Overview
//!
//! Input is the plain-text file produced by WhatsApp's "Export chat" option
//! (`[DD.MM.YY, HH:MM:SS] Sender: text`). Sentiment and relationship
//! heuristics use a built-in Turkish lexicon; everything else is
//! language-agnostic.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatpulse::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let export = "[01.01.23, 09:00] Alice: merhaba\n\
//!                   [01.01.23, 09:05] Bob: selam canım ❤️\n\
//!                   [01.01.23, 09:06] Alice: haha çok iyi";
//!
//!     let analysis = run_pipeline(export, None)?;
//!     assert_eq!(analysis.total_messages, 3);
//!
//!     let sentiment = analysis.sentiment_analysis.as_ref().unwrap();
//!     assert!(sentiment.overall_score > 0.0);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatParser`](parser::ChatParser), export text to [`Message`]s
//! - [`parsing`] - line grammar, message classification and encoding repair
//! - [`analysis`] - the seven analyzer [`Stage`](analysis::Stage)s and the
//!   [`ChatAnalysis`] aggregate they fill in
//! - [`pipeline`] - [`run_pipeline`], message cap and date-range re-analysis
//! - [`lexicon`] - Turkish sentiment and heuristic word lists
//! - [`core`] - date filtering and report writers
//! - [`format`] - report format selection
//! - [`progress`] - progress callbacks
//! - [`config`] - parser and output configuration
//! - [`error`] - [`ChatpulseError`] and [`Result`]
//! - [`prelude`] - convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod lexicon;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod pipeline;
pub mod progress;
pub mod text;

// Re-export the main types at the crate root for convenience
pub use analysis::ChatAnalysis;
pub use error::{ChatpulseError, Result};
pub use message::Message;
pub use pipeline::run_pipeline;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatpulse::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;
    pub use crate::message::{MediaType, MessageKind};

    pub use crate::error::{ChatpulseError, Result};

    pub use crate::analysis::{ChatAnalysis, Stage};
    pub use crate::pipeline::{Pipeline, analyze_range, run_pipeline};

    pub use crate::parser::ChatParser;

    pub use crate::config::{OutputConfig, ParserConfig};
    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::progress::{Progress, ProgressCallback};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{from_json, read_json, to_json, write_json};

    pub use crate::format::ReportFormat;
}
