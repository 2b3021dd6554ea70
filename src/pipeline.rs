//! Parse, cap and analyze.
//!
//! [`run_pipeline`] is the single entry point: raw export text in, fully
//! enriched [`ChatAnalysis`] out. Parsing reports the first 40 % of the
//! progress bar and each analyzer stage gets an equal share of the rest.
//!
//! # Example
//!
//! ```rust
//! use chatpulse::pipeline::run_pipeline;
//!
//! let export = "[01.01.23, 09:00] Alice: merhaba\n\
//!               [01.01.23, 09:05] Bob: selam canım ❤️\n\
//!               [01.01.23, 09:06] Alice: haha çok iyi";
//!
//! let analysis = run_pipeline(export, None)?;
//! assert_eq!(analysis.participants, vec!["Alice", "Bob"]);
//! assert!(analysis.is_complete());
//! # Ok::<(), chatpulse::ChatpulseError>(())
//! ```

use std::time::Instant;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::Message;
use crate::analysis::{ChatAnalysis, Stage};
use crate::config::ParserConfig;
use crate::core::filter::{FilterConfig, apply_filters};
use crate::error::Result;
use crate::parser::ChatParser;
use crate::progress::{Phase, ProgressCallback, ProgressTracker};

/// Only the most recent messages are analyzed.
pub const MAX_MESSAGES: usize = 30_000;

/// Part of the overall progress bar spent parsing.
const PARSE_SHARE: u8 = 40;

/// Parses and analyzes an export with the default configuration.
///
/// # Errors
///
/// Parse errors from [`ChatParser::parse`] and
/// [`ChatpulseError::StageFailure`](crate::ChatpulseError::StageFailure)
/// from any stage. No partial result is returned.
pub fn run_pipeline(raw_text: &str, on_progress: Option<&ProgressCallback>) -> Result<ChatAnalysis> {
    Pipeline::new().run(raw_text, on_progress)
}

/// Pipeline with a configurable parser.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    parser: ChatParser,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            parser: ChatParser::with_config(config),
        }
    }

    /// Parses raw text into the message list that would be analyzed,
    /// already capped to [`MAX_MESSAGES`].
    ///
    /// # Errors
    ///
    /// Same as [`ChatParser::parse`].
    pub fn prepare_messages(&self, raw_text: &str) -> Result<Vec<Message>> {
        let messages = self.parser.parse(raw_text)?;
        Ok(cap_to_recent(messages, MAX_MESSAGES))
    }

    /// Runs parse, cap and every stage.
    ///
    /// # Errors
    ///
    /// See [`run_pipeline`].
    pub fn run(&self, raw_text: &str, on_progress: Option<&ProgressCallback>) -> Result<ChatAnalysis> {
        self.run_filtered(raw_text, &FilterConfig::new(), on_progress)
    }

    /// Like [`run`](Self::run), but analyzes only messages inside `filter`.
    ///
    /// A filter that leaves nothing produces an empty aggregate.
    ///
    /// # Errors
    ///
    /// See [`run_pipeline`].
    pub fn run_filtered(
        &self,
        raw_text: &str,
        filter: &FilterConfig,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<ChatAnalysis> {
        let started = Instant::now();
        let mut tracker = ProgressTracker::new(on_progress);

        tracker.set_window(0, PARSE_SHARE);
        let messages = self.parser.parse_tracked(raw_text, &mut tracker)?;
        let messages = cap_to_recent(messages, MAX_MESSAGES);
        let messages = if filter.is_active() {
            apply_filters(&messages, filter)
        } else {
            messages
        };
        if messages.is_empty() {
            warn!("no messages left after date filter");
            tracker.set_window(0, 100);
            tracker.report(Phase::Done, 100);
            return Ok(ChatAnalysis::default());
        }

        let analysis = analyze_tracked(&messages, &mut tracker)?;
        info!(
            messages = analysis.total_messages,
            participants = analysis.participants.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "analysis complete"
        );
        Ok(analysis)
    }
}

/// Keeps the `max` most recent messages of a timestamp-sorted list.
pub fn cap_to_recent(mut messages: Vec<Message>, max: usize) -> Vec<Message> {
    if messages.len() <= max {
        return messages;
    }
    warn!(
        total = messages.len(),
        kept = max,
        "chat is too long, analyzing only the most recent messages"
    );
    messages.split_off(messages.len() - max)
}

/// Runs every stage over `messages` without progress reporting.
///
/// # Errors
///
/// Returns [`ChatpulseError::StageFailure`](crate::ChatpulseError::StageFailure)
/// if a stage rejects its input.
pub fn analyze(messages: &[Message]) -> Result<ChatAnalysis> {
    analyze_tracked(messages, &mut ProgressTracker::silent())
}

/// Runs every stage, giving each an equal slice of what is left of the
/// tracker's bar after parsing.
///
/// # Errors
///
/// See [`analyze`].
pub fn analyze_tracked(messages: &[Message], tracker: &mut ProgressTracker<'_>) -> Result<ChatAnalysis> {
    let stages = Stage::all();
    let span = usize::from(100 - PARSE_SHARE);
    let mut analysis = ChatAnalysis::default();

    for (i, stage) in stages.iter().copied().enumerate() {
        let low = PARSE_SHARE + (span * i / stages.len()) as u8;
        let high = PARSE_SHARE + (span * (i + 1) / stages.len()) as u8;
        tracker.set_window(low, high);

        let started = Instant::now();
        analysis = stage.apply(messages, analysis)?;
        tracker.report(Phase::Analyzing(stage), 100);
        debug!(
            stage = %stage,
            elapsed_us = started.elapsed().as_micros() as u64,
            "stage done"
        );
    }
    Ok(analysis)
}

/// Re-analyzes the messages dated `start` through `end`, both included.
///
/// Produces an independent aggregate for the window. An empty window gives
/// an empty aggregate rather than an error.
///
/// # Errors
///
/// See [`analyze`].
pub fn analyze_range(messages: &[Message], start: NaiveDate, end: NaiveDate) -> Result<ChatAnalysis> {
    let window = apply_filters(messages, &FilterConfig::between(start, end));
    if window.is_empty() {
        debug!(%start, %end, "no messages in range");
        return Ok(ChatAnalysis::default());
    }
    analyze(&window)
}
