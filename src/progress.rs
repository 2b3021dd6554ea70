//! Progress reporting for parsing and analysis.
//!
//! Progress is advisory: consumers get monotonically non-decreasing
//! percentages that end at 100, and nothing else is guaranteed about cadence.
//!
//! # Example
//!
//! ```rust
//! use chatpulse::progress::{Progress, ProgressCallback};
//! use std::sync::Arc;
//!
//! let callback: ProgressCallback = Arc::new(|progress: Progress| {
//!     println!("{}: {}%", progress.phase, progress.percent);
//! });
//!
//! let report = chatpulse::run_pipeline("[01.01.23, 09:00] Alice: merhaba", Some(&callback));
//! assert!(report.is_ok());
//! ```

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use crate::analysis::Stage;

/// Which part of the work a progress update belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Scanning export lines
    Parsing,
    /// Classifying messages and extracting emojis
    Classifying,
    /// Running one analyzer stage
    Analyzing(Stage),
    /// Nothing left to do
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Parsing => write!(f, "parsing"),
            Phase::Classifying => write!(f, "classifying"),
            Phase::Analyzing(stage) => write!(f, "{stage}"),
            Phase::Done => write!(f, "done"),
        }
    }
}

/// A single progress update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Current phase
    pub phase: Phase,
    /// Overall completion, 0-100
    pub percent: u8,
}

/// Callback type for receiving progress updates.
pub type ProgressCallback = Arc<dyn Fn(Progress) + Send + Sync>;

/// Creates a no-op progress callback.
pub fn no_progress() -> ProgressCallback {
    Arc::new(|_| {})
}

/// Creates a progress callback that redraws a single line on stderr.
pub fn stderr_progress() -> ProgressCallback {
    Arc::new(|progress: Progress| {
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "\r   {:>3}% {:<24}", progress.percent, progress.phase);
        if progress.percent >= 100 {
            let _ = writeln!(stderr);
        }
        let _ = stderr.flush();
    })
}

/// Maps local progress of one component into an overall window and
/// suppresses anything that would go backwards.
///
/// The parser reports 0-100 for its own work; the pipeline narrows the
/// window so that parsing covers only the first part of the overall bar.
pub struct ProgressTracker<'a> {
    callback: Option<&'a ProgressCallback>,
    low: u8,
    high: u8,
    last: Option<u8>,
}

impl<'a> ProgressTracker<'a> {
    /// Creates a tracker reporting into `callback` over the full 0-100 range.
    pub fn new(callback: Option<&'a ProgressCallback>) -> Self {
        Self {
            callback,
            low: 0,
            high: 100,
            last: None,
        }
    }

    /// A tracker that reports nowhere.
    pub fn silent() -> Self {
        Self::new(None)
    }

    /// Restricts subsequent reports to `[low, high]` of the overall bar.
    pub fn set_window(&mut self, low: u8, high: u8) {
        self.low = low.min(100);
        self.high = high.clamp(self.low, 100);
    }

    /// Reports `local` percent of the current window.
    pub fn report(&mut self, phase: Phase, local: u8) {
        let local = u32::from(local.min(100));
        let span = u32::from(self.high - self.low);
        let percent = (u32::from(self.low) + span * local / 100) as u8;

        if self.last.is_some_and(|last| percent <= last) {
            return;
        }
        self.last = Some(percent);

        if let Some(callback) = self.callback {
            callback(Progress { phase, percent });
        }
    }

    /// The last percentage that was emitted.
    pub fn last(&self) -> Option<u8> {
        self.last
    }
}
