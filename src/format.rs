//! Report format selection.
//!
//! Library-level format types that don't depend on the CLI, so callers
//! can pick a writer by name or by file extension.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatpulse::Result<()> {
//! use chatpulse::config::OutputConfig;
//! use chatpulse::format::{ReportFormat, to_format_string};
//!
//! let analysis = chatpulse::run_pipeline("[01.01.23, 09:00] Alice: merhaba", None)?;
//!
//! let format = ReportFormat::from_path("report.csv").unwrap_or_default();
//! assert_eq!(format, ReportFormat::Csv);
//!
//! let csv = to_format_string(&analysis, format, &OutputConfig::new())?;
//! assert!(csv.contains("Alice"));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::ChatAnalysis;
use crate::config::OutputConfig;
use crate::error::Result;

/// Output shape for a finished report.
///
/// - [`Json`](ReportFormat::Json) - the complete aggregate, restorable later
/// - [`Csv`](ReportFormat::Csv) - one summary row per participant
///
/// # Example
///
/// ```rust
/// use chatpulse::format::ReportFormat;
/// use std::str::FromStr;
///
/// let format = ReportFormat::from_str("csv").unwrap();
/// assert_eq!(format, ReportFormat::Csv);
/// assert_eq!(format.extension(), "csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ReportFormat {
    /// Full report as a JSON object (default)
    #[default]
    Json,

    /// Per-participant summary table
    Csv,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [ReportFormat] {
        &[ReportFormat::Json, ReportFormat::Csv]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ReportFormat::Json => "application/json",
            ReportFormat::Csv => "text/csv",
        }
    }

    /// Detects the format from a file extension, case-insensitively.
    ///
    /// Returns `None` for unknown or missing extensions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatpulse::format::ReportFormat;
    ///
    /// assert_eq!(ReportFormat::from_path("out/REPORT.JSON"), Some(ReportFormat::Json));
    /// assert_eq!(ReportFormat::from_path("report.txt"), None);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(ReportFormat::Json),
            "csv" => Some(ReportFormat::Csv),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "JSON"),
            ReportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a report to a file in the given format.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
#[cfg(all(feature = "csv-output", feature = "json-output"))]
pub fn write_to_format(
    analysis: &ChatAnalysis,
    path: impl AsRef<Path>,
    format: ReportFormat,
    config: &OutputConfig,
) -> Result<()> {
    match format {
        ReportFormat::Json => crate::core::output::write_json(analysis, path, config),
        ReportFormat::Csv => crate::core::output::write_csv(analysis, path, config),
    }
}

/// Renders a report to a string in the given format.
#[cfg(all(feature = "csv-output", feature = "json-output"))]
pub fn to_format_string(
    analysis: &ChatAnalysis,
    format: ReportFormat,
    config: &OutputConfig,
) -> Result<String> {
    match format {
        ReportFormat::Json => crate::core::output::to_json(analysis, config),
        ReportFormat::Csv => crate::core::output::to_csv(analysis, config),
    }
}
