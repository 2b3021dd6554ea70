//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`OutputFormat`] - report format option, convertible to
//!   [`ReportFormat`](crate::format::ReportFormat)

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::format::ReportFormat;

/// Analyze a WhatsApp chat export: activity, emoji, sentiment,
/// conversation dynamics and relationship heuristics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatpulse")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatpulse chat.txt
    chatpulse chat.txt -o report.json --pretty
    chatpulse chat.txt -o summary.csv
    chatpulse chat.txt --after 2024-01-01 --before 2024-06-30 -f csv")]
pub struct Args {
    /// Path to the exported .txt file
    pub input: String,

    /// Path to the report file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Report format (defaults to the output extension, then JSON)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Analyze only messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Analyze only messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Pretty-print JSON
    #[arg(long)]
    pub pretty: bool,

    /// Field delimiter for CSV output (a single ASCII character)
    #[arg(long, default_value = ";", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Hide the progress indicator
    #[arg(short, long)]
    pub quiet: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The format to write: `--format`, then the output extension, then JSON.
    pub fn report_format(&self) -> ReportFormat {
        self.format
            .map(ReportFormat::from)
            .or_else(|| self.output.as_deref().and_then(ReportFormat::from_path))
            .unwrap_or_default()
    }

    /// Tracing filter directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// CSV delimiters must be a single ASCII character.
fn parse_delimiter(value: &str) -> Result<u8, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(format!("expected a single ASCII character, got '{value}'")),
    }
}

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full report as JSON (default)
    #[default]
    Json,

    /// Per-participant summary table
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        ReportFormat::from(*self).fmt(f)
    }
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> ReportFormat {
        match format {
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Csv => ReportFormat::Csv,
        }
    }
}
