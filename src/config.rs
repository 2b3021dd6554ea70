//! Configuration types for parsing and report output.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how the export text is read
//! - [`OutputConfig`] - how a finished report is written
//!
//! Analysis thresholds (conversation gaps, response cutoff, message cap) are
//! not configurable; they live as constants next to the stage that uses them.
//!
//! # Example
//!
//! ```rust
//! use chatpulse::config::ParserConfig;
//! use chatpulse::parser::ChatParser;
//!
//! let config = ParserConfig::new()
//!     .with_repair_encoding(false)
//!     .with_chunk_lines(5_000);
//!
//! let parser = ChatParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for export parsing.
///
/// # Example
///
/// ```rust
/// use chatpulse::config::ParserConfig;
///
/// let config = ParserConfig::new().with_repair_encoding(true);
/// assert_eq!(config.chunk_lines, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Repair common Turkish mis-decoding (`Ã§` → `ç`) before parsing (default: true)
    pub repair_encoding: bool,

    /// Lines scanned between progress reports (default: 1000)
    pub chunk_lines: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            repair_encoding: true,
            chunk_lines: 1000,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables encoding repair.
    #[must_use]
    pub fn with_repair_encoding(mut self, enabled: bool) -> Self {
        self.repair_encoding = enabled;
        self
    }

    /// Sets the progress chunk size. Zero is treated as one.
    #[must_use]
    pub fn with_chunk_lines(mut self, lines: usize) -> Self {
        self.chunk_lines = lines.max(1);
        self
    }
}

/// Configuration for report output.
///
/// # Example
///
/// ```rust
/// use chatpulse::config::OutputConfig;
///
/// let config = OutputConfig::new().with_pretty(true).with_csv_delimiter(b',');
/// assert!(config.pretty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON reports (default: false)
    pub pretty: bool,

    /// Field delimiter for CSV summaries (default: `;`)
    pub csv_delimiter: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            csv_delimiter: b';',
        }
    }
}

impl OutputConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables pretty JSON.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the CSV delimiter.
    #[must_use]
    pub fn with_csv_delimiter(mut self, delimiter: u8) -> Self {
        self.csv_delimiter = delimiter;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_defaults() {
        let config = ParserConfig::default();
        assert!(config.repair_encoding);
        assert_eq!(config.chunk_lines, 1000);
    }

    #[test]
    fn test_parser_config_builder() {
        let config = ParserConfig::new()
            .with_repair_encoding(false)
            .with_chunk_lines(0);
        assert!(!config.repair_encoding);
        assert_eq!(config.chunk_lines, 1);
    }

    #[test]
    fn test_output_config_builder() {
        let config = OutputConfig::new().with_pretty(true).with_csv_delimiter(b',');
        assert!(config.pretty);
        assert_eq!(config.csv_delimiter, b',');
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = ParserConfig::new().with_chunk_lines(250);
        let json = serde_json::to_string(&config).unwrap();
        let back: ParserConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
