//! JSON persistence for analysis reports.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::analysis::ChatAnalysis;
use crate::config::OutputConfig;
use crate::error::Result;

/// Writes the full report to a JSON file.
///
/// The file is a single object with camelCase keys:
///
/// ```json
/// {"participants": ["Alice", "Bob"], "totalMessages": 3, ...}
/// ```
pub fn write_json(
    analysis: &ChatAnalysis,
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    if config.pretty {
        serde_json::to_writer_pretty(&mut writer, analysis)?;
    } else {
        serde_json::to_writer(&mut writer, analysis)?;
    }
    writer.flush()?;
    Ok(())
}

/// Same as [`write_json`], but returns the JSON as a string.
pub fn to_json(analysis: &ChatAnalysis, config: &OutputConfig) -> Result<String> {
    let json = if config.pretty {
        serde_json::to_string_pretty(analysis)?
    } else {
        serde_json::to_string(analysis)?
    };
    Ok(json)
}

/// Restores a report saved by [`to_json`].
pub fn from_json(json: &str) -> Result<ChatAnalysis> {
    Ok(serde_json::from_str(json)?)
}

/// Restores a report saved by [`write_json`].
pub fn read_json(input_path: impl AsRef<Path>) -> Result<ChatAnalysis> {
    let json = fs::read_to_string(input_path)?;
    from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run_pipeline;
    use tempfile::tempdir;

    const EXPORT: &str = "[01.01.23, 09:00] Alice: merhaba 😂\n\
                          [01.01.23, 09:05] Bob: image omitted\n\
                          [01.01.23, 09:06] Alice: çok iyi, seni seviyorum ❤️";

    #[test]
    fn test_roundtrip_string() {
        let analysis = run_pipeline(EXPORT, None).unwrap();
        let json = to_json(&analysis, &OutputConfig::new()).unwrap();
        assert!(!json.contains('\n'));
        assert_eq!(from_json(&json).unwrap(), analysis);
    }

    #[test]
    fn test_camel_case_keys() {
        let analysis = run_pipeline(EXPORT, None).unwrap();
        let json = to_json(&analysis, &OutputConfig::new()).unwrap();
        assert!(json.contains("\"totalMessages\":3"));
        assert!(json.contains("\"sentimentAnalysis\""));
        assert!(json.contains("\"relationshipAnalysis\""));
    }

    #[test]
    fn test_pretty_output() {
        let analysis = run_pipeline(EXPORT, None).unwrap();
        let json = to_json(&analysis, &OutputConfig::new().with_pretty(true)).unwrap();
        assert!(json.contains("\n  \"participants\""));
    }

    #[test]
    fn test_roundtrip_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        let analysis = run_pipeline(EXPORT, None).unwrap();

        write_json(&analysis, &path, &OutputConfig::new().with_pretty(true)).unwrap();
        assert_eq!(read_json(&path).unwrap(), analysis);
    }

    #[test]
    fn test_invalid_json() {
        let err = from_json("{\"participants\": 3}").unwrap_err();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_missing_file() {
        let err = read_json("/definitely/not/here.json").unwrap_err();
        assert!(err.is_io());
    }
}
