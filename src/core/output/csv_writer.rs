//! CSV participant summary.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::analysis::ChatAnalysis;
use crate::config::OutputConfig;
use crate::error::Result;

const HEADER: [&str; 9] = [
    "Participant",
    "Messages",
    "AverageLength",
    "Emojis",
    "Media",
    "Initiations",
    "AvgResponseMinutes",
    "Sentiment",
    "Personality",
];

/// Writes one row per participant.
///
/// # Format
/// - Delimiter: [`OutputConfig::csv_delimiter`] (`;` by default)
/// - Columns: `Participant`, `Messages`, `AverageLength`, `Emojis`, `Media`,
///   `Initiations`, `AvgResponseMinutes`, `Sentiment`, `Personality`
/// - Stage-dependent columns are left empty when the stage did not run
pub fn write_csv(
    analysis: &ChatAnalysis,
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(analysis, file, config)
}

/// Same as [`write_csv`], but returns the CSV as a string.
pub fn to_csv(analysis: &ChatAnalysis, config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(analysis, &mut buffer, config)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_rows<W: Write>(analysis: &ChatAnalysis, out: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.csv_delimiter)
        .from_writer(out);

    writer.write_record(HEADER)?;
    for name in &analysis.participants {
        writer.write_record(build_record(analysis, name))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_record(analysis: &ChatAnalysis, name: &str) -> [String; 9] {
    let stats = analysis.message_stats.get(name).cloned().unwrap_or_default();
    let emojis: usize = analysis
        .emoji_stats
        .by_user
        .get(name)
        .map_or(0, |counts| counts.values().sum());
    let media = analysis.media_stats.by_user_total.get(name).copied().unwrap_or(0);
    let initiations = analysis.conversation_initiations.get(name).copied().unwrap_or(0);
    let response = analysis.response_time_average.get(name).copied().unwrap_or(0.0);

    let sentiment = analysis
        .sentiment_analysis
        .as_ref()
        .and_then(|s| s.by_user.get(name))
        .map(|user| format!("{:.3}", user.score))
        .unwrap_or_default();
    let personality = analysis
        .relationship_analysis
        .as_ref()
        .and_then(|r| r.profiles.get(name))
        .map(|profile| profile.personality_type.clone())
        .unwrap_or_default();

    [
        name.to_string(),
        stats.count.to_string(),
        format!("{:.1}", stats.average_length),
        emojis.to_string(),
        media.to_string(),
        initiations.to_string(),
        format!("{:.1}", response),
        sentiment,
        personality,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stats;
    use crate::run_pipeline;
    use tempfile::tempdir;

    const EXPORT: &str = "[01.01.23, 09:00] Alice: merhaba; nasılsın?\n\
                          [01.01.23, 09:10] Bob: iyiyim 😊\n\
                          [01.01.23, 09:11] Bob: image omitted";

    #[test]
    fn test_header_and_rows() {
        let analysis = run_pipeline(EXPORT, None).unwrap();
        let csv = to_csv(&analysis, &OutputConfig::new()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER.join(";"));
        assert!(lines[1].starts_with("Alice;1;"));
        assert!(lines[2].starts_with("Bob;2;"));
        assert!(lines[2].contains(";10.0;"));
    }

    #[test]
    fn test_custom_delimiter() {
        let analysis = run_pipeline(EXPORT, None).unwrap();
        let csv = to_csv(&analysis, &OutputConfig::new().with_csv_delimiter(b',')).unwrap();
        assert!(csv.starts_with("Participant,Messages,"));
    }

    #[test]
    fn test_quotes_content_with_delimiter() {
        let text = "[01.01.23, 09:00] Ali; Veli: selam";
        let analysis = run_pipeline(text, None).unwrap();
        let csv = to_csv(&analysis, &OutputConfig::new()).unwrap();
        assert!(csv.contains("\"Ali; Veli\""));
    }

    #[test]
    fn test_statistics_only_leaves_columns_empty() {
        let messages = crate::parser::parse(EXPORT, None).unwrap();
        let analysis = stats::analyze(&messages);
        let csv = to_csv(&analysis, &OutputConfig::new()).unwrap();
        let alice = csv.lines().nth(1).unwrap();
        assert!(alice.ends_with(";;"));
    }

    #[test]
    fn test_untyped_media_counts_for_sender() {
        let text = "[01.01.23, 09:00] Alice: <Media omitted>\n\
                    [01.01.23, 09:01] Bob: <Medya dahil edilmedi>";
        let analysis = run_pipeline(text, None).unwrap();
        let csv = to_csv(&analysis, &OutputConfig::new()).unwrap();
        let alice: Vec<&str> = csv.lines().nth(1).unwrap().split(';').collect();
        assert_eq!(alice[0], "Alice");
        assert_eq!(alice[4], "1");
    }

    #[test]
    fn test_write_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        let analysis = run_pipeline(EXPORT, None).unwrap();
        write_csv(&analysis, &path, &OutputConfig::new()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Participant;"));
        assert_eq!(content.lines().count(), 3);
    }
}
