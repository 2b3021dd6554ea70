//! End-to-end CLI tests for chatpulse.
//!
//! These run the actual binary with various arguments and check the
//! report it writes.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let chat = "[01.01.24, 09:00:00] Alice: günaydın canım ❤️\n\
                [01.01.24, 09:05:00] Bob: günaydın, çok iyi uyudum 😂\n\
                [01.01.24, 09:06:00] Alice: harika!\n\
                [15.03.24, 21:00:00] Bob: image omitted\n\
                [15.03.24, 21:10:00] Alice: mutlu değilim bugün\n\
                ikinci satır burada";
    fs::write(dir.path().join("chat.txt"), chat).unwrap();

    fs::write(dir.path().join("empty.txt"), "   \n").unwrap();
    fs::write(dir.path().join("notes.txt"), "alışveriş listesi\nsüt, ekmek").unwrap();

    let spaced = dir.path().join("my chats");
    fs::create_dir(&spaced).unwrap();
    fs::write(spaced.join("chat export.txt"), "[01.01.24, 09:00] Alice: merhaba").unwrap();

    dir
}

fn chatpulse_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatpulse"));
    Command::from_std(cmd)
}

fn input_path(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_json_report_to_stdout() {
        let fixtures = setup_fixtures();

        let output = chatpulse_cmd()
            .args([input_path(&fixtures, "chat.txt").as_str(), "-q"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(report["totalMessages"], 5);
        assert_eq!(report["participants"][0], "Alice");
        assert_eq!(report["participants"][1], "Bob");
        assert!(report["relationshipAnalysis"]["compatibility"].is_object());
    }

    #[test]
    fn test_json_report_to_file() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "report.json");

        chatpulse_cmd()
            .args([
                input_path(&fixtures, "chat.txt").as_str(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stderr(predicate::str::contains("saved to"));

        let restored = chatpulse::core::output::read_json(&output).unwrap();
        assert_eq!(restored.total_messages, 5);
        assert!(restored.is_complete());
    }

    #[test]
    fn test_path_with_spaces() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("my chats").join("chat export.txt");

        chatpulse_cmd()
            .args([input.to_str().unwrap(), "-q"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"totalMessages\":1"));
    }
}

// ============================================================================
// Output Format Tests
// ============================================================================

mod output_formats {
    use super::*;

    #[test]
    fn test_csv_from_extension() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "summary.csv");

        chatpulse_cmd()
            .args([
                input_path(&fixtures, "chat.txt").as_str(),
                "-o",
                output.to_str().unwrap(),
                "-q",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[0].starts_with("Participant;Messages;"));
        assert!(lines[1].starts_with("Alice;3;"));
        assert!(lines[2].starts_with("Bob;2;"));
    }

    #[test]
    fn test_explicit_format_and_delimiter() {
        let fixtures = setup_fixtures();

        chatpulse_cmd()
            .args([
                input_path(&fixtures, "chat.txt").as_str(),
                "-f",
                "csv",
                "--delimiter",
                ",",
                "-q",
            ])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Participant,Messages,"));
    }

    #[test]
    fn test_pretty_json() {
        let fixtures = setup_fixtures();

        chatpulse_cmd()
            .args([input_path(&fixtures, "chat.txt").as_str(), "--pretty", "-q"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\n  \"participants\": ["));
    }

    #[test]
    fn test_invalid_format_option() {
        let fixtures = setup_fixtures();

        chatpulse_cmd()
            .args([input_path(&fixtures, "chat.txt").as_str(), "-f", "xml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid value"));
    }
}

// ============================================================================
// Date Range Tests
// ============================================================================

mod date_range {
    use super::*;

    #[test]
    fn test_after_date() {
        let fixtures = setup_fixtures();

        chatpulse_cmd()
            .args([input_path(&fixtures, "chat.txt").as_str(), "--after", "2024-03-01", "-q"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"totalMessages\":2"));
    }

    #[test]
    fn test_before_date() {
        let fixtures = setup_fixtures();

        chatpulse_cmd()
            .args([input_path(&fixtures, "chat.txt").as_str(), "--before", "2024-01-01", "-q"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"totalMessages\":3"));
    }

    #[test]
    fn test_empty_window() {
        let fixtures = setup_fixtures();

        chatpulse_cmd()
            .args([input_path(&fixtures, "chat.txt").as_str(), "--after", "2030-01-01", "-q"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"totalMessages\":0"));
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_nonexistent_file() {
        chatpulse_cmd()
            .arg("/nonexistent/chat.txt")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("IO error"));
    }

    #[test]
    fn test_empty_export() {
        let fixtures = setup_fixtures();

        chatpulse_cmd()
            .arg(input_path(&fixtures, "empty.txt"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("empty"))
            .stderr(predicate::str::contains("Export the chat again"));
    }

    #[test]
    fn test_not_a_whatsapp_export() {
        let fixtures = setup_fixtures();

        chatpulse_cmd()
            .arg(input_path(&fixtures, "notes.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unrecognized chat export format"))
            .stderr(predicate::str::contains("Without media"));
    }

    #[test]
    fn test_invalid_date_format() {
        let fixtures = setup_fixtures();

        chatpulse_cmd()
            .args([input_path(&fixtures, "chat.txt").as_str(), "--after", "01/03/2024"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid date"))
            .stderr(predicate::str::contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_non_ascii_delimiter_is_argument_error() {
        let fixtures = setup_fixtures();

        chatpulse_cmd()
            .args([input_path(&fixtures, "chat.txt").as_str(), "-f", "csv", "--delimiter", "é"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--delimiter"))
            .stderr(predicate::str::contains("single ASCII character"))
            .stderr(predicate::str::contains("IO error").not());
    }

    #[test]
    fn test_missing_input_argument() {
        chatpulse_cmd().assert().failure();
    }
}

// ============================================================================
// Help and Version Tests
// ============================================================================

mod help_and_version {
    use super::*;

    #[test]
    fn test_help_flag() {
        chatpulse_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("WhatsApp"))
            .stdout(predicate::str::contains("--after"))
            .stdout(predicate::str::contains("EXAMPLES"));
    }

    #[test]
    fn test_version_flag() {
        chatpulse_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
