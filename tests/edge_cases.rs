//! Edge case tests for chatpulse
//!
//! Boundary conditions of the export grammar and the analyzers that
//! regular scenario tests don't reach.

use chatpulse::analysis::model::SentimentLabel;
use chatpulse::analysis::relationship::NO_EMOJI_PERSONALITY;
use chatpulse::analysis::sentiment::analyze_message_sentiment;
use chatpulse::message::{MediaType, MessageKind};
use chatpulse::parser::ChatParser;
use chatpulse::run_pipeline;
use chrono::{Datelike, Local, Timelike};

fn parse(text: &str) -> Vec<chatpulse::Message> {
    ChatParser::new().parse(text).unwrap()
}

// =========================================================================
// Export grammar
// =========================================================================

#[test]
fn test_crlf_line_endings() {
    let messages = parse("[01.01.23, 09:00] Alice: merhaba\r\n[01.01.23, 09:01] Bob: selam\r\n");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content, "merhaba");
    assert_eq!(messages[1].content, "selam");
}

#[test]
fn test_lines_before_first_header_are_dropped() {
    let messages = parse("WhatsApp Chat with Bob\n\n[01.01.23, 09:00] Alice: merhaba");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "merhaba");
}

#[test]
fn test_trailing_blank_lines_are_trimmed() {
    let messages = parse("[01.01.23, 09:00] Alice: merhaba\n\n\n");
    assert_eq!(messages[0].content, "merhaba");
}

#[test]
fn test_four_digit_year_and_seconds() {
    let messages = parse("[31.12.2024, 23:59:58] Alice: yeni yıl");
    let ts = messages[0].timestamp;
    assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 12, 31));
    assert_eq!((ts.hour(), ts.minute(), ts.second()), (23, 59, 58));
}

#[test]
fn test_invalid_calendar_date_falls_back_to_now() {
    let before = Local::now().naive_local().and_utc();
    let messages = parse("[30.02.23, 09:00] Alice: şubat 30");
    assert_eq!(messages.len(), 1);
    assert!(messages[0].timestamp >= before - chrono::Duration::seconds(1));
}

#[test]
fn test_sender_with_spaces_and_emoji() {
    let messages = parse("[01.01.23, 09:00] Elif 🌸 Kaya: merhaba");
    assert_eq!(messages[0].sender, "Elif 🌸 Kaya");
}

#[test]
fn test_bidi_marks_are_ignored() {
    let messages = parse("\u{200E}[01.01.23, 09:00] Alice: \u{200E}image omitted");
    assert_eq!(messages[0].kind, MessageKind::Media);
    assert_eq!(messages[0].media_type, Some(MediaType::Image));
}

// =========================================================================
// Classification
// =========================================================================

#[test]
fn test_media_subtypes() {
    let text = "[01.01.23, 09:00] Alice: video omitted\n\
                [01.01.23, 09:01] Alice: audio omitted\n\
                [01.01.23, 09:02] Alice: sticker omitted\n\
                [01.01.23, 09:03] Alice: document omitted\n\
                [01.01.23, 09:04] Alice: <Media omitted>";
    let messages = parse(text);
    assert!(messages.iter().all(|m| m.is_media()));
    assert_eq!(messages[0].media_type, Some(MediaType::Video));
    assert_eq!(messages[1].media_type, Some(MediaType::Audio));
    assert_eq!(messages[2].media_type, Some(MediaType::Image));
    assert_eq!(messages[3].media_type, Some(MediaType::Document));
    assert_eq!(messages[4].media_type, None);
}

#[test]
fn test_system_messages_have_no_emojis() {
    let messages = parse("[01.01.23, 09:00] Alice: Messages and calls are end-to-end encrypted 🔒");
    assert!(messages[0].is_system());
    assert!(messages[0].emojis.is_empty());
}

#[test]
fn test_compound_emojis_are_single_entries() {
    let messages = parse("[01.01.23, 09:00] Alice: 👨‍👩‍👧‍👦 🇹🇷 👍🏽");
    assert_eq!(messages[0].emojis, vec!["👨‍👩‍👧‍👦", "🇹🇷", "👍🏽"]);
}

// =========================================================================
// Analysis boundaries
// =========================================================================

#[test]
fn test_single_message_chat() {
    let analysis = run_pipeline("[01.01.23, 09:00] Alice: merhaba", None).unwrap();
    assert_eq!(analysis.participants, vec!["Alice"]);
    assert!(analysis.longest_silence.is_none());
    assert_eq!(analysis.response_time_average["Alice"], 0.0);

    let relationship = analysis.relationship_analysis.unwrap();
    assert!(relationship.compatibility.is_none());
    assert_eq!(relationship.profiles["Alice"].emoji_personality, NO_EMOJI_PERSONALITY);
    assert!(relationship.funny_titles.patience_test.is_none());
}

#[test]
fn test_same_sender_streak_has_no_responses() {
    let text = "[01.01.23, 09:00] Alice: bir\n\
                [01.01.23, 09:01] Alice: iki\n\
                [01.01.23, 09:02] Alice: üç";
    let analysis = run_pipeline(text, None).unwrap();
    let dynamics = analysis.communication_dynamics.unwrap();
    assert_eq!(dynamics.response_times["Alice"].count, 0);
    assert_eq!(dynamics.interaction_flow["Alice"]["Alice"], 2);
}

#[test]
fn test_media_only_chat() {
    let text = "[01.01.23, 09:00] Alice: image omitted\n\
                [01.01.23, 09:01] Bob: image omitted";
    let analysis = run_pipeline(text, None).unwrap();
    assert_eq!(analysis.emoji_stats.total_count, 0);
    assert!(analysis.premium_features.unwrap().word_frequency.is_empty());
    let relationship = analysis.relationship_analysis.unwrap();
    assert_eq!(relationship.winners.most_photos.as_deref(), Some("Alice"));
    assert!(relationship.longest_message.is_none());
}

#[test]
fn test_sentiment_without_lexicon_words_is_neutral() {
    let result = analyze_message_sentiment("masa sandalye kalem");
    assert_eq!(result.score, 0.0);
    assert_eq!(result.sentiment, SentimentLabel::Neutral);
    assert!(result.dominant_category.is_none());
}

#[test]
fn test_sentiment_is_clamped() {
    let result = analyze_message_sentiment("harika harika harika harika harika harika");
    assert_eq!(result.score, 1.0);
}

#[test]
fn test_uppercase_turkish_i() {
    let shouted = analyze_message_sentiment("İYİ");
    let quiet = analyze_message_sentiment("iyi");
    assert_eq!(shouted.score, quiet.score);
}
