//! Turkish-aware text helpers shared by the analyzers.

use crate::lexicon;

/// Lowercases with Turkish dotted/dotless I rules.
///
/// `I` becomes `ı` and `İ` becomes `i`; everything else follows Unicode.
///
/// ```
/// use chatpulse::text::to_lower_tr;
///
/// assert_eq!(to_lower_tr("KIZGINIM"), "kızgınım");
/// assert_eq!(to_lower_tr("İYİ"), "iyi");
/// ```
pub fn to_lower_tr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Splits on whitespace, lowercases and trims ASCII punctuation.
///
/// Emoji tokens survive so they can be looked up in the lexicon.
pub fn tokenize(s: &str) -> Vec<String> {
    s.split_whitespace()
        .map(|raw| {
            to_lower_tr(raw)
                .trim_matches(|c: char| c.is_ascii_punctuation())
                .to_string()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Words that count toward word frequency and topics.
///
/// Punctuation is stripped, tokens of two characters or fewer are dropped,
/// and stop words are removed.
pub fn content_words(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split_whitespace().filter_map(|raw| {
        let word: String = to_lower_tr(raw)
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        (word.chars().count() > 2 && !lexicon::is_stop_word(&word)).then_some(word)
    })
}

/// Returns the first `n` characters of `s`.
pub fn preview(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}
