//! Repair of Turkish text that was UTF-8 but got decoded as a single-byte
//! code page somewhere between the phone and us.
//!
//! Each Turkish letter becomes a two-character sequence such as `Ã§` for `ç`
//! or `ÅŸ` for `ş`. Detection looks for any such sequence; repair is a fixed
//! substitution table, so anything not in the table is left alone.

use std::borrow::Cow;

/// Mis-decoded sequence and the letter it stands for.
///
/// Covers both Windows-1252/1254 (`Ã‡`) and ISO-8859-1 (`Ã\u{87}`) renderings.
const MOJIBAKE_TABLE: &[(&str, &str)] = &[
    ("Ã§", "ç"),
    ("Ã‡", "Ç"),
    ("Ã\u{87}", "Ç"),
    ("Ã¶", "ö"),
    ("Ã–", "Ö"),
    ("Ã\u{96}", "Ö"),
    ("Ã¼", "ü"),
    ("Ãœ", "Ü"),
    ("Ã\u{9C}", "Ü"),
    ("ÄŸ", "ğ"),
    ("Ä\u{9F}", "ğ"),
    ("Äž", "Ğ"),
    ("Ä\u{9E}", "Ğ"),
    ("Ä±", "ı"),
    ("Ä°", "İ"),
    ("ÅŸ", "ş"),
    ("Å\u{9F}", "ş"),
    ("Åž", "Ş"),
    ("Å\u{9E}", "Ş"),
    ("Ã¢", "â"),
    ("Ã®", "î"),
    ("Ã»", "û"),
];

/// Returns `true` if the text contains any known mis-decoded sequence.
pub fn looks_mojibaked(text: &str) -> bool {
    MOJIBAKE_TABLE.iter().any(|(broken, _)| text.contains(broken))
}

/// Replaces known mis-decoded sequences; borrows when nothing needs fixing.
///
/// ```
/// use chatpulse::parsing::encoding::repair_turkish_encoding;
///
/// assert_eq!(repair_turkish_encoding("gÃ¼naydÄ±n"), "günaydın");
/// assert_eq!(repair_turkish_encoding("günaydın"), "günaydın");
/// ```
pub fn repair_turkish_encoding(text: &str) -> Cow<'_, str> {
    if !looks_mojibaked(text) {
        return Cow::Borrowed(text);
    }

    let mut repaired = text.to_string();
    for (broken, fixed) in MOJIBAKE_TABLE {
        if repaired.contains(broken) {
            repaired = repaired.replace(broken, fixed);
        }
    }
    Cow::Owned(repaired)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_is_borrowed() {
        let text = "Çok güzel bir gün, şimdi ığdır'a gidiyoruz";
        assert!(!looks_mojibaked(text));
        assert!(matches!(repair_turkish_encoding(text), Cow::Borrowed(_)));
    }

    #[test]
    fn test_repairs_lowercase_letters() {
        let broken = "Ã§ok gÃ¼zel, ÅŸimdi Ã¶ÄŸlen Ä±sÄ±nÄ±yor";
        assert_eq!(
            repair_turkish_encoding(broken),
            "çok güzel, şimdi öğlen ısınıyor"
        );
    }

    #[test]
    fn test_repairs_uppercase_letters() {
        assert_eq!(repair_turkish_encoding("Ã‡OK Ä°YÄ°"), "ÇOK İYİ");
        assert_eq!(repair_turkish_encoding("ÅžÄ°MDÄ°"), "ŞİMDİ");
    }

    #[test]
    fn test_repairs_latin1_control_variants() {
        assert_eq!(repair_turkish_encoding("Ä\u{9F}"), "ğ");
        assert_eq!(repair_turkish_encoding("Ã\u{96}zge"), "Özge");
    }

    #[test]
    fn test_ascii_untouched() {
        assert_eq!(repair_turkish_encoding("[01.01.23, 09:00] Alice: hi"), "[01.01.23, 09:00] Alice: hi");
    }
}
