//! Static lexicon tables.
//!
//! Pure data: Turkish (and a little English) sentiment words with polarity and
//! emotion category, negation and intensity markers, and the word lists used by
//! the relationship analyzer. Exact-match tables are compile-time `phf` maps;
//! lists that are scanned by prefix or substring are plain slices.

use phf::{phf_map, phf_set};
use serde::{Deserialize, Serialize};

/// Emotion a lexicon entry contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Joy,
    Romantic,
    Humor,
    Gratitude,
    Surprise,
    Sadness,
    Anger,
    Fear,
}

impl std::fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EmotionCategory::Joy => "joy",
            EmotionCategory::Romantic => "romantic",
            EmotionCategory::Humor => "humor",
            EmotionCategory::Gratitude => "gratitude",
            EmotionCategory::Surprise => "surprise",
            EmotionCategory::Sadness => "sadness",
            EmotionCategory::Anger => "anger",
            EmotionCategory::Fear => "fear",
        };
        f.write_str(name)
    }
}

/// Polarity and optional emotion of a word or phrase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    pub score: f64,
    pub category: Option<EmotionCategory>,
}

const fn entry(score: f64, category: Option<EmotionCategory>) -> LexiconEntry {
    LexiconEntry { score, category }
}

use EmotionCategory::{Anger, Fear, Gratitude, Humor, Joy, Romantic, Sadness, Surprise};

static SENTIMENT_WORDS: phf::Map<&'static str, LexiconEntry> = phf_map! {
    // joy
    "mutlu" => entry(2.0, Some(Joy)),
    "mutluyum" => entry(2.0, Some(Joy)),
    "mutluluk" => entry(2.0, Some(Joy)),
    "sevindim" => entry(2.0, Some(Joy)),
    "sevinçliyim" => entry(2.0, Some(Joy)),
    "harika" => entry(3.0, Some(Joy)),
    "mükemmel" => entry(3.0, Some(Joy)),
    "muhteşem" => entry(3.0, Some(Joy)),
    "şahane" => entry(3.0, Some(Joy)),
    "süper" => entry(2.0, Some(Joy)),
    "güzel" => entry(2.0, Some(Joy)),
    "efsane" => entry(2.0, Some(Joy)),
    "bayıldım" => entry(3.0, Some(Joy)),
    "tebrikler" => entry(2.0, Some(Joy)),
    "kutlarım" => entry(2.0, Some(Joy)),
    "yaşasın" => entry(2.0, Some(Joy)),
    "iyi" => entry(1.0, None),
    "hoş" => entry(1.0, None),
    "keyifli" => entry(2.0, Some(Joy)),
    "happy" => entry(2.0, Some(Joy)),
    "great" => entry(2.0, Some(Joy)),
    "good" => entry(1.0, None),
    "😊" => entry(1.0, Some(Joy)),
    "😁" => entry(1.0, Some(Joy)),
    "🥳" => entry(2.0, Some(Joy)),
    // romantic
    "canım" => entry(2.0, Some(Romantic)),
    "aşkım" => entry(3.0, Some(Romantic)),
    "sevgilim" => entry(3.0, Some(Romantic)),
    "hayatım" => entry(2.0, Some(Romantic)),
    "tatlım" => entry(2.0, Some(Romantic)),
    "bebeğim" => entry(2.0, Some(Romantic)),
    "seviyorum" => entry(3.0, Some(Romantic)),
    "özledim" => entry(2.0, Some(Romantic)),
    "aşk" => entry(2.0, Some(Romantic)),
    "öpüyorum" => entry(2.0, Some(Romantic)),
    "love" => entry(2.0, Some(Romantic)),
    "❤️" => entry(2.0, Some(Romantic)),
    "❤" => entry(2.0, Some(Romantic)),
    "😍" => entry(2.0, Some(Romantic)),
    "🥰" => entry(2.0, Some(Romantic)),
    "😘" => entry(2.0, Some(Romantic)),
    "💕" => entry(2.0, Some(Romantic)),
    // humor
    "haha" => entry(1.0, Some(Humor)),
    "hahaha" => entry(2.0, Some(Humor)),
    "hahahaha" => entry(2.0, Some(Humor)),
    "hehe" => entry(1.0, Some(Humor)),
    "sjsj" => entry(1.0, Some(Humor)),
    "sjsjsj" => entry(2.0, Some(Humor)),
    "asdfgh" => entry(1.0, Some(Humor)),
    "komik" => entry(1.0, Some(Humor)),
    "güldüm" => entry(2.0, Some(Humor)),
    "lol" => entry(1.0, Some(Humor)),
    "😂" => entry(2.0, Some(Humor)),
    "🤣" => entry(2.0, Some(Humor)),
    // gratitude
    "teşekkürler" => entry(2.0, Some(Gratitude)),
    "teşekkür" => entry(2.0, Some(Gratitude)),
    "sağol" => entry(1.0, Some(Gratitude)),
    "eyvallah" => entry(1.0, Some(Gratitude)),
    "minnettarım" => entry(2.0, Some(Gratitude)),
    "thanks" => entry(1.0, Some(Gratitude)),
    "🙏" => entry(1.0, Some(Gratitude)),
    // surprise
    "inanılmaz" => entry(2.0, Some(Surprise)),
    "vay" => entry(1.0, Some(Surprise)),
    "oha" => entry(1.0, Some(Surprise)),
    "şaşırdım" => entry(1.0, Some(Surprise)),
    "😮" => entry(1.0, Some(Surprise)),
    "😱" => entry(-1.0, Some(Surprise)),
    // sadness
    "üzgün" => entry(-2.0, Some(Sadness)),
    "üzgünüm" => entry(-2.0, Some(Sadness)),
    "üzüldüm" => entry(-2.0, Some(Sadness)),
    "üzücü" => entry(-2.0, Some(Sadness)),
    "mutsuz" => entry(-2.0, Some(Sadness)),
    "mutsuzum" => entry(-2.0, Some(Sadness)),
    "ağlıyorum" => entry(-2.0, Some(Sadness)),
    "yalnız" => entry(-1.0, Some(Sadness)),
    "yorgunum" => entry(-1.0, Some(Sadness)),
    "maalesef" => entry(-1.0, Some(Sadness)),
    "hasta" => entry(-1.0, Some(Sadness)),
    "sad" => entry(-2.0, Some(Sadness)),
    "😢" => entry(-2.0, Some(Sadness)),
    "😭" => entry(-2.0, Some(Sadness)),
    "💔" => entry(-3.0, Some(Sadness)),
    // anger
    "kötü" => entry(-2.0, None),
    "berbat" => entry(-3.0, Some(Anger)),
    "rezalet" => entry(-3.0, Some(Anger)),
    "sinir" => entry(-2.0, Some(Anger)),
    "sinirliyim" => entry(-2.0, Some(Anger)),
    "kızgınım" => entry(-2.0, Some(Anger)),
    "nefret" => entry(-3.0, Some(Anger)),
    "bıktım" => entry(-2.0, Some(Anger)),
    "yeter" => entry(-1.0, Some(Anger)),
    "saçma" => entry(-1.0, Some(Anger)),
    "hate" => entry(-3.0, Some(Anger)),
    "😡" => entry(-2.0, Some(Anger)),
    "😠" => entry(-2.0, Some(Anger)),
    // fear
    "korkuyorum" => entry(-2.0, Some(Fear)),
    "korktum" => entry(-2.0, Some(Fear)),
    "endişeliyim" => entry(-2.0, Some(Fear)),
    "endişe" => entry(-1.0, Some(Fear)),
    "stres" => entry(-1.0, Some(Fear)),
    "gerginim" => entry(-1.0, Some(Fear)),
    // neutral-category negatives
    "sorun" => entry(-1.0, None),
    "problem" => entry(-1.0, None),
};

static SENTIMENT_PHRASES: phf::Map<&'static str, LexiconEntry> = phf_map! {
    "seni seviyorum" => entry(3.0, Some(Romantic)),
    "seni özledim" => entry(3.0, Some(Romantic)),
    "aşık oldum" => entry(3.0, Some(Romantic)),
    "iyi ki" => entry(2.0, Some(Joy)),
    "sağ ol" => entry(1.0, Some(Gratitude)),
    "vay be" => entry(1.0, Some(Surprise)),
    "canım sıkıldı" => entry(-3.0, Some(Sadness)),
    "canım sıkılıyor" => entry(-3.0, Some(Sadness)),
    "kalbim kırıldı" => entry(-3.0, Some(Sadness)),
    "kafayı yedim" => entry(-2.0, Some(Anger)),
    "allah kahretsin" => entry(-3.0, Some(Anger)),
    "çok korktum" => entry(-3.0, Some(Fear)),
};

/// Negators that flip a match when they appear in the three preceding tokens.
static NEGATIONS: phf::Set<&'static str> = phf_set! {
    "değil", "hiç", "asla", "yok", "olmaz", "hiçbir", "not", "never", "no",
};

/// Turkish post-positive negators that flip the match right before them.
static POSTFIX_NEGATIONS: phf::Set<&'static str> = phf_set! {
    "değil", "değilim", "değilsin", "değiliz", "değilsiniz", "değiller",
    "değildi", "değildim", "yok", "olmaz",
};

/// Amplifiers (> 1) and diminishers (< 1).
static MODIFIERS: phf::Map<&'static str, f64> = phf_map! {
    "çok" => 1.5,
    "aşırı" => 1.8,
    "acayip" => 1.6,
    "gerçekten" => 1.4,
    "cidden" => 1.4,
    "fazla" => 1.3,
    "baya" => 1.3,
    "bayağı" => 1.3,
    "epey" => 1.3,
    "en" => 1.3,
    "very" => 1.5,
    "so" => 1.3,
    "biraz" => 0.5,
    "azıcık" => 0.5,
    "az" => 0.6,
    "hafif" => 0.6,
    "slightly" => 0.5,
};

/// Case-sensitive markers that make a message feel louder.
pub static INTENSITY_MARKERS: &[&str] = &[
    "!!!",
    "???",
    "ASLA",
    "ÇOK",
    "HİÇ",
    "KESİNLİKLE",
    "MUTLAKA",
    "HEMEN",
    "ACİL",
    "NEFRET",
    "BAYILDIM",
];

static STOP_WORDS: phf::Set<&'static str> = phf_set! {
    "ve", "bir", "bu", "da", "de", "için", "ile", "ne", "ama", "çok", "daha", "gibi",
    "mi", "mı", "mu", "mü", "ben", "sen", "biz", "siz", "onlar", "şu", "var", "yok",
    "olarak", "kadar", "sonra", "diye", "her", "ki", "ya", "evet", "hayır", "tamam",
    "şey", "benim", "senin", "bunu", "şimdi", "nasıl", "neden", "niye", "oldu", "olur",
    "değil", "bana", "sana", "ona", "bence", "yani", "işte", "hani", "hiç", "ise",
    "veya", "çünkü", "bile", "artık", "hem", "tüm", "kendi", "nerede", "burada",
    "orada", "bunlar", "şöyle", "böyle", "onu", "onun", "bizim", "sizin", "olan",
    "olsun", "misin", "mısın", "musun", "müsün", "miyim", "mıyım", "değilim", "abi",
    "lan", "falan", "filan", "aynen", "tabi", "tabii", "belki", "zaten", "hadi",
    "the", "and", "you", "that", "this", "with", "for", "are", "was",
    "medya", "dahil", "edilmedi", "omitted", "media",
};

// ============================================================================
// Relationship word lists (prefix matched against lowercase tokens)
// ============================================================================

pub static ROMANTIC_WORDS: &[&str] = &[
    "aşkım", "canım", "sevgilim", "seviyorum", "özledim", "tatlım", "bebeğim", "hayatım",
    "kalbim", "öpüyorum", "sarılmak", "romantik", "love",
];

pub static APOLOGY_WORDS: &[&str] = &[
    "özür", "pardon", "affet", "kusura", "üzgünüm", "sorry", "bağışla",
];

pub static ARGUMENT_WORDS: &[&str] = &[
    "kavga", "sinir", "kızgın", "saçma", "yeter", "bıktım", "tartış", "haksız", "inat",
    "boşver", "umrumda",
];

pub static HUMOR_WORDS: &[&str] = &[
    "haha", "hehe", "sjsj", "jsjs", "asdf", "lol", "komik", "espri", "güldüm", "gülmekten",
    "kahkaha", "kopuyorum", "öldüm",
];

pub static FOOD_WORDS: &[&str] = &[
    "yemek", "pizza", "burger", "döner", "kebap", "lahmacun", "kahve", "acıktım", "mantı",
    "makarna", "çorba", "börek", "pide", "dondurma", "çikolata", "sushi", "kahvaltı",
    "köfte", "baklava",
];

/// Excuse categories and the phrases that count toward them, in priority order.
pub static EXCUSE_GROUPS: &[(&str, &[&str])] = &[
    ("traffic", &["trafik", "yol kapalı", "otobüsü kaçırdım"]),
    ("meeting", &["toplantı", "meeting"]),
    ("oversleeping", &["uyuyakaldım", "uyuya kalmışım", "alarm çalmadı"]),
    ("phone_dead", &["şarjım bitti", "şarj bitti", "telefonum kapandı", "şarjım yok"]),
    ("was_out", &["dışarıdaydım", "dışardaydım", "görmedim", "duymadım"]),
    ("busy", &["meşguldüm", "yoğundum", "işim vardı"]),
];

static HEART_EMOJIS: phf::Set<&'static str> = phf_set! {
    "❤", "❤️", "💕", "💖", "💗", "💓", "💞", "💘", "💝", "😍", "🥰", "😘", "💋",
    "🧡", "💛", "💚", "💙", "💜", "🖤", "🤍", "🤎",
};

static LAUGH_EMOJIS: phf::Set<&'static str> = phf_set! {
    "😂", "🤣", "😆", "😹", "😄", "😁", "😅",
};

static EMOJI_PERSONALITIES: phf::Map<&'static str, &'static str> = phf_map! {
    "😂" => "laugh machine",
    "🤣" => "laugh machine",
    "❤" => "romantic soul",
    "😍" => "lovestruck",
    "🥰" => "lovestruck",
    "😘" => "kiss thrower",
    "😭" => "drama queen",
    "🙄" => "eye roller",
    "👍" => "approver",
    "🔥" => "hype beast",
    "😊" => "sweetheart",
    "😅" => "nervous laugher",
    "🙏" => "grateful one",
    "😡" => "hothead",
    "💀" => "dead inside",
    "🤔" => "deep thinker",
};

// ============================================================================
// Lookups
// ============================================================================

/// Looks up a single lowercase token.
pub fn sentiment_word(token: &str) -> Option<&'static LexiconEntry> {
    SENTIMENT_WORDS.get(token)
}

/// Looks up a lowercase two-word phrase (`"seni seviyorum"`).
pub fn sentiment_phrase(bigram: &str) -> Option<&'static LexiconEntry> {
    SENTIMENT_PHRASES.get(bigram)
}

pub fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(token)
}

pub fn is_postfix_negation(token: &str) -> bool {
    POSTFIX_NEGATIONS.contains(token)
}

/// Multiplier for an intensity modifier token.
pub fn modifier(token: &str) -> Option<f64> {
    MODIFIERS.get(token).copied()
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

pub fn is_heart_emoji(emoji: &str) -> bool {
    HEART_EMOJIS.contains(emoji) || emoji.contains('❤')
}

pub fn is_laugh_emoji(emoji: &str) -> bool {
    LAUGH_EMOJIS.contains(emoji)
}

/// Personality label for a favourite emoji, ignoring presentation selectors.
pub fn emoji_personality(emoji: &str) -> Option<&'static str> {
    let base = emoji.trim_end_matches('\u{FE0F}');
    EMOJI_PERSONALITIES.get(base).copied()
}

/// Returns `true` if any list entry is a prefix of `token`.
pub fn matches_prefix(list: &[&str], token: &str) -> bool {
    list.iter().any(|word| token.starts_with(word))
}
