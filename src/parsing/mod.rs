//! Low-level parsing utilities.
//!
//! - [`whatsapp`] - header grammar, timestamps, classification, emoji extraction
//! - [`encoding`] - Turkish mojibake detection and repair
//!
//! Most callers want [`crate::parser::ChatParser`] instead.

pub mod encoding;
pub mod whatsapp;

// Re-export commonly used items
pub use encoding::{looks_mojibaked, repair_turkish_encoding};
pub use whatsapp::{
    HeaderLine, build_timestamp, classify, extract_emojis, has_timestamp_prefix, parse_header,
};
