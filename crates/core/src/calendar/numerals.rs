//! Digit transliteration between scripts
//!
//! The map is digit-for-digit; every other character passes through.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Bengali,
    Devanagari,
    ArabicIndic,
}

impl Script {
    /// Glyph for digit zero; the other nine follow contiguously
    fn zero(self) -> char {
        match self {
            Script::Latin => '0',
            Script::Bengali => '\u{09E6}',
            Script::Devanagari => '\u{0966}',
            Script::ArabicIndic => '\u{0660}',
        }
    }
}

pub fn transliterate(input: &str, script: Script) -> String {
    let zero = script.zero() as u32;
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => char::from_u32(zero + d).unwrap_or(c),
            _ => c,
        })
        .collect()
}

pub fn to_native(value: u64, script: Script) -> String {
    transliterate(&value.to_string(), script)
}
