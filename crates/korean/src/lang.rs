use crate::hangul::is_syllable;
use crate::utf8::{Unit, units};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LanguageClass {
    Hangul,
    Ascii,
    Other,
}

/// A single 한글 syllable makes the whole token `Hangul`, even if the rest is ascii.
/// An empty buffer is `Ascii`.
pub fn classify_language(bytes: &[u8]) -> LanguageClass {
    let mut has_non_ascii = false;

    for unit in units(bytes) {
        match unit {
            Unit::Char { ch, .. } if is_syllable(ch) => {
                return LanguageClass::Hangul;
            },
            Unit::Char { ch, .. } if ch.is_ascii() => {},

            // non-한글 multi-byte characters and broken bytes
            _ => {
                has_non_ascii = true;
            },
        }
    }

    if has_non_ascii {
        LanguageClass::Other
    } else {
        LanguageClass::Ascii
    }
}
