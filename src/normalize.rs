use crate::Mode;
use hanfreq_korean::{LanguageClass, Unit, is_syllable, units};

/// Keeps the characters that can be a part of a keyword. An empty result means
/// that the token is dropped.
///
/// - `Mode::HangulOnly`: a token that's not `LanguageClass::Hangul` is dropped as a whole.
///   Otherwise only 한글 syllables are kept.
/// - `Mode::Permissive`: ascii alphanumerics (lowercased) and 한글 syllables are kept,
///   regardless of `class`.
///
/// Invalid utf-8 bytes are always dropped.
pub fn normalize(token: &[u8], class: LanguageClass, mode: Mode) -> String {
    match mode {
        Mode::HangulOnly => {
            if class != LanguageClass::Hangul {
                return String::new();
            }

            units(token).filter_map(
                |unit| match unit {
                    Unit::Char { ch, .. } if is_syllable(ch) => Some(ch),
                    _ => None,
                }
            ).collect()
        },
        Mode::Permissive => units(token).filter_map(
            |unit| match unit {
                Unit::Char { ch, .. } if ch.is_ascii_alphanumeric() => Some(ch.to_ascii_lowercase()),
                Unit::Char { ch, .. } if is_syllable(ch) => Some(ch),
                _ => None,
            }
        ).collect(),
    }
}
