/// Every syllable in U+AC00..=U+D7A3 is 3 bytes long in utf-8.
pub const HANGUL_BYTES: usize = 3;

const FIRST_SYLLABLE: u32 = 0xAC00;
const 중성_COUNT: u32 = 21;
const 종성_COUNT: u32 = 28;

/// Index of ㄹ in the 종성 table, as stored in `한글::종성`.
pub const 종성_리을: u32 = 7;

/// A decomposed syllable. Each field is an index into the standard
/// 초성 (19), 중성 (21) and 종성 (27) tables.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct 한글 {
    pub 초성: u32,
    pub 중성: u32,
    pub 종성: Option<u32>,
}

impl 한글 {
    pub fn from_char(c: char) -> Option<한글> {
        if !is_syllable(c) {
            return None;
        }

        let c = c as u32 - FIRST_SYLLABLE;
        let 초성 = c / (중성_COUNT * 종성_COUNT);
        let 중성 = c % (중성_COUNT * 종성_COUNT) / 종성_COUNT;
        let 종성 = c % 종성_COUNT;

        Some(한글 {
            초성,
            중성,
            종성: if 종성 == 0 { None } else { Some(종성 - 1) },
        })
    }

    pub fn to_char(&self) -> char {
        let c = FIRST_SYLLABLE
            + self.초성 * 중성_COUNT * 종성_COUNT
            + self.중성 * 종성_COUNT
            + self.종성.map(|j| j + 1).unwrap_or(0);

        // every (초성, 중성, 종성) combination in range maps to an assigned syllable
        char::from_u32(c).unwrap_or('\u{FFFD}')
    }
}

pub fn is_syllable(c: char) -> bool {
    matches!(c, '가'..='힣')
}

/// `None` if `c` is not a 한글 syllable.
pub fn has_final_consonant(c: char) -> Option<bool> {
    한글::from_char(c).map(|h| h.종성.is_some())
}
