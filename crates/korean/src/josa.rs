use crate::hangul::{HANGUL_BYTES, 한글, 종성_리을};
use crate::lang::{LanguageClass, classify_language};
use crate::rules::{JOSA, JOSA_LOOKALIKES, SHORT_PARTICLE_MIN_WORD_BYTES};

/// What a particle has to follow.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Attach {
    /// a syllable with 종성 (책은, 책이, 책을)
    AfterFinal,

    /// a syllable without 종성 (나무는, 나무가, 나무를)
    AfterVowel,

    /// a syllable without 종성, or with ㄹ (바다로, 서울로)
    AfterVowelOrRieul,

    Any,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Josa {
    pub suffix: &'static str,
    pub attach: Attach,
}

impl Josa {
    pub const fn new(suffix: &'static str, attach: Attach) -> Self {
        Josa { suffix, attach }
    }

    /// Returns the residual if `self` can be stripped from `word`.
    pub fn strip<'a>(&self, word: &'a str) -> Option<&'a str> {
        let residual = word.strip_suffix(self.suffix)?;

        if residual.is_empty() {
            return None;
        }

        if self.suffix.len() <= HANGUL_BYTES && word.len() <= SHORT_PARTICLE_MIN_WORD_BYTES {
            return None;
        }

        if JOSA_LOOKALIKES.iter().any(
            |noun| word.ends_with(noun) && noun.ends_with(self.suffix)
        ) {
            return None;
        }

        match self.attach {
            Attach::Any => Some(residual),
            attach => {
                let last = 한글::from_char(residual.chars().next_back()?)?;

                match (attach, last.종성) {
                    (Attach::AfterFinal, Some(_))
                    | (Attach::AfterVowel, None)
                    | (Attach::AfterVowelOrRieul, None) => Some(residual),
                    (Attach::AfterVowelOrRieul, Some(종성)) if 종성 == 종성_리을 => Some(residual),
                    _ => None,
                }
            },
        }
    }
}

/// Removes trailing particles from a 한글 word. Non-한글 words are returned as they are.
///
/// Each successful strip makes the word strictly shorter, so this always terminates.
pub fn strip_josa(word: &str) -> &str {
    if classify_language(word.as_bytes()) != LanguageClass::Hangul {
        return word;
    }

    let mut curr = word;

    'strip: loop {
        for josa in JOSA.iter() {
            if let Some(residual) = josa.strip(curr) {
                curr = residual;
                continue 'strip;
            }
        }

        return curr;
    }
}
