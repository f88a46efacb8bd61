/*
rules

- A token is 한글 if it has at least one syllable in U+AC00..=U+D7A3, even if it has other characters.
- A token without any 한글 is ascii if every byte is below 0x80, otherwise it's other.
- Particles are removed from the end of a 한글 word, one at a time.
  1. Candidates are checked in the order they're written in `rules::JOSA`. The first match wins.
  2. After a successful strip, it restarts from the first candidate.
  3. A candidate never strips the entire word.
  4. A single-syllable candidate requires the word to have at least 3 syllables, so that
     2-syllable nouns like 사과 and 의도 survive.
  5. 은/이/을/과/으로 only attach to a syllable with 종성, 는/가/를/와 only to one without.
     로 (and 로써, 로서...) attaches to a syllable without 종성 or with ㄹ.
  6. Nouns in `rules::JOSA_LOOKALIKES` (민주주의, 한반도) keep their last syllables.
- Invalid utf-8 bytes are never part of a word. They're skipped one byte at a time.
*/

mod hangul;
mod josa;
mod lang;
pub mod rules;
mod utf8;


pub use hangul::{
    HANGUL_BYTES,
    has_final_consonant,
    종성_리을,
    is_syllable,
    한글,
};
pub use josa::{Attach, Josa, strip_josa};
pub use lang::{LanguageClass, classify_language};
pub use utf8::{Unit, units};
