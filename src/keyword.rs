use crate::Mode;
use hanfreq_korean::{LanguageClass, classify_language};
use hanfreq_korean::rules::{
    ADJECTIVE_FINAL,
    ADJECTIVE_LOOKALIKES,
    ASCII_MIN_BYTES,
    BANNED_ENDINGS,
    FUNCTION_NOUNS,
    HANGUL_MIN_BYTES,
    PREDICATE_FINAL,
    PREDICATE_MIN_BYTES,
    PRONOUN_FORMS,
    STEM_MARGIN_BYTES,
    STEM_RESIDUES,
    STOPWORDS,
    STRONG_NOUN_SUFFIXES,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    Keyword,
    Rejected(Reason),
}

impl Verdict {
    pub fn is_keyword(&self) -> bool {
        matches!(self, Verdict::Keyword)
    }
}

/// Why a word is not a keyword. The variants are in the order the rules are applied.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Reason {
    Empty,
    WrongLanguage(LanguageClass),
    PronounForm,
    Stopword,
    TooShort,
    AllDigits,
    BannedEnding(&'static str),
    FunctionNoun,
    Predicate,
    Adjective,
    StemResidue(&'static str),
}

impl Reason {
    /// Name of the rule, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Reason::Empty => "empty",
            Reason::WrongLanguage(_) => "wrong-language",
            Reason::PronounForm => "pronoun-form",
            Reason::Stopword => "stopword",
            Reason::TooShort => "too-short",
            Reason::AllDigits => "all-digits",
            Reason::BannedEnding(_) => "banned-ending",
            Reason::FunctionNoun => "function-noun",
            Reason::Predicate => "predicate",
            Reason::Adjective => "adjective",
            Reason::StemResidue(_) => "stem-residue",
        }
    }
}

/// Runs the rule cascade on a word that's already normalized and stripped of particles.
///
/// The order of the rules matters. The stem residue rule, for example, assumes that
/// longer endings are already rejected by `BANNED_ENDINGS`.
pub fn classify(word: &str, mode: Mode) -> Verdict {
    if word.is_empty() {
        return Verdict::Rejected(Reason::Empty);
    }

    let class = classify_language(word.as_bytes());

    match (mode, class) {
        (Mode::HangulOnly, LanguageClass::Hangul)
        | (Mode::Permissive, LanguageClass::Hangul | LanguageClass::Ascii) => {},
        (_, class) => {
            return Verdict::Rejected(Reason::WrongLanguage(class));
        },
    }

    if PRONOUN_FORMS.contains(word) {
        return Verdict::Rejected(Reason::PronounForm);
    }

    if STOPWORDS.contains(word) {
        return Verdict::Rejected(Reason::Stopword);
    }

    let min_bytes = match class {
        LanguageClass::Hangul => HANGUL_MIN_BYTES,
        _ => ASCII_MIN_BYTES,
    };

    if word.len() <= min_bytes {
        return Verdict::Rejected(Reason::TooShort);
    }

    if class == LanguageClass::Ascii && word.bytes().all(|b| b.is_ascii_digit()) {
        return Verdict::Rejected(Reason::AllDigits);
    }

    if let Some(ending) = BANNED_ENDINGS.iter().find(|ending| word.ends_with(*ending)) {
        return Verdict::Rejected(Reason::BannedEnding(*ending));
    }

    if FUNCTION_NOUNS.contains(word) {
        return Verdict::Rejected(Reason::FunctionNoun);
    }

    // none of these endings can trigger the rules below
    if STRONG_NOUN_SUFFIXES.iter().any(|suffix| word.ends_with(*suffix)) {
        return Verdict::Keyword;
    }

    if word.ends_with(PREDICATE_FINAL) && word.len() > PREDICATE_MIN_BYTES {
        return Verdict::Rejected(Reason::Predicate);
    }

    if word.ends_with(ADJECTIVE_FINAL)
        && word.len() > PREDICATE_MIN_BYTES
        && !ADJECTIVE_LOOKALIKES.iter().any(|noun| word.ends_with(*noun))
    {
        return Verdict::Rejected(Reason::Adjective);
    }

    if let Some(stem) = STEM_RESIDUES.iter().find(
        |stem| word.ends_with(*stem) && word.len() > stem.len() + STEM_MARGIN_BYTES
    ) {
        return Verdict::Rejected(Reason::StemResidue(*stem));
    }

    Verdict::Keyword
}

pub fn is_keyword(word: &str, mode: Mode) -> bool {
    classify(word, mode).is_keyword()
}
