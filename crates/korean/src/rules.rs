use crate::josa::{Attach, Josa};
use lazy_static::lazy_static;
use std::collections::HashSet;

/// A single-syllable particle is stripped only from words longer than this (in bytes).
pub const SHORT_PARTICLE_MIN_WORD_BYTES: usize = 6;

/// Words at or below these lengths (in bytes) are rejected.
pub const HANGUL_MIN_BYTES: usize = 3;
pub const ASCII_MIN_BYTES: usize = 2;

/// A word that ends with `PREDICATE_FINAL` is a predicate if it's longer than this (in bytes).
pub const PREDICATE_MIN_BYTES: usize = 3;

/// A word that ends with a stem residue is rejected if it's longer than
/// `stem.len() + STEM_MARGIN_BYTES`.
pub const STEM_MARGIN_BYTES: usize = 3;

pub const PREDICATE_FINAL: &str = "다";

/// 다양한, 중요한: a word that ends with this is an adjective if it's longer
/// than `PREDICATE_MIN_BYTES`, unless it ends with one of `ADJECTIVE_LOOKALIKES`.
pub const ADJECTIVE_FINAL: &str = "한";

lazy_static! {
    // The order matters: the first candidate that matches is stripped.
    // A longer particle has to come before its suffixes (에게서는 before 는).
    pub static ref JOSA: Vec<Josa> = vec![
        Josa::new("에게서는", Attach::Any),
        Josa::new("으로써는", Attach::AfterFinal),
        Josa::new("으로서는", Attach::AfterFinal),
        Josa::new("에서부터", Attach::Any),

        Josa::new("에게서", Attach::Any),
        Josa::new("에게는", Attach::Any),
        Josa::new("에게도", Attach::Any),
        Josa::new("에서는", Attach::Any),
        Josa::new("에서도", Attach::Any),
        Josa::new("에서의", Attach::Any),
        Josa::new("으로써", Attach::AfterFinal),
        Josa::new("으로서", Attach::AfterFinal),
        Josa::new("으로는", Attach::AfterFinal),
        Josa::new("으로도", Attach::AfterFinal),
        Josa::new("으로의", Attach::AfterFinal),
        Josa::new("이라고", Attach::AfterFinal),
        Josa::new("이라는", Attach::AfterFinal),
        Josa::new("로써는", Attach::AfterVowelOrRieul),
        Josa::new("로서는", Attach::AfterVowelOrRieul),
        Josa::new("까지는", Attach::Any),
        Josa::new("부터는", Attach::Any),
        Josa::new("에게", Attach::Any),
        Josa::new("에서", Attach::Any),
        Josa::new("에는", Attach::Any),
        Josa::new("에도", Attach::Any),
        Josa::new("에의", Attach::Any),
        Josa::new("으로", Attach::AfterFinal),
        Josa::new("로써", Attach::AfterVowelOrRieul),
        Josa::new("로서", Attach::AfterVowelOrRieul),
        Josa::new("로는", Attach::AfterVowelOrRieul),
        Josa::new("로도", Attach::AfterVowelOrRieul),
        Josa::new("까지", Attach::Any),
        Josa::new("부터", Attach::Any),
        Josa::new("마다", Attach::Any),
        Josa::new("처럼", Attach::Any),
        Josa::new("보다", Attach::Any),
        Josa::new("한테", Attach::Any),
        Josa::new("께서", Attach::Any),
        Josa::new("이랑", Attach::AfterFinal),
        Josa::new("이나", Attach::AfterFinal),
        Josa::new("라고", Attach::AfterVowel),
        Josa::new("라는", Attach::AfterVowel),
        Josa::new("과는", Attach::AfterFinal),
        Josa::new("와는", Attach::AfterVowel),
        Josa::new("과의", Attach::AfterFinal),
        Josa::new("와의", Attach::AfterVowel),
        Josa::new("하고", Attach::Any),

        Josa::new("은", Attach::AfterFinal),
        Josa::new("는", Attach::AfterVowel),
        Josa::new("이", Attach::AfterFinal),
        Josa::new("가", Attach::AfterVowel),
        Josa::new("을", Attach::AfterFinal),
        Josa::new("를", Attach::AfterVowel),
        Josa::new("과", Attach::AfterFinal),
        Josa::new("와", Attach::AfterVowel),
        Josa::new("의", Attach::Any),
        Josa::new("에", Attach::Any),
        Josa::new("도", Attach::Any),
        Josa::new("만", Attach::Any),
        Josa::new("로", Attach::AfterVowelOrRieul),
        Josa::new("랑", Attach::AfterVowel),
        Josa::new("께", Attach::Any),
    ];

    // Nouns whose last syllables look like a particle. A candidate that's a suffix of
    // one of these is not stripped from a word that ends with it (민주주의 keeps its 의).
    pub static ref JOSA_LOOKALIKES: Vec<&'static str> = vec![
        "주의", "회의", "논의", "합의", "협의", "정의", "동의", "의의", "결의", "건의",
        "고양이", "원숭이", "어린이",
        "반도", "제주도", "경기도", "강원도", "전라도", "경상도", "충청도",
        "고속도로", "대학로", "을지로",
    ];

    // nouns that end with `ADJECTIVE_FINAL`
    pub static ref ADJECTIVE_LOOKALIKES: Vec<&'static str> = vec![
        "제한", "권한", "기한", "시한", "상한", "하한", "극한", "무한", "유한",
        "북한", "남한", "방한", "내한", "주한", "원한",
    ];

    // pronouns and demonstratives, with or without a particle that's too short to be stripped
    pub static ref PRONOUN_FORMS: HashSet<&'static str> = [
        "나는", "나도", "나를", "나의", "나만", "내가",
        "너는", "너도", "너를", "너의", "너만", "네가",
        "저는", "저도", "저를", "저의", "제가",
        "그는", "그도", "그를", "그의", "그가",
        "우리", "저희", "너희", "그녀", "그들", "당신", "자신", "자기",
        "이것", "그것", "저것", "이거", "그거", "저거",
        "여기", "거기", "저기", "이곳", "그곳", "저곳",
        "이분", "그분", "저분", "이들", "누구", "무엇", "어디", "언제",
    ].into_iter().collect();

    pub static ref STOPWORDS: HashSet<&'static str> = [
        // 조사 that show up as separate tokens
        "은", "는", "이", "가", "을", "를", "에", "에서", "에게", "에게서", "으로", "으로써",
        "부터", "까지", "와", "과", "도", "만", "의",

        // 접속어, 부사
        "및", "등", "또", "또는", "또한", "혹은", "그리고", "그러나", "그런데", "그래서",
        "그래", "그래도", "따라서", "그러므로", "그러므", "그러면", "하지만", "하지", "게다가",
        "다만", "즉", "곧", "때문에", "위해", "위해서", "통해", "통해서", "대해", "대해서",
        "매우", "아주", "너무", "가장", "다시", "이미", "아직", "바로", "함께", "모두",

        // 지시어
        "이런", "그런", "저런", "이러한", "그러한", "저러한", "어떤", "모든", "각", "그", "저",

        // english
        "the", "a", "an", "and", "or", "but", "to", "of", "in", "on", "for", "with", "as", "at", "by",
        "is", "are", "was", "were", "be", "been", "being",
        "this", "that", "these", "those",
        "it", "its", "i", "you", "he", "she", "we", "they", "them", "my", "your", "our", "their",
    ].into_iter().collect();

    // The order is the order they're checked in. It doesn't change the verdict,
    // but it decides which ending is reported.
    pub static ref BANNED_ENDINGS: Vec<&'static str> = vec![
        // 서술형
        "하였다", "되었다", "하였고", "하면서", "되면서", "했다", "한다", "된다", "있다", "없다",
        "같다", "이다", "였다", "었다", "았다", "겠다",

        // 연결형
        "위하여", "의하여", "대하여", "관하여", "통하여", "하여", "해서", "하며", "되며", "이며",
        "하게", "하지", "되지", "않고", "이고", "다고", "다며",

        // 관형형
        "다는", "관련한", "관련된", "스러운", "하는", "되는", "있는", "없는", "않는", "않은", "했던", "하던",
        "되던", "관한", "대한", "위한", "의한", "통한", "인한", "따른", "같은", "적인", "로운",
    ];

    // nouns that are too vague to be keywords
    pub static ref FUNCTION_NOUNS: HashSet<&'static str> = [
        "경우", "때문", "정도", "자체", "부분", "이후", "이전", "동안", "사이", "가운데", "다음",
        "이상", "이하", "하나", "여러", "각각", "대부분", "시간", "사실", "내용", "방법", "관련",
        "생각", "가지", "이번", "지난", "그때", "이때",
        "thing", "things", "case", "cases", "time", "times", "way", "ways",
    ].into_iter().collect();

    // Words with these endings are nouns. None of them overlaps with `PREDICATE_FINAL`
    // or `STEM_RESIDUES`.
    pub static ref STRONG_NOUN_SUFFIXES: Vec<&'static str> = vec![
        "책", "성", "화", "론", "률", "율", "권", "법", "학", "력", "감", "자", "원", "체", "품",
    ];

    // verb and adjective stems that are left after an ending is stripped (사용하, 발전시키)
    pub static ref STEM_RESIDUES: Vec<&'static str> = vec![
        "시키", "스럽", "스러", "당하", "하", "되",
    ];
}
