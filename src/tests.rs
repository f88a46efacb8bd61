use crate::{
    Config,
    Error,
    FrequencyRecord,
    FrequencyTable,
    LanguageClass,
    Mode,
    Reason,
    Verdict,
    analyze,
    analyze_bytes,
    classify,
    extract_keyword,
    normalize,
    render_records,
    set_log_file_path,
    tokenize,
    trim_punct,
};
use std::collections::HashSet;

fn record(word: &str, count: usize) -> FrequencyRecord {
    FrequencyRecord {
        word: word.to_string(),
        count,
    }
}

#[test]
fn analyze_scenarios() {
    let samples = [
        ("나는 학교에 간다 학교", Mode::HangulOnly, vec![record("학교", 2)]),
        ("", Mode::HangulOnly, vec![]),
        ("", Mode::Permissive, vec![]),
        ("a bb ccc 123", Mode::Permissive, vec![record("ccc", 1)]),
        ("... !!! ???", Mode::HangulOnly, vec![]),
        ("... !!! ???", Mode::Permissive, vec![]),
        ("정책으로써는", Mode::HangulOnly, vec![record("정책", 1)]),
        ("AI기술을 배운다", Mode::HangulOnly, vec![record("기술", 1)]),
        ("AI기술을 배운다", Mode::Permissive, vec![record("ai기술", 1)]),
        ("Rust is FAST, rust is safe.", Mode::HangulOnly, vec![]),
        ("Rust is FAST, rust is safe.", Mode::Permissive, vec![record("rust", 2), record("fast", 1), record("safe", 1)]),
        ("\"학교\"에서 (학교)", Mode::HangulOnly, vec![record("학교", 2)]),
    ];

    for (text, mode, answer) in samples.into_iter() {
        assert_eq!(analyze(text, mode), answer, "text: {text:?}, mode: {mode}");
    }
}

#[test]
fn ties_keep_first_occurrence_order() {
    assert_eq!(
        analyze("경제 정치 경제 사회 정치 문화", Mode::HangulOnly),
        vec![
            record("경제", 2),
            record("정치", 2),
            record("사회", 1),
            record("문화", 1),
        ],
    );

    assert_eq!(
        analyze("문화 사회 정치 경제 정치 경제", Mode::HangulOnly),
        vec![
            record("정치", 2),
            record("경제", 2),
            record("문화", 1),
            record("사회", 1),
        ],
    );
}

#[test]
fn result_properties() {
    let text = "
        정부는 새로운 경제 정책을 발표했다. 이 정책은 경제 성장과 고용을 위한 것이다.
        경제 전문가들은 정책의 효과에 대해 다양한 의견을 내놓았다. 그러나 정부는
        정책으로써는 충분하다고 말했다. 경제, 정책, 고용! 그리고 또 경제.
        The policy is about the economy and the economy is about people.
    ";

    for mode in [Mode::HangulOnly, Mode::Permissive] {
        let result = analyze(text, mode);

        // every word appears once
        let words = result.iter().map(|record| record.word.clone()).collect::<HashSet<_>>();
        assert_eq!(words.len(), result.len());

        // sorted by count
        for pair in result.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }

        assert!(result.iter().all(|record| record.count > 0));

        // no hidden state
        assert_eq!(analyze(text, mode), result);
    }

    let result = analyze(text, Mode::HangulOnly);
    assert!(result.iter().all(|record| record.word != "다양한"));
    assert_eq!(result[0], record("경제", 5));
    assert_eq!(result[1], record("정책", 5));
    assert!(result.iter().all(|record| record.word != "economy"));

    let result = analyze(text, Mode::Permissive);
    assert!(result.contains(&record("economy", 2)));
    assert!(result.iter().all(|record| record.word != "the" && record.word != "is"));
}

#[test]
fn adjectives_are_not_keywords() {
    assert_eq!(
        analyze("다양한 의견 중요한 문제 필요한 조치 간단한 방법", Mode::HangulOnly),
        vec![record("의견", 1), record("문제", 1), record("조치", 1)],
    );

    // nouns that end with 한
    assert_eq!(
        analyze("권한을 제한하다 제한을 두다 기한", Mode::HangulOnly),
        vec![record("권한", 1), record("제한", 1), record("기한", 1)],
    );
}

#[test]
fn nouns_ending_with_ro() {
    assert_eq!(
        analyze("고속도로 대학로 서울로 도로 고속도로에서", Mode::HangulOnly),
        vec![record("고속도로", 2), record("대학로", 1), record("서울", 1), record("도로", 1)],
    );
}

#[test]
fn stopwords_never_show_up() {
    let text = "그리고 그리고 그리고 경우 경우 경우 때문에 때문에 그러나 the the the and and";

    assert_eq!(analyze(text, Mode::HangulOnly), vec![]);
    assert_eq!(analyze(text, Mode::Permissive), vec![]);
    assert_eq!(analyze(&format!("{text} ").repeat(100), Mode::Permissive), vec![]);
}

#[test]
fn malformed_utf8() {
    // broken bytes, a truncated '가', and a broken byte inside a 한글 token
    let text = b"\xff\xfe \xea\xb0 \xed\x95\x99\xea\xb5\x90\xff\xea\xb0\x80 \xed\x95\x99\xea\xb5\x90 \xea";

    assert_eq!(analyze_bytes(text, Mode::HangulOnly), vec![record("학교", 2)]);
    assert_eq!(analyze_bytes(text, Mode::Permissive), vec![record("학교", 2)]);
    assert_eq!(extract_keyword(b"\xea\xb0", Mode::Permissive), None);
}

#[test]
fn tokenize_and_trim() {
    let tokens = tokenize(b"  a\tbb\n\nccc\r\n ").collect::<Vec<_>>();
    assert_eq!(tokens, vec![&b"a"[..], &b"bb"[..], &b"ccc"[..]]);

    assert_eq!(tokenize(b"").count(), 0);
    assert_eq!(tokenize(b" \t\r\n").count(), 0);

    // U+3000 is not a separator
    assert_eq!(tokenize("학교\u{3000}가방".as_bytes()).count(), 1);

    let samples = [
        ("\"hello,\"", "hello"),
        ("(a.b)", "a.b"),
        ("...", ""),
        ("<[{}]>", ""),
        ("don't", "don't"),
        ("", ""),
        ("「형사소송법」", "「형사소송법」"),
        ("학교!!", "학교"),
    ];

    for (token, answer) in samples.into_iter() {
        assert_eq!(trim_punct(token.as_bytes()), answer.as_bytes(), "token: {token:?}");
    }
}

#[test]
fn normalize_modes() {
    let samples = [
        ("AI기술", LanguageClass::Hangul, Mode::HangulOnly, "기술"),
        ("AI기술", LanguageClass::Hangul, Mode::Permissive, "ai기술"),
        ("hello", LanguageClass::Ascii, Mode::HangulOnly, ""),
        ("Hello-World", LanguageClass::Ascii, Mode::Permissive, "helloworld"),
        ("café", LanguageClass::Other, Mode::HangulOnly, ""),
        ("café", LanguageClass::Other, Mode::Permissive, "caf"),
        ("漢字", LanguageClass::Other, Mode::Permissive, ""),
        ("漢字학교", LanguageClass::Hangul, Mode::HangulOnly, "학교"),
        ("ㅋㅋ학교", LanguageClass::Hangul, Mode::HangulOnly, "학교"),
    ];

    for (token, class, mode, answer) in samples.into_iter() {
        assert_eq!(normalize(token.as_bytes(), class, mode), answer, "token: {token:?}, mode: {mode}");
    }
}

#[test]
fn keyword_cascade() {
    let samples = [
        ("", Mode::Permissive, Verdict::Rejected(Reason::Empty)),
        ("school", Mode::HangulOnly, Verdict::Rejected(Reason::WrongLanguage(LanguageClass::Ascii))),
        ("café", Mode::Permissive, Verdict::Rejected(Reason::WrongLanguage(LanguageClass::Other))),
        ("나는", Mode::HangulOnly, Verdict::Rejected(Reason::PronounForm)),
        ("우리", Mode::HangulOnly, Verdict::Rejected(Reason::PronounForm)),
        ("그리고", Mode::HangulOnly, Verdict::Rejected(Reason::Stopword)),
        ("the", Mode::Permissive, Verdict::Rejected(Reason::Stopword)),
        ("책", Mode::HangulOnly, Verdict::Rejected(Reason::TooShort)),
        ("bb", Mode::Permissive, Verdict::Rejected(Reason::TooShort)),
        ("123", Mode::Permissive, Verdict::Rejected(Reason::AllDigits)),
        ("사용한다", Mode::HangulOnly, Verdict::Rejected(Reason::BannedEnding("한다"))),
        ("효과적인", Mode::HangulOnly, Verdict::Rejected(Reason::BannedEnding("적인"))),
        ("경우", Mode::HangulOnly, Verdict::Rejected(Reason::FunctionNoun)),
        ("thing", Mode::Permissive, Verdict::Rejected(Reason::FunctionNoun)),
        ("간다", Mode::HangulOnly, Verdict::Rejected(Reason::Predicate)),
        ("다양한", Mode::HangulOnly, Verdict::Rejected(Reason::Adjective)),
        ("중요한", Mode::Permissive, Verdict::Rejected(Reason::Adjective)),
        ("관한", Mode::HangulOnly, Verdict::Rejected(Reason::BannedEnding("관한"))),
        ("사용하", Mode::HangulOnly, Verdict::Rejected(Reason::StemResidue("하"))),
        ("발전시키", Mode::HangulOnly, Verdict::Rejected(Reason::StemResidue("시키"))),

        // not longer than the stem + margin
        ("지하", Mode::HangulOnly, Verdict::Keyword),
        ("학교", Mode::HangulOnly, Verdict::Keyword),
        ("정책", Mode::HangulOnly, Verdict::Keyword),
        ("제한", Mode::HangulOnly, Verdict::Keyword),
        ("접근권한", Mode::HangulOnly, Verdict::Keyword),
        ("북한", Mode::HangulOnly, Verdict::Keyword),
        ("ccc", Mode::Permissive, Verdict::Keyword),
        ("ai기술", Mode::Permissive, Verdict::Keyword),
        ("3d", Mode::Permissive, Verdict::Rejected(Reason::TooShort)),
        ("r2d2", Mode::Permissive, Verdict::Keyword),
    ];

    for (word, mode, answer) in samples.into_iter() {
        assert_eq!(classify(word, mode), answer, "word: {word:?}, mode: {mode}");
        assert_eq!(crate::is_keyword(word, mode), answer.is_keyword());
    }
}

#[test]
fn frequency_table() {
    let mut table = FrequencyTable::new();
    assert!(table.is_empty());

    for word in ["b", "a", "b", "c", "a", "b"] {
        table.add(word);
    }

    assert_eq!(table.len(), 3);
    assert_eq!(table.get("b"), Some(3));
    assert_eq!(table.get("z"), None);

    let ranked = table.into_ranked();
    assert_eq!(ranked, vec![record("b", 3), record("a", 2), record("c", 1)]);
    assert_eq!(render_records(&ranked), "3\tb\n2\ta\n1\tc");
    assert_eq!(
        serde_json::to_string(&ranked[0]).unwrap(),
        r#"{"word":"b","count":3}"#,
    );
}

#[test]
fn config_and_mode() {
    let config: Config = serde_json::from_str(r#"{ "mode": "permissive", "limit": 10 }"#).unwrap();

    assert_eq!(config.mode, Mode::Permissive);
    assert_eq!(config.limit, Some(10));
    assert!(!config.json);
    assert_eq!(config.log_file, None);

    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.mode, Mode::HangulOnly);

    assert!(serde_json::from_str::<Config>(r#"{ "mode": "korean" }"#).is_err());

    assert_eq!("hangul-only".parse::<Mode>().unwrap(), Mode::HangulOnly);
    assert_eq!("permissive".parse::<Mode>().unwrap(), Mode::Permissive);
    assert!(matches!("korean".parse::<Mode>(), Err(Error::InvalidMode(m)) if m == "korean"));
    assert_eq!(Mode::parse_flag("--permissive"), Some(Mode::Permissive));
    assert_eq!(Mode::Permissive.to_string(), "permissive");

    assert!(matches!(
        Config::load_from_file("/this/path/does/not/exist.json"),
        Err(Error::FileError(_)),
    ));
}

#[test]
fn log_file() {
    let path = std::env::temp_dir().join(format!("hanfreq-test-{}.log", std::process::id()));
    let path = path.to_string_lossy().to_string();
    let _ = std::fs::remove_file(&path);

    set_log_file_path(Some(path.clone()));
    analyze("학교 학교", Mode::HangulOnly);
    analyze("학교 그리고 다양한 the 그리고", Mode::HangulOnly);
    set_log_file_path(None);

    let log = std::fs::read_to_string(&path).unwrap();
    assert!(log.contains("analyze_bytes | mode: hangul-only, tokens: 2, keywords: 2, distinct: 1, rejected: {}"));
    assert!(log.contains(
        "tokens: 5, keywords: 1, distinct: 1, rejected: {adjective: 1, empty: 1, stopword: 2}"
    ));

    let _ = std::fs::remove_file(&path);
}
