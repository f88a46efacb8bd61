use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod config;
mod error;
mod frequency;
mod fs;
mod keyword;
mod log;
mod normalize;
mod token;

#[cfg(test)]
mod tests;

pub use config::{Config, Mode};
pub use error::Error;
pub use frequency::{
    FrequencyRecord,
    FrequencyTable,
    render_records,
};
pub use fs::{
    FileError,
    FileErrorKind,
    read_bytes,
    read_string,
};
pub use hanfreq_korean::{
    LanguageClass,
    classify_language,
    strip_josa,
};
pub use keyword::{
    Reason,
    Verdict,
    classify,
    is_keyword,
};
pub use log::{set_log_file_path, write_log};
pub use normalize::normalize;
pub use token::{tokenize, trim_punct};

// |                             | Cargo.toml  | this constant  |
// |-----------------------------|-------------|----------------|
// | working on 0.1.2            | 0.1.2       | "0.1.2-dev"    |
// | published version of 0.1.2  | 0.1.2       | "0.1.2"        |
// | after publishing 0.1.2      | 0.1.3       | "0.1.3-dev"    |
pub const VERSION: &str = "0.1.0-dev";

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BuildOptions {
    pub version: String,
    pub profile: String,  // debug | release | production
}

pub fn get_build_options() -> BuildOptions {
    let profile = if cfg!(feature = "production") {
        "production"
    } else if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };

    BuildOptions {
        version: VERSION.to_string(),
        profile: profile.to_string(),
    }
}

pub fn analyze(text: &str, mode: Mode) -> Vec<FrequencyRecord> {
    analyze_bytes(text.as_bytes(), mode)
}

/// Counts the keywords in `text` and ranks them by count, descending.
/// Keywords with the same count are in the order they first appear.
///
/// `text` doesn't have to be valid utf-8. Invalid bytes never end up in a keyword
/// and never make this function fail: they're dropped from their token, and a token
/// that has nothing left is skipped. That's the only thing malformed input does.
pub fn analyze_bytes(text: &[u8], mode: Mode) -> Vec<FrequencyRecord> {
    let mut table = FrequencyTable::new();
    let mut token_count = 0;
    let mut keyword_count = 0;
    let mut rejected: BTreeMap<&'static str, usize> = BTreeMap::new();

    for token in tokenize(text) {
        token_count += 1;

        match run_pipeline(token, mode) {
            Ok(keyword) => {
                keyword_count += 1;
                table.add(&keyword);
            },
            Err(reason) => {
                *rejected.entry(reason.name()).or_insert(0) += 1;
            },
        }
    }

    write_log(
        "analyze_bytes",
        &format!(
            "mode: {mode}, tokens: {token_count}, keywords: {keyword_count}, distinct: {}, rejected: {{{}}}",
            table.len(),
            rejected.iter().map(
                |(reason, count)| format!("{reason}: {count}")
            ).collect::<Vec<_>>().join(", "),
        ),
    );

    table.into_ranked()
}

/// Runs a single raw token through the pipeline: trim, normalize, strip particles
/// and classify. Returns the keyword, if the token is one.
pub fn extract_keyword(token: &[u8], mode: Mode) -> Option<String> {
    run_pipeline(token, mode).ok()
}

fn run_pipeline(token: &[u8], mode: Mode) -> Result<String, Reason> {
    let trimmed = trim_punct(token);
    let normalized = normalize(trimmed, classify_language(trimmed), mode);

    if normalized.is_empty() {
        return Err(Reason::Empty);
    }

    let word = strip_josa(&normalized);

    match classify(word, mode) {
        Verdict::Keyword => Ok(word.to_string()),
        Verdict::Rejected(reason) => Err(reason),
    }
}
