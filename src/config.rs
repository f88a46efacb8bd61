use crate::error::Error;
use crate::fs::read_string;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which characters of a token survive normalization.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Tokens without 한글 are dropped, and only 한글 syllables are kept from the rest.
    #[default]
    HangulOnly,

    /// Ascii alphanumerics (lowercased) and 한글 syllables are kept from every token.
    Permissive,
}

impl Mode {
    pub fn parse_flag(flag: &str) -> Option<Self> {
        match flag {
            "--hangul-only" => Some(Mode::HangulOnly),
            "--permissive" => Some(Mode::Permissive),
            _ => None,
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "hangul-only" => Ok(Mode::HangulOnly),
            "permissive" => Ok(Mode::Permissive),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "{}",
            match self {
                Mode::HangulOnly => "hangul-only",
                Mode::Permissive => "permissive",
            },
        )
    }
}

/// Settings of the cli. Every field is optional in the json file, and cli flags
/// override the file.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    pub mode: Mode,

    // only the first N records are printed
    pub limit: Option<usize>,

    // prints a json array instead of `count<TAB>word` lines
    pub json: bool,

    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: Mode::default(),
            limit: None,
            json: false,
            log_file: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &str) -> Result<Self, Error> {
        let j = read_string(path)?;
        Ok(serde_json::from_str(&j)?)
    }
}
