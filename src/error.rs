use crate::fs::FileError;

/// Errors of the host surface: config files, input files and the cli.
///
/// The analysis itself never fails. Malformed utf-8 is not an error: broken bytes
/// are dropped from the token they're in, and a token with nothing left is skipped.
#[derive(Debug)]
pub enum Error {
    InvalidMode(String),
    CliError {
        message: String,

        // (rendered args, start, end)
        span: Option<(String, usize, usize)>,
    },

    FileError(FileError),
    StdIoError(std::io::Error),

    /// see <https://docs.rs/serde_json/latest/serde_json/struct.Error.html>
    JsonSerdeError(serde_json::Error),
}

impl From<FileError> for Error {
    fn from(e: FileError) -> Error {
        Error::FileError(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::StdIoError(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::JsonSerdeError(e)
    }
}
