use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};

pub fn read_bytes(path: &str) -> Result<Vec<u8>, FileError> {
    let mut bytes = vec![];

    match File::open(path) {
        Err(e) => Err(FileError::from_std(e, path)),
        Ok(mut f) => match f.read_to_end(&mut bytes) {
            Ok(_) => Ok(bytes),
            Err(e) => Err(FileError::from_std(e, path)),
        },
    }
}

pub fn read_string(path: &str) -> Result<String, FileError> {
    let mut s = String::new();

    match File::open(path) {
        Err(e) => Err(FileError::from_std(e, path)),
        Ok(mut f) => match f.read_to_string(&mut s) {
            Ok(_) => Ok(s),
            Err(e) => Err(FileError::from_std(e, path)),
        },
    }
}

/// Creates the file if it doesn't exist.
pub fn append_string(path: &str, s: &str) -> Result<(), FileError> {
    match OpenOptions::new().append(true).create(true).open(path) {
        Err(e) => Err(FileError::from_std(e, path)),
        Ok(mut f) => match f.write_all(s.as_bytes()) {
            Ok(_) => Ok(()),
            Err(e) => Err(FileError::from_std(e, path)),
        },
    }
}

pub struct FileError {
    pub kind: FileErrorKind,
    pub given_path: Option<String>,
}

impl FileError {
    pub fn from_std(e: io::Error, given_path: &str) -> Self {
        let kind = match e.kind() {
            io::ErrorKind::NotFound => FileErrorKind::FileNotFound,
            io::ErrorKind::PermissionDenied => FileErrorKind::PermissionDenied,
            io::ErrorKind::IsADirectory => FileErrorKind::IsADirectory,
            e => FileErrorKind::Unknown(format!("unknown error: {e:?}")),
        };

        FileError {
            kind,
            given_path: Some(given_path.to_string()),
        }
    }

    pub fn render_error(&self) -> String {
        let path = self.given_path.as_ref().map(|p| p.to_string()).unwrap_or(String::new());

        match &self.kind {
            FileErrorKind::FileNotFound => format!("file not found: `{path}`"),
            FileErrorKind::PermissionDenied => format!("permission denied: `{path}`"),
            FileErrorKind::IsADirectory => format!("expected a file, got a directory: `{path}`"),
            FileErrorKind::Unknown(msg) => format!("unknown file error: `{msg}`"),
        }
    }
}

impl fmt::Debug for FileError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.render_error())
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.render_error())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FileErrorKind {
    FileNotFound,
    PermissionDenied,
    IsADirectory,
    Unknown(String),
}
