use crate::fs::append_string;
use chrono::offset::Local;
use lazy_static::lazy_static;
use std::sync::Mutex;

lazy_static! {
    static ref LOG_FILE_PATH: Mutex<Option<String>> = Mutex::new(None);
}

/// `None` turns logging off. It's off by default.
pub fn set_log_file_path(path: Option<String>) {
    if let Ok(mut log_file_path) = LOG_FILE_PATH.lock() {
        *log_file_path = path;
    }
}

fn get_log_file_path() -> Option<String> {
    LOG_FILE_PATH.lock().ok().and_then(|path| path.clone())
}

pub fn write_log(owner: &str, msg: &str) {
    if let Some(path) = get_log_file_path() {
        // logging never fails an analysis
        let _ = append_string(
            &path,
            &format!(
                "{} | {} | {msg}\n",
                Local::now().to_rfc2822(),
                if owner.len() < 32 {
                    format!("{}{owner}", " ".repeat(32 - owner.len()))
                } else {
                    owner.to_string()
                },
            ),
        );
    }
}
