//! Logger setup.
//!
//! The TUI owns the terminal, so interactive runs log to a file.
//! One-shot commands log to stderr.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use log::LevelFilter;

/// Log file name inside the data directory.
const LOG_FILENAME: &str = "folder-quiz.log";

/// Default log file: `<data dir>/folder-quiz/folder-quiz.log`.
pub fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folder-quiz")
        .join(LOG_FILENAME)
}

/// Parse a level name, falling back to `info` for anything unknown.
pub fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Info)
}

/// Send log output to `path`, appending. Creates parent directories.
///
/// # Errors
/// Returns an error if the file cannot be opened; the caller decides
/// whether running without a log is acceptable.
pub fn init_file_logger(level: LevelFilter, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let log_file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .try_init()
        .map_err(io::Error::other)
}

/// Send log output to stderr.
pub fn init_stderr_logger(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .try_init();
}
