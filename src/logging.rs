//! File logging for Calorie Counter
//!
//! Backs the `log` facade with a single global file logger. Nothing is ever
//! written to stdout/stderr because the TUI owns the terminal.
//!
//! Line format: `[timestamp] [LEVEL] [target] message`

use crate::error::Result;
use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Global logger instance
static LOGGER: OnceLock<FileLogger> = OnceLock::new();

const LOG_FILE_NAME: &str = "calorie-counter.log";

/// Writes formatted log lines to a file
pub struct FileLogger {
    file: Mutex<Option<File>>,
    min_level: LevelFilter,
}

impl FileLogger {
    /// Open (truncating) the log file. Logging goes nowhere if that fails.
    fn new(path: &Path, min_level: LevelFilter) -> Self {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true) // Start fresh each run
            .open(path)
            .ok();

        Self {
            file: Mutex::new(file),
            min_level,
        }
    }

    fn write_line(&self, line: &str) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}

/// Render one log line
pub fn format_line(level: log::Level, target: &str, message: &std::fmt::Arguments<'_>) -> String {
    format!(
        "[{}] [{:5}] [{}] {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        level,
        target,
        message
    )
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.min_level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.write_line(&format_line(record.level(), record.target(), record.args()));
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

/// Default log file path (same directory as executable)
pub fn default_log_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOG_FILE_NAME)
}

/// Install the global logger. Later calls keep the first logger.
pub fn init(path: Option<&Path>, min_level: LevelFilter) -> Result<()> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let logger = LOGGER.get_or_init(|| FileLogger::new(&path, min_level));

    if log::set_logger(logger).is_ok() {
        log::set_max_level(min_level);
    }
    Ok(())
}

/// Flush the log file
pub fn flush() {
    log::logger().flush();
}

/// Write a separator line for readability
pub fn separator(label: &str) {
    log::info!(target: "---", "========== {} ==========", label);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_format_has_level_and_target() {
        let line = format_line(log::Level::Warn, "SEARCH", &format_args!("bad pattern {}", 7));
        assert!(line.ends_with("] [WARN ] [SEARCH] bad pattern 7\n"), "{line}");
        assert!(line.starts_with('['));
    }

    #[test]
    fn file_logger_filters_by_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");
        let logger = FileLogger::new(&path, LevelFilter::Info);

        logger.log(
            &Record::builder()
                .level(log::Level::Debug)
                .target("INDEX")
                .args(format_args!("hidden"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(log::Level::Info)
                .target("TUI")
                .args(format_args!("shown"))
                .build(),
        );

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("hidden"));
        assert!(contents.contains("[TUI] shown"));
    }
}
