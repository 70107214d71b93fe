// Logger - Leveled session logging
//
// Provides:
// - Configurable log levels
// - A bounded in-memory log buffer
// - Optional log file output
// - Warnings and errors echoed to stderr

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging
    None,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warning,
    /// Info, warnings, and errors
    Info,
    /// Debug information (catch-up bursts)
    Debug,
    /// Per-tick tracing
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::None => "NONE",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        };
        f.write_str(name)
    }
}

/// A single log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

/// Logger
///
/// Keeps recent entries in memory and optionally mirrors them to a file.
pub struct Logger {
    /// Current log level
    log_level: LogLevel,

    /// Recent entries
    buffer: Vec<LogEntry>,

    /// Maximum number of entries kept in memory (0 = unlimited)
    max_buffer_size: usize,

    /// Output file
    output_file: Option<File>,

    /// Echo warnings and errors to stderr
    echo_stderr: bool,
}

impl Logger {
    /// Create a logger at the given level
    pub fn new(log_level: LogLevel) -> Self {
        Logger {
            log_level,
            buffer: Vec::new(),
            max_buffer_size: 1000,
            output_file: None,
            echo_stderr: true,
        }
    }

    /// Set the log level
    pub fn set_log_level(&mut self, level: LogLevel) {
        self.log_level = level;
    }

    /// Get the current log level
    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Whether a message at `level` would be recorded
    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::None && level <= self.log_level
    }

    /// Set maximum buffer size
    ///
    /// When the buffer exceeds this size, old entries are removed.
    /// Set to 0 for unlimited size.
    pub fn set_max_buffer_size(&mut self, size: usize) {
        self.max_buffer_size = size;

        if size > 0 && self.buffer.len() > size {
            self.buffer.drain(0..self.buffer.len() - size);
        }
    }

    /// Enable or disable the stderr echo of warnings and errors
    pub fn set_echo_stderr(&mut self, echo: bool) {
        self.echo_stderr = echo;
    }

    /// Open a log file for output
    pub fn open_log_file<P: AsRef<Path>>(&mut self, path: P) -> std::io::Result<()> {
        let file = File::create(path)?;
        self.output_file = Some(file);
        Ok(())
    }

    /// Close the log file
    pub fn close_log_file(&mut self) {
        self.output_file = None;
    }

    /// Log a message
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        if !self.enabled(level) {
            return;
        }

        self.add_entry(LogEntry {
            level,
            message: message.into(),
        });
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn debug(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    pub fn trace(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    fn add_entry(&mut self, entry: LogEntry) {
        if self.echo_stderr && entry.level <= LogLevel::Warning {
            eprintln!("{}", entry);
        }

        if let Some(ref mut file) = self.output_file {
            let _ = writeln!(file, "{}", entry);
        }

        self.buffer.push(entry);

        if self.max_buffer_size > 0 && self.buffer.len() > self.max_buffer_size {
            self.buffer.remove(0);
        }
    }

    /// All entries in the buffer
    pub fn entries(&self) -> &[LogEntry] {
        &self.buffer
    }

    /// Get the last N entries
    pub fn last_entries(&self, count: usize) -> &[LogEntry] {
        let start = self.buffer.len().saturating_sub(count);
        &self.buffer[start..]
    }

    /// Clear the buffer
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("log_level", &self.log_level)
            .field("entries", &self.buffer.len())
            .field("file", &self.output_file.is_some())
            .finish()
    }
}
