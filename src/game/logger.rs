//! Centralized game logger
//!
//! Every announcement, spin and controller decision goes through one logger
//! owned by the session. Output goes to stdout, or to an in-memory buffer for
//! tests and post-game inspection, and prints as text or as JSON lines.

use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::ops::Deref;

/// Verbosity level for game output
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output during game
    Silent = 0,
    /// Minimal - only round winners and game results
    Minimal = 1,
    /// Normal - announcements, spins, and decisions (default)
    #[default]
    Normal = 2,
    /// Verbose - menus and board state as well
    Verbose = 3,
}

/// Output format for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// Machine-readable JSON output (one object per line)
    Json,
}

/// Output destination for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    /// Output only to stdout (default)
    #[default]
    Stdout,
    /// Capture only to in-memory buffer (no stdout)
    Memory,
}

/// A captured log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Verbosity level of this log entry
    pub level: VerbosityLevel,
    pub message: String,
    /// Optional category (e.g., "controller_choice", "speech")
    pub category: Option<String>,
}

/// Guard type that provides read-only access to log entries
pub struct LogGuard<'a> {
    guard: Ref<'a, Vec<LogEntry>>,
}

impl<'a> LogGuard<'a> {
    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.guard.iter()
    }

    pub fn len(&self) -> usize {
        self.guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard.is_empty()
    }
}

impl<'a> Deref for LogGuard<'a> {
    type Target = [LogEntry];

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

/// Game logger with verbosity filtering and optional capture
///
/// Logging takes `&self` so controllers can log through a read-only
/// `GameStateView`; the capture buffer uses interior mutability.
pub struct GameLogger {
    verbosity: VerbosityLevel,
    output_format: OutputFormat,
    output_mode: OutputMode,
    log_buffer: RefCell<Vec<LogEntry>>,
}

impl GameLogger {
    /// Create a new logger with default verbosity (Normal)
    pub fn new() -> Self {
        Self::with_verbosity(VerbosityLevel::default())
    }

    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        GameLogger {
            verbosity,
            output_format: OutputFormat::default(),
            output_mode: OutputMode::default(),
            log_buffer: RefCell::new(Vec::new()),
        }
    }

    /// Capture to the in-memory buffer only (suppresses stdout)
    pub fn enable_capture(&mut self) {
        self.output_mode = OutputMode::Memory;
    }

    pub fn is_capturing(&self) -> bool {
        self.output_mode == OutputMode::Memory
    }

    /// Switch stdout lines between text and JSON
    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.output_format = format;
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    /// Access captured entries without copying
    ///
    /// ```ignore
    /// let solves = logger.logs().iter()
    ///     .filter(|log| log.message.contains("solve"))
    ///     .count();
    /// ```
    pub fn logs(&self) -> LogGuard<'_> {
        LogGuard {
            guard: self.log_buffer.borrow(),
        }
    }

    /// Silent messages are never printed or captured
    #[inline]
    pub fn silent(&self, _message: &str) {}

    #[inline]
    pub fn minimal(&self, message: &str) {
        self.log(VerbosityLevel::Minimal, message, None);
    }

    #[inline]
    pub fn normal(&self, message: &str) {
        self.log(VerbosityLevel::Normal, message, None);
    }

    #[inline]
    pub fn verbose(&self, message: &str) {
        self.log(VerbosityLevel::Verbose, message, None);
    }

    /// Log a line of dialogue at Normal level
    pub fn speech(&self, speaker: &str, text: &str) {
        let message = if speaker.is_empty() {
            text.to_string()
        } else {
            format!("{speaker}: {text}")
        };
        self.log(VerbosityLevel::Normal, &message, Some("speech"));
    }

    /// Log a controller decision at Normal level
    ///
    /// The controller name only goes to stderr at Verbose level, so logs
    /// read the same whichever kind of controller made the choice.
    pub fn controller_choice(&self, controller_name: &str, message: &str) {
        if self.verbosity >= VerbosityLevel::Verbose {
            eprintln!("  >>> {controller_name}: {message}");
        }
        self.log(VerbosityLevel::Normal, message, Some("controller_choice"));
    }

    fn log(&self, level: VerbosityLevel, message: &str, category: Option<&str>) {
        let should_capture = self.is_capturing();
        let should_output = self.output_mode == OutputMode::Stdout && level <= self.verbosity;

        if !should_capture && !should_output {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            category: category.map(str::to_string),
        };

        if should_output {
            self.write_stdout(&entry);
        }
        if should_capture {
            self.log_buffer.borrow_mut().push(entry);
        }
    }

    /// One stdout line for `entry` in the current format
    fn format_entry(&self, entry: &LogEntry) -> serde_json::Result<String> {
        match self.output_format {
            OutputFormat::Text if entry.level == VerbosityLevel::Minimal => {
                Ok(entry.message.clone())
            }
            OutputFormat::Text => Ok(format!("  {}", entry.message)),
            OutputFormat::Json => serde_json::to_string(entry),
        }
    }

    fn write_stdout(&self, entry: &LogEntry) {
        match self.format_entry(entry) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("failed to encode log entry: {e}"),
        }
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLogger")
            .field("verbosity", &self.verbosity)
            .field("output_mode", &self.output_mode)
            .field("log_count", &self.log_buffer.borrow().len())
            .finish()
    }
}
