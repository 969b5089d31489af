//! Core data types for the serial logger
//!
//! # Main Types
//!
//! - [`Record`] - One accepted, timestamped serial line
//! - [`LoopState`] - Lifecycle of the sampling loop
//! - [`SessionSummary`] - Counters reported when a session ends

use chrono::NaiveDateTime;
use std::path::PathBuf;

/// Timestamp format used in the CSV output
pub const CSV_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format used for console progress lines
pub const CONSOLE_TIME_FORMAT: &str = "%H:%M:%S";

/// A serial line that passed the sampling filter
///
/// The timestamp keeps full clock precision in memory; it is rendered with
/// second precision on output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    timestamp: NaiveDateTime,
    payload: String,
}

impl Record {
    /// Create a new record
    pub fn new(timestamp: NaiveDateTime, payload: impl Into<String>) -> Self {
        Self {
            timestamp,
            payload: payload.into(),
        }
    }

    /// Local time the line was accepted
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// The line as received, trailing whitespace removed
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// `YYYY-MM-DD HH:MM:SS`
    pub fn timestamp_string(&self) -> String {
        self.timestamp.format(CSV_TIMESTAMP_FORMAT).to_string()
    }

    /// Console progress line: `HH:MM:SS - <payload>`
    pub fn console_line(&self) -> String {
        format!(
            "{} - {}",
            self.timestamp.format(CONSOLE_TIME_FORMAT),
            self.payload
        )
    }
}

/// State of the sampling loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Reading and filtering lines
    #[default]
    Running,
    /// Interrupted or failed; no more lines will be read
    Stopping,
    /// Source released and records flushed
    Stopped,
}

impl LoopState {
    /// Check if the loop still reads lines
    pub fn is_running(&self) -> bool {
        matches!(self, LoopState::Running)
    }

    /// Display name for the state
    pub fn display_name(&self) -> &'static str {
        match self {
            LoopState::Running => "Running",
            LoopState::Stopping => "Stopping",
            LoopState::Stopped => "Stopped",
        }
    }
}

/// What happened during one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines read from the source
    pub lines_read: u64,
    /// Lines that became records
    pub records_written: usize,
    /// Whether the session ended through the stop handle
    pub interrupted: bool,
    /// CSV file the records were written to
    pub output_path: PathBuf,
}

impl SessionSummary {
    /// Lines that were read but not recorded
    pub fn lines_suppressed(&self) -> u64 {
        self.lines_read.saturating_sub(self.records_written as u64)
    }
}
