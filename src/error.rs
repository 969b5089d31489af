//! Error handling for the serial logger
//!
//! This module defines the crate error type and a Result alias used
//! throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for serial logger operations
#[derive(Error, Debug)]
pub enum LoggerError {
    /// The serial device could not be opened (missing, busy, no permission)
    #[error("Failed to open serial port {port}: {source}")]
    DeviceOpen {
        port: String,
        #[source]
        source: serialport::Error,
    },

    /// Errors reported by the serial driver after the port is open
    #[error("Serial error: {0}")]
    Serial(#[from] serialport::Error),

    /// A received line was not valid UTF-8
    #[error("Invalid UTF-8 in serial line: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Writing the CSV output failed
    #[error("Failed to write {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<LoggerError>,
    },
}

impl LoggerError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        LoggerError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error (or the error it wraps) is a decode failure
    pub fn is_decode(&self) -> bool {
        match self {
            LoggerError::Decode(_) => true,
            LoggerError::WithContext { source, .. } => source.is_decode(),
            _ => false,
        }
    }
}

/// Result type alias for serial logger operations
pub type Result<T> = std::result::Result<T, LoggerError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
