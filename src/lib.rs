//! # serial-logger: deduplicating serial line recorder
//!
//! Reads newline-terminated text from a serial device, keeps only lines that
//! differ from the last kept line AND arrive at least the minimum interval
//! after it, timestamps them, and writes them to a CSV file when the session
//! ends.
//!
//! ## Architecture
//!
//! - **Source**: [`source::SerialLineSource`] frames serial bytes into lines
//! - **Filter**: [`filter::accept`] decides which lines become records
//! - **Session**: [`session::Recorder`] runs the polling loop and owns the
//!   record store
//! - **Sink**: [`sink::CsvSink`] writes the records on shutdown
//!
//! ## Example
//!
//! ```ignore
//! use serial_logger::{run_session, LoggerConfig, SerialLineSource, StopHandle};
//!
//! let config = LoggerConfig::default();
//! let source = SerialLineSource::open(&config)?;
//! let stop = StopHandle::new();
//! let outcome = run_session(source, &config, &stop, |record| {
//!     println!("{}", record.console_line());
//! })?;
//! println!("{} records", outcome.summary.records_written);
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod session;
pub mod sink;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use session::{run_session, Recorder, RecordStore, SessionOutcome, SessionState, StopHandle};
pub use sink::CsvSink;
pub use source::{LineSource, SerialLineSource};
pub use types::{LoopState, Record, SessionSummary};
