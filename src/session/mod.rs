//! Sampling session
//!
//! This module holds everything that changes while the logger runs:
//!
//! - [`SessionState`] - payload and time of the last accepted record
//! - [`RecordStore`] - every accepted record, in arrival order
//! - [`Recorder`] - the polling loop that feeds lines through the filter
//!
//! [`run_session`] ties them to a [`crate::source::LineSource`] and the
//! [`crate::sink::CsvSink`].

pub mod recorder;
pub mod state;
pub mod store;

pub use recorder::{run_session, Recorder, SessionOutcome, StopHandle};
pub use state::SessionState;
pub use store::RecordStore;
