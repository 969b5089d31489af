//! Sampling loop and session lifecycle
//!
//! [`Recorder`] owns the session state and the record store and moves through
//! [`LoopState::Running`] → [`LoopState::Stopping`] → [`LoopState::Stopped`].
//! [`run_session`] drives a whole session: poll the source until the
//! [`StopHandle`] fires or a read fails, release the source, then flush the
//! store to CSV.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use super::state::SessionState;
use super::store::RecordStore;
use crate::config::LoggerConfig;
use crate::error::{LoggerError, Result, ResultExt};
use crate::sink::CsvSink;
use crate::source::LineSource;
use crate::types::{LoopState, Record, SessionSummary};

/// Cloneable handle that asks a running session to stop
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the loop to stop before its next read
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// Filters incoming lines into a record store
#[derive(Debug)]
pub struct Recorder {
    state: LoopState,
    session: SessionState,
    store: RecordStore,
    min_interval_ms: u64,
    lines_read: u64,
}

impl Recorder {
    /// Create a recorder in the running state
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            state: LoopState::Running,
            session: SessionState::new(),
            store: RecordStore::new(),
            min_interval_ms,
            lines_read: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Number of lines handed to [`Recorder::process_line`]
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Run one line through the sampling filter.
    ///
    /// Returns the new record when the line is accepted. Lines offered after
    /// the recorder left the running state are ignored.
    pub fn process_line(&mut self, line: String, now: NaiveDateTime) -> Option<&Record> {
        if !self.state.is_running() {
            return None;
        }
        self.lines_read += 1;

        if !self.session.would_accept(&line, now, self.min_interval_ms) {
            tracing::trace!(line = %line, "Suppressed line");
            return None;
        }

        self.session.mark_accepted(&line, now);
        Some(self.store.push(Record::new(now, line)))
    }

    /// Poll `source` until `stop` fires or a read fails.
    ///
    /// `on_record` is called with every accepted record. Always leaves the
    /// recorder in [`LoopState::Stopping`]; a read or decode error is
    /// returned after the transition.
    pub fn run<S, F>(&mut self, source: &mut S, stop: &StopHandle, on_record: F) -> Result<()>
    where
        S: LineSource + ?Sized,
        F: FnMut(&Record),
    {
        let result = self.poll_until_stopped(source, stop, on_record);
        self.transition(LoopState::Stopping);
        result
    }

    fn poll_until_stopped<S, F>(
        &mut self,
        source: &mut S,
        stop: &StopHandle,
        mut on_record: F,
    ) -> Result<()>
    where
        S: LineSource + ?Sized,
        F: FnMut(&Record),
    {
        while !stop.is_stopped() {
            let Some(line) = source.poll_line().context("Serial read failed")? else {
                continue;
            };
            // The read may have blocked across an interrupt.
            if stop.is_stopped() {
                tracing::debug!(line = %line, "Dropping line read after stop request");
                break;
            }
            let now = Local::now().naive_local();
            if let Some(record) = self.process_line(line, now) {
                on_record(record);
            }
        }
        Ok(())
    }

    /// Write the store to `path` and enter [`LoopState::Stopped`].
    ///
    /// The state changes even when the write fails, since no retry is made.
    pub fn finish(&mut self, path: &Path) -> Result<usize> {
        let result = CsvSink::write(&self.store, path);
        self.transition(LoopState::Stopped);
        result
    }

    fn transition(&mut self, next: LoopState) {
        if self.state != next {
            tracing::debug!(
                from = self.state.display_name(),
                to = next.display_name(),
                "Recorder state change"
            );
            self.state = next;
        }
    }
}

/// Report of a finished session
#[derive(Debug)]
pub struct SessionOutcome {
    pub summary: SessionSummary,
    /// Read or decode error that ended the loop, if any
    pub read_error: Option<LoggerError>,
}

/// Run a complete session over `source`.
///
/// `on_record` sees each accepted record as it is stored. The source is
/// dropped (releasing the device) before the CSV is written.
/// Records collected before a read error are still written. Returns `Err`
/// only when the CSV cannot be written; a read error that happened first is
/// logged at that point.
pub fn run_session<S, F>(
    mut source: S,
    config: &LoggerConfig,
    stop: &StopHandle,
    on_record: F,
) -> Result<SessionOutcome>
where
    S: LineSource,
    F: FnMut(&Record),
{
    let mut recorder = Recorder::new(config.min_sample_interval_ms);

    tracing::info!(
        min_interval_ms = config.min_sample_interval_ms,
        output = %config.output_path.display(),
        "Starting sampling loop"
    );

    let read_error = recorder.run(&mut source, stop, on_record).err();
    drop(source);

    let interrupted = read_error.is_none() && stop.is_stopped();
    if let Some(err) = &read_error {
        tracing::error!(error = %err, "Sampling loop ended with an error");
    }

    let records_written = recorder.finish(&config.output_path)?;

    let summary = SessionSummary {
        lines_read: recorder.lines_read(),
        records_written,
        interrupted,
        output_path: config.output_path.clone(),
    };

    tracing::info!(
        lines_read = summary.lines_read,
        records_written = summary.records_written,
        lines_suppressed = summary.lines_suppressed(),
        "Session finished"
    );

    Ok(SessionOutcome {
        summary,
        read_error,
    })
}
