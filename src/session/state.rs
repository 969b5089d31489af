//! Last-accepted state consulted by the sampling filter

use chrono::NaiveDateTime;

use crate::filter;

/// Payload and time of the most recently accepted record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    last_payload: Option<String>,
    last_accept_time: NaiveDateTime,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Fresh state: no payload seen, last acceptance at the earliest
    /// representable time so the first line always clears the interval.
    pub fn new() -> Self {
        Self {
            last_payload: None,
            last_accept_time: NaiveDateTime::MIN,
        }
    }

    /// Payload of the last accepted record
    pub fn last_payload(&self) -> Option<&str> {
        self.last_payload.as_deref()
    }

    /// Time of the last accepted record
    pub fn last_accept_time(&self) -> NaiveDateTime {
        self.last_accept_time
    }

    /// Evaluate the sampling filter against this state without changing it
    pub fn would_accept(&self, line: &str, now: NaiveDateTime, min_interval_ms: u64) -> bool {
        filter::accept(
            line,
            self.last_payload(),
            self.last_accept_time,
            now,
            min_interval_ms,
        )
    }

    /// Remember `line` as the last accepted payload. Only call after acceptance.
    pub fn mark_accepted(&mut self, line: &str, now: NaiveDateTime) {
        self.last_payload = Some(line.to_string());
        self.last_accept_time = now;
    }
}
