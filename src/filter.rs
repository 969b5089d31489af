//! Sampling filter
//!
//! Decides whether an incoming line becomes a record. A line is accepted only
//! when the minimum interval has elapsed since the last accepted record AND
//! its payload differs from that record's payload. A changed value that
//! arrives before the interval has elapsed is suppressed as well.

use chrono::{NaiveDateTime, TimeDelta};

/// Returns true if `line` should be recorded.
///
/// The interval boundary is inclusive. `last_payload` is `None` until the
/// first record is accepted. This function has no side effects; the caller
/// updates its session state when it returns true.
pub fn accept(
    line: &str,
    last_payload: Option<&str>,
    last_accept_time: NaiveDateTime,
    now: NaiveDateTime,
    min_interval_ms: u64,
) -> bool {
    interval_elapsed(last_accept_time, now, min_interval_ms) && last_payload != Some(line)
}

fn interval_elapsed(last: NaiveDateTime, now: NaiveDateTime, min_interval_ms: u64) -> bool {
    let min_interval = i64::try_from(min_interval_ms)
        .ok()
        .and_then(TimeDelta::try_milliseconds)
        .unwrap_or(TimeDelta::MAX);
    now.signed_duration_since(last) >= min_interval
}
