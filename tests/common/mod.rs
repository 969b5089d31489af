//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;
pub mod csv_reader;
pub mod mock_helpers;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Fixed base time so timestamps in assertions are predictable
pub fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

/// `base_time()` shifted by `ms` milliseconds
pub fn at_ms(ms: i64) -> NaiveDateTime {
    base_time() + TimeDelta::milliseconds(ms)
}
