//! Configuration for the serial logger
//!
//! All settings are fixed constants. [`LoggerConfig::default`] is what the
//! binary runs with; the `with_*` builders exist so tests can point the
//! logger at a temporary output file or a different interval.
//!
//! # Defaults
//!
//! | Setting                  | Value                                  |
//! |--------------------------|----------------------------------------|
//! | port                     | `COM3` (Windows), `/dev/ttyUSB0` other |
//! | baud rate                | 115200                                 |
//! | read timeout             | 1 s                                    |
//! | minimum sample interval  | 500 ms                                 |
//! | output file              | `serial_data.csv`                      |

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default serial port name
#[cfg(windows)]
pub const DEFAULT_PORT: &str = "COM3";

/// Default serial port name
#[cfg(not(windows))]
pub const DEFAULT_PORT: &str = "/dev/ttyUSB0";

/// Default baud rate
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Default timeout for a single serial read in milliseconds
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1_000;

/// Minimum time between two accepted records in milliseconds
pub const DEFAULT_MIN_SAMPLE_INTERVAL_MS: u64 = 500;

/// Output CSV filename
pub const DEFAULT_OUTPUT_FILE: &str = "serial_data.csv";

/// Settings for one logging session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Platform-specific serial device name
    pub port: String,

    /// Serial baud rate
    pub baud_rate: u32,

    /// Upper bound on a single blocking read
    pub read_timeout: Duration,

    /// Minimum spacing between accepted records
    pub min_sample_interval_ms: u64,

    /// Where the CSV is written on shutdown
    pub output_path: PathBuf,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            read_timeout: Duration::from_millis(DEFAULT_READ_TIMEOUT_MS),
            min_sample_interval_ms: DEFAULT_MIN_SAMPLE_INTERVAL_MS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl LoggerConfig {
    /// Set the serial port name
    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = port.into();
        self
    }

    /// Set the minimum sample interval
    pub fn with_min_sample_interval_ms(mut self, interval_ms: u64) -> Self {
        self.min_sample_interval_ms = interval_ms;
        self
    }

    /// Set the output CSV path
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = LoggerConfig::default();
        assert_eq!(config.baud_rate, 115_200);
        assert_eq!(config.read_timeout, Duration::from_secs(1));
        assert_eq!(config.min_sample_interval_ms, 500);
        assert_eq!(config.output_path, PathBuf::from("serial_data.csv"));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_builders() {
        let config = LoggerConfig::default()
            .with_port("/dev/ttyACM0")
            .with_min_sample_interval_ms(250)
            .with_output_path("/tmp/out.csv");

        assert_eq!(config.port, "/dev/ttyACM0");
        assert_eq!(config.min_sample_interval_ms, 250);
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.csv"));
        assert_eq!(config.baud_rate, DEFAULT_BAUD_RATE);
    }
}
