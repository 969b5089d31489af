//! Line sources
//!
//! A [`LineSource`] turns a byte stream into discrete text lines. The real
//! implementation is [`SerialLineSource`]; tests drive the sampling loop with
//! scripted or mocked sources instead.
//!
//! Framing and decoding live in [`LineBuffer`] so they can be tested without
//! hardware.

pub mod line_buffer;
pub mod serial;

pub use line_buffer::LineBuffer;
pub use serial::{PortRead, SerialLineSource};

use crate::error::Result;

/// Unified interface for anything that yields newline-terminated text lines
///
/// Lines are returned with trailing whitespace (including `\r\n`) removed.
/// Bytes that are not valid UTF-8 produce [`crate::LoggerError::Decode`].
#[cfg_attr(test, mockall::automock)]
pub trait LineSource {
    /// True if at least one complete line is buffered and can be read
    /// without waiting.
    fn has_data(&mut self) -> Result<bool>;

    /// Read the next line, blocking up to the source's read timeout.
    ///
    /// On timeout whatever was received so far is returned, which may be an
    /// empty string.
    fn read_line(&mut self) -> Result<String>;

    /// Wait a bounded time for a line.
    ///
    /// Returns `Ok(None)` when nothing complete arrived within the wait.
    fn poll_line(&mut self) -> Result<Option<String>> {
        if self.has_data()? {
            self.read_line().map(Some)
        } else {
            Ok(None)
        }
    }
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn has_data(&mut self) -> Result<bool> {
        (**self).has_data()
    }

    fn read_line(&mut self) -> Result<String> {
        (**self).read_line()
    }

    fn poll_line(&mut self) -> Result<Option<String>> {
        (**self).poll_line()
    }
}
