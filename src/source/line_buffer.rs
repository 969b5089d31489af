//! Byte accumulator that splits a serial stream into lines

use crate::error::Result;

/// Buffers raw bytes until a `\n` completes a line
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append bytes received from the device
    pub fn extend(&mut self, bytes: &[u8]) {
        self.pending.extend_from_slice(bytes);
    }

    /// Whether a complete line is waiting
    pub fn has_line(&self) -> bool {
        self.pending.contains(&b'\n')
    }

    /// Number of buffered bytes, complete line or not
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and decode the next complete line.
    ///
    /// The line is consumed even when decoding fails.
    pub fn take_line(&mut self) -> Option<Result<String>> {
        let end = self.pending.iter().position(|&b| b == b'\n')?;
        let line: Vec<u8> = self.pending.drain(..=end).collect();
        Some(decode(line))
    }

    /// Remove and decode everything buffered, terminated or not.
    pub fn take_partial(&mut self) -> Result<String> {
        decode(std::mem::take(&mut self.pending))
    }
}

fn decode(bytes: Vec<u8>) -> Result<String> {
    let mut text = String::from_utf8(bytes)?;
    let trimmed = text.trim_end().len();
    text.truncate(trimmed);
    Ok(text)
}
