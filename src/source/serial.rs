//! Serial port line source
//!
//! Wraps a `serialport` handle. The port is opened in [`SerialLineSource::open`]
//! and closed when the source is dropped, so every exit path releases it
//! exactly once.

use std::io::{ErrorKind, Read};
use std::time::{Duration, Instant};

use serialport::SerialPort;

use super::{LineBuffer, LineSource};
use crate::config::LoggerConfig;
use crate::error::{LoggerError, Result};

/// Size of the scratch buffer for a single blocking read
const READ_CHUNK_SIZE: usize = 256;

/// The part of a serial port the line source needs
///
/// `read` blocks until data arrives or the port timeout expires, reporting
/// the timeout as [`ErrorKind::TimedOut`].
pub trait PortRead: Read {
    /// Bytes the driver already holds, readable without blocking
    fn bytes_to_read(&self) -> Result<u32>;
}

impl PortRead for Box<dyn SerialPort> {
    fn bytes_to_read(&self) -> Result<u32> {
        Ok(SerialPort::bytes_to_read(&**self)?)
    }
}

/// Line source backed by a serial device
pub struct SerialLineSource<P = Box<dyn SerialPort>> {
    port: P,
    port_name: String,
    read_timeout: Duration,
    buffer: LineBuffer,
}

impl<P> std::fmt::Debug for SerialLineSource<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialLineSource")
            .field("port_name", &self.port_name)
            .field("read_timeout", &self.read_timeout)
            .field("buffered_bytes", &self.buffer.len())
            .finish()
    }
}

impl SerialLineSource {
    /// Open the configured port with its baud rate and read timeout
    pub fn open(config: &LoggerConfig) -> Result<Self> {
        let port = serialport::new(config.port.as_str(), config.baud_rate)
            .timeout(config.read_timeout)
            .open()
            .map_err(|source| LoggerError::DeviceOpen {
                port: config.port.clone(),
                source,
            })?;

        tracing::debug!(
            port = %config.port,
            baud_rate = config.baud_rate,
            timeout_ms = config.read_timeout.as_millis() as u64,
            "Opened serial port"
        );

        Ok(Self::with_port(port, config.port.clone(), config.read_timeout))
    }
}

impl<P: PortRead> SerialLineSource<P> {
    /// Wrap an already open port
    pub fn with_port(port: P, port_name: impl Into<String>, read_timeout: Duration) -> Self {
        Self {
            port,
            port_name: port_name.into(),
            read_timeout,
            buffer: LineBuffer::new(),
        }
    }

    /// Name of the underlying device
    pub fn port_name(&self) -> &str {
        &self.port_name
    }

    /// Move whatever the driver already holds into the line buffer, without
    /// blocking.
    fn drain_available(&mut self) -> Result<()> {
        let available = self.port.bytes_to_read()? as usize;
        if available == 0 {
            return Ok(());
        }
        let mut chunk = vec![0u8; available];
        let n = self.port.read(&mut chunk)?;
        self.buffer.extend(&chunk[..n]);
        Ok(())
    }

    /// One read that blocks until data arrives or the port timeout expires
    fn read_once(&mut self) -> Result<()> {
        let mut chunk = [0u8; READ_CHUNK_SIZE];
        match self.port.read(&mut chunk) {
            Ok(n) => {
                self.buffer.extend(&chunk[..n]);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::TimedOut => Ok(()),
            Err(e) if e.kind() == ErrorKind::Interrupted => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl<P: PortRead> LineSource for SerialLineSource<P> {
    fn has_data(&mut self) -> Result<bool> {
        self.drain_available()?;
        Ok(self.buffer.has_line())
    }

    fn read_line(&mut self) -> Result<String> {
        let deadline = Instant::now() + self.read_timeout;
        loop {
            if let Some(line) = self.buffer.take_line() {
                return line;
            }
            if Instant::now() >= deadline {
                return self.buffer.take_partial();
            }
            self.read_once()?;
        }
    }

    fn poll_line(&mut self) -> Result<Option<String>> {
        if !self.buffer.has_line() {
            self.drain_available()?;
        }
        if !self.buffer.has_line() {
            self.read_once()?;
        }
        self.buffer.take_line().transpose()
    }
}

impl<P> Drop for SerialLineSource<P> {
    fn drop(&mut self) {
        if !self.buffer.is_empty() {
            tracing::debug!(
                bytes = self.buffer.len(),
                "Discarding incomplete line on close"
            );
        }
        tracing::debug!(port = %self.port_name, "Closed serial port");
    }
}
