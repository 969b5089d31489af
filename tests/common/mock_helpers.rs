//! Scripted line source for driving sessions without hardware

use std::collections::VecDeque;

use serial_logger::{LineSource, LoggerError, Result, StopHandle};

/// One step of a scripted serial stream
#[derive(Debug)]
pub enum Step {
    /// A complete line arrives
    Line(String),
    /// The bounded wait expires with nothing complete
    Idle,
    /// The next read fails
    Fail(LoggerError),
}

/// Plays back a fixed sequence of steps, then stops the session like an
/// operator pressing Ctrl+C.
pub struct ScriptedLineSource {
    steps: VecDeque<Step>,
    stop: StopHandle,
    polls: usize,
}

impl ScriptedLineSource {
    pub fn new(steps: impl IntoIterator<Item = Step>, stop: StopHandle) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            stop,
            polls: 0,
        }
    }

    /// Convenience for a stream made only of lines
    pub fn from_lines(lines: &[&str], stop: StopHandle) -> Self {
        Self::new(lines.iter().map(|l| Step::Line(l.to_string())), stop)
    }

    pub fn polls(&self) -> usize {
        self.polls
    }
}

impl LineSource for ScriptedLineSource {
    fn has_data(&mut self) -> Result<bool> {
        Ok(matches!(self.steps.front(), Some(Step::Line(_))))
    }

    fn read_line(&mut self) -> Result<String> {
        match self.steps.pop_front() {
            Some(Step::Line(line)) => Ok(line),
            Some(Step::Fail(err)) => Err(err),
            Some(Step::Idle) | None => Ok(String::new()),
        }
    }

    fn poll_line(&mut self) -> Result<Option<String>> {
        self.polls += 1;
        match self.steps.pop_front() {
            Some(Step::Line(line)) => Ok(Some(line)),
            Some(Step::Idle) => Ok(None),
            Some(Step::Fail(err)) => Err(err),
            None => {
                self.stop.stop();
                Ok(None)
            }
        }
    }
}

/// A decode error as the serial source would produce it
pub fn decode_error() -> LoggerError {
    String::from_utf8(vec![0xff]).unwrap_err().into()
}
