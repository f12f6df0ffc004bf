use std::{
    collections::VecDeque,
    io::{BufRead, ErrorKind},
};

use bstr::ByteSlice;

use super::ByteSource;
use crate::ReadError;

/// Where a [`ConsoleSource`] stands with respect to the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    /// The last line has been used up and its end reported. The next read
    /// prompts for a new line.
    AwaitingLine,
    /// A line was prompted for and has not been reported as ended yet.
    Reading,
}

/// The byte a console pushback would restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rollback {
    /// Nothing to restore.
    Empty,
    /// The last byte taken from the line.
    Pending(u8),
}

/// Line-at-a-time reader over an interactive stream.
///
/// Bytes are served from an in-memory copy of the current line. When the
/// line runs out the source first reports end-of-input once, and only the
/// read after that prompts for the next line. A consumer therefore sees
/// every line end as an end-of-input it can stop on.
///
/// The line terminator itself is not part of the line; a `\r` before it
/// is.
#[derive(Debug)]
pub struct ConsoleSource<R> {
    input: R,
    line: VecDeque<u8>,
    rollback: Rollback,
    state: LineState,
    eof: bool,
}

impl<R: BufRead> ConsoleSource<R> {
    /// Creates a source that prompts `input` on its first read.
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: VecDeque::new(),
            rollback: Rollback::Empty,
            state: LineState::AwaitingLine,
            eof: false,
        }
    }

    /// Reads one line of any length from the input and installs it in
    /// place of the previous one.
    ///
    /// Allocation failure while the line grows aborts the process.
    fn prompt(&mut self) -> Result<(), ReadError> {
        self.state = LineState::Reading;

        let mut buf = Vec::with_capacity(1);
        loop {
            match self.input.read_until(b'\n', &mut buf) {
                Ok(_) => break,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        self.eof = buf.last() != Some(&b'\n');
        if self.eof {
            tracing::debug!("end of console input");
        } else {
            buf.pop();
        }
        tracing::trace!(line = %buf.as_bstr(), "prompted line");
        self.line = VecDeque::from(buf);
        Ok(())
    }
}

impl<R> ConsoleSource<R> {
    /// Line progress of the source.
    pub fn state(&self) -> LineState {
        self.state
    }

    /// The byte a pushback would restore right now.
    pub fn rollback(&self) -> Rollback {
        self.rollback
    }

    /// Unconsumed bytes of the current line.
    pub fn pending(&self) -> impl ExactSizeIterator<Item = u8> + '_ {
        self.line.iter().copied()
    }
}

impl<R: BufRead> ByteSource for ConsoleSource<R> {
    fn next_byte(&mut self) -> Result<Option<u8>, ReadError> {
        if self.line.is_empty() {
            match self.state {
                LineState::AwaitingLine => self.prompt()?,
                LineState::Reading => {
                    self.state = LineState::AwaitingLine;
                    return Ok(None);
                }
            }
        }
        match self.line.pop_front() {
            Some(byte) => {
                self.rollback = Rollback::Pending(byte);
                Ok(Some(byte))
            }
            None => {
                // Freshly prompted line was empty.
                self.rollback = Rollback::Empty;
                Ok(None)
            }
        }
    }

    fn push_back(&mut self) -> Result<(), ReadError> {
        if let Rollback::Pending(byte) = self.rollback {
            self.line.push_front(byte);
            self.rollback = Rollback::Empty;
        }
        Ok(())
    }

    fn is_finished(&self) -> bool {
        false
    }

    fn at_eof(&self) -> bool {
        self.eof && self.line.is_empty()
    }
}
