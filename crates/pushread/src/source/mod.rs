//! Byte sources with a single level of pushback.
//!
//! Every scanner in this crate is written against [`ByteSource`]: read one
//! byte or learn that input has ended, and put the most recently read byte
//! back. Two implementations exist:
//!
//! - [`FileSource`] reads a seekable handle sequentially. Pushback is a
//!   one-byte seek backwards ([`SeekBack`]), so the handle position is the
//!   only state.
//! - [`ConsoleSource`] reads an interactive stream line by line. The rest
//!   of the current line is held in memory together with a rollback slot
//!   remembering the last byte taken from it.
//!
//! Only one pushback may be pending at a time. Calling
//! [`push_back`](ByteSource::push_back) twice without a read in between,
//! or before any read, is a caller bug: the file source then moves further
//! back than intended (or fails to seek), and the console source ignores
//! the second call.

mod console;
mod file;

use std::{
    fs::File,
    io::{self, BufReader, StdinLock},
};

pub use console::{ConsoleSource, LineState, Rollback};
pub use file::{FileSource, SeekBack};

use crate::{ReadError, StreamMode};

/// A stream of bytes that can give back the last byte it produced.
pub trait ByteSource {
    /// Takes the next byte, or returns `None` at end-of-input.
    fn next_byte(&mut self) -> Result<Option<u8>, ReadError>;

    /// Restores the most recently read byte so the next
    /// [`next_byte`](ByteSource::next_byte) returns it again.
    fn push_back(&mut self) -> Result<(), ReadError>;

    /// Whether end-of-input is final: every further read returns `None`
    /// without consulting the input. The scanners return `0` straight away
    /// once this holds.
    ///
    /// Sources that prompt for more input are never finished.
    fn is_finished(&self) -> bool;

    /// Whether the input has run out as of the last read.
    ///
    /// Unlike [`is_finished`](ByteSource::is_finished) this may turn false
    /// again when an interactive stream delivers more data.
    fn at_eof(&self) -> bool {
        self.is_finished()
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>, ReadError> {
        (**self).next_byte()
    }

    #[inline]
    fn push_back(&mut self) -> Result<(), ReadError> {
        (**self).push_back()
    }

    #[inline]
    fn is_finished(&self) -> bool {
        (**self).is_finished()
    }

    #[inline]
    fn at_eof(&self) -> bool {
        (**self).at_eof()
    }
}

/// The byte source a process selects at start-up.
#[derive(Debug)]
pub enum Source {
    /// Buffered file input.
    File(FileSource<BufReader<File>>),
    /// Line-at-a-time standard input.
    Console(ConsoleSource<StdinLock<'static>>),
}

impl Source {
    /// Opens the source described by `mode`.
    pub fn open(mode: &StreamMode) -> Result<Self, ReadError> {
        match mode {
            StreamMode::File(path) => {
                let file = File::open(path).map_err(|source| ReadError::Open {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), "reading from file");
                Ok(Source::File(FileSource::new(BufReader::new(file))))
            }
            StreamMode::Console => {
                tracing::debug!("reading from standard input");
                Ok(Source::Console(ConsoleSource::new(io::stdin().lock())))
            }
        }
    }
}

impl ByteSource for Source {
    fn next_byte(&mut self) -> Result<Option<u8>, ReadError> {
        match self {
            Source::File(file) => file.next_byte(),
            Source::Console(console) => console.next_byte(),
        }
    }

    fn push_back(&mut self) -> Result<(), ReadError> {
        match self {
            Source::File(file) => file.push_back(),
            Source::Console(console) => console.push_back(),
        }
    }

    fn is_finished(&self) -> bool {
        match self {
            Source::File(file) => file.is_finished(),
            Source::Console(console) => console.is_finished(),
        }
    }

    fn at_eof(&self) -> bool {
        match self {
            Source::File(file) => file.at_eof(),
            Source::Console(console) => console.at_eof(),
        }
    }
}
