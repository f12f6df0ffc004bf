use std::{
    fs::File,
    io::{self, BufReader, Cursor, ErrorKind, Read, Seek, SeekFrom},
};

use super::ByteSource;
use crate::ReadError;

/// Handles that can step back over the byte they just produced.
///
/// Buffered handles implement this without discarding their buffer, so a
/// pushback after every number costs no extra read.
pub trait SeekBack {
    /// Moves the read position back by one byte.
    fn seek_back(&mut self) -> io::Result<()>;
}

impl<R: Read + Seek> SeekBack for BufReader<R> {
    fn seek_back(&mut self) -> io::Result<()> {
        self.seek_relative(-1)
    }
}

impl<T: AsRef<[u8]>> SeekBack for Cursor<T> {
    fn seek_back(&mut self) -> io::Result<()> {
        self.seek(SeekFrom::Current(-1)).map(drop)
    }
}

impl SeekBack for File {
    fn seek_back(&mut self) -> io::Result<()> {
        self.seek(SeekFrom::Current(-1)).map(drop)
    }
}

/// Sequential reader over a seekable handle.
///
/// Once end-of-file has been seen the source stays finished: further reads
/// return `None` without touching the handle.
#[derive(Debug)]
pub struct FileSource<R> {
    inner: R,
    finished: bool,
}

impl<R: Read + SeekBack> FileSource<R> {
    /// Wraps an already opened handle, positioned where reading starts.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            finished: false,
        }
    }
}

impl<R> FileSource<R> {
    /// Returns the wrapped handle.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwraps the handle.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + SeekBack> ByteSource for FileSource<R> {
    fn next_byte(&mut self) -> Result<Option<u8>, ReadError> {
        if self.finished {
            return Ok(None);
        }
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => {
                    tracing::debug!("end of file");
                    self.finished = true;
                    return Ok(None);
                }
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn push_back(&mut self) -> Result<(), ReadError> {
        self.inner.seek_back()?;
        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}
