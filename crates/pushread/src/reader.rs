use crate::{ByteSource, ReadError, ReaderOptions, Source, number, utf8};

/// Single owner of all input state: the byte source, its line buffer and
/// rollback slot (console) or its file position (file), and the finished
/// flag.
///
/// # Examples
///
/// ```rust
/// use pushread::{ConsoleSource, Reader};
///
/// let mut reader = Reader::new(ConsoleSource::new(&b"12a34\n"[..]));
/// assert_eq!(reader.read_unsigned_int()?, 12);
/// assert_eq!(reader.next_byte()?, Some(b'a'));
/// assert_eq!(reader.read_unsigned_int()?, 34);
/// # Ok::<(), pushread::ReadError>(())
/// ```
#[derive(Debug)]
pub struct Reader<S> {
    source: S,
}

impl Reader<Source> {
    /// Opens the source selected by `options`.
    #[tracing::instrument(level = "debug", skip_all, fields(mode = ?options.mode))]
    pub fn open(options: &ReaderOptions) -> Result<Self, ReadError> {
        Source::open(&options.mode).map(Self::new)
    }
}

impl<S: ByteSource> Reader<S> {
    /// Wraps an existing source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Takes the next raw byte, `None` at end-of-input.
    #[inline]
    pub fn next_byte(&mut self) -> Result<Option<u8>, ReadError> {
        self.source.next_byte()
    }

    /// Restores the byte returned by the last [`next_byte`](Self::next_byte).
    ///
    /// Only one byte can be pending; see [`ByteSource`] for what happens
    /// otherwise.
    #[inline]
    pub fn push_back(&mut self) -> Result<(), ReadError> {
        self.source.push_back()
    }

    /// See [`number::read_unsigned_int`].
    pub fn read_unsigned_int(&mut self) -> Result<u64, ReadError> {
        number::read_unsigned_int(&mut self.source)
    }

    /// See [`utf8::read_code_point`].
    pub fn read_code_point(&mut self) -> Result<u32, ReadError> {
        utf8::read_code_point(&mut self.source)
    }

    /// Whether input has ended for good. See [`ByteSource::is_finished`].
    pub fn is_finished(&self) -> bool {
        self.source.is_finished()
    }

    /// Whether input has run out as of the last read. See
    /// [`ByteSource::at_eof`].
    pub fn at_eof(&self) -> bool {
        self.source.at_eof()
    }
}

impl<S> Reader<S> {
    /// Borrows the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Unwraps the underlying source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{ConsoleSource, FileSource, StreamMode};

    #[test]
    fn open_reports_missing_file() {
        let options = ReaderOptions::file("/definitely/not/here.txt");
        let err = Reader::open(&options).unwrap_err();
        assert!(matches!(err, ReadError::Open { ref path, .. } if path.ends_with("here.txt")));
        assert!(err.to_string().starts_with("cannot open /definitely/not/here.txt"));
    }

    #[test]
    fn open_console_by_default() {
        let reader = Reader::open(&ReaderOptions::default()).unwrap();
        assert!(matches!(reader.source(), Source::Console(_)));
        assert_eq!(ReaderOptions::default().mode, StreamMode::Console);
    }

    #[test]
    fn numbers_and_code_points_interleave() {
        let mut reader = Reader::new(FileSource::new(Cursor::new("7€8".as_bytes().to_vec())));
        assert_eq!(reader.read_unsigned_int().unwrap(), 7);
        assert_eq!(reader.read_code_point().unwrap(), 0x20AC);
        assert_eq!(reader.read_unsigned_int().unwrap(), 8);
        assert!(reader.is_finished());
    }

    #[test]
    fn reader_over_borrowed_source() {
        let mut console = ConsoleSource::new(&b"5 6\n"[..]);
        {
            let mut reader = Reader::new(&mut console);
            assert_eq!(reader.read_unsigned_int().unwrap(), 5);
        }
        assert_eq!(console.pending().collect::<Vec<_>>(), b" 6");
    }
}
