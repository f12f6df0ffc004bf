use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure raised by a [`ByteSource`](crate::ByteSource) or a
/// [`Reader`](crate::Reader).
///
/// Running out of input is not an error: it is reported as `None` from
/// [`next_byte`](crate::ByteSource::next_byte) and as `0` from the
/// scanners.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The input file could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        /// Path handed to [`StreamMode::File`](crate::StreamMode::File).
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: io::Error,
    },
    /// Reading, seeking or writing the underlying stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
