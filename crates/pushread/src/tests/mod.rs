
use std::io::Cursor;

use crate::{ByteSource, ConsoleSource, FileSource};

pub(crate) fn file(bytes: &[u8]) -> FileSource<Cursor<Vec<u8>>> {
    FileSource::new(Cursor::new(bytes.to_vec()))
}

/// Console source over `bytes` typed as one line.
pub(crate) fn console(bytes: &[u8]) -> ConsoleSource<Cursor<Vec<u8>>> {
    let mut line = bytes.to_vec();
    line.push(b'\n');
    ConsoleSource::new(Cursor::new(line))
}

/// Reads raw bytes until the source reports end-of-input.
pub(crate) fn rest<S: ByteSource>(source: &mut S) -> Vec<u8> {
    let mut out = Vec::new();
    while let Some(b) = source.next_byte().unwrap() {
        out.push(b);
    }
    out
}

pub(crate) fn quickcheck_tests() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}
