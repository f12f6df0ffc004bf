//! Byte-level input with one unit of lookahead.
//!
//! A [`Reader`] sits between a raw byte source and a program that consumes
//! numbers and code points one at a time. It offers:
//!
//! - [`next_byte`](Reader::next_byte) / [`push_back`](Reader::push_back):
//!   single bytes with one level of pushback,
//! - [`read_unsigned_int`](Reader::read_unsigned_int): the next run of
//!   decimal digits,
//! - [`read_code_point`](Reader::read_code_point): the next UTF-8 encoded
//!   code point,
//!
//! and [`write_code_point`] / [`CodePointWriter`] for the way back out.
//!
//! The source is either a file ([`FileSource`]) or standard input read a
//! line at a time ([`ConsoleSource`]), chosen once through
//! [`ReaderOptions`].
//!
//! ```rust,no_run
//! use pushread::{CodePointWriter, Reader, ReaderOptions};
//!
//! let mut reader = Reader::open(&ReaderOptions::file("input.txt"))?;
//! let mut out = CodePointWriter::stdout();
//! while !reader.at_eof() {
//!     let c = reader.read_code_point()?;
//!     out.write_code_point(u64::from(c))?;
//! }
//! # Ok::<(), pushread::ReadError>(())
//! ```

mod error;
pub mod number;
mod options;
mod reader;
mod source;
pub mod utf8;

#[cfg(test)]
mod tests;

pub use error::ReadError;
pub use number::read_unsigned_int;
pub use options::{ReaderOptions, StreamMode};
pub use reader::Reader;
pub use source::{ByteSource, ConsoleSource, FileSource, LineState, Rollback, SeekBack, Source};
pub use utf8::{CodePointWriter, LeadByte, encode_code_point, read_code_point, write_code_point};
