//! UTF-8 code point decoding from a [`ByteSource`] and encoding to a
//! [`Write`] sink.
//!
//! Neither direction checks that a value is a Unicode scalar value:
//! surrogates, overlong forms and values past `U+10FFFF` pass through as
//! plain numbers. Malformed input decodes to `0` instead of failing.

use std::io::{self, Stdout, Write};

use crate::{ByteSource, ReadError};

/// What the first byte of a sequence says about its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadByte {
    /// `0xxxxxxx`: a complete one-byte code point.
    Ascii,
    /// `10xxxxxx`: a continuation byte where a lead byte was expected.
    Continuation,
    /// `110xxxxx`, `1110xxxx` or `11110xxx`: this many continuation bytes
    /// follow (1 to 3).
    Multi(u8),
    /// `11111xxx`: not a lead byte in any encoding form. Decoded as a
    /// one-byte sequence carrying the low seven bits.
    Invalid,
}

impl LeadByte {
    /// Classifies `byte` by its high bits.
    #[must_use]
    pub const fn classify(byte: u8) -> Self {
        match byte {
            0x00..=0x7F => LeadByte::Ascii,
            0x80..=0xBF => LeadByte::Continuation,
            0xC0..=0xDF => LeadByte::Multi(1),
            0xE0..=0xEF => LeadByte::Multi(2),
            0xF0..=0xF7 => LeadByte::Multi(3),
            0xF8..=0xFF => LeadByte::Invalid,
        }
    }

    /// Number of continuation bytes that follow this lead byte.
    #[must_use]
    pub const fn continuations(self) -> u8 {
        match self {
            LeadByte::Multi(n) => n,
            LeadByte::Ascii | LeadByte::Continuation | LeadByte::Invalid => 0,
        }
    }
}

#[inline]
const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Reads one UTF-8 encoded code point.
///
/// Returns `0` at end-of-input and for every malformed sequence:
///
/// - a continuation byte in lead position consumes just that byte;
/// - a lead byte followed by anything other than a continuation byte still
///   consumes every position the lead byte announced. Nothing is pushed
///   back and no resynchronisation is attempted.
///
/// End-of-input in a continuation position counts as a malformed byte and
/// the remaining positions are still read.
pub fn read_code_point<S: ByteSource + ?Sized>(source: &mut S) -> Result<u32, ReadError> {
    if source.is_finished() {
        return Ok(0);
    }
    let Some(lead) = source.next_byte()? else {
        return Ok(0);
    };
    let count = match LeadByte::classify(lead) {
        LeadByte::Continuation => {
            tracing::trace!(lead, "continuation byte in lead position");
            return Ok(0);
        }
        LeadByte::Ascii => return Ok(u32::from(lead)),
        class => class.continuations(),
    };

    let mut value = u32::from(lead) & ((1 << (7 - count)) - 1);
    let mut valid = true;
    for _ in 0..count {
        let byte = source.next_byte()?.unwrap_or(0);
        valid &= is_continuation(byte);
        value = (value << 6) | u32::from(byte & 0x3F);
    }
    if !valid {
        tracing::trace!(lead, "malformed utf-8 sequence");
        return Ok(0);
    }
    Ok(value)
}

/// Encodes `value` into `buf` and returns the bytes used.
///
/// The shortest form for `value` is chosen by its magnitude alone:
/// below `0x80` one byte, below `0x800` two, below `0x10000` three and
/// four bytes for anything larger. Bits above the 21 a four-byte sequence
/// can hold are added into the lead byte and wrap.
///
/// ```rust
/// let mut buf = [0; 4];
/// assert_eq!(pushread::encode_code_point(0x20AC, &mut buf), "€".as_bytes());
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn encode_code_point(value: u64, buf: &mut [u8; 4]) -> &[u8] {
    let cont = |shift: u32| 0x80 | ((value >> shift) as u8 & 0x3F);
    if value < 0x80 {
        buf[0] = value as u8;
        &buf[..1]
    } else if value < 0x800 {
        buf[0] = 0xC0 | (value >> 6) as u8;
        buf[1] = cont(0);
        &buf[..2]
    } else if value < 0x1_0000 {
        buf[0] = 0xE0 | (value >> 12) as u8;
        buf[1] = cont(6);
        buf[2] = cont(0);
        &buf[..3]
    } else {
        buf[0] = 0xF0u8.wrapping_add((value >> 18) as u8);
        buf[1] = cont(12);
        buf[2] = cont(6);
        buf[3] = cont(0);
        &buf[..4]
    }
}

/// Writes `value` to `out` as UTF-8. See [`encode_code_point`].
pub fn write_code_point<W: Write + ?Sized>(out: &mut W, value: u64) -> io::Result<()> {
    let mut buf = [0; 4];
    out.write_all(encode_code_point(value, &mut buf))
}

/// Output sink writing code points as they are produced.
#[derive(Debug)]
pub struct CodePointWriter<W> {
    out: W,
}

impl CodePointWriter<Stdout> {
    /// Writer on standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CodePointWriter<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Encodes and writes one code point.
    pub fn write_code_point(&mut self, value: u64) -> Result<(), ReadError> {
        write_code_point(&mut self.out, value)?;
        Ok(())
    }

    /// Flushes the underlying sink.
    pub fn flush(&mut self) -> Result<(), ReadError> {
        self.out.flush()?;
        Ok(())
    }

    /// Unwraps the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
