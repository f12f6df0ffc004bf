//! Decimal scanner for unsigned integers.

use crate::{ByteSource, ReadError};

/// Reads the next run of decimal digits as an unsigned integer.
///
/// Bytes before the first digit are skipped. The first non-digit after the
/// run is pushed back, so the source is left positioned right after the
/// number. Reaching end-of-input returns whatever was accumulated, which is
/// `0` when no digit was seen; a literal `0` and "no number" are therefore
/// indistinguishable. A source whose end-of-input is final (see
/// [`ByteSource::is_finished`]) returns `0` without reading.
///
/// Values that do not fit in a `u64` wrap around.
pub fn read_unsigned_int<S: ByteSource + ?Sized>(source: &mut S) -> Result<u64, ReadError> {
    if source.is_finished() {
        return Ok(0);
    }
    let mut value = 0u64;
    let mut seen_digit = false;
    while let Some(byte) = source.next_byte()? {
        if byte.is_ascii_digit() {
            value = value.wrapping_mul(10).wrapping_add(u64::from(byte - b'0'));
            seen_digit = true;
        } else if seen_digit {
            source.push_back()?;
            break;
        }
    }
    Ok(value)
}
