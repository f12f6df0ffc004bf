#![allow(missing_docs, dead_code)]

use pushread::{ByteSource, CodePointWriter, ReadError, Reader};

/// Sample input mixing numbers, separators and multi-byte text.
pub const MIXED: &str = "width=80 height=24\nnaïve café 🚀 3\n";

/// Copies every code point of `reader` to a byte vector, the way a program
/// echoing its input would.
pub fn echo_code_points<S: ByteSource>(reader: &mut Reader<S>) -> Result<Vec<u8>, ReadError> {
    let mut out = CodePointWriter::new(Vec::new());
    while !reader.at_eof() {
        let c = reader.read_code_point()?;
        if c != 0 {
            out.write_code_point(u64::from(c))?;
        }
    }
    Ok(out.into_inner())
}

/// Collects every number until input runs out.
pub fn numbers<S: ByteSource>(reader: &mut Reader<S>) -> Result<Vec<u64>, ReadError> {
    let mut out = Vec::new();
    while !reader.at_eof() {
        let n = reader.read_unsigned_int()?;
        out.push(n);
    }
    Ok(out)
}
