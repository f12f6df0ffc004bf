#![no_main]
use std::io::Cursor;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pushread::{ByteSource, ConsoleSource, FileSource, Reader, encode_code_point};

#[derive(Debug, Arbitrary)]
enum Op {
    NextByte,
    PushBack,
    ReadUnsignedInt,
    ReadCodePoint,
    RoundTrip(u32),
}

#[derive(Debug, Arbitrary)]
struct Input {
    bytes: Vec<u8>,
    ops: Vec<Op>,
}

/// Straight-line model of a file source: a slice and a position. Code
/// points are checked against `std`'s decoder when the input is valid
/// UTF-8.
struct Model<'a> {
    bytes: &'a [u8],
    text: Option<&'a str>,
    pos: usize,
    finished: bool,
}

impl Model<'_> {
    fn next_byte(&mut self) -> Option<u8> {
        if self.finished {
            return None;
        }
        match self.bytes.get(self.pos) {
            Some(&b) => {
                self.pos += 1;
                Some(b)
            }
            None => {
                self.finished = true;
                None
            }
        }
    }

    fn read_unsigned_int(&mut self) -> u64 {
        let mut value = 0u64;
        let mut seen = false;
        while let Some(b) = self.next_byte() {
            if b.is_ascii_digit() {
                value = value.wrapping_mul(10).wrapping_add(u64::from(b - b'0'));
                seen = true;
            } else if seen {
                self.pos -= 1;
                break;
            }
        }
        value
    }
}

fn run(input: Input) {
    let mut reader = Reader::new(FileSource::new(Cursor::new(input.bytes.as_slice())));
    let mut model = Model {
        bytes: &input.bytes,
        text: std::str::from_utf8(&input.bytes).ok(),
        pos: 0,
        finished: false,
    };
    // Console sources must never panic, whatever the call order.
    let mut console = ConsoleSource::new(Cursor::new(input.bytes.as_slice()));
    let mut can_push_back = false;

    for op in input.ops {
        match op {
            Op::NextByte => {
                let got = reader.next_byte().unwrap();
                assert_eq!(got, model.next_byte());
                can_push_back = got.is_some();
                let _ = console.next_byte();
            }
            Op::PushBack => {
                if can_push_back {
                    reader.push_back().unwrap();
                    model.pos -= 1;
                }
                can_push_back = false;
                let _ = console.push_back();
            }
            Op::ReadUnsignedInt => {
                assert_eq!(reader.read_unsigned_int().unwrap(), model.read_unsigned_int());
                can_push_back = false;
                let _ = Reader::new(&mut console).read_unsigned_int();
            }
            Op::ReadCodePoint => {
                let got = reader.read_code_point().unwrap();
                let pos = usize::try_from(reader.source().get_ref().position()).unwrap();
                if model.finished {
                    assert_eq!(got, 0);
                    assert_eq!(pos, model.pos);
                } else if let Some(c) = model
                    .text
                    .and_then(|t| t.get(model.pos..))
                    .map(|rest| rest.chars().next())
                {
                    assert_eq!(got, c.map_or(0, u32::from));
                    assert_eq!(pos, model.pos + c.map_or(0, char::len_utf8));
                } else {
                    assert!((1..=4).contains(&(pos - model.pos)) || pos == model.bytes.len());
                }
                model.pos = pos;
                model.finished = reader.is_finished();
                can_push_back = false;
                let _ = Reader::new(&mut console).read_code_point();
            }
            Op::RoundTrip(value) => {
                let value = value & 0x1F_FFFF;
                let mut buf = [0; 4];
                let bytes = encode_code_point(u64::from(value), &mut buf);
                let mut src = FileSource::new(Cursor::new(bytes));
                assert_eq!(pushread::read_code_point(&mut src).unwrap(), value);
            }
        }
    }
}

fuzz_target!(|input: Input| run(input));
