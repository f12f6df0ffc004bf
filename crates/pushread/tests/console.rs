#![allow(missing_docs)]

mod common;

use std::io::Cursor;

use common::{MIXED, echo_code_points, numbers};
use pushread::{ConsoleSource, LineState, Reader};

fn reader(input: &str) -> Reader<ConsoleSource<Cursor<Vec<u8>>>> {
    Reader::new(ConsoleSource::new(Cursor::new(input.as_bytes().to_vec())))
}

#[test]
fn echo_drops_line_terminators() {
    let mut reader = reader(MIXED);
    assert_eq!(
        echo_code_points(&mut reader).unwrap(),
        MIXED.replace('\n', "").as_bytes()
    );
}

#[test]
fn line_ends_yield_zero_numbers() {
    let mut reader = reader(MIXED);
    // Each line end is one end-of-input; the final prompt finds the stream
    // closed.
    assert_eq!(numbers(&mut reader).unwrap(), [80, 24, 3, 0]);
}

#[test]
fn scenario_12a34() {
    let mut reader = reader("12a34");
    assert_eq!(reader.read_unsigned_int().unwrap(), 12);
    assert_eq!(reader.next_byte().unwrap(), Some(b'a'));
    assert_eq!(reader.read_unsigned_int().unwrap(), 34);
    assert_eq!(reader.read_unsigned_int().unwrap(), 0);
}

#[test]
fn one_end_of_input_per_line() {
    let mut reader = reader("a\nb\n");
    let mut seen = Vec::new();
    for _ in 0..6 {
        seen.push(reader.next_byte().unwrap());
    }
    assert_eq!(seen, [Some(b'a'), None, Some(b'b'), None, None, None]);
    assert_eq!(reader.source().state(), LineState::AwaitingLine);
    assert!(reader.at_eof());
    assert!(!reader.is_finished());
}
