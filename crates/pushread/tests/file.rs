#![allow(missing_docs)]

mod common;

use std::io::Write;

use common::{MIXED, echo_code_points, numbers};
use pushread::{Reader, ReaderOptions, Source};
use tempfile::NamedTempFile;

fn open(contents: &[u8]) -> (NamedTempFile, Reader<Source>) {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    let reader = Reader::open(&ReaderOptions::file(file.path())).unwrap();
    (file, reader)
}

#[test]
fn opens_file_mode() {
    let (_file, reader) = open(b"");
    assert!(matches!(reader.source(), Source::File(_)));
}

#[test]
fn echoes_text_unchanged() {
    let (_file, mut reader) = open(MIXED.as_bytes());
    assert_eq!(echo_code_points(&mut reader).unwrap(), MIXED.as_bytes());
}

#[test]
fn reads_every_number() {
    let (_file, mut reader) = open(MIXED.as_bytes());
    // The trailing newline ends the last run, then end-of-file yields 0.
    assert_eq!(numbers(&mut reader).unwrap(), [80, 24, 3, 0]);
}

#[test]
fn scenario_12a34() {
    let (_file, mut reader) = open(b"12a34");
    assert_eq!(reader.read_unsigned_int().unwrap(), 12);
    assert_eq!(reader.next_byte().unwrap(), Some(b'a'));
    assert_eq!(reader.read_unsigned_int().unwrap(), 34);
    assert_eq!(reader.read_unsigned_int().unwrap(), 0);
}

#[test]
fn push_back_across_buffer_refills() {
    let contents: Vec<u8> = (0..20_000u32).map(|i| b'a' + (i % 26) as u8).collect();
    let (_file, mut reader) = open(&contents);
    for expected in &contents {
        let b = reader.next_byte().unwrap();
        assert_eq!(b, Some(*expected));
        reader.push_back().unwrap();
        assert_eq!(reader.next_byte().unwrap(), b);
    }
    assert_eq!(reader.next_byte().unwrap(), None);
}
