//! Echoes its input, rewriting every number as `<n>`.
//!
//! Reads the file named by the first argument, or standard input a line at
//! a time when no argument is given. An end-of-input seen between code
//! points (each line end on the console, the end of a file) is echoed as a
//! newline; one swallowed by a trailing number is not.
//!
//! Run with
//!
//! ```bash
//! echo 'width 80, héight 24 🚀' | cargo run -p pushread --example echo
//! RUST_LOG=pushread=trace cargo run -p pushread --example echo -- input.txt
//! ```

use pushread::{CodePointWriter, ReadError, Reader, ReaderOptions};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run(options: &ReaderOptions) -> Result<(), ReadError> {
    let mut reader = Reader::open(options)?;
    let mut out = CodePointWriter::stdout();

    while !reader.at_eof() {
        match reader.next_byte()? {
            Some(b) if b.is_ascii_digit() => {
                reader.push_back()?;
                let n = reader.read_unsigned_int()?;
                out.write_code_point(u64::from(b'<'))?;
                for digit in n.to_string().bytes() {
                    out.write_code_point(u64::from(digit))?;
                }
                out.write_code_point(u64::from(b'>'))?;
            }
            Some(_) => {
                reader.push_back()?;
                let c = reader.read_code_point()?;
                out.write_code_point(u64::from(c))?;
            }
            None => {
                out.write_code_point(u64::from(b'\n'))?;
                out.flush()?;
            }
        }
    }
    out.flush()
}

fn main() -> std::process::ExitCode {
    init_tracing();

    let options = match std::env::args_os().nth(1) {
        Some(path) => ReaderOptions::file(path),
        None => ReaderOptions::console(),
    };
    match run(&options) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("echo: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}
