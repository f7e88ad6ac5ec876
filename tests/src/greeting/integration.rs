#![cfg(test)]
use std::io::{self, Write};

use greeter_common::error::GreetError;
use greeter_common::greeting::GREETING;
use greeter_core::greeter::{self, Greeter};

/// The bytes the core writes are the common crate's literal plus one newline.
#[test]
fn core_writes_common_greeting() {
    let mut out: Vec<u8> = Vec::new();
    let result = greeter::greet(&mut out);

    assert!(result.is_ok(), "Greeting failed: {:?}", result.err());
    assert_eq!(out, format!("{GREETING}\n").into_bytes());
}

#[test]
fn closed_stream_surfaces_as_write_error() {
    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let err = Greeter::new(Closed).run().err().expect("write should fail");
    assert!(matches!(err, GreetError::Write(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    assert!(err.to_string().starts_with("failed to write greeting"));
}

#[test]
fn zero_length_writes_are_reported() {
    struct Full;

    impl Write for Full {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Ok(0)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    match greeter::greet(&mut Full) {
        Err(GreetError::Write(e)) => assert_eq!(e.kind(), io::ErrorKind::WriteZero),
        Ok(()) => panic!("a stream that accepts nothing must not report success"),
    }
}
