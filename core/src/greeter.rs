//! The **Greeter**: renders the greeting line and hands it to an output stream.
//!
//! The writer is generic so the binary can pass a locked stdout while tests
//! pass an in-memory buffer. The whole line goes out in a single `write_all`
//! followed by one flush; nothing is retried if the stream refuses it.

use std::io::Write;

use greeter_common::error::Result;
use greeter_common::greeting::greeting;
use tracing::{debug, trace};

/// The greeting followed by exactly one `\n`.
pub fn line() -> String {
    format!("{}\n", greeting())
}

/// Writes the greeting line to `out` and flushes it.
pub fn greet<W: Write>(out: &mut W) -> Result<()> {
    let line = line();
    trace!(bytes = line.len(), "writing greeting");
    out.write_all(line.as_bytes())?;
    out.flush()?;
    debug!("greeting written");
    Ok(())
}

/// A greeter that has not written yet.
///
/// [`Greeter::run`] consumes the greeter, so a given greeter can write at most once.
pub struct Greeter<W: Write> {
    out: W,
}

impl<W: Write> Greeter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Performs the write and returns the underlying writer.
    pub fn run(mut self) -> Result<W> {
        greet(&mut self.out)?;
        Ok(self.out)
    }
}
