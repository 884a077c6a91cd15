//! Push-style driver: reads bytes from a blocking [`std::io::Read`] in
//! caller-chosen chunks and feeds them to a [`Parser`] until it produces a
//! terminal result (spec.md §2's "external collaborator", §9's
//! two-closure-signal drain at end-of-stream).
//!
//! This is glue, not part of the core: the core (`char_source`, `scanner`,
//! `parser`, `dom`) never blocks or owns an `io::Read`. Anything embedding
//! the reader in a non-blocking event loop (an async socket, a GUI event
//! handler) would write its own version of this function instead of using
//! it.

use std::fmt;
use std::io::Read;

use log::{debug, trace};

use crate::char_source::ChunkSource;
use crate::dom::{DomBuilder, Node};
use crate::error::{Error, Fatal};
use crate::parser::{Outcome, Parser};

#[derive(Debug)]
pub enum DriveError {
    Parse(Error),
    Fatal(Fatal),
}

impl fmt::Display for DriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveError::Parse(e) => write!(f, "{e}"),
            DriveError::Fatal(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DriveError {}

impl From<Fatal> for DriveError {
    fn from(e: Fatal) -> Self {
        DriveError::Fatal(e)
    }
}

/// Read from `reader` in `chunk_size`-byte pulls, feeding a fresh
/// [`ChunkSource`]/[`Parser`]/[`DomBuilder`] until the document is fully
/// recognized or rejected.
///
/// Once the reader reports EOF, `source.close()` is called exactly once;
/// after that a single further `parser.parse()` call is expected to reach
/// `Ok` or `Error` without reporting `Pending` again — the scanner and
/// parser only ever return `Pending` while the source is still open. A
/// `Pending` surviving a closed source is a table bug, not a caller error,
/// so it is surfaced as [`Fatal::Internal`] rather than looped on forever.
pub fn drive<R: Read>(mut reader: R, chunk_size: usize) -> Result<Node, DriveError> {
    let mut source = ChunkSource::new();
    let mut parser = Parser::new();
    let mut builder = DomBuilder::new();
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut closed = false;

    loop {
        match parser.parse(&mut source, &mut builder)? {
            Outcome::Ok => return Ok(builder.finish()),
            Outcome::Error(e) => return Err(DriveError::Parse(e)),
            Outcome::Pending if closed => {
                return Err(Fatal::Internal(
                    "parser reported Pending after the source was closed",
                )
                .into());
            }
            Outcome::Pending => {
                let n = reader.read(&mut buf).map_err(Fatal::Io)?;
                if n == 0 {
                    debug!("input exhausted, closing source");
                    source.close();
                    closed = true;
                } else {
                    trace!("fed {n} bytes to source");
                    source.feed(&buf[..n]);
                }
            }
        }
    }
}
