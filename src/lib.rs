//! Incremental, resumable streaming JSON reader.
//!
//! Bytes arrive in arbitrarily-sized chunks through [`CharSource`]. The
//! [`scanner`] turns them into tokens, the [`parser`] turns tokens into a
//! stream of structural events (object/array start/end, key, primitive
//! value), and [`dom`] materializes those events into a tree. Every layer is
//! resumable: a call that runs out of buffered input returns `Pending`
//! rather than blocking, and picks up exactly where it left off once more
//! bytes (or a closure signal) arrive.
//!
//! See `SPEC_FULL.md` for the full contract, including the deliberate quirks
//! this reader preserves rather than "fixes" (comma-separated object bodies,
//! lenient `\u` escapes, unpaired surrogate halves).

pub mod char_source;
pub mod dom;
pub mod driver;
pub mod error;
pub mod parser;
pub mod scanner;
pub mod token;

pub use char_source::{ChunkSource, Pull};
pub use dom::Node;
pub use error::{Error, Fatal};
pub use parser::events::EventSink;
pub use parser::{Outcome, Parser};
pub use token::{Token, TokenKind};
