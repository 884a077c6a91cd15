//! Error taxonomy (spec.md §7).
//!
//! `Error` is the single surface result for anything the caller should
//! expect and recover from (bad input). `Fatal` is out-of-band: it never
//! comes back from `Scanner::get` or `Parser::parse`, only from the I/O
//! boundary and from internal invariant checks that indicate a bug in the
//! parse table rather than in the input.

use std::fmt;

/// Lexical or syntactic error, collapsed to a single surface result.
///
/// `LexicalError`, `SyntaxError` and `PrematureEos` from spec.md §7 all map
/// to this one enum; diagnostics (position, offending token) are optional
/// per the spec and are not tracked here — recovery is not attempted and
/// the reader is single-shot after an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The scanner hit a dead DFA state with no prior accepting state, or
    /// reached true end-of-stream with a partial, not-yet-accepted token.
    Lexical,
    /// The parser's action table returned an error cell for the current
    /// (state, lookahead) pair.
    Syntax,
    /// End-of-stream was declared while the parser was mid-derivation.
    PrematureEos,
    /// A complete value parsed successfully but non-whitespace input
    /// followed it before end-of-stream.
    TrailingJunk,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Error::Lexical => "lexical error: unrecognized or unterminated token",
            Error::Syntax => "syntax error: unexpected token",
            Error::PrematureEos => "premature end of stream: document incomplete",
            Error::TrailingJunk => "trailing data after a complete JSON value",
        };
        write!(f, "{s}")
    }
}

impl std::error::Error for Error {}

/// Out-of-band failures: never folded into `Pending`/`Error`/`Ok`.
#[derive(Debug)]
pub enum Fatal {
    /// The underlying byte source raised a hard I/O failure.
    Io(std::io::Error),
    /// A programming-model violation in the parser driver: stack
    /// underflow, a missing goto entry, or a non-empty stack at the point
    /// the start symbol should reduce with an empty stack. Indicates a bug
    /// in the parse table, not in the input.
    Internal(&'static str),
}

impl fmt::Display for Fatal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fatal::Io(e) => write!(f, "I/O error: {e}"),
            Fatal::Internal(msg) => write!(f, "internal invariant violated: {msg}"),
        }
    }
}

impl std::error::Error for Fatal {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Fatal::Io(e) => Some(e),
            Fatal::Internal(_) => None,
        }
    }
}

impl From<std::io::Error> for Fatal {
    fn from(e: std::io::Error) -> Self {
        Fatal::Io(e)
    }
}
