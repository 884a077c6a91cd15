//! Token kinds emitted by the scanner and consumed by the parser (spec.md §3).

use std::fmt;

/// Terminals the parser consumes. `Eos` is the synthetic end-of-input
/// terminal; the scanner's own `Pending`/`Error` results are not token
/// kinds — they short-circuit before a `Token` is ever produced (see
/// [`crate::scanner::ScanOutcome`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Colon,
    /// A quoted string literal; the payload carries the decoded text.
    String,
    /// A bare `true` / `false` / `null` keyword or a number literal; the
    /// payload carries the raw lexeme text, undecoded.
    Other,
    Eos,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::String => "STRING",
            TokenKind::Other => "OTHER",
            TokenKind::Eos => "EOS",
        };
        write!(f, "{s}")
    }
}

/// A scanned token: a kind plus whatever text payload it carries.
///
/// Punctuation tokens carry an empty payload; `String` carries the decoded
/// text (escapes resolved); `Other` carries the raw lexeme (`"true"`,
/// `"-1.5e3"`, ...) exactly as written, case preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn punct(kind: TokenKind) -> Self {
        Self {
            kind,
            text: String::new(),
        }
    }

    pub fn eos() -> Self {
        Self {
            kind: TokenKind::Eos,
            text: String::new(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}({:?})", self.kind, self.text)
        }
    }
}
