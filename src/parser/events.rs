//! The event interface the parser drives as it recognizes structure
//! (spec.md §6).
//!
//! Every callback is a plain notification; none returns a value, so a
//! sink can never influence the parse itself (only the DOM builder or
//! whatever other consumer is wired up can be picky about what it does
//! with the notifications).

use crate::token::TokenKind;

/// A terminal value as delivered to an event callback: kind plus raw text,
/// same split as [`crate::token::Token`] (strings pre-decoded, everything
/// else verbatim).
#[derive(Debug, Clone, Copy)]
pub struct Scalar<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Structural callbacks the parser fires while recognizing a document.
/// Implement this to build a DOM, stream to a writer, or just count nodes.
pub trait EventSink {
    fn obj_start(&mut self) {}
    fn obj_end(&mut self) {}
    fn array_start(&mut self) {}
    fn array_end(&mut self) {}
    /// An object key (always a decoded string).
    fn key(&mut self, text: &str) {
        let _ = text;
    }
    /// A scalar value appearing as an object member's value.
    fn obj_primitive(&mut self, value: Scalar<'_>) {
        let _ = value;
    }
    /// A scalar value appearing as an array element.
    fn array_primitive(&mut self, value: Scalar<'_>) {
        let _ = value;
    }
}

/// A sink that does nothing; useful for validating input without building
/// a DOM.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {}
