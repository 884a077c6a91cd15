//! Table-driven shift/reduce parser over the scanner's token stream
//! (spec.md §5, §6).
//!
//! [`Parser`] owns a [`crate::scanner::Scanner`] and a state stack; it
//! fetches a token only when the stack top has no pending reduce, which
//! is what makes [`Parser::parse`] cleanly resumable across `Pending` —
//! the scanner's own partial-token state carries the rest.

pub mod events;
pub mod table;

use table::{Reduction, ShiftEvent, State};

use crate::char_source::CharSource;
use crate::error::{Error, Fatal};
use crate::parser::events::{EventSink, Scalar};
use crate::scanner::{ScanOutcome, Scanner};
use crate::token::{Token, TokenKind};

/// Result of one [`Parser::parse`] call.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A complete document was recognized and nothing but end-of-stream
    /// followed.
    Ok,
    /// Not enough input has arrived yet; call again once more is fed.
    Pending,
    Error(Error),
}

/// Resumable parser. Like [`Scanner`], meant to be driven to a single
/// terminal result (`Ok` or `Error`) and then discarded.
#[derive(Debug)]
pub struct Parser {
    scanner: Scanner,
    stack: Vec<State>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            scanner: Scanner::new(),
            stack: vec![State::Start],
        }
    }

    /// Drive the parser as far as the currently available input allows,
    /// firing `sink` callbacks for whatever structure is recognized along
    /// the way.
    pub fn parse(
        &mut self,
        source: &mut dyn CharSource,
        sink: &mut dyn EventSink,
    ) -> Result<Outcome, Fatal> {
        loop {
            let top = *self.stack.last().expect("stack is never empty");

            if let Some(r) = table::reduction(top) {
                self.reduce(r)?;
                continue;
            }

            match self.scanner.get(source)? {
                ScanOutcome::Pending => return Ok(Outcome::Pending),
                ScanOutcome::Error => return Ok(Outcome::Error(Error::Lexical)),
                ScanOutcome::Token(tok) => {
                    if top == State::StartDone {
                        return Ok(if tok.kind == TokenKind::Eos {
                            Outcome::Ok
                        } else {
                            Outcome::Error(Error::TrailingJunk)
                        });
                    }

                    match table::shift(top, tok.kind) {
                        Some(next) => {
                            self.fire_shift_event(next, &tok, sink);
                            self.stack.push(next);
                        }
                        None => {
                            let err = if tok.kind == TokenKind::Eos {
                                Error::PrematureEos
                            } else {
                                Error::Syntax
                            };
                            return Ok(Outcome::Error(err));
                        }
                    }
                }
            }
        }
    }

    fn reduce(&mut self, r: Reduction) -> Result<(), Fatal> {
        let new_len = self
            .stack
            .len()
            .checked_sub(r.pop)
            .ok_or(Fatal::Internal("state stack underflow during reduce"))?;
        self.stack.truncate(new_len);
        let revealed = *self
            .stack
            .last()
            .ok_or(Fatal::Internal("state stack emptied by reduce"))?;
        let next = table::goto_(revealed, r.nonterm)
            .ok_or(Fatal::Internal("missing goto table entry"))?;
        self.stack.push(next);
        Ok(())
    }

    fn fire_shift_event(&self, target: State, tok: &Token, sink: &mut dyn EventSink) {
        match table::shift_event(target) {
            ShiftEvent::None => {}
            ShiftEvent::ObjStart => sink.obj_start(),
            ShiftEvent::ObjEnd => sink.obj_end(),
            ShiftEvent::ArrStart => sink.array_start(),
            ShiftEvent::ArrEnd => sink.array_end(),
            ShiftEvent::Key => sink.key(&tok.text),
            ShiftEvent::ObjPrimitive => sink.obj_primitive(Scalar {
                kind: tok.kind,
                text: &tok.text,
            }),
            ShiftEvent::ArrPrimitive => sink.array_primitive(Scalar {
                kind: tok.kind,
                text: &tok.text,
            }),
        }
    }
}
