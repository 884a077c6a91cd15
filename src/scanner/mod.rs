//! The lexing layer: DFA-driven, resumable tokenizer (spec.md §4.2).
//!
//! [`Scanner`] holds exactly the state needed to resume mid-token across
//! `Pending` boundaries: the DFA state, the lexing context, the lexeme
//! accumulated so far, and the last state that was itself accepting (for
//! greedy longest-match with pushback on overshoot).

pub mod dfa;
mod strings;

use dfa::{Accept, CharClass, ScanState};

use crate::char_source::{CharSource, Pull};
use crate::error::Fatal;
use crate::token::{Token, TokenKind};

/// Lexing context: which alphabet [`dfa::classify`] should use right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Default,
    InString,
    AfterBackslash,
}

/// Result of one [`Scanner::get`] call.
#[derive(Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    Token(Token),
    /// The source has no more buffered input right now; call again once
    /// more has been fed.
    Pending,
    /// A dead DFA transition was hit with no accepting state to fall back
    /// on, or true end-of-stream arrived mid-token.
    Error,
}

/// Resumable tokenizer. One `Scanner` is consumed top to bottom by a single
/// document; it has no notion of "reset to scan another value".
#[derive(Debug)]
pub struct Scanner {
    state: ScanState,
    context: Context,
    /// The most recent state along this lexeme's path that was itself
    /// accepting, paired with how many characters past it have since been
    /// read (the overshoot, which gets pushed back on fallback).
    last_final: Option<(ScanState, usize)>,
    lex: Vec<char>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            state: ScanState::Start,
            context: Context::Default,
            last_final: None,
            lex: Vec::new(),
        }
    }

    fn reset(&mut self) {
        self.state = ScanState::Start;
        self.context = Context::Default;
        self.last_final = None;
        self.lex.clear();
    }

    /// Pull the next token from `source`, resuming exactly where the
    /// previous `Pending` left off.
    pub fn get(&mut self, source: &mut dyn CharSource) -> Result<ScanOutcome, Fatal> {
        loop {
            match source.next()? {
                Pull::Pending => return Ok(ScanOutcome::Pending),
                Pull::Eos => return Ok(self.finish_at_eos()),
                Pull::Char(c) => {
                    let class = dfa::classify(c, self.context);
                    match dfa::transition(self.state, class) {
                        Some(next) => {
                            self.state = next;
                            self.context = self.context_after(next);
                            // BLANK outside a string is consumed without
                            // contributing to `lex` (spec.md §4.2 step 4);
                            // string bodies never classify as BLANK, so this
                            // never drops whitespace that is actually part
                            // of a string's content.
                            if class != CharClass::Blank {
                                self.lex.push(c);
                                if dfa::accept_kind(next).is_some() {
                                    self.last_final = Some((next, 0));
                                } else if let Some((_, overshoot)) = &mut self.last_final {
                                    *overshoot += 1;
                                }
                            }
                        }
                        None => return Ok(self.fall_back_or_error(source, c)),
                    }
                }
            }
        }
    }

    /// Every state belongs to exactly one context, independent of how it
    /// was reached, so the next context is a pure function of the state
    /// just entered.
    fn context_after(&self, state: ScanState) -> Context {
        match state {
            ScanState::StrBody => Context::InString,
            ScanState::StrEsc => Context::AfterBackslash,
            _ => Context::Default,
        }
    }

    fn fall_back_or_error(&mut self, source: &mut dyn CharSource, dead_char: char) -> ScanOutcome {
        match self.last_final.take() {
            Some((final_state, overshoot)) => {
                // Push back the dead character plus everything read past the
                // last accepting state, then commit the lexeme up to there.
                let mut pushback: Vec<char> = Vec::with_capacity(overshoot + 1);
                for _ in 0..overshoot {
                    pushback.push(self.lex.pop().expect("overshoot tracked against lexeme"));
                }
                pushback.push(dead_char);
                pushback.reverse();
                source.unget(&pushback);
                self.emit(final_state)
            }
            None => {
                self.reset();
                ScanOutcome::Error
            }
        }
    }

    fn finish_at_eos(&mut self) -> ScanOutcome {
        match self.last_final.take() {
            // Input read past the last accepting state with nothing left to
            // push back to (e.g. a number cut off mid-fraction, `"1."` at
            // true end-of-stream): the token never completed.
            Some((_, overshoot)) if overshoot > 0 => {
                self.reset();
                ScanOutcome::Error
            }
            Some((final_state, _)) => self.emit(final_state),
            None if self.lex.is_empty() => {
                self.reset();
                ScanOutcome::Token(Token::eos())
            }
            None => {
                self.reset();
                ScanOutcome::Error
            }
        }
    }

    fn emit(&mut self, final_state: ScanState) -> ScanOutcome {
        let token = match dfa::accept_kind(final_state).expect("final_state must be accepting") {
            Accept::Punct => {
                let c = self.lex[0];
                Token::punct(dfa::remap_punct(c))
            }
            Accept::StringEnd => {
                let text = strings::decode(&self.lex);
                Token::new(TokenKind::String, text)
            }
            Accept::Bare => {
                let text: String = self.lex.iter().collect();
                Token::new(TokenKind::Other, text)
            }
        };
        self.reset();
        ScanOutcome::Token(token)
    }
}
