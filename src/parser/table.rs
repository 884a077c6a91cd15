//! Hand-derived shift/reduce/goto table for the grammar in spec.md §5:
//!
//! ```text
//! Start     -> Object | Array
//! Object    -> '{' '}' | '{' ObjList '}'
//! ObjList   -> STRING ',' Value | ObjList ',' STRING ',' Value
//! Array     -> '[' ']' | '[' ArrayList ']'
//! ArrayList -> Value | ArrayList ',' Value
//! Value     -> STRING | OTHER | Object | Array
//! ```
//!
//! `COLON` is deliberately absent from every production: this grammar uses
//! commas to separate object keys from their values too, so a `:` anywhere
//! is a plain syntax error, not a typo in this table.
//!
//! States that complete `Value -> Object .` or `Value -> Array .` are
//! identical regardless of where the composite value occurred — state 9
//! (`ValueCompositeDone`) is shared by all four such positions, the same
//! way an LALR construction would merge those item sets. The reduce at
//! that state does not consult the lookahead: the table has no other
//! action defined there, so any token reaching it is unambiguous.
//!
//! Every reduce state below is a *pure* reduce: it has no competing shift
//! action, so [`reduction`] does not need to consult the lookahead token
//! either. Lookahead validity is enforced one level up, by the action
//! table of whatever state `goto` lands on next.

use crate::token::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start = 0,
    ObjOpen = 1,
    ArrOpen = 2,
    ArrValStr = 3,
    ArrValOther = 4,
    ObjEmptyClose = 5,
    ObjKey1 = 6,
    ArrEmptyClose = 7,
    ObjExpectVal1 = 8,
    ValueCompositeDone = 9,
    ObjValStr1 = 10,
    ObjValOther1 = 11,
    ObjPair1Done = 12,
    ObjFullClose = 13,
    ObjListDone = 14,
    ObjExpectKey2 = 15,
    ObjKey2 = 16,
    ObjExpectVal2 = 17,
    ObjValStr2 = 18,
    ObjValOther2 = 19,
    ObjPairNDone = 20,
    ArrFirstDone = 21,
    ArrListDone = 22,
    ArrExpectVal2 = 23,
    ArrValStr2 = 24,
    ArrFullClose = 25,
    ArrContDone = 26,
    StartDone = 27,
    ArrValOther2 = 28,
}

/// Grammar nonterminals, used as `goto` table keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonTerm {
    Object,
    Array,
    ObjList,
    ArrayList,
    Value,
}

/// A reduce action: pop `pop` states off the stack, then `goto` on
/// `nonterm` from whatever state is revealed.
#[derive(Debug, Clone, Copy)]
pub struct Reduction {
    pub nonterm: NonTerm,
    pub pop: usize,
}

/// What event, if any, a shift into a given state should fire. Entirely a
/// function of the destination state: a `key` shift and a `value` shift
/// both move the same STRING token, so the table (not the token) says
/// which one just happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftEvent {
    None,
    ObjStart,
    ObjEnd,
    ArrStart,
    ArrEnd,
    Key,
    ObjPrimitive,
    ArrPrimitive,
}

/// `action[state][token]`'s shift half. `None` means no shift is defined
/// for this pair — either the state is a pure-reduce state (check
/// [`reduction`] first) or the input is invalid here.
pub fn shift(state: State, token: TokenKind) -> Option<State> {
    use State::*;
    use TokenKind::*;

    match (state, token) {
        (Start, LBrace) => Some(ObjOpen),
        (Start, LBracket) => Some(ArrOpen),

        (ObjOpen, RBrace) => Some(ObjEmptyClose),
        (ObjOpen, String) => Some(ObjKey1),

        (ArrOpen, RBracket) => Some(ArrEmptyClose),
        (ArrOpen, String) => Some(ArrValStr),
        (ArrOpen, Other) => Some(ArrValOther),
        (ArrOpen, LBrace) => Some(ObjOpen),
        (ArrOpen, LBracket) => Some(ArrOpen),

        (ObjKey1, Comma) => Some(ObjExpectVal1),

        (ObjExpectVal1, String) => Some(ObjValStr1),
        (ObjExpectVal1, Other) => Some(ObjValOther1),
        (ObjExpectVal1, LBrace) => Some(ObjOpen),
        (ObjExpectVal1, LBracket) => Some(ArrOpen),

        (ObjListDone, RBrace) => Some(ObjFullClose),
        (ObjListDone, Comma) => Some(ObjExpectKey2),

        (ObjExpectKey2, String) => Some(ObjKey2),

        (ObjKey2, Comma) => Some(ObjExpectVal2),

        (ObjExpectVal2, String) => Some(ObjValStr2),
        (ObjExpectVal2, Other) => Some(ObjValOther2),
        (ObjExpectVal2, LBrace) => Some(ObjOpen),
        (ObjExpectVal2, LBracket) => Some(ArrOpen),

        (ArrListDone, RBracket) => Some(ArrFullClose),
        (ArrListDone, Comma) => Some(ArrExpectVal2),

        (ArrExpectVal2, String) => Some(ArrValStr2),
        (ArrExpectVal2, Other) => Some(ArrValOther2),
        (ArrExpectVal2, LBrace) => Some(ObjOpen),
        (ArrExpectVal2, LBracket) => Some(ArrOpen),

        _ => None,
    }
}

/// `goto[state][nonterm]`, consulted right after a reduce.
pub fn goto_(state: State, nonterm: NonTerm) -> Option<State> {
    use NonTerm::*;
    use State::*;

    match (state, nonterm) {
        (Start, Object) | (Start, Array) => Some(StartDone),

        (ArrOpen, Value) => Some(ArrFirstDone),
        (ArrOpen, Object) | (ArrOpen, Array) => Some(ValueCompositeDone),
        (ArrOpen, ArrayList) => Some(ArrListDone),

        (ObjOpen, ObjList) => Some(ObjListDone),

        (ObjExpectVal1, Value) => Some(ObjPair1Done),
        (ObjExpectVal1, Object) | (ObjExpectVal1, Array) => Some(ValueCompositeDone),

        (ObjExpectVal2, Value) => Some(ObjPairNDone),
        (ObjExpectVal2, Object) | (ObjExpectVal2, Array) => Some(ValueCompositeDone),

        (ArrExpectVal2, Value) => Some(ArrContDone),
        (ArrExpectVal2, Object) | (ArrExpectVal2, Array) => Some(ValueCompositeDone),

        _ => None,
    }
}

/// Pure-reduce states: any lookahead at all triggers the same reduction.
pub fn reduction(state: State) -> Option<Reduction> {
    use NonTerm::*;
    use State::*;

    let (nonterm, pop) = match state {
        ArrValStr | ArrValOther => (Value, 1),
        ObjEmptyClose => (Object, 2),
        ArrEmptyClose => (Array, 2),
        ValueCompositeDone => (Value, 1),
        ObjValStr1 | ObjValOther1 => (Value, 1),
        ObjPair1Done => (ObjList, 3),
        ObjFullClose => (Object, 3),
        ObjValStr2 | ObjValOther2 => (Value, 1),
        ObjPairNDone => (ObjList, 5),
        ArrFirstDone => (ArrayList, 1),
        ArrValStr2 | ArrValOther2 => (Value, 1),
        ArrFullClose => (Array, 3),
        ArrContDone => (ArrayList, 3),
        _ => return None,
    };
    Some(Reduction { nonterm, pop })
}

pub fn shift_event(target: State) -> ShiftEvent {
    use ShiftEvent::*;
    use State::*;

    match target {
        ObjOpen => ObjStart,
        ArrOpen => ArrStart,
        ObjEmptyClose | ObjFullClose => ObjEnd,
        ArrEmptyClose | ArrFullClose => ArrEnd,
        ObjKey1 | ObjKey2 => Key,
        ArrValStr | ArrValOther | ArrValStr2 | ArrValOther2 => ArrPrimitive,
        ObjValStr1 | ObjValOther1 | ObjValStr2 | ObjValOther2 => ObjPrimitive,
        _ => None,
    }
}
