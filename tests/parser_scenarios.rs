//! End-to-end scenario table from `SPEC_FULL.md` §8: each row feeds a fixed
//! chunk sequence through the public reader API and checks the final
//! outcome. Kept at the integration-test level (not `#[cfg(test)]` inside
//! `src/`) since these exercise the crate's public surface across its
//! layers, the way the teacher's `tests/operators.rs` exercises the lexer
//! and parser together rather than either module in isolation.

use jflow::char_source::ChunkSource;
use jflow::dom::{DomBuilder, Node};
use jflow::parser::{Outcome, Parser};

/// Feed `chunks` in order, then close the source, looping on `Pending` the
/// way `jflow::driver::drive` does, and return the terminal `Outcome`
/// alongside the DOM built so far (meaningless on `Error`, but convenient
/// for the `Ok` cases).
fn run(chunks: &[&[u8]]) -> (Outcome, Node) {
    let mut src = ChunkSource::new();
    let mut parser = Parser::new();
    let mut builder = DomBuilder::new();
    let mut chunks = chunks.iter();
    let mut closed = false;

    loop {
        match parser.parse(&mut src, &mut builder).unwrap() {
            Outcome::Pending => match chunks.next() {
                Some(bytes) => src.feed(bytes),
                None if !closed => {
                    src.close();
                    closed = true;
                }
                None => panic!("parser still Pending after the source was closed"),
            },
            other => return (other, builder.finish()),
        }
    }
}

fn assert_ok(chunks: &[&[u8]]) -> Node {
    let (outcome, node) = run(chunks);
    assert_eq!(outcome, Outcome::Ok, "chunks {chunks:?}");
    node
}

fn assert_error(chunks: &[&[u8]]) {
    let (outcome, _) = run(chunks);
    assert!(matches!(outcome, Outcome::Error(_)), "expected Error for {chunks:?}, got {outcome:?}");
}

#[test]
fn scenario_1_key_then_comma_form() {
    let node = assert_ok(&[br#"{ "a" , 1 }"#]);
    assert_eq!(node, Node::Object(vec![("a".into(), Node::Number(1.0))]));
}

#[test]
fn scenario_2_split_mid_token_and_mid_separator() {
    let node = assert_ok(&[b"[", b"null", b", true, false", b"]"]);
    assert_eq!(
        node,
        Node::Array(vec![Node::Null, Node::Bool(true), Node::Bool(false)])
    );
}

#[test]
fn scenario_3_string_split_across_chunk_boundary() {
    let node = assert_ok(&[br#"{ "h"#, br#"i" , "v" }"#]);
    assert_eq!(node, Node::Object(vec![("hi".into(), Node::String("v".into()))]));
}

#[test]
fn scenario_4_number_split_across_boundary() {
    let node = assert_ok(&[br#"{ "k" , 1."#, b"e+1 }"]);
    assert_eq!(node, Node::Object(vec![("k".into(), Node::Number(10.0))]));
}

#[test]
fn scenario_5_keyword_where_key_expected() {
    assert_error(&[b"{ fals", b"e , 1 }"]);
}

#[test]
fn scenario_6_incomplete_keyword_at_true_eos() {
    assert_error(&[b"tri"]);
}

#[test]
fn scenario_7_empty_object() {
    let node = assert_ok(&[b"{}"]);
    assert_eq!(node, Node::Object(vec![]));
}

#[test]
fn scenario_8_trailing_junk() {
    assert_error(&[br#"{ "a" , 1 } false"#]);
}

#[test]
fn whitespace_transparency() {
    // Invariant 4: extra BLANK characters outside strings never change the
    // parsed shape.
    let tight = assert_ok(&[br#"{"a",1,"b",[2,3]}"#]);
    let spaced = assert_ok(&[b" \t{ \n \"a\" , 1 , \"b\" , [ 2 ,\r 3 ] }\t "]);
    assert_eq!(tight, spaced);
}
