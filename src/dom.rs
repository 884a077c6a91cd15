//! DOM builder: an [`EventSink`] that materializes the parser's structural
//! events into an in-memory tree (spec.md §6 "a DOM-builder sink is the
//! simplest non-trivial consumer").
//!
//! The builder keeps an explicit stack of in-progress containers rather
//! than recursing, matching the rest of the crate's push-driven style: the
//! parser calls into it one event at a time and it never blocks or pulls.

use std::fmt;

use crate::parser::events::{EventSink, Scalar};
use crate::token::TokenKind;

/// A fully materialized JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
    Array(Vec<Node>),
    /// Insertion-ordered key/value pairs; duplicate keys are kept as
    /// written rather than deduplicated (the grammar has no concept of a
    /// key being "redefined", it is just another pair).
    Object(Vec<(String, Node)>),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::String(s) => write_quoted(f, s),
            Node::Number(n) => write!(f, "{n}"),
            Node::Bool(b) => write!(f, "{b}"),
            Node::Null => write!(f, "null"),
            Node::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Node::Object(pairs) => {
                write!(f, "{{")?;
                for (i, (k, v)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write_quoted(f, k)?;
                    write!(f, ": {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "\"")?;
    for c in s.chars() {
        match c {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\t' => write!(f, "\\t")?,
            '\r' => write!(f, "\\r")?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "\"")
}

/// A partially built container, kept on [`DomBuilder`]'s stack until its
/// matching `_end` event arrives.
#[derive(Debug)]
enum Frame {
    Object {
        pairs: Vec<(String, Node)>,
        pending_key: Option<String>,
    },
    Array(Vec<Node>),
}

/// Builds a [`Node`] tree by implementing [`EventSink`].
///
/// The root result is only available once the matching top-level
/// `obj_end`/`array_end` has fired; until then [`DomBuilder::finish`]
/// returns `None`. Per spec.md §6, a document that never emits any
/// structural events (which cannot happen through [`crate::parser::Parser`]
/// since `Start -> Object | Array` always fires at least one pair of
/// start/end events) would otherwise have no representation — `finish`
/// falls back to [`Node::Null`] only for that degenerate, unreachable case.
#[derive(Debug, Default)]
pub struct DomBuilder {
    stack: Vec<Frame>,
    result: Option<Node>,
}

impl DomBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the completed tree, if the document has finished parsing.
    pub fn finish(self) -> Node {
        self.result.unwrap_or(Node::Null)
    }

    fn push_value(&mut self, node: Node) {
        match self.stack.last_mut() {
            None => self.result = Some(node),
            Some(Frame::Array(items)) => items.push(node),
            Some(Frame::Object { pairs, pending_key }) => {
                let key = pending_key
                    .take()
                    .expect("object value event without a preceding key event");
                pairs.push((key, node));
            }
        }
    }

    fn scalar_to_node(scalar: Scalar<'_>) -> Node {
        match scalar.kind {
            TokenKind::String => Node::String(scalar.text.to_string()),
            TokenKind::Other => match scalar.text.to_ascii_lowercase().as_str() {
                "true" => Node::Bool(true),
                "false" => Node::Bool(false),
                "null" => Node::Null,
                _ => Node::Number(
                    scalar
                        .text
                        .parse()
                        .expect("scanner only accepts well-formed number lexemes"),
                ),
            },
            other => unreachable!("scalar event carried an unexpected token kind {other:?}"),
        }
    }
}

impl EventSink for DomBuilder {
    fn obj_start(&mut self) {
        self.stack.push(Frame::Object {
            pairs: Vec::new(),
            pending_key: None,
        });
    }

    fn obj_end(&mut self) {
        let Frame::Object { pairs, .. } = self
            .stack
            .pop()
            .expect("obj_end without a matching obj_start")
        else {
            panic!("obj_end popped a non-object frame");
        };
        self.push_value(Node::Object(pairs));
    }

    fn array_start(&mut self) {
        self.stack.push(Frame::Array(Vec::new()));
    }

    fn array_end(&mut self) {
        let Frame::Array(items) = self
            .stack
            .pop()
            .expect("array_end without a matching array_start")
        else {
            panic!("array_end popped a non-array frame");
        };
        self.push_value(Node::Array(items));
    }

    fn key(&mut self, text: &str) {
        match self.stack.last_mut() {
            Some(Frame::Object { pending_key, .. }) => *pending_key = Some(text.to_string()),
            _ => panic!("key event outside an object frame"),
        }
    }

    fn obj_primitive(&mut self, value: Scalar<'_>) {
        let node = Self::scalar_to_node(value);
        self.push_value(node);
    }

    fn array_primitive(&mut self, value: Scalar<'_>) {
        let node = Self::scalar_to_node(value);
        self.push_value(node);
    }
}
