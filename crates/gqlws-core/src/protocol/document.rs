//! GraphQL document parsing for subscribe payloads.
//!
//! The grammar lives in `graphql-parser`, which checks syntax only: repeated
//! operation names, anonymous operations mixed with named ones, and
//! fragment-only documents all parse. This module only needs "parse or give
//! up" and the declared kind of each operation definition.

use graphql_parser::query::{self, Definition, OperationDefinition};
use serde_json::Value;

/// Name given to every request source in diagnostics.
pub const DEFAULT_SOURCE_NAME: &str = "GraphQL request";

/// The (possibly absent, possibly non-string) `query` value, labeled for
/// downstream error reporting. No parsing happens here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Source<'a> {
    pub body: Option<&'a Value>,
    pub name: &'static str,
}

impl<'a> Source<'a> {
    pub fn new(body: Option<&'a Value>) -> Self {
        Self {
            body,
            name: DEFAULT_SOURCE_NAME,
        }
    }

    /// Body text, only when the query is a JSON string.
    pub fn body_str(&self) -> Option<&'a str> {
        self.body.and_then(Value::as_str)
    }
}

/// Declared kind of an operation definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

/// Deepest `{`/`(`/`[` nesting handed to the parser. Deeper input is
/// treated as unparseable instead of risking the stack.
pub const MAX_NESTING: usize = 64;

/// Parsed executable document.
#[derive(Debug, Clone)]
pub struct Document(query::Document<'static, String>);

impl Document {
    /// Parse query text. A syntax error, or nesting beyond [`MAX_NESTING`],
    /// yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        if nesting_depth(text) > MAX_NESTING {
            return None;
        }
        query::parse_query::<String>(text)
            .ok()
            .map(|doc| Document(doc.into_static()))
    }

    /// Parse a source; non-string or absent bodies yield `None`.
    pub fn from_source(source: &Source<'_>) -> Option<Self> {
        source.body_str().and_then(Self::parse)
    }

    /// Operation definitions as `(name, kind)`, in document order. Anonymous
    /// operations (including the `{ ... }` shorthand) have no name. Fragment
    /// definitions are skipped.
    pub fn operations(&self) -> impl Iterator<Item = (Option<&str>, OperationKind)> + '_ {
        self.0.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(operation_of(op)),
            Definition::Fragment(_) => None,
        })
    }

    /// True iff some operation is explicitly a subscription.
    pub fn has_subscription(&self) -> bool {
        self.operations()
            .any(|(_, kind)| kind == OperationKind::Subscription)
    }
}

fn operation_of<'d>(op: &'d OperationDefinition<'static, String>) -> (Option<&'d str>, OperationKind) {
    match op {
        OperationDefinition::SelectionSet(_) => (None, OperationKind::Query),
        OperationDefinition::Query(q) => (q.name.as_deref(), OperationKind::Query),
        OperationDefinition::Mutation(m) => (m.name.as_deref(), OperationKind::Mutation),
        OperationDefinition::Subscription(s) => (s.name.as_deref(), OperationKind::Subscription),
    }
}

/// Maximum bracket nesting outside strings and comments.
fn nesting_depth(text: &str) -> usize {
    let bytes = text.as_bytes();
    let (mut i, mut depth, mut max) = (0, 0usize, 0usize);
    while i < bytes.len() {
        match bytes[i] {
            b'#' => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'"' if bytes[i..].starts_with(b"\"\"\"") => {
                i += 3;
                while i < bytes.len() && !bytes[i..].starts_with(b"\"\"\"") {
                    i += if bytes[i..].starts_with(b"\\\"\"\"") { 4 } else { 1 };
                }
                i += 2;
            }
            b'"' => {
                i += 1;
                while i < bytes.len() && bytes[i] != b'"' && bytes[i] != b'\n' {
                    i += if bytes[i] == b'\\' { 2 } else { 1 };
                }
            }
            b'{' | b'(' | b'[' => {
                depth += 1;
                max = max.max(depth);
            }
            b'}' | b')' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
        i += 1;
    }
    max
}
