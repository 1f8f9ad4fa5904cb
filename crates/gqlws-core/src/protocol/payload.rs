//! Envelope `payload`: an immutable, read-only JSON object.
//!
//! Keys iterate in the order they appeared on the wire. Equality compares
//! key/value pairs regardless of order.

use serde_json::{Map, Value};

use crate::error::{ProtocolError, Result};
use crate::protocol::document::{Document, Source};

/// Validated payload of an [`OperationMessage`](crate::protocol::OperationMessage).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    /// Validate a raw payload value.
    ///
    /// Absent and `null` both become an empty payload. Arrays and scalars are
    /// rejected with [`ProtocolError::InvalidPayloadShape`].
    pub fn new(raw: Option<Value>) -> Result<Self> {
        match raw {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(Value::Object(fields)) => Ok(Self { fields }),
            Some(_) => Err(ProtocolError::InvalidPayloadShape),
        }
    }

    /// Missing keys are `None`, never an error.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// `query`, unchecked: a non-string value is passed through as-is.
    pub fn query(&self) -> Option<&Value> {
        self.get("query")
    }

    /// `variables`
    pub fn variable_values(&self) -> Option<&Value> {
        self.get("variables")
    }

    /// `operationName`
    pub fn operation_name(&self) -> Option<&Value> {
        self.get("operationName")
    }

    pub fn source(&self) -> Source<'_> {
        Source::new(self.query())
    }

    /// Parse `query` into a document.
    ///
    /// Returns `None` when the query is missing, not a string, or does not
    /// parse. Every call parses again; do not rely on identity between calls.
    pub fn document(&self) -> Option<Document> {
        Document::from_source(&self.source())
    }

    /// True iff the query parses and declares at least one `subscription`
    /// operation. Shorthand `{ ... }` documents are queries.
    pub fn has_subscription_operation(&self) -> bool {
        self.document().is_some_and(|doc| doc.has_subscription())
    }
}

impl TryFrom<Value> for Payload {
    type Error = ProtocolError;

    fn try_from(raw: Value) -> Result<Self> {
        Payload::new(Some(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(v: Value) -> Payload {
        Payload::try_from(v).unwrap()
    }

    #[test]
    fn null_and_empty_object_are_equal() {
        let a = payload(Value::Null);
        let b = payload(json!({}));
        let c = Payload::new(None).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.len(), 0);
        assert!(b.is_empty());
    }

    #[test]
    fn lookup_missing_is_none() {
        let p = payload(json!({"a": 1}));
        assert_eq!(p.get("a"), Some(&json!(1)));
        assert_eq!(p.get("missing"), None);
        assert!(p.contains_key("a"));
        assert!(!p.contains_key("missing"));
    }

    #[test]
    fn non_object_shapes_are_rejected() {
        for bad in [json!([1, 2, 3]), json!("q"), json!(1), json!(true)] {
            let err = Payload::try_from(bad).unwrap_err();
            assert!(matches!(err, ProtocolError::InvalidPayloadShape));
        }
    }

    #[test]
    fn keys_keep_wire_order() {
        let v: Value = serde_json::from_str(r#"{"z":1,"a":2,"m":3}"#).unwrap();
        let p = payload(v);
        assert_eq!(p.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
        let pairs: Vec<_> = p.iter().map(|(k, v)| (k, v.as_i64())).collect();
        assert_eq!(pairs, vec![("z", Some(1)), ("a", Some(2)), ("m", Some(3))]);
    }

    #[test]
    fn equality_ignores_key_order() {
        let a = payload(serde_json::from_str(r#"{"query":"{a}","variables":{}}"#).unwrap());
        let b = payload(serde_json::from_str(r#"{"variables":{},"query":"{a}"}"#).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn field_accessors() {
        let p = payload(json!({
            "query": "query Q($x: Int) { a(x: $x) }",
            "variables": {"x": 1},
            "operationName": "Q"
        }));
        assert_eq!(p.query(), Some(&json!("query Q($x: Int) { a(x: $x) }")));
        assert_eq!(p.variable_values(), Some(&json!({"x": 1})));
        assert_eq!(p.operation_name(), Some(&json!("Q")));
        assert_eq!(p.source().body_str(), Some("query Q($x: Int) { a(x: $x) }"));

        let empty = Payload::default();
        assert!(empty.query().is_none());
        assert!(empty.variable_values().is_none());
        assert!(empty.operation_name().is_none());
        assert!(empty.source().body.is_none());
    }

    #[test]
    fn implicit_query_is_not_a_subscription() {
        let p = payload(json!({"query": "{ __typename }"}));
        assert!(p.document().is_some());
        assert!(!p.has_subscription_operation());
    }

    #[test]
    fn subscription_is_detected() {
        let p = payload(json!({"query": "subscription { onThing }"}));
        assert!(p.has_subscription_operation());
    }

    #[test]
    fn subscription_among_repeated_or_mixed_operations_is_detected() {
        for q in [
            "subscription S { a } subscription S { b }",
            "{ a } subscription S { b }",
            "subscription { a } subscription { b }",
        ] {
            let p = payload(json!({ "query": q }));
            assert!(p.document().is_some(), "query={q}");
            assert!(p.has_subscription_operation(), "query={q}");
        }
    }

    #[test]
    fn fragment_only_document_is_present_but_not_a_subscription() {
        let p = payload(json!({"query": "fragment F on T { a }"}));
        assert!(p.document().is_some());
        assert!(!p.has_subscription_operation());
    }

    #[test]
    fn mutation_is_not_a_subscription() {
        let p = payload(json!({"query": "mutation M { doThing }"}));
        assert!(!p.has_subscription_operation());
    }

    #[test]
    fn unparseable_query_is_absent() {
        let p = payload(json!({"query": "not valid {{"}));
        assert!(p.document().is_none());
        assert!(!p.has_subscription_operation());
        // Still absent on a second call.
        assert!(p.document().is_none());
    }

    #[test]
    fn non_string_or_missing_query_is_absent() {
        assert!(payload(json!({"query": 7})).document().is_none());
        assert!(payload(json!({"query": null})).document().is_none());
        assert!(payload(json!({})).document().is_none());
        assert!(!payload(json!({"query": ["subscription { a }"]})).has_subscription_operation());
    }
}
