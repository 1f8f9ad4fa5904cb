//! Operation message envelope (JSON).
//!
//! ```json
//! {"type": "subscribe", "id": "1", "payload": {"query": "subscription { a }"}}
//! ```
//!
//! `id` is carried verbatim and never format-checked; whether a given kind
//! needs one is a connection-manager concern.

use serde_json::{Map, Value};

use crate::error::{ProtocolError, Result};
use crate::protocol::kind::MessageKind;
use crate::protocol::payload::Payload;

/// A validated inbound (or outbound) protocol message.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationMessage {
    kind: MessageKind,
    id: Option<Value>,
    payload: Payload,
}

impl OperationMessage {
    pub fn new(kind: MessageKind, id: Option<Value>, payload: Payload) -> Self {
        Self {
            kind,
            id: id.filter(|v| !v.is_null()),
            payload,
        }
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Correlation id; `null` on the wire reads as `None`.
    pub fn id(&self) -> Option<&Value> {
        self.id.as_ref()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Validate an already decoded JSON value.
    ///
    /// `type` is checked before `payload`, so a frame with both wrong reports
    /// [`ProtocolError::InvalidMessageKind`].
    pub fn load(data: Value) -> Result<Self> {
        let Value::Object(mut fields) = data else {
            return Err(ProtocolError::InvalidEnvelopeShape);
        };
        let kind = read_kind(&mut fields)?;
        let id = fields.remove("id");
        let payload = Payload::new(fields.remove("payload"))?;
        Ok(Self::new(kind, id, payload))
    }

    /// Decode frame text and validate it.
    pub fn loads(text: &str) -> Result<Self> {
        let data: Value = serde_json::from_str(text)?;
        Self::load(data)
    }

    /// Same as [`loads`](Self::loads) for raw frame bytes. Invalid UTF-8 is
    /// reported as malformed JSON.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let data: Value = serde_json::from_slice(bytes)?;
        Self::load(data)
    }
}

fn read_kind(fields: &mut Map<String, Value>) -> Result<MessageKind> {
    match fields.remove("type") {
        Some(Value::String(tag)) => tag.parse(),
        Some(other) => Err(ProtocolError::InvalidMessageKind(other.to_string())),
        None => Err(ProtocolError::InvalidMessageKind("missing type".into())),
    }
}
