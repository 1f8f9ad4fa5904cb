//! `graphql-transport-ws` protocol modules.
//!
//! - `kind`: the closed set of envelope `type` tags.
//! - `payload`: read-only view over the envelope `payload` object, with the
//!   query/variables/operationName accessors and subscription detection.
//! - `document`: thin wrapper over the GraphQL executable-document parser.
//! - `message`: the envelope itself and its validation entrypoints.
//! - `close`: close codes and the subprotocol token for the connection manager.
//!
//! All constructors are panic-free: malformed input is reported as
//! `ProtocolError`, except query syntax errors, which surface as an absent
//! document.

pub mod close;
pub mod document;
pub mod kind;
pub mod message;
pub mod payload;

pub use close::{CloseCode, WS_PROTOCOL};
pub use document::{Document, OperationKind, Source};
pub use kind::{Direction, MessageKind};
pub use message::OperationMessage;
pub use payload::Payload;
