//! Dispatch classification for decoded messages.

use gqlws_core::protocol::{MessageKind, OperationMessage};
use tracing::trace;

/// Which path a connection manager should take for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// `subscribe` whose document declares a subscription: long-lived stream.
    Stream,
    /// Any other `subscribe`, including unparseable queries: one result, then complete.
    Single,
    /// Everything that is not `subscribe`.
    Control,
}

impl Dispatch {
    pub fn as_str(self) -> &'static str {
        match self {
            Dispatch::Stream => "stream",
            Dispatch::Single => "single",
            Dispatch::Control => "control",
        }
    }
}

pub fn classify(msg: &OperationMessage) -> Dispatch {
    let dispatch = match msg.kind() {
        MessageKind::Subscribe if msg.payload().has_subscription_operation() => Dispatch::Stream,
        MessageKind::Subscribe => Dispatch::Single,
        _ => Dispatch::Control,
    };
    trace!(kind = %msg.kind(), dispatch = dispatch.as_str(), "classified");
    dispatch
}
