//! Envelope `type` tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// One of the eight legal `graphql-transport-ws` message types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    ConnectionInit,
    ConnectionAck,
    Ping,
    Pong,
    Subscribe,
    Next,
    Error,
    Complete,
}

/// Who is allowed to send a given message kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ClientToServer,
    ServerToClient,
    Bidirectional,
}

impl MessageKind {
    /// All kinds, in protocol order.
    pub const ALL: [MessageKind; 8] = [
        MessageKind::ConnectionInit,
        MessageKind::ConnectionAck,
        MessageKind::Ping,
        MessageKind::Pong,
        MessageKind::Subscribe,
        MessageKind::Next,
        MessageKind::Error,
        MessageKind::Complete,
    ];

    /// Wire tag.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::ConnectionInit => "connection_init",
            MessageKind::ConnectionAck => "connection_ack",
            MessageKind::Ping => "ping",
            MessageKind::Pong => "pong",
            MessageKind::Subscribe => "subscribe",
            MessageKind::Next => "next",
            MessageKind::Error => "error",
            MessageKind::Complete => "complete",
        }
    }

    /// Which side of the connection may send this kind.
    pub fn direction(self) -> Direction {
        match self {
            MessageKind::ConnectionInit | MessageKind::Subscribe => Direction::ClientToServer,
            MessageKind::ConnectionAck | MessageKind::Next | MessageKind::Error => {
                Direction::ServerToClient
            }
            MessageKind::Ping | MessageKind::Pong | MessageKind::Complete => {
                Direction::Bidirectional
            }
        }
    }
}

impl FromStr for MessageKind {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ProtocolError::InvalidMessageKind(s.to_owned()))
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
