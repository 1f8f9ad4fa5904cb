//! Close codes and subprotocol token consumed by the connection manager.
//!
//! Nothing in this crate picks a close code; these are exported so every
//! transport closes with the same numbers.

/// Subprotocol negotiated in the `Sec-WebSocket-Protocol` handshake header.
pub const WS_PROTOCOL: &str = "graphql-transport-ws";

pub const WS_ERROR_UNAUTHORIZED: u16 = 4401;
pub const WS_ERROR_CONNECTION_INIT_TIMEOUT: u16 = 4408;
pub const WS_ERROR_SUBSCRIBER_ALREADY_EXISTS: u16 = 4409;
pub const WS_ERROR_TOO_MANY_INIT_REQUESTS: u16 = 4429;
pub const WS_INTERNAL_ERROR: u16 = 1011;

/// Abnormal-closure codes used by `graphql-transport-ws`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseCode {
    Unauthorized,
    ConnectionInitTimeout,
    SubscriberAlreadyExists,
    TooManyInitRequests,
    InternalError,
}

impl CloseCode {
    pub fn code(self) -> u16 {
        match self {
            CloseCode::Unauthorized => WS_ERROR_UNAUTHORIZED,
            CloseCode::ConnectionInitTimeout => WS_ERROR_CONNECTION_INIT_TIMEOUT,
            CloseCode::SubscriberAlreadyExists => WS_ERROR_SUBSCRIBER_ALREADY_EXISTS,
            CloseCode::TooManyInitRequests => WS_ERROR_TOO_MANY_INIT_REQUESTS,
            CloseCode::InternalError => WS_INTERNAL_ERROR,
        }
    }
}

impl From<CloseCode> for u16 {
    fn from(c: CloseCode) -> Self {
        c.code()
    }
}

impl TryFrom<u16> for CloseCode {
    type Error = u16;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            WS_ERROR_UNAUTHORIZED => Ok(CloseCode::Unauthorized),
            WS_ERROR_CONNECTION_INIT_TIMEOUT => Ok(CloseCode::ConnectionInitTimeout),
            WS_ERROR_SUBSCRIBER_ALREADY_EXISTS => Ok(CloseCode::SubscriberAlreadyExists),
            WS_ERROR_TOO_MANY_INIT_REQUESTS => Ok(CloseCode::TooManyInitRequests),
            WS_INTERNAL_ERROR => Ok(CloseCode::InternalError),
            other => Err(other),
        }
    }
}
