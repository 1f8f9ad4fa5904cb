//! Shared error type across gqlws crates.

use thiserror::Error;

/// Stable, machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Frame text is not valid JSON.
    MalformedJson,
    /// Top-level JSON value is not an object.
    InvalidEnvelopeShape,
    /// `type` missing or not a known message kind.
    InvalidMessageKind,
    /// `payload` present but not an object (or null).
    InvalidPayloadShape,
    /// Frame exceeds the configured size limit.
    FrameTooLarge,
    /// Configuration could not be read or failed validation.
    Config,
    /// Unsupported configuration version.
    UnsupportedVersion,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MalformedJson => "MALFORMED_JSON",
            ErrorCode::InvalidEnvelopeShape => "INVALID_ENVELOPE_SHAPE",
            ErrorCode::InvalidMessageKind => "INVALID_MESSAGE_KIND",
            ErrorCode::InvalidPayloadShape => "INVALID_PAYLOAD_SHAPE",
            ErrorCode::FrameTooLarge => "FRAME_TOO_LARGE",
            ErrorCode::Config => "CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Unified error type used by core and codec.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed json: {0}")]
    MalformedJson(String),
    #[error("message must be an object")]
    InvalidEnvelopeShape,
    #[error("invalid message type: {0}")]
    InvalidMessageKind(String),
    #[error("payload must be an object")]
    InvalidPayloadShape,
    #[error("frame too large: {len} bytes (max {max})")]
    FrameTooLarge { len: usize, max: usize },
    #[error("config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
}

impl ProtocolError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ProtocolError::MalformedJson(_) => ErrorCode::MalformedJson,
            ProtocolError::InvalidEnvelopeShape => ErrorCode::InvalidEnvelopeShape,
            ProtocolError::InvalidMessageKind(_) => ErrorCode::InvalidMessageKind,
            ProtocolError::InvalidPayloadShape => ErrorCode::InvalidPayloadShape,
            ProtocolError::FrameTooLarge { .. } => ErrorCode::FrameTooLarge,
            ProtocolError::Config(_) => ErrorCode::Config,
            ProtocolError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
        }
    }
}

impl From<serde_json::Error> for ProtocolError {
    fn from(e: serde_json::Error) -> Self {
        ProtocolError::MalformedJson(e.to_string())
    }
}
