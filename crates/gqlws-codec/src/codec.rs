//! Decode-once codec for inbound frames.
//!
//! - Size limit is enforced before any JSON work
//! - Text frames => `OperationMessage::loads`
//! - Binary frames => JSON bytes, same validation (non-UTF-8 is malformed)

use bytes::Bytes;
use tracing::{debug, trace};

use gqlws_core::error::{ProtocolError, Result};
use gqlws_core::protocol::OperationMessage;

use crate::config::FrameLimits;

/// A data frame as received from the socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Text(String),
    Binary(Bytes),
}

impl Frame {
    pub fn len(&self) -> usize {
        match self {
            Frame::Text(s) => s.len(),
            Frame::Binary(b) => b.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn decode(frame: Frame, limits: &FrameLimits) -> Result<OperationMessage> {
    let len = frame.len();
    let res = decode_inner(frame, len, limits);
    match &res {
        Ok(msg) => trace!(kind = %msg.kind(), len, "frame decoded"),
        Err(e) => debug!(code = e.code().as_str(), len, error = %e, "frame rejected"),
    }
    res
}

fn decode_inner(frame: Frame, len: usize, limits: &FrameLimits) -> Result<OperationMessage> {
    if len > limits.max_frame_bytes {
        return Err(ProtocolError::FrameTooLarge {
            len,
            max: limits.max_frame_bytes,
        });
    }
    match frame {
        Frame::Text(s) => OperationMessage::loads(&s),
        Frame::Binary(b) => OperationMessage::from_slice(&b),
    }
}
