//! gqlws codec library entry.
//!
//! Adapter between a socket loop and `gqlws-core`: size-capped frame decoding,
//! strict YAML configuration for the limits, and the dispatch classification
//! a connection manager uses to pick a stream vs single-response path.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod codec;
pub mod config;
pub mod dispatch;

pub use codec::{decode, Frame};
pub use config::{FrameLimits, ProtocolConfig};
pub use dispatch::{classify, Dispatch};
