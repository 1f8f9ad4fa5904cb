//! gqlws core: transport-agnostic `graphql-transport-ws` message primitives.
//!
//! This crate turns untrusted frame text (or an already decoded JSON value)
//! into validated [`protocol::OperationMessage`]s and classifies whether a
//! subscribe payload opens a long-lived subscription stream. It owns no
//! sockets, timers, or shared state, and it never logs; callers decide how to
//! report every `ProtocolError`.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! All fallible paths surface as `ProtocolError`/`Result` so a hostile frame
//! can never take the connection manager down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{ErrorCode, ProtocolError, Result};
