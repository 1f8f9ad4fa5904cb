//! Top-level facade crate for gqlws.
//!
//! Re-exports the protocol core and the frame codec so users can depend on a single crate.

pub mod core {
    pub use gqlws_core::*;
}

pub mod codec {
    pub use gqlws_codec::*;
}
