//! Codec config loader (strict parsing).

pub mod schema;

use std::fs;

use gqlws_core::error::{ProtocolError, Result};

pub use schema::{FrameLimits, ProtocolConfig};

pub fn load_from_file(path: &str) -> Result<ProtocolConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ProtocolError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ProtocolConfig> {
    let cfg: ProtocolConfig = serde_yaml::from_str(s)
        .map_err(|e| ProtocolError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
