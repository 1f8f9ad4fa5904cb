use serde::Deserialize;
use gqlws_core::error::{ProtocolError, Result};

pub const MIN_FRAME_BYTES: usize = 256;
pub const MAX_FRAME_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProtocolConfig {
    pub version: u32,

    #[serde(default)]
    pub limits: FrameLimits,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            version: 1,
            limits: FrameLimits::default(),
        }
    }
}

impl ProtocolConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ProtocolError::UnsupportedVersion);
        }

        self.limits.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameLimits {
    /// Upper bound on a single frame, checked before JSON decoding.
    #[serde(default = "default_max_frame_bytes")]
    pub max_frame_bytes: usize,
}

impl Default for FrameLimits {
    fn default() -> Self {
        Self {
            max_frame_bytes: default_max_frame_bytes(),
        }
    }
}

impl FrameLimits {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_FRAME_BYTES..=MAX_FRAME_BYTES).contains(&self.max_frame_bytes) {
            return Err(ProtocolError::Config(format!(
                "limits.max_frame_bytes must be between {MIN_FRAME_BYTES} and {MAX_FRAME_BYTES}"
            )));
        }
        Ok(())
    }
}

fn default_max_frame_bytes() -> usize {
    64 * 1024
}
