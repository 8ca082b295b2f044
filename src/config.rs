//! Decoder configuration.
//!
//! Options are plain serde types so embedding applications can keep them in
//! their own settings files.

use serde::{Deserialize, Serialize};

/// What the payload decoder does with bytes past the declared pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrailingBytes {
    /// Fail with `SizeMismatch`
    #[default]
    Reject,
    /// Decode the declared values and drop the rest
    Ignore,
}

impl TrailingBytes {
    /// Get the display name for this policy.
    pub fn name(&self) -> &'static str {
        match self {
            TrailingBytes::Reject => "Reject",
            TrailingBytes::Ignore => "Ignore",
        }
    }

    /// Get all policies, strictest first.
    pub fn all() -> &'static [TrailingBytes] {
        &[TrailingBytes::Reject, TrailingBytes::Ignore]
    }
}

/// Options for whole-file decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecOptions {
    /// Handling of surplus payload bytes
    #[serde(default)]
    pub trailing_bytes: TrailingBytes,
}

impl CodecOptions {
    /// Create options with the strict defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trailing byte policy.
    pub fn trailing_bytes(mut self, policy: TrailingBytes) -> Self {
        self.trailing_bytes = policy;
        self
    }

    /// Shorthand for accepting files with surplus payload bytes.
    pub fn lenient() -> Self {
        Self::new().trailing_bytes(TrailingBytes::Ignore)
    }
}
