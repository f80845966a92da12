//! Replay tool configuration
//!
//! Loaded from a TOML file. A missing file just means defaults (a phone-ish
//! portrait surface); a malformed file is an error so typos do not silently
//! fall back.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

fn default_width() -> i32 {
    1080
}

fn default_height() -> i32 {
    2340
}

/// Surface dimensions the tracker is configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self { width: default_width(), height: default_height() }
    }
}

/// Top-level configuration for the replay binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplayConfig {
    #[serde(default)]
    pub surface: SurfaceConfig,
}

impl ReplayConfig {
    /// Load from a TOML file, falling back to defaults when the file does
    /// not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(ConfigError::Io(err)),
        };
        Ok(toml::from_str(&raw)?)
    }
}
