use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Longest accepted value for a name-kind variable, matching the engine's
/// name-table entry limit.
pub const MAX_NAME_LENGTH: usize = 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct DebuggerConfig {
    #[serde(default = "DebuggerConfig::default_value_refresh_seconds")]
    pub value_refresh_seconds: f32,
    #[serde(default = "DebuggerConfig::default_max_name_length")]
    pub max_name_length: usize,
}

impl DebuggerConfig {
    const fn default_max_name_length() -> usize {
        MAX_NAME_LENGTH
    }

    fn default_value_refresh_seconds() -> f32 {
        1.0
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let cfg = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(cfg)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("[debugger] Config load error: {err:?}. Falling back to defaults.");
                Self::default()
            }
        }
    }
}

impl Default for DebuggerConfig {
    fn default() -> Self {
        Self {
            value_refresh_seconds: Self::default_value_refresh_seconds(),
            max_name_length: Self::default_max_name_length(),
        }
    }
}
