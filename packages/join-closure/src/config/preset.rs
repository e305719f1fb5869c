//! Preset configurations
//!
//! Presets provide complete default engine configurations.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Single-threaded DFS, no rayon fan-out
    Sequential,

    /// DFS, parallel only once `n` reaches 256 residue classes
    Balanced,

    /// Always fan out per-source traversals across the rayon pool
    Parallel,
}

impl Preset {
    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "balanced" => Ok(Self::Balanced),
            "parallel" => Ok(Self::Parallel),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Balanced => "balanced",
            Self::Parallel => "parallel",
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Balanced
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
