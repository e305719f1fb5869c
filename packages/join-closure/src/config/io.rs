//! Configuration I/O (YAML loading)
//!
//! ```yaml
//! version: 1
//! preset: balanced
//! overrides:
//!   traversal: bfs
//!   num_workers: 4
//! ```

use super::closure_config::ClosureConfig;
use super::error::{ConfigError, ConfigResult};
use super::patch::ClosureConfigPatch;
use super::preset::Preset;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Base preset
    #[serde(default)]
    pub preset: Preset,

    /// Fine-grained overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ClosureConfigPatch>,
}

impl ConfigExportV1 {
    /// Resolve to a validated engine config
    pub fn into_config(self) -> ConfigResult<ClosureConfig> {
        let version = self.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config = self.overrides.unwrap_or_default().apply(self.preset);
        config.validate()?;
        Ok(config)
    }
}

impl ClosureConfig {
    /// Load from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;
        export.into_config()
    }

    /// Load from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Export as YAML v1, relative to `preset`
    pub fn to_yaml(&self, preset: Preset) -> ConfigResult<String> {
        let patch = ClosureConfigPatch::diff(preset, self);
        let export = ConfigExportV1 {
            version: Some(1),
            preset,
            overrides: (!patch.is_empty()).then_some(patch),
        };

        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }
}
