//! Patch type for partial overrides
//!
//! All fields optional; unset fields keep the preset's value.

use super::closure_config::{ClosureConfig, Traversal};
use super::preset::Preset;
use serde::{Deserialize, Serialize};

/// Patch type for ClosureConfig (all fields optional)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClosureConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traversal: Option<Traversal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_threshold: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_workers: Option<usize>,
}

impl ClosureConfigPatch {
    /// Apply on top of a preset
    pub fn apply(&self, preset: Preset) -> ClosureConfig {
        self.apply_to(ClosureConfig::from_preset(preset))
    }

    /// Apply on top of an existing config
    pub fn apply_to(&self, mut base: ClosureConfig) -> ClosureConfig {
        if let Some(v) = self.traversal {
            base.traversal = v;
        }
        if let Some(v) = self.parallel {
            base.parallel = v;
        }
        if let Some(v) = self.parallel_threshold {
            base.parallel_threshold = v;
        }
        if let Some(v) = self.num_workers {
            base.num_workers = v;
        }
        base
    }

    /// Fields of `config` that differ from `preset`
    pub fn diff(preset: Preset, config: &ClosureConfig) -> Self {
        let base = ClosureConfig::from_preset(preset);
        Self {
            traversal: (config.traversal != base.traversal).then_some(config.traversal),
            parallel: (config.parallel != base.parallel).then_some(config.parallel),
            parallel_threshold: (config.parallel_threshold != base.parallel_threshold)
                .then_some(config.parallel_threshold),
            num_workers: (config.num_workers != base.num_workers).then_some(config.num_workers),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
