//! Reachability engine configuration
//!
//! None of these settings change observable output; they only pick how the
//! per-source traversals are scheduled.

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use serde::{Deserialize, Serialize};

/// Per-source traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traversal {
    /// Stack-based depth-first search
    Dfs,
    /// Queue-based breadth-first search
    Bfs,
}

impl Default for Traversal {
    fn default() -> Self {
        Self::Dfs
    }
}

/// Reachability engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClosureConfig {
    /// Traversal order (default: dfs)
    pub traversal: Traversal,

    /// Fan per-source traversals out across a rayon pool
    pub parallel: bool,

    /// Minimum `n` before the parallel path is taken (1..=1000000)
    pub parallel_threshold: usize,

    /// Number of workers (0=auto, 1..=256)
    pub num_workers: usize,
}

impl ClosureConfig {
    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.num_workers > 256 {
            return Err(ConfigError::range_with_hint(
                "num_workers",
                self.num_workers,
                0,
                256,
                "Number of workers must be reasonable (0=auto)",
            ));
        }

        if self.parallel_threshold < 1 || self.parallel_threshold > 1_000_000 {
            return Err(ConfigError::range_with_hint(
                "parallel_threshold",
                self.parallel_threshold,
                1,
                1_000_000,
                "Use parallel=false instead of an out-of-range threshold",
            ));
        }

        Ok(())
    }

    /// Get preset configuration
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Sequential => Self {
                traversal: Traversal::Dfs,
                parallel: false,
                parallel_threshold: 256,
                num_workers: 1,
            },
            Preset::Balanced => Self {
                traversal: Traversal::Dfs,
                parallel: true,
                parallel_threshold: 256,
                num_workers: 0, // Auto
            },
            Preset::Parallel => Self {
                traversal: Traversal::Dfs,
                parallel: true,
                parallel_threshold: 1,
                num_workers: 0, // Auto
            },
        }
    }

    /// Builder: Set traversal order
    pub fn traversal(mut self, v: Traversal) -> Self {
        self.traversal = v;
        self
    }

    /// Builder: Enable/disable parallel fan-out
    pub fn parallel(mut self, v: bool) -> Self {
        self.parallel = v;
        self
    }

    /// Builder: Set parallel threshold
    pub fn parallel_threshold(mut self, v: usize) -> Self {
        self.parallel_threshold = v;
        self
    }

    /// Builder: Set worker count
    pub fn num_workers(mut self, v: usize) -> Self {
        self.num_workers = v;
        self
    }

    /// Worker count with `0` resolved to the number of logical CPUs
    pub fn effective_workers(&self) -> usize {
        if self.num_workers == 0 {
            num_cpus::get().max(1)
        } else {
            self.num_workers
        }
    }

    /// Whether a graph of `n` nodes should take the parallel path
    pub fn use_parallel(&self, n: usize) -> bool {
        cfg!(feature = "parallel")
            && self.parallel
            && n >= self.parallel_threshold
            && self.effective_workers() > 1
    }
}

impl Default for ClosureConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}
