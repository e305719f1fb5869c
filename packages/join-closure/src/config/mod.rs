//! Engine Configuration
//!
//! Two tiers, same as elsewhere in the workspace:
//! - Level 1: Preset - one-liner
//! - Level 2: Override via builder setters, a patch, or a YAML v1 file
//!
//! # Examples
//!
//! ```rust,ignore
//! use join_closure::config::{ClosureConfig, Preset, Traversal};
//!
//! let config = ClosureConfig::from_preset(Preset::Sequential).traversal(Traversal::Bfs);
//! let config = ClosureConfig::from_yaml("closure.yaml")?;
//! ```

pub mod closure_config;
pub mod error;
pub mod io;
pub mod patch;
pub mod preset;
pub mod validation;

// Re-exports
pub use closure_config::{ClosureConfig, Traversal};
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigExportV1;
pub use patch::ClosureConfigPatch;
pub use preset::Preset;
pub use validation::Validatable;
