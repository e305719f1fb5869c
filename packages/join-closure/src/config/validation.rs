//! Configuration validation
//!
//! Code that accepts a config depends on `Validatable`, not concrete types.

use super::closure_config::ClosureConfig;
use super::error::ConfigResult;

/// Trait for validatable configuration objects
pub trait Validatable {
    /// Validate the configuration
    ///
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

impl Validatable for ClosureConfig {
    fn validate(&self) -> ConfigResult<()> {
        ClosureConfig::validate(self)
    }

    fn config_name(&self) -> &'static str {
        "ClosureConfig"
    }
}

impl<T: Validatable> Validatable for Option<T> {
    fn validate(&self) -> ConfigResult<()> {
        match self {
            Some(config) => config.validate(),
            None => Ok(()),
        }
    }
}
