//! Error types for join-closure
//!
//! Two failure kinds exist: bad input (`n <= 0`) and internal invariant
//! violations. Both abort the current computation; nothing partial is returned.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for join-closure operations
#[derive(Debug, Error)]
pub enum JoinError {
    /// The modulus is not a positive integer
    #[error("Configuration error: n must be positive, got {n}")]
    Configuration { n: i64 },

    /// Internal consistency was violated (a defect, not a user error)
    #[error("Invariant violation: {0}")]
    Invariant(#[from] InvariantError),

    /// Engine configuration could not be loaded or validated
    #[error("Engine configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Internal invariant violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// The same `(a,b)` key was derived with both star flags
    #[error("pair ({a},{b}) derived with conflicting star flags")]
    ConflictingStar { a: i64, b: i64 },

    /// Lifting produced a negative index
    #[error("lifted index {lifted} for a={a}, group={group} is negative")]
    NegativeLift { a: i64, group: usize, lifted: i64 },

    /// Matrix shape disagrees with the modulus
    #[error("matrix dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Lifting overflowed the i64 range
    #[error("lifting a={a} into group {group} overflows i64")]
    LiftOverflow { a: i64, group: usize },

    /// A pair with equal endpoints reached the JOIN set
    #[error("self-pair ({a},{a}) is never part of the JOIN set")]
    SelfPair { a: i64 },

    /// Star node set and cyclic components disagree on `node`
    #[error("node {node} is a star node in one view but not the other")]
    StarCycleMismatch { node: usize },

    /// Edge endpoint outside `[0, n)`
    #[error("node {node} out of range for n={n}")]
    NodeOutOfRange { node: usize, n: usize },
}

impl JoinError {
    /// Create a configuration error for an invalid modulus
    pub fn configuration(n: i64) -> Self {
        JoinError::Configuration { n }
    }

    /// Create a conflicting-star invariant error
    pub fn conflicting_star(a: i64, b: i64) -> Self {
        JoinError::Invariant(InvariantError::ConflictingStar { a, b })
    }

    /// Create a dimension-mismatch invariant error
    pub fn dimension_mismatch(expected: usize, found: usize) -> Self {
        JoinError::Invariant(InvariantError::DimensionMismatch { expected, found })
    }

    /// True for errors caused by caller input rather than a defect
    pub fn is_configuration(&self) -> bool {
        matches!(self, JoinError::Configuration { .. } | JoinError::Config(_))
    }
}

/// Result type alias for join-closure operations
pub type Result<T> = std::result::Result<T, JoinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message_names_n() {
        let err = JoinError::configuration(-3);
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("-3"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_conflicting_star_message_names_pair() {
        let err = JoinError::conflicting_star(1, 4);
        assert!(err.to_string().contains("(1,4)"));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_invariant_from_conversion() {
        let err: JoinError = InvariantError::NegativeLift {
            a: -10,
            group: 0,
            lifted: -2,
        }
        .into();
        assert!(matches!(err, JoinError::Invariant(_)));
        assert!(err.to_string().contains("-2"));
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = JoinError::dimension_mismatch(3, 2);
        let msg = err.to_string();
        assert!(msg.contains("expected 3"));
        assert!(msg.contains("found 2"));
    }
}
