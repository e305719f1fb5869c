/*
 * Join Closure - reachability of inversions modulo n
 *
 * Feature-First Hexagonal Architecture:
 * - config/    : Presets, engine config, YAML v1
 * - features/  : join_closure (domain → infrastructure → application)
 * - errors.rs  : Configuration / invariant error taxonomy
 *
 * Pipeline:
 *   inversions → residue edges → reachability → {JOIN matrix, JOIN set}
 */

// Crate-level lint configuration
#![allow(clippy::should_implement_trait)] // from_str naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::needless_range_loop)] // Range loop for indexing
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Engine configuration (presets, YAML)
pub mod config;

/// Error types
pub mod errors;

/// Feature modules
pub mod features;

pub use errors::{InvariantError, JoinError, Result};
pub use features::join_closure::{
    build_edges, build_join_set, compute_reachability, compute_reachability_with,
    render_join_matrix, Edge, EdgeSet, InversionSet, JoinCell, JoinClosureInput,
    JoinClosureOutput, JoinClosureStats, JoinClosureUseCase, JoinClosureUseCaseImpl, JoinMatrix,
    JoinSet, Modulus, PairRepresentation, ReachabilityMatrix,
};
