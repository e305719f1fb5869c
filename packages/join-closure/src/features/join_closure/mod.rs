//! JOIN Closure - reachability of inversions folded modulo `n`
//!
//! Each residue class `i` stands for `{i, i+n, i+2n, ...}`; an inversion
//! `(a, b)` is the edge `a mod n → b mod n`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  JOIN Closure Feature                   │
//! ├─────────────────────────────────────────────────────────┤
//! │  Domain:                                                │
//! │    - Modulus, Edge, ReachabilityMatrix                  │
//! │    - JoinCell / JoinMatrix, PairRepresentation / JoinSet│
//! ├─────────────────────────────────────────────────────────┤
//! │  Infrastructure:                                        │
//! │    - GraphBuilder (inversions → ResidueGraph)           │
//! │    - ReachabilityEngine (per-source DFS/BFS, rayon)     │
//! │    - MatrixRenderer ({0,1,*})                           │
//! │    - JoinSetBuilder (lifting + star marking)            │
//! ├─────────────────────────────────────────────────────────┤
//! │  Application:                                           │
//! │    - InversionSet (cached stages)                       │
//! │    - JoinClosureUseCase (full run + report)             │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod application; // UseCase layer
pub mod domain;
pub mod infrastructure;

// Re-export application layer (primary interface)
pub use application::{
    build_edges, build_join_set, compute_reachability, compute_reachability_with,
    render_join_matrix, InversionSet, JoinClosureInput, JoinClosureOutput, JoinClosureStats,
    JoinClosureUseCase, JoinClosureUseCaseImpl,
};

// Re-export domain types
pub use domain::{
    Edge, EdgeSet, JoinCell, JoinMatrix, JoinSet, Modulus, PairRepresentation,
    ReachabilityMatrix,
};

// Re-export infrastructure (internal use - prefer application layer)
#[doc(hidden)]
pub use infrastructure::{
    lift, GraphBuilder, JoinSetBuilder, MatrixRenderer, ReachabilityEngine, ResidueGraph,
};
