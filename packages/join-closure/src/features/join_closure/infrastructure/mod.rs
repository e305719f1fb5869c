//! Infrastructure - the four pipeline stages
//!
//! - Graph Builder: inversions → residue-class edges (petgraph)
//! - Reachability Engine: per-source traversal, optional rayon fan-out
//! - Matrix Renderer: reachability → `{0,1,*}`
//! - Join Set Builder: lifting + star marking

pub mod graph_builder;
pub mod join_set_builder;
pub mod matrix_renderer;
pub mod reachability;

pub use graph_builder::{GraphBuilder, ResidueGraph};
pub use join_set_builder::{lift, JoinSetBuilder};
pub use matrix_renderer::MatrixRenderer;
pub use reachability::{reachable_from, ReachabilityEngine};
