//! Domain Models for JOIN closure
//!
//! Pure values, no graph library or scheduling concerns.

pub mod join;
pub mod models;

pub use join::{JoinCell, JoinMatrix, JoinSet, PairRepresentation};
pub use models::{Edge, EdgeSet, Modulus, ReachabilityMatrix};
