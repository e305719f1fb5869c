//! JOIN Closure Application Layer (UseCase)

mod inversion_set;
mod join_usecase;
mod operations;

pub use inversion_set::InversionSet;
pub use join_usecase::{
    JoinClosureInput, JoinClosureOutput, JoinClosureStats, JoinClosureUseCase,
    JoinClosureUseCaseImpl,
};
pub use operations::{
    build_edges, build_join_set, compute_reachability, compute_reachability_with,
    render_join_matrix,
};
