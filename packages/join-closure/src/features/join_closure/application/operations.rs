//! Stage-by-stage entry points
//!
//! `inversions → edges → reachability → {matrix, join set}`

use crate::config::ClosureConfig;
use crate::errors::Result;
use crate::features::join_closure::domain::{
    EdgeSet, JoinMatrix, JoinSet, Modulus, ReachabilityMatrix,
};
use crate::features::join_closure::infrastructure::{
    GraphBuilder, JoinSetBuilder, MatrixRenderer, ReachabilityEngine, ResidueGraph,
};

/// `{(a mod n, b mod n) : (a,b) ∈ inversions}`; fails when `n <= 0`
pub fn build_edges(n: i64, inversions: &[(i64, i64)]) -> Result<EdgeSet> {
    Ok(GraphBuilder::new(n)?.build(inversions).edges())
}

/// Non-trivial reachability with the default engine configuration
pub fn compute_reachability(n: i64, edges: &EdgeSet) -> Result<ReachabilityMatrix> {
    compute_reachability_with(n, edges, ClosureConfig::default())
}

/// Non-trivial reachability with an explicit engine configuration
pub fn compute_reachability_with(
    n: i64,
    edges: &EdgeSet,
    config: ClosureConfig,
) -> Result<ReachabilityMatrix> {
    let modulus = Modulus::new(n)?;
    let engine = ReachabilityEngine::new(config)?;
    let graph = ResidueGraph::from_edges(modulus, edges)?;
    engine.compute(&graph)
}

pub fn render_join_matrix(reach: &ReachabilityMatrix) -> JoinMatrix {
    MatrixRenderer::new().render(reach)
}

/// Canonical lifted pairs with star annotations
pub fn build_join_set(n: i64, reach: &ReachabilityMatrix) -> Result<JoinSet> {
    JoinSetBuilder::new(Modulus::new(n)?).build(reach)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::JoinError;
    use crate::features::join_closure::domain::Edge;

    #[test]
    fn test_stages_compose() {
        let edges = build_edges(2, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(edges.len(), 2);

        let reach = compute_reachability(2, &edges).unwrap();
        assert_eq!(render_join_matrix(&reach).to_string(), "* 1\n1 *\n");
        assert_eq!(
            build_join_set(2, &reach).unwrap().render(),
            vec!["(0,1)*", "(0,2)*", "(1,2)*", "(1,3)*"]
        );
    }

    #[test]
    fn test_every_stage_rejects_bad_n() {
        let edges = EdgeSet::new();
        let reach = ReachabilityMatrix::from_rows(vec![vec![false]]).unwrap();

        assert!(matches!(build_edges(0, &[]), Err(JoinError::Configuration { n: 0 })));
        assert!(matches!(
            compute_reachability(-2, &edges),
            Err(JoinError::Configuration { n: -2 })
        ));
        assert!(matches!(
            build_join_set(0, &reach),
            Err(JoinError::Configuration { n: 0 })
        ));
    }

    #[test]
    fn test_reachability_rejects_foreign_edges() {
        let edges: EdgeSet = [Edge::new(0, 5)].into_iter().collect();
        assert!(matches!(
            compute_reachability(3, &edges),
            Err(JoinError::Invariant(_))
        ));
    }
}
