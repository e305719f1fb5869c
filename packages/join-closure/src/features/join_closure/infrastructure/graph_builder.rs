//! Residue Graph Builder
//!
//! Folds inversions onto `n` residue classes: `(a, b)` becomes the edge
//! `a mod n → b mod n`. Self-loops are kept; they are what makes a single
//! node a star node. Duplicate edges collapse.
//!
//! Storage is a petgraph `DiGraphMap`, so every successor list keeps
//! first-seen insertion order and cycles come from Tarjan SCC.

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::errors::Result;
use crate::features::join_closure::domain::{Edge, EdgeSet, Modulus};

/// Directed graph over residue classes `0..n`
#[derive(Debug, Clone)]
pub struct ResidueGraph {
    modulus: Modulus,
    graph: DiGraphMap<usize, ()>,
}

impl ResidueGraph {
    /// Empty graph with all `n` nodes present
    pub fn new(modulus: Modulus) -> Self {
        let mut graph = DiGraphMap::with_capacity(modulus.get(), 0);
        for node in modulus.nodes() {
            graph.add_node(node);
        }
        Self { modulus, graph }
    }

    /// Build from already-folded edges; endpoints must lie in `[0, n)`
    pub fn from_edges<'a>(
        modulus: Modulus,
        edges: impl IntoIterator<Item = &'a Edge>,
    ) -> Result<Self> {
        let mut residue_graph = Self::new(modulus);
        for edge in edges {
            let from = modulus.check_node(edge.from)?;
            let to = modulus.check_node(edge.to)?;
            residue_graph.graph.add_edge(from, to, ());
        }
        Ok(residue_graph)
    }

    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_edge(&self, from: usize, to: usize) -> bool {
        self.graph.contains_edge(from, to)
    }

    /// Deduplicated edge set
    pub fn edges(&self) -> EdgeSet {
        self.graph
            .all_edges()
            .map(|(from, to, _)| Edge::new(from, to))
            .collect()
    }

    /// Successors of `node` in first-seen order
    pub fn successors(&self, node: usize) -> Vec<usize> {
        self.graph.neighbors(node).collect()
    }

    /// Successor lists for every node, indexed by node
    pub fn adjacency_lists(&self) -> Vec<Vec<usize>> {
        self.modulus
            .nodes()
            .map(|node| self.successors(node))
            .collect()
    }

    /// `n×n` adjacency matrix of the deduplicated edge set
    pub fn adjacency_matrix(&self) -> Vec<Vec<bool>> {
        let n = self.modulus.get();
        let mut matrix = vec![vec![false; n]; n];
        for (from, to, _) in self.graph.all_edges() {
            matrix[from][to] = true;
        }
        matrix
    }

    /// Strongly connected components that contain a cycle
    ///
    /// A component is cyclic when it has more than one node, or a single
    /// node with a self-loop. Each component is sorted, and components are
    /// ordered by their smallest node.
    pub fn cyclic_components(&self) -> Vec<Vec<usize>> {
        let mut cycles: Vec<Vec<usize>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || self.graph.contains_edge(scc[0], scc[0]))
            .map(|mut scc| {
                scc.sort_unstable();
                scc
            })
            .collect();
        cycles.sort();
        cycles
    }
}

/// Folds inversions into a [`ResidueGraph`]
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    modulus: Modulus,
}

impl GraphBuilder {
    /// Fails fast with a configuration error when `n <= 0`
    pub fn new(n: i64) -> Result<Self> {
        Ok(Self {
            modulus: Modulus::new(n)?,
        })
    }

    pub fn with_modulus(modulus: Modulus) -> Self {
        Self { modulus }
    }

    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// Fold `(a, b)` pairs into residue-class edges
    pub fn build(&self, inversions: &[(i64, i64)]) -> ResidueGraph {
        let mut residue_graph = ResidueGraph::new(self.modulus);
        for &(a, b) in inversions {
            let from = self.modulus.residue(a);
            let to = self.modulus.residue(b);
            residue_graph.graph.add_edge(from, to, ());
        }

        debug!(
            "residue graph built: n={}, inversions={}, edges={}",
            self.modulus,
            inversions.len(),
            residue_graph.edge_count()
        );
        residue_graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{InvariantError, JoinError};

    fn build(n: i64, inversions: &[(i64, i64)]) -> ResidueGraph {
        GraphBuilder::new(n).unwrap().build(inversions)
    }

    #[test]
    fn test_rejects_non_positive_n() {
        assert!(matches!(
            GraphBuilder::new(0),
            Err(JoinError::Configuration { n: 0 })
        ));
        assert!(GraphBuilder::new(-1).is_err());
    }

    #[test]
    fn test_folds_modulo_n() {
        let graph = build(2, &[(0, 1), (1, 2)]);
        let edges: Vec<Edge> = graph.edges().into_iter().collect();
        assert_eq!(edges, vec![Edge::new(0, 1), Edge::new(1, 0)]);
    }

    #[test]
    fn test_negative_inputs_use_mathematical_modulo() {
        let graph = build(3, &[(-1, -5), (-3, 4)]);
        // -1 mod 3 = 2, -5 mod 3 = 1, -3 mod 3 = 0, 4 mod 3 = 1
        assert!(graph.contains_edge(2, 1));
        assert!(graph.contains_edge(0, 1));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_self_loops_retained() {
        let graph = build(3, &[(1, 4)]);
        assert!(graph.contains_edge(1, 1));
        assert!(graph.edges().iter().all(Edge::is_self_loop));
    }

    #[test]
    fn test_duplicates_collapse() {
        let graph = build(2, &[(0, 1), (2, 3), (4, 5), (0, 1)]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_all_nodes_present_without_edges() {
        let graph = build(4, &[]);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.adjacency_lists().iter().all(Vec::is_empty));
    }

    #[test]
    fn test_successors_keep_first_seen_order() {
        let graph = build(4, &[(0, 3), (0, 1), (0, 7), (0, 2)]);
        assert_eq!(graph.successors(0), vec![3, 1, 2]);
    }

    #[test]
    fn test_adjacency_matrix() {
        let graph = build(3, &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(
            graph.adjacency_matrix(),
            vec![
                vec![false, true, false],
                vec![false, false, true],
                vec![true, false, false],
            ]
        );
    }

    #[test]
    fn test_cyclic_components() {
        // 0 <-> 1, 2 self-loop, 3 -> 4 acyclic
        let graph = build(5, &[(0, 1), (1, 0), (2, 2), (3, 4)]);
        assert_eq!(graph.cyclic_components(), vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn test_from_edges_rejects_out_of_range() {
        let modulus = Modulus::new(2).unwrap();
        let err = ResidueGraph::from_edges(modulus, &[Edge::new(0, 2)]).unwrap_err();
        assert!(matches!(
            err,
            JoinError::Invariant(InvariantError::NodeOutOfRange { node: 2, n: 2 })
        ));
    }
}
