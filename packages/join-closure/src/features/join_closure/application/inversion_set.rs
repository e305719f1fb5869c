//! Inversion set with lazily cached stages
//!
//! Each stage is computed at most once per instance and handed out by
//! reference. Inputs are immutable after construction, so caches never
//! need invalidating.

use once_cell::unsync::OnceCell;
use std::collections::BTreeSet;

use crate::config::ClosureConfig;
use crate::errors::Result;
use crate::features::join_closure::domain::{
    EdgeSet, JoinMatrix, JoinSet, Modulus, ReachabilityMatrix,
};
use crate::features::join_closure::infrastructure::{
    GraphBuilder, JoinSetBuilder, MatrixRenderer, ReachabilityEngine, ResidueGraph,
};

/// Inversions folded onto `n` residue classes
///
/// # Example
/// ```ignore
/// let set = InversionSet::new(2, vec![(0, 1), (1, 2)])?;
/// let matrix = set.join_matrix()?;
/// for pair in set.join_set()? {
///     println!("{}", pair);
/// }
/// ```
#[derive(Debug)]
pub struct InversionSet {
    builder: GraphBuilder,
    inversions: Vec<(i64, i64)>,
    engine: ReachabilityEngine,

    graph: OnceCell<ResidueGraph>,
    reach: OnceCell<ReachabilityMatrix>,
    star_nodes: OnceCell<BTreeSet<usize>>,
    join_matrix: OnceCell<JoinMatrix>,
    join_set: OnceCell<JoinSet>,
}

impl InversionSet {
    /// Fails fast when `n <= 0`
    pub fn new(n: i64, inversions: Vec<(i64, i64)>) -> Result<Self> {
        Self::with_config(n, inversions, ClosureConfig::default())
    }

    pub fn with_config(
        n: i64,
        inversions: Vec<(i64, i64)>,
        config: ClosureConfig,
    ) -> Result<Self> {
        Ok(Self {
            builder: GraphBuilder::new(n)?,
            inversions,
            engine: ReachabilityEngine::new(config)?,
            graph: OnceCell::new(),
            reach: OnceCell::new(),
            star_nodes: OnceCell::new(),
            join_matrix: OnceCell::new(),
            join_set: OnceCell::new(),
        })
    }

    pub fn modulus(&self) -> Modulus {
        self.builder.modulus()
    }

    pub fn inversions(&self) -> &[(i64, i64)] {
        &self.inversions
    }

    pub fn graph(&self) -> &ResidueGraph {
        self.graph
            .get_or_init(|| self.builder.build(&self.inversions))
    }

    pub fn edges(&self) -> EdgeSet {
        self.graph().edges()
    }

    pub fn adjacency_matrix(&self) -> Vec<Vec<bool>> {
        self.graph().adjacency_matrix()
    }

    pub fn reachability(&self) -> Result<&ReachabilityMatrix> {
        self.reach
            .get_or_try_init(|| self.engine.compute(self.graph()))
    }

    pub fn star_nodes(&self) -> Result<&BTreeSet<usize>> {
        self.star_nodes
            .get_or_try_init(|| Ok(self.reachability()?.star_nodes()))
    }

    pub fn join_matrix(&self) -> Result<&JoinMatrix> {
        self.join_matrix
            .get_or_try_init(|| Ok(MatrixRenderer::new().render(self.reachability()?)))
    }

    pub fn join_set(&self) -> Result<&JoinSet> {
        self.join_set.get_or_try_init(|| {
            JoinSetBuilder::new(self.modulus()).build(self.reachability()?)
        })
    }
}
