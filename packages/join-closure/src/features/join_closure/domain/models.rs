//! Graph-level value types: modulus, edges, reachability

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::Range;

use crate::errors::{InvariantError, JoinError, Result};

/// Number of residue classes, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Modulus(usize);

impl Modulus {
    /// Validate `n`; fails with a configuration error when `n <= 0`
    pub fn new(n: i64) -> Result<Self> {
        if n <= 0 {
            return Err(JoinError::configuration(n));
        }
        usize::try_from(n)
            .map(Self)
            .map_err(|_| JoinError::configuration(n))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Modulus as i64 (lossless: constructed from a positive i64)
    pub fn as_i64(self) -> i64 {
        self.0 as i64
    }

    /// Non-negative residue of `x`, always in `[0, n)`
    pub fn residue(self, x: i64) -> usize {
        x.rem_euclid(self.as_i64()) as usize
    }

    /// All nodes `0..n`
    pub fn nodes(self) -> Range<usize> {
        0..self.0
    }

    /// Check that `node` lies in `[0, n)`
    pub fn check_node(self, node: usize) -> Result<usize> {
        if node < self.0 {
            Ok(node)
        } else {
            Err(InvariantError::NodeOutOfRange { node, n: self.0 }.into())
        }
    }
}

impl std::fmt::Display for Modulus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Directed edge between residue classes (`from → to`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

impl Edge {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl From<(usize, usize)> for Edge {
    fn from((from, to): (usize, usize)) -> Self {
        Self { from, to }
    }
}

/// Deduplicated, ordered edge set
pub type EdgeSet = BTreeSet<Edge>;

/// Non-trivial (length >= 1) reachability over `n` nodes
///
/// `get(i, i)` is true iff `i` lies on a directed cycle. The matrix is the
/// transitive closure, so it is transitively closed by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReachabilityMatrix {
    rows: Vec<Vec<bool>>,
}

impl ReachabilityMatrix {
    /// Build from rows; every row must have length `rows.len()`
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let n = rows.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != n) {
            return Err(JoinError::dimension_mismatch(n, bad.len()));
        }
        Ok(Self { rows })
    }

    /// Matrix side length
    pub fn n(&self) -> usize {
        self.rows.len()
    }

    /// Is there a path of length >= 1 from `i` to `j`
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.rows
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(false)
    }

    pub fn row(&self, i: usize) -> &[bool] {
        &self.rows[i]
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// `x` returns to itself by a non-trivial path
    pub fn is_star(&self, x: usize) -> bool {
        self.get(x, x)
    }

    /// All star nodes, ascending
    pub fn star_nodes(&self) -> BTreeSet<usize> {
        (0..self.n()).filter(|&x| self.is_star(x)).collect()
    }

    /// Nodes reachable from `i`, ascending
    pub fn reachable_from(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows[i]
            .iter()
            .enumerate()
            .filter_map(|(j, &ok)| ok.then_some(j))
    }

    /// Number of true entries
    pub fn count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&ok| ok).count())
            .sum()
    }

    /// `reach[i][j] ∧ reach[j][k] ⇒ reach[i][k]` for all i, j, k
    pub fn is_transitively_closed(&self) -> bool {
        let n = self.n();
        (0..n).all(|i| {
            self.reachable_from(i)
                .all(|j| (0..n).all(|k| !self.get(j, k) || self.get(i, k)))
        })
    }
}
