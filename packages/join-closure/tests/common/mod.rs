//! Common test utilities for join-closure
//!
//! Shared fixtures and a brute-force reference closure.

#![allow(dead_code)]

use join_closure::ReachabilityMatrix;

/// `n = 2`, `[(0,1), (1,2)]`: two mutually reachable star nodes
pub const TWO_CYCLE: (i64, &[(i64, i64)]) = (2, &[(0, 1), (1, 2)]);

/// `n = 3`, no inversions
pub const EMPTY_THREE: (i64, &[(i64, i64)]) = (3, &[]);

/// `n = 1`, `[(0,0)]`: a single self-loop
pub const SINGLE_LOOP: (i64, &[(i64, i64)]) = (1, &[(0, 0)]);

/// Reference closure by repeated squaring over the adjacency matrix
///
/// Independent of the traversal engine; used to cross-check it.
pub fn warshall_closure(adjacency: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let n = adjacency.len();
    let mut reach = adjacency.to_vec();
    for k in 0..n {
        for i in 0..n {
            if reach[i][k] {
                for j in 0..n {
                    if reach[k][j] {
                        reach[i][j] = true;
                    }
                }
            }
        }
    }
    reach
}

/// Rows of `reach` as plain vectors
pub fn rows(reach: &ReachabilityMatrix) -> Vec<Vec<bool>> {
    reach.rows().to_vec()
}
