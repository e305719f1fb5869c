//! JOIN set builder
//!
//! Turns group-level reachability into lifted integer pairs.
//!
//! # Lifting
//! ```text
//! lift(a, g) = g + k·n,   k = max(0, ceil((a - g + 1) / n))
//! ```
//! the smallest member of class `g` strictly greater than `a`.
//!
//! # Rules
//! - Enumeration: `reach[a][g]`, `g != a` → `(a, lift(a, g))`, starred iff `g` is a star node
//! - Cycle: star node `x` → `(x, x+n)*`; `(x, x)` is never emitted

use tracing::debug;

use crate::errors::{InvariantError, JoinError, Result};
use crate::features::join_closure::domain::{
    JoinSet, Modulus, PairRepresentation, ReachabilityMatrix,
};

/// Smallest `b ≡ group (mod n)` with `b > a`
pub fn lift(modulus: Modulus, a: i64, group: usize) -> Result<i64> {
    modulus.check_node(group)?;

    let n = i128::from(modulus.as_i64());
    let g = group as i128;
    let numerator = i128::from(a) - g + 1;
    let k = if numerator <= 0 {
        0
    } else {
        (numerator + n - 1) / n
    };

    let lifted = i64::try_from(g + k * n).map_err(|_| InvariantError::LiftOverflow { a, group })?;
    if lifted < 0 {
        return Err(InvariantError::NegativeLift { a, group, lifted }.into());
    }
    Ok(lifted)
}

/// Enumerates the canonical JOIN set from a reachability matrix
#[derive(Debug, Clone, Copy)]
pub struct JoinSetBuilder {
    modulus: Modulus,
}

impl JoinSetBuilder {
    pub fn new(modulus: Modulus) -> Self {
        Self { modulus }
    }

    /// Build the JOIN set; fails if `reach` is not `n×n` or a pair conflicts
    pub fn build(&self, reach: &ReachabilityMatrix) -> Result<JoinSet> {
        let n = self.modulus.get();
        if reach.n() != n {
            return Err(JoinError::dimension_mismatch(n, reach.n()));
        }

        let star_nodes = reach.star_nodes();
        let mut join = JoinSet::new();

        for a in self.modulus.nodes() {
            for group in reach.reachable_from(a).filter(|&group| group != a) {
                let b = lift(self.modulus, a as i64, group)?;
                join.insert(PairRepresentation::new(
                    a as i64,
                    b,
                    star_nodes.contains(&group),
                ))?;
            }
        }

        for &x in &star_nodes {
            let x = x as i64;
            join.insert(PairRepresentation::starred(x, x + self.modulus.as_i64()))?;
        }

        debug!(
            "join set built: n={}, star_nodes={}, pairs={}",
            n,
            star_nodes.len(),
            join.len()
        );
        Ok(join)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn modulus(n: i64) -> Modulus {
        Modulus::new(n).unwrap()
    }

    fn build(rows: Vec<Vec<bool>>) -> Vec<String> {
        let n = rows.len() as i64;
        let reach = ReachabilityMatrix::from_rows(rows).unwrap();
        JoinSetBuilder::new(modulus(n)).build(&reach).unwrap().render()
    }

    #[test]
    fn test_lift_greater_group_unchanged() {
        assert_eq!(lift(modulus(3), 0, 2).unwrap(), 2);
    }

    #[test]
    fn test_lift_smaller_group_shifts_by_n() {
        assert_eq!(lift(modulus(3), 2, 0).unwrap(), 3);
        assert_eq!(lift(modulus(3), 2, 2).unwrap(), 5);
    }

    #[test]
    fn test_lift_general_left_endpoint() {
        // smallest b ≡ 1 (mod 4) with b > 10 is 13
        assert_eq!(lift(modulus(4), 10, 1).unwrap(), 13);
        // negative a: smallest non-negative-offset representative
        assert_eq!(lift(modulus(4), -7, 1).unwrap(), 1);
    }

    #[test]
    fn test_lift_rejects_out_of_range_group() {
        assert!(matches!(
            lift(modulus(2), 0, 2),
            Err(JoinError::Invariant(InvariantError::NodeOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_lift_overflow_is_invariant_error() {
        assert!(matches!(
            lift(modulus(3), i64::MAX, 0),
            Err(JoinError::Invariant(InvariantError::LiftOverflow { .. }))
        ));
    }

    #[test]
    fn test_two_cycle_scenario() {
        assert_eq!(
            build(vec![vec![true, true], vec![true, true]]),
            vec!["(0,1)*", "(0,2)*", "(1,2)*", "(1,3)*"]
        );
    }

    #[test]
    fn test_single_self_loop_scenario() {
        assert_eq!(build(vec![vec![true]]), vec!["(0,1)*"]);
    }

    #[test]
    fn test_empty_reach_yields_empty_set() {
        assert!(build(vec![vec![false; 3]; 3]).is_empty());
    }

    #[test]
    fn test_chain_has_no_stars() {
        // 0 -> 1 -> 2 (closure)
        let pairs = build(vec![
            vec![false, true, true],
            vec![false, false, true],
            vec![false, false, false],
        ]);
        assert_eq!(pairs, vec!["(0,1)", "(0,2)", "(1,2)"]);
    }

    #[test]
    fn test_backward_edge_lifts() {
        // 2 -> 0, nothing cyclic
        let pairs = build(vec![
            vec![false, false, false],
            vec![false, false, false],
            vec![true, false, false],
        ]);
        assert_eq!(pairs, vec!["(2,3)"]);
    }

    #[test]
    fn test_star_flag_follows_target_group() {
        // 0 -> 1, 1 self-loop
        let pairs = build(vec![vec![false, true], vec![false, true]]);
        assert_eq!(pairs, vec!["(0,1)*", "(1,3)*"]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let reach = ReachabilityMatrix::from_rows(vec![vec![true]]).unwrap();
        let err = JoinSetBuilder::new(modulus(2)).build(&reach).unwrap_err();
        assert!(matches!(
            err,
            JoinError::Invariant(InvariantError::DimensionMismatch {
                expected: 2,
                found: 1
            })
        ));
    }
}
