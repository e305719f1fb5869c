//! JOIN matrix renderer
//!
//! ```text
//! reach[i][j], i != j  → "1"
//! reach[i][i]          → "*"
//! otherwise            → "0"
//! ```

use crate::features::join_closure::domain::{JoinCell, JoinMatrix, ReachabilityMatrix};

/// Maps a reachability matrix onto the `{0,1,*}` alphabet
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixRenderer;

impl MatrixRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Total function; every input matrix renders
    pub fn render(&self, reach: &ReachabilityMatrix) -> JoinMatrix {
        let cells = reach
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, &reachable)| cell(i, j, reachable))
                    .collect()
            })
            .collect();
        JoinMatrix::new(cells)
    }
}

fn cell(i: usize, j: usize, reachable: bool) -> JoinCell {
    match (reachable, i == j) {
        (false, _) => JoinCell::Unreachable,
        (true, true) => JoinCell::Cycle,
        (true, false) => JoinCell::Reachable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(rows: Vec<Vec<bool>>) -> Vec<Vec<&'static str>> {
        let reach = ReachabilityMatrix::from_rows(rows).unwrap();
        MatrixRenderer::new().render(&reach).to_symbols()
    }

    #[test]
    fn test_two_cycle() {
        let symbols = render(vec![vec![true, true], vec![true, true]]);
        assert_eq!(symbols, vec![vec!["*", "1"], vec!["1", "*"]]);
    }

    #[test]
    fn test_all_false() {
        let symbols = render(vec![vec![false; 3]; 3]);
        assert!(symbols.iter().flatten().all(|&s| s == "0"));
    }

    #[test]
    fn test_single_self_loop() {
        assert_eq!(render(vec![vec![true]]), vec![vec!["*"]]);
    }

    #[test]
    fn test_diagonal_false_renders_zero() {
        let symbols = render(vec![vec![false, true], vec![false, false]]);
        assert_eq!(symbols, vec![vec!["0", "1"], vec!["0", "0"]]);
    }

    #[test]
    fn test_display_rows() {
        let reach = ReachabilityMatrix::from_rows(vec![vec![true, true], vec![false, false]])
            .unwrap();
        let text = MatrixRenderer::new().render(&reach).to_string();
        assert_eq!(text, "* 1\n0 0\n");
    }
}
