//! JOIN outputs: the `{0,1,*}` matrix and the lifted pair set

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::errors::{InvariantError, Result};

/// One JOIN matrix cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinCell {
    /// `"0"`
    Unreachable,
    /// `"1"`: reachable, off-diagonal
    Reachable,
    /// `"*"`: diagonal, node lies on a cycle
    Cycle,
}

impl JoinCell {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Unreachable => "0",
            Self::Reachable => "1",
            Self::Cycle => "*",
        }
    }
}

impl fmt::Display for JoinCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for JoinCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// `n×n` grid over `{0,1,*}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct JoinMatrix {
    cells: Vec<Vec<JoinCell>>,
}

impl JoinMatrix {
    pub(crate) fn new(cells: Vec<Vec<JoinCell>>) -> Self {
        Self { cells }
    }

    pub fn n(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, i: usize, j: usize) -> JoinCell {
        self.cells[i][j]
    }

    pub fn rows(&self) -> &[Vec<JoinCell>] {
        &self.cells
    }

    /// Rows as display symbols
    pub fn to_symbols(&self) -> Vec<Vec<&'static str>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(JoinCell::symbol).collect())
            .collect()
    }
}

impl fmt::Display for JoinMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<&str> = row.iter().map(JoinCell::symbol).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// A lifted JOIN pair `(a,b)`, starred when `b`'s class lies on a cycle
///
/// Ordered by `(a, b)` ascending, ties broken by the star flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PairRepresentation {
    pub a: i64,
    pub b: i64,
    pub star: bool,
}

impl PairRepresentation {
    pub fn new(a: i64, b: i64, star: bool) -> Self {
        Self { a, b, star }
    }

    pub fn plain(a: i64, b: i64) -> Self {
        Self::new(a, b, false)
    }

    pub fn starred(a: i64, b: i64) -> Self {
        Self::new(a, b, true)
    }
}

impl fmt::Display for PairRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.a, self.b)?;
        if self.star {
            f.write_str("*")?;
        }
        Ok(())
    }
}

/// Set of JOIN pairs with at most one star flag per `(a,b)` key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinSet {
    pairs: BTreeSet<PairRepresentation>,
}

impl JoinSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair
    ///
    /// Returns `Ok(false)` for an exact duplicate. Fails when `(a,b)` is
    /// already present with the other star flag, or when `a == b`.
    pub fn insert(&mut self, pair: PairRepresentation) -> Result<bool> {
        if pair.a == pair.b {
            return Err(InvariantError::SelfPair { a: pair.a }.into());
        }
        if let Some(existing) = self.star_of(pair.a, pair.b) {
            if existing != pair.star {
                return Err(InvariantError::ConflictingStar {
                    a: pair.a,
                    b: pair.b,
                }
                .into());
            }
            return Ok(false);
        }
        Ok(self.pairs.insert(pair))
    }

    /// Star flag stored for `(a,b)`, if present
    pub fn star_of(&self, a: i64, b: i64) -> Option<bool> {
        self.pairs
            .range(PairRepresentation::plain(a, b)..=PairRepresentation::starred(a, b))
            .next()
            .map(|pair| pair.star)
    }

    pub fn contains(&self, pair: &PairRepresentation) -> bool {
        self.pairs.contains(pair)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in `(a, b, star)` ascending order
    pub fn iter(&self) -> impl Iterator<Item = &PairRepresentation> {
        self.pairs.iter()
    }

    /// Pairs whose left endpoint is `a`
    pub fn pairs_from(&self, a: i64) -> impl Iterator<Item = &PairRepresentation> {
        self.pairs
            .range(PairRepresentation::plain(a, i64::MIN)..=PairRepresentation::starred(a, i64::MAX))
    }

    /// Rendered pairs in sorted order, e.g. `["(0,1)*", "(0,2)"]`
    pub fn render(&self) -> Vec<String> {
        self.pairs.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a JoinSet {
    type Item = &'a PairRepresentation;
    type IntoIter = std::collections::btree_set::Iter<'a, PairRepresentation>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl Serialize for JoinSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.pairs.len()))?;
        for pair in &self.pairs {
            seq.serialize_element(pair)?;
        }
        seq.end()
    }
}

impl fmt::Display for JoinSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pair in &self.pairs {
            writeln!(f, "{}", pair)?;
        }
        Ok(())
    }
}
