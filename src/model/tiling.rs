//! Candidate solution: an area-sorted collection of tiles.

use std::fmt;

use super::rect::Rect;

/// Canonical signature of a tiling: its tile coordinate tuples in sorted
/// order. Two tilings with equal keys contain exactly the same tiles.
pub type TilingKey = Vec<(i32, i32, i32, i32)>;

/// Objective value of a tiling: the gap between the largest and smallest
/// tile's area, or `Undefined` when fewer than two tiles exist and the
/// objective is not yet meaningful.
///
/// `Undefined` orders after every `Measured` value, so an undefined score
/// never wins a best-state comparison. An explicit tagged value rather
/// than a numeric infinity avoids silent misordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Score {
    /// Area gap of a tiling with at least two tiles. Lower is better.
    Measured(i64),
    /// Fewer than two tiles.
    Undefined,
}

impl Score {
    /// The measured value, if any.
    pub fn value(&self) -> Option<i64> {
        match self {
            Score::Measured(v) => Some(*v),
            Score::Undefined => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Measured(v) => write!(f, "{v}"),
            Score::Undefined => write!(f, "undefined"),
        }
    }
}

/// One candidate solution: tiles kept sorted by area descending, plus the
/// number of mutation operations applied since initial generation.
///
/// Cloning produces a fully independent tile sequence; every operator
/// application works on an exclusive clone, so tilings held in the
/// frontier or explored set are never mutated in place.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tiling {
    tiles: Vec<Rect>,
    depth: u32,
}

impl Tiling {
    /// Creates an empty tiling at depth 0.
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            depth: 0,
        }
    }

    /// Inserts a tile, keeping the sequence sorted by area descending.
    /// Ties are left in insertion order.
    pub fn add_tile(&mut self, rect: Rect) {
        self.tiles.push(rect);
        self.tiles.sort_by(|a, b| b.area().cmp(&a.area()));
    }

    /// Removes the tiles at the given indices. Relative order of the
    /// remaining tiles is preserved, so the area sort stays intact.
    pub fn remove_tiles(&mut self, indices: &[usize]) {
        let mut order: Vec<usize> = indices.to_vec();
        order.sort_unstable_by(|a, b| b.cmp(a));
        for i in order {
            self.tiles.remove(i);
        }
    }

    pub fn tiles(&self) -> &[Rect] {
        &self.tiles
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Records one more mutation applied to this tiling.
    pub fn increment_depth(&mut self) {
        self.depth += 1;
    }

    /// Area gap between the largest and smallest tile.
    pub fn score(&self) -> Score {
        if self.tiles.len() >= 2 {
            Score::Measured(self.tiles[0].area() - self.tiles[self.tiles.len() - 1].area())
        } else {
            Score::Undefined
        }
    }

    /// (largest, smallest) tile areas, if at least one tile exists.
    pub fn areas(&self) -> Option<(i64, i64)> {
        let first = self.tiles.first()?;
        let last = self.tiles.last()?;
        Some((first.area(), last.area()))
    }

    /// Advisory reporting metric: depth + score. Never used to order the
    /// frontier.
    pub fn eval(&self) -> Score {
        match self.score() {
            Score::Measured(s) => Score::Measured(s + self.depth as i64),
            Score::Undefined => Score::Undefined,
        }
    }

    /// Canonical signature for dedup: sorted tile coordinate tuples.
    pub fn signature(&self) -> TilingKey {
        let mut key: TilingKey = self.tiles.iter().map(|t| t.coords()).collect();
        key.sort_unstable();
        key
    }

    /// Whether two tilings contain exactly the same tiles, independent of
    /// list order but sensitive to every coordinate.
    pub fn same_layout(&self, other: &Tiling) -> bool {
        self.signature() == other.signature()
    }

    /// Sum of all tile areas.
    pub fn total_area(&self) -> i64 {
        self.tiles.iter().map(|t| t.area()).sum()
    }
}

impl Default for Tiling {
    fn default() -> Self {
        Self::new()
    }
}
