//! Mutation operators and the validity oracle.
//!
//! Each operator transforms one tiling into a candidate successor and is
//! an always-safe no-op when no valid mutation exists. All three scan
//! first-match (earliest feasible tile/axis/direction wins) rather than
//! searching globally; the bounded frontier of many parallel candidate
//! states compensates for that local greediness.

mod init;
mod merge;
mod merge_split;
mod oracle;
mod split;

pub use init::random_initial;
pub use merge::merge;
pub use merge_split::merge_split;
pub use oracle::shape_is_free;
pub use split::split;

use crate::error::Result;
use crate::model::Tiling;
use rand::Rng;

/// The three mutation operators, in the fixed order the search loop
/// applies them when expanding a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Cut one tile into two along an axis.
    Split,
    /// Fuse two strictly adjacent tiles into their bounding rectangle.
    Merge,
    /// Re-cut an L-shaped pair of corner-adjacent tiles.
    MergeSplit,
}

impl Operator {
    /// Fixed expansion order.
    pub const ALL: [Operator; 3] = [Operator::Split, Operator::Merge, Operator::MergeSplit];

    /// Applies this operator to `tiling` in place. Only `Split` draws from
    /// the generator (axis tie-break). Returns whether the tiling changed.
    pub fn apply<R: Rng>(&self, tiling: &mut Tiling, rng: &mut R) -> Result<bool> {
        match self {
            Operator::Split => split(tiling, rng),
            Operator::Merge => merge(tiling),
            Operator::MergeSplit => merge_split(tiling),
        }
    }
}
