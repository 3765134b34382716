//! Validity oracle and atomic commit primitives.
//!
//! The oracle is the sole gatekeeper of the shape-distinctness invariant:
//! no two tiles in a committed tiling may share the same unordered
//! {width, height} pair. Every operator consults it before committing new
//! tiles. The commit primitives bundle the oracle checks with the
//! remove/insert step so a mutation is either applied whole or not at all.

use crate::model::{Rect, Shape, Tiling};

/// Whether a candidate tile of the given dimensions may be added to the
/// tiling without violating shape distinctness.
///
/// Shapes listed in `ignore` are exempt: a candidate whose shape appears
/// there passes unconditionally. Operators use this for tiles that are
/// removed in the same atomic step as the insertion.
pub fn shape_is_free(width: i32, height: i32, tiling: &Tiling, ignore: &[Shape]) -> bool {
    let candidate = Shape::of(width, height);
    if ignore.contains(&candidate) {
        return true;
    }
    !tiling.tiles().iter().any(|t| t.shape() == candidate)
}

/// Replaces the tiles at `removed` with the pair `c1`, `c2`, provided the
/// pair is mutually shape-distinct and each passes the oracle (with
/// `ignore` exempting the shapes of the tiles being removed).
///
/// Validation runs against the tiling with the removed tiles still
/// present; on rejection the tiling is untouched. Returns whether the
/// replacement was committed.
pub(crate) fn commit_split(
    tiling: &mut Tiling,
    removed: &[usize],
    c1: Rect,
    c2: Rect,
    ignore: &[Shape],
) -> bool {
    if c1.shape() == c2.shape()
        || !shape_is_free(c1.width(), c1.height(), tiling, ignore)
        || !shape_is_free(c2.width(), c2.height(), tiling, ignore)
    {
        return false;
    }
    tiling.remove_tiles(removed);
    tiling.add_tile(c1);
    tiling.add_tile(c2);
    true
}

/// Replaces the tiles at indices `i` and `j` with `merged`, provided the
/// merged shape passes the oracle with no exemptions. Returns whether the
/// merge was committed.
pub(crate) fn commit_merge(tiling: &mut Tiling, i: usize, j: usize, merged: Rect) -> bool {
    if !shape_is_free(merged.width(), merged.height(), tiling, &[]) {
        return false;
    }
    tiling.remove_tiles(&[i, j]);
    tiling.add_tile(merged);
    true
}
