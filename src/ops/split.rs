//! Split operator: cut one tile into two along an axis.

use rand::Rng;

use super::oracle::{commit_split, shape_is_free};
use crate::error::Result;
use crate::model::{Rect, Tiling};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Width,
    Height,
}

/// Best feasible cut of `tile` along `axis`: the cost (area difference of
/// the two halves) and the size of the first half. `None` when the axis
/// extent is 2 or less, or no cut point yields two oracle-approved shapes.
///
/// Cut sizes are scanned from floor(P/2)+1 outward to P-1 and the first
/// feasible one wins — nearest the exact center, not a global minimum.
fn axis_split(tiling: &Tiling, tile: &Rect, axis: Axis) -> Option<(i64, i32)> {
    let (primary, secondary) = match axis {
        Axis::Width => (tile.width(), tile.height()),
        Axis::Height => (tile.height(), tile.width()),
    };
    if primary <= 2 {
        return None;
    }
    for r in (primary / 2 + 1)..primary {
        if shape_is_free(r, secondary, tiling, &[])
            && shape_is_free(primary - r, secondary, tiling, &[])
        {
            let cost = ((2 * r - primary) as i64 * secondary as i64).abs();
            return Some((cost, r));
        }
    }
    None
}

/// Splits the first splittable tile (in area-descending order) into two
/// sub-tiles along the cheaper feasible axis; ties between axes are
/// broken uniformly at random. No-op when no tile can be split.
///
/// Returns whether a split was committed.
pub fn split<R: Rng>(tiling: &mut Tiling, rng: &mut R) -> Result<bool> {
    for idx in 0..tiling.tile_count() {
        let tile = tiling.tiles()[idx];
        let by_width = axis_split(tiling, &tile, Axis::Width);
        let by_height = axis_split(tiling, &tile, Axis::Height);

        let (axis, r) = match (by_width, by_height) {
            (None, None) => continue,
            (Some((_, r)), None) => (Axis::Width, r),
            (None, Some((_, r))) => (Axis::Height, r),
            (Some((cw, rw)), Some((ch, rh))) => {
                if cw < ch {
                    (Axis::Width, rw)
                } else if ch < cw {
                    (Axis::Height, rh)
                } else if rng.random_range(0..2) == 0 {
                    (Axis::Width, rw)
                } else {
                    (Axis::Height, rh)
                }
            }
        };

        let (c1, c2) = match axis {
            Axis::Width => (
                Rect::new(tile.x0(), tile.y0(), tile.x0() + r, tile.y1())?,
                Rect::new(tile.x0() + r, tile.y0(), tile.x1(), tile.y1())?,
            ),
            Axis::Height => (
                Rect::new(tile.x0(), tile.y0(), tile.x1(), tile.y0() + r)?,
                Rect::new(tile.x0(), tile.y0() + r, tile.x1(), tile.y1())?,
            ),
        };
        return Ok(commit_split(tiling, &[idx], c1, c2, &[]));
    }
    Ok(false)
}
