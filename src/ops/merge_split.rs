//! Merge-split operator: re-cut an L-shaped pair of corner-adjacent tiles.
//!
//! Two tiles whose union is an L shape (touching along a partial edge,
//! aligned at exactly one end of it) can be re-covered by two different
//! rectangles, split by a perpendicular line through the shared corner.
//! Eight directional configurations exist, distinguished by which side
//! the neighbor touches and which edge aligns.

use super::oracle::commit_split;
use crate::error::Result;
use crate::model::{Rect, Tiling};

/// The eight L-configurations of a (tile, neighbor) pair. The first word
/// names the side of the tile the neighbor touches; the second names the
/// aligned edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LCorner {
    TopLeft,
    TopRight,
    RightTop,
    RightBottom,
    BottomRight,
    BottomLeft,
    LeftBottom,
    LeftTop,
}

impl LCorner {
    /// Classifies `other` relative to `tile`: which side it touches and
    /// which edge aligns. `None` when the pair is not configured as any
    /// of the eight corners.
    fn classify(tile: &Rect, other: &Rect) -> Option<LCorner> {
        if other.y1() == tile.y0() {
            // neighbor on the y0 side
            if other.x0() == tile.x0() {
                Some(LCorner::TopLeft)
            } else if other.x1() == tile.x1() {
                Some(LCorner::TopRight)
            } else {
                None
            }
        } else if other.x0() == tile.x1() {
            if other.y1() == tile.y1() {
                Some(LCorner::RightBottom)
            } else if other.y0() == tile.y0() {
                Some(LCorner::RightTop)
            } else {
                None
            }
        } else if other.y0() == tile.y1() {
            if other.x0() == tile.x0() {
                Some(LCorner::BottomLeft)
            } else if other.x1() == tile.x1() {
                Some(LCorner::BottomRight)
            } else {
                None
            }
        } else if other.x1() == tile.x0() {
            if other.y0() == tile.y0() {
                Some(LCorner::LeftTop)
            } else if other.y1() == tile.y1() {
                Some(LCorner::LeftBottom)
            } else {
                None
            }
        } else {
            None
        }
    }

    /// The two rectangles that exactly re-cover `tile` ∪ `other`, split by
    /// a perpendicular line through the shared corner. `None` when the
    /// directional extension condition fails (the neighbor's far edge must
    /// extend past the tile's corresponding edge, otherwise the union is
    /// not an L).
    fn recut(&self, t: &Rect, n: &Rect) -> Result<Option<(Rect, Rect)>> {
        let pair = match self {
            LCorner::TopLeft => {
                if n.x1() <= t.x1() {
                    return Ok(None);
                }
                (
                    Rect::new(t.x0(), n.y0(), t.x1(), t.y1())?,
                    Rect::new(t.x1(), n.y0(), n.x1(), n.y1())?,
                )
            }
            LCorner::TopRight => {
                if n.x0() >= t.x0() {
                    return Ok(None);
                }
                (
                    Rect::new(t.x0(), n.y0(), t.x1(), t.y1())?,
                    Rect::new(n.x0(), n.y0(), t.x0(), n.y1())?,
                )
            }
            LCorner::RightTop => {
                if n.y1() <= t.y1() {
                    return Ok(None);
                }
                (
                    Rect::new(t.x0(), t.y0(), n.x1(), t.y1())?,
                    Rect::new(n.x0(), t.y1(), n.x1(), n.y1())?,
                )
            }
            LCorner::RightBottom => {
                if n.y0() >= t.y0() {
                    return Ok(None);
                }
                (
                    Rect::new(t.x0(), t.y0(), n.x1(), t.y1())?,
                    Rect::new(n.x0(), n.y0(), n.x1(), t.y0())?,
                )
            }
            LCorner::BottomRight => {
                if n.x0() >= t.x0() {
                    return Ok(None);
                }
                (
                    Rect::new(t.x0(), t.y0(), t.x1(), n.y1())?,
                    Rect::new(n.x0(), n.y0(), t.x0(), n.y1())?,
                )
            }
            LCorner::BottomLeft => {
                if n.x1() <= t.x1() {
                    return Ok(None);
                }
                (
                    Rect::new(t.x0(), t.y0(), t.x1(), n.y1())?,
                    Rect::new(t.x1(), n.y0(), n.x1(), n.y1())?,
                )
            }
            LCorner::LeftBottom => {
                if n.y0() >= t.y0() {
                    return Ok(None);
                }
                (
                    Rect::new(n.x0(), t.y0(), t.x1(), t.y1())?,
                    Rect::new(n.x0(), n.y0(), n.x1(), t.y0())?,
                )
            }
            LCorner::LeftTop => {
                if n.y1() <= t.y1() {
                    return Ok(None);
                }
                (
                    Rect::new(n.x0(), t.y0(), t.x1(), t.y1())?,
                    Rect::new(n.x0(), t.y1(), n.x1(), n.y1())?,
                )
            }
        };
        Ok(Some(pair))
    }
}

/// All L-configured (neighbor index, corner) pairs for the tile at `idx`.
fn corner_neighbors(tiling: &Tiling, idx: usize) -> Vec<(usize, LCorner)> {
    let tile = &tiling.tiles()[idx];
    let mut pairs = Vec::new();
    for (i, other) in tiling.tiles().iter().enumerate() {
        if i == idx {
            continue;
        }
        if let Some(corner) = LCorner::classify(tile, other) {
            pairs.push((i, corner));
        }
    }
    pairs
}

/// Re-cuts the first reconfigurable L-shaped pair. Tiles are scanned from
/// smallest area to largest; each tile's corner neighbors are tried in
/// area-descending order. A reconfiguration commits only when the two new
/// shapes are mutually distinct and each passes the oracle with the two
/// source tiles' shapes exempted (they are removed in the same atomic
/// step). At most one reconfiguration per invocation; no-op when the
/// tiling has 2 or fewer tiles, or none succeeds.
///
/// Returns whether a reconfiguration was committed.
pub fn merge_split(tiling: &mut Tiling) -> Result<bool> {
    if tiling.tile_count() <= 2 {
        return Ok(false);
    }
    for idx in (0..tiling.tile_count()).rev() {
        let tile = tiling.tiles()[idx];
        let mut pairs = corner_neighbors(tiling, idx);
        if pairs.is_empty() {
            continue;
        }
        pairs.sort_by(|&(a, _), &(b, _)| {
            tiling.tiles()[b].area().cmp(&tiling.tiles()[a].area())
        });

        for (nidx, corner) in pairs {
            let other = tiling.tiles()[nidx];
            if let Some((c1, c2)) = corner.recut(&tile, &other)? {
                let ignore = [tile.shape(), other.shape()];
                if commit_split(tiling, &[idx, nidx], c1, c2, &ignore) {
                    return Ok(true);
                }
            }
        }
    }
    Ok(false)
}
