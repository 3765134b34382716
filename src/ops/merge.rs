//! Merge operator: fuse two strictly adjacent tiles into one.

use super::oracle::commit_merge;
use crate::error::Result;
use crate::model::Tiling;

/// Indices of tiles sharing a full common edge with the tile at `idx`:
/// same x-range with touching y-ranges, or same y-range with touching
/// x-ranges.
fn strict_neighbors(tiling: &Tiling, idx: usize) -> Vec<usize> {
    let tile = &tiling.tiles()[idx];
    let mut neighbors = Vec::new();
    for (i, other) in tiling.tiles().iter().enumerate() {
        if i == idx {
            continue;
        }
        let same_x = tile.x0() == other.x0() && tile.x1() == other.x1();
        let same_y = tile.y0() == other.y0() && tile.y1() == other.y1();
        let touch_y = tile.y0() == other.y1() || tile.y1() == other.y0();
        let touch_x = tile.x0() == other.x1() || tile.x1() == other.x0();
        if (same_x && touch_y) || (same_y && touch_x) {
            neighbors.push(i);
        }
    }
    neighbors
}

/// Merges the first mergeable strictly adjacent pair into its bounding
/// rectangle. Tiles are scanned from smallest area to largest; each
/// tile's neighbors are tried in area-descending order; the first merge
/// that passes the oracle (no exemptions) is committed and the scan
/// stops. No-op when the tiling has 2 or fewer tiles, or no candidate
/// passes.
///
/// Returns whether a merge was committed.
pub fn merge(tiling: &mut Tiling) -> Result<bool> {
    if tiling.tile_count() <= 2 {
        return Ok(false);
    }
    for idx in (0..tiling.tile_count()).rev() {
        let tile = tiling.tiles()[idx];
        let mut neighbors = strict_neighbors(tiling, idx);
        if neighbors.is_empty() {
            continue;
        }
        neighbors.sort_by(|&a, &b| tiling.tiles()[b].area().cmp(&tiling.tiles()[a].area()));

        for nidx in neighbors {
            let merged = tile.bounding(&tiling.tiles()[nidx])?;
            if commit_merge(tiling, idx, nidx, merged) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Rect, Score};

    fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect {
        Rect::new(x0, y0, x1, y1).unwrap()
    }

    #[test]
    fn test_merge_noop_at_two_tiles() {
        let mut t = Tiling::new();
        t.add_tile(rect(0, 0, 3, 4)); // adjacent, mergeable in principle
        t.add_tile(rect(3, 0, 4, 4));
        let before = t.signature();

        assert!(!merge(&mut t).unwrap());
        assert_eq!(t.signature(), before);
    }

    #[test]
    fn test_merge_smallest_tile_with_largest_neighbor() {
        // 6x6: 16 + 12 + 8. The smallest (2x4) fuses with the 4x4 into a
        // 6x4 bounding rect, whose shape is free.
        let mut t = Tiling::new();
        t.add_tile(rect(0, 0, 4, 4)); // 16, {4, 4}
        t.add_tile(rect(0, 4, 6, 6)); // 12, {6, 2}
        t.add_tile(rect(4, 0, 6, 4)); // 8,  {2, 4}

        assert!(merge(&mut t).unwrap());
        assert_eq!(t.tile_count(), 2);
        assert_eq!(t.total_area(), 36);
        assert!(t.tiles().iter().any(|r| r.coords() == (0, 0, 6, 4)));
        // new score recomputed from the post-merge extremes: 24 - 12
        assert_eq!(t.score(), Score::Measured(12));
    }

    #[test]
    fn test_merge_blocked_by_oracle_is_noop() {
        // Fusing the bottom pair would produce a 6x3 congruent with the
        // top tile; no other pair is strictly adjacent.
        let mut t = Tiling::new();
        t.add_tile(rect(0, 0, 6, 3)); // 18, {6, 3}
        t.add_tile(rect(0, 3, 4, 6)); // 12, {4, 3}
        t.add_tile(rect(4, 3, 6, 6)); // 6,  {2, 3}
        let before = t.signature();

        assert!(!merge(&mut t).unwrap());
        assert_eq!(t.signature(), before);
    }

    #[test]
    fn test_merge_requires_full_common_edge() {
        // The smallest tile (1x6) touches both left tiles but shares a
        // full edge with neither, so the scan moves on and merges the
        // 5-wide pair instead.
        let mut t = Tiling::new();
        t.add_tile(rect(0, 0, 5, 4)); // 20, {5, 4}
        t.add_tile(rect(0, 4, 5, 6)); // 10, {5, 2}
        t.add_tile(rect(5, 0, 6, 6)); // 6,  {1, 6}

        assert!(merge(&mut t).unwrap());
        assert_eq!(t.tile_count(), 2);
        assert!(t.tiles().iter().any(|r| r.coords() == (0, 0, 5, 6)));
    }

    #[test]
    fn test_strict_neighbors_excludes_corner_contact() {
        let mut t = Tiling::new();
        t.add_tile(rect(0, 0, 2, 2));
        t.add_tile(rect(2, 2, 4, 4)); // corner contact only
        assert!(strict_neighbors(&t, 0).is_empty());
    }
}
