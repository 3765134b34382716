//! Random initial-tiling generator.

use rand::Rng;

use super::oracle::commit_split;
use crate::error::Result;
use crate::model::{Rect, Tiling};

/// Number of random split rounds applied to the full-square tile.
const INITIAL_SPLIT_ROUNDS: usize = 4;

/// Generates one randomized starting tiling for a `side`×`side` square.
///
/// Starts from a single tile covering the whole square at depth 0, then
/// runs four rounds of: pick a uniformly random tile, choose an axis with
/// 50/50 probability, and cut it at a uniformly random interior point.
/// A round is skipped when the chosen axis's extent is 2 or less, or when
/// either candidate half collides with an existing tile's shape (or the
/// two halves are congruent to each other); the tile is then left
/// unchanged. Rounds commit through the same primitive as the split
/// operator, so the shape-distinctness invariant holds throughout.
pub fn random_initial<R: Rng>(side: i32, rng: &mut R) -> Result<Tiling> {
    let mut tiling = Tiling::new();
    tiling.add_tile(Rect::new(0, 0, side, side)?);

    for _ in 0..INITIAL_SPLIT_ROUNDS {
        let idx = rng.random_range(0..tiling.tile_count());
        let tile = tiling.tiles()[idx];

        if rng.random_range(0..2) == 0 {
            // vertical cut (along x)
            if tile.width() <= 2 {
                continue;
            }
            let cut = rng.random_range(tile.x0() + 1..tile.x1());
            let c1 = Rect::new(tile.x0(), tile.y0(), cut, tile.y1())?;
            let c2 = Rect::new(cut, tile.y0(), tile.x1(), tile.y1())?;
            commit_split(&mut tiling, &[idx], c1, c2, &[]);
        } else {
            // horizontal cut (along y)
            if tile.height() <= 2 {
                continue;
            }
            let cut = rng.random_range(tile.y0() + 1..tile.y1());
            let c1 = Rect::new(tile.x0(), tile.y0(), tile.x1(), cut)?;
            let c2 = Rect::new(tile.x0(), cut, tile.x1(), tile.y1())?;
            commit_split(&mut tiling, &[idx], c1, c2, &[]);
        }
    }

    Ok(tiling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_exact_cover(tiling: &Tiling, side: i32) {
        assert_eq!(tiling.total_area(), side as i64 * side as i64);
        let tiles = tiling.tiles();
        for (i, a) in tiles.iter().enumerate() {
            assert!(a.x0() >= 0 && a.y0() >= 0 && a.x1() <= side && a.y1() <= side);
            for b in &tiles[i + 1..] {
                assert!(!a.overlaps(b), "tiles overlap: {a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_initial_tiling_is_exact_cover() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let t = random_initial(8, &mut rng).unwrap();
            assert_exact_cover(&t, 8);
            assert_eq!(t.depth(), 0);
            assert!(t.tile_count() >= 1 && t.tile_count() <= 1 + INITIAL_SPLIT_ROUNDS);
        }
    }

    #[test]
    fn test_shapes_distinct_in_initial_tiling() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let t = random_initial(9, &mut rng).unwrap();
            let tiles = t.tiles();
            for (i, a) in tiles.iter().enumerate() {
                for b in &tiles[i + 1..] {
                    assert_ne!(a.shape(), b.shape());
                }
            }
        }
    }

    #[test]
    fn test_small_square_stays_whole() {
        // Both extents are <= 2, so every round skips.
        let mut rng = StdRng::seed_from_u64(3);
        let t = random_initial(2, &mut rng).unwrap();
        assert_eq!(t.tile_count(), 1);
        assert_eq!(t.tiles()[0].coords(), (0, 0, 2, 2));
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = random_initial(10, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = random_initial(10, &mut StdRng::seed_from_u64(42)).unwrap();
        assert!(a.same_layout(&b));
    }
}
