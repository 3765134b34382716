//! Tiling data model.
//!
//! [`Rect`] is the immutable geometric primitive; [`Tiling`] is one
//! candidate solution — an area-sorted sequence of rectangles exactly
//! covering the square, scored by the spread between its extreme tile
//! areas.

mod rect;
mod tiling;

pub use rect::{Rect, Shape};
pub use tiling::{Score, Tiling, TilingKey};
