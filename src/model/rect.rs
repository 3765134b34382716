//! Axis-aligned integer rectangle.

use crate::error::{Error, Result};

/// An axis-aligned rectangle on the grid, with `x0 < x1` and `y0 < y1`.
///
/// Immutable by construction: operators always produce new rectangles,
/// never mutate one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

impl Rect {
    /// Creates a rectangle from corner coordinates.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedGeometry`] if the width or height would be
    /// non-positive. Internal callers never trigger this; the check
    /// protects the partition invariant at the construction boundary.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Result<Self> {
        if x1 <= x0 || y1 <= y0 {
            return Err(Error::MalformedGeometry(format!(
                "degenerate rectangle ({x0}, {y0}, {x1}, {y1})"
            )));
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    pub fn x0(&self) -> i32 {
        self.x0
    }

    pub fn y0(&self) -> i32 {
        self.y0
    }

    pub fn x1(&self) -> i32 {
        self.x1
    }

    pub fn y1(&self) -> i32 {
        self.y1
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Corner coordinates as a tuple, for canonical signatures.
    pub fn coords(&self) -> (i32, i32, i32, i32) {
        (self.x0, self.y0, self.x1, self.y1)
    }

    /// The unordered {width, height} pair of this rectangle.
    pub fn shape(&self) -> Shape {
        Shape::of(self.width(), self.height())
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn bounding(&self, other: &Rect) -> Result<Rect> {
        Rect::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }

    /// Whether the interiors of two rectangles intersect.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x0.max(other.x0) < self.x1.min(other.x1)
            && self.y0.max(other.y0) < self.y1.min(other.y1)
    }
}

/// An unordered {width, height} pair, stored normalized.
///
/// Two tiles are *congruent* exactly when their shapes are equal; the
/// validity oracle works in terms of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    short: i32,
    long: i32,
}

impl Shape {
    pub fn of(width: i32, height: i32) -> Self {
        Self {
            short: width.min(height),
            long: width.max(height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_derived_metrics() {
        let r = Rect::new(1, 2, 4, 7).unwrap();
        assert_eq!(r.width(), 3);
        assert_eq!(r.height(), 5);
        assert_eq!(r.area(), 15);
        assert_eq!(r.coords(), (1, 2, 4, 7));
    }

    #[test]
    fn test_rect_rejects_degenerate() {
        assert!(Rect::new(0, 0, 0, 5).is_err());
        assert!(Rect::new(0, 0, 5, 0).is_err());
        assert!(Rect::new(3, 0, 1, 5).is_err());
    }

    #[test]
    fn test_shape_is_unordered() {
        assert_eq!(Shape::of(2, 5), Shape::of(5, 2));
        assert_ne!(Shape::of(2, 5), Shape::of(2, 4));
        let r = Rect::new(0, 0, 5, 2).unwrap();
        assert_eq!(r.shape(), Shape::of(2, 5));
    }

    #[test]
    fn test_bounding() {
        let a = Rect::new(0, 0, 2, 3).unwrap();
        let b = Rect::new(2, 0, 5, 3).unwrap();
        assert_eq!(a.bounding(&b).unwrap(), Rect::new(0, 0, 5, 3).unwrap());
    }

    #[test]
    fn test_overlaps() {
        let a = Rect::new(0, 0, 3, 3).unwrap();
        let b = Rect::new(2, 2, 5, 5).unwrap();
        let c = Rect::new(3, 0, 5, 3).unwrap();
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c)); // shared edge only
    }
}
