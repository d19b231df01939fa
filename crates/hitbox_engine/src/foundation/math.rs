//! Math utilities and types
//!
//! Provides the 2D types used by the hitbox layer. Coordinates follow screen
//! conventions: `x` grows to the right, `y` grows downwards.

use serde::{Deserialize, Serialize};

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Axis-aligned rectangle given by its top-left corner and extent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Left edge
    pub const fn left(&self) -> f32 {
        self.x
    }

    /// Top edge
    pub const fn top(&self) -> f32 {
        self.y
    }

    /// Right edge (`x + width`)
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`)
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Half of the extent along each axis
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Strict overlap test.
    ///
    /// Rectangles that only share an edge or a corner do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        other.right() > self.x
            && other.x < self.right()
            && other.bottom() > self.y
            && other.y < self.bottom()
    }

    /// Copy of this rectangle moved by `(dx, dy)`
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_edges_and_center() {
        let rect = Rect::new(2.0, 4.0, 10.0, 6.0);

        assert_eq!(rect.right(), 12.0);
        assert_eq!(rect.bottom(), 10.0);
        assert_relative_eq!(rect.center(), Vec2::new(7.0, 7.0));
        assert_relative_eq!(rect.half_extents(), Vec2::new(5.0, 3.0));
    }

    #[test]
    fn test_edge_contact_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);

        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(-10.0, -10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_one_unit_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(9.0, 0.0, 10.0, 10.0);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 2.0, 2.0);

        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_translated() {
        let rect = Rect::new(1.0, 1.0, 3.0, 3.0).translated(2.0, -1.0);
        assert_eq!(rect, Rect::new(3.0, 0.0, 3.0, 3.0));
    }
}
