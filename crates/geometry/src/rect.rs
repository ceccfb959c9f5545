//! Points, sizes and rectangles.
//!
//! A [`Rect`] is always expressed in the coordinate space of the element's
//! parent. Layout never produces a rectangle with a negative width or height.

use core::fmt;

/// A point in a 2D coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate the point by `(dx, dy)`.
    #[must_use]
    pub fn offset_by(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.x, self.y)
    }
}

/// A width and a height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// A zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// An unbounded size, used when asking a host for its natural size.
    pub const UNBOUNDED: Self = Self {
        width: f32::INFINITY,
        height: f32::INFINITY,
    };

    /// Create a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}x{}", self.width, self.height)
    }
}

/// Rectangle representing position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X coordinate of the left edge.
    pub x: f32,
    /// Y coordinate of the top edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// A zero sized rectangle at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new rectangle.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with given size.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub const fn min_x(&self) -> f32 {
        self.x
    }

    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Get the right edge (x + width).
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub const fn min_y(&self) -> f32 {
        self.y
    }

    pub fn mid_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Get the bottom edge (y + height).
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// The center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Smallest rectangle containing both `self` and `other`.
    ///
    /// Zero-sized rectangles still contribute their origin.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let min_x = self.min_x().min(other.min_x());
        let min_y = self.min_y().min(other.min_y());
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Move the rectangle by `(dx, dy)` without changing its size.
    #[must_use]
    pub fn offset_by(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Check if `other` lies entirely inside this rectangle (edges inclusive).
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.min_x() >= self.min_x()
            && other.min_y() >= self.min_y()
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    /// True when every component is finite and the size is not negative.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }

    /// Round every edge to the nearest `1 / scale` point.
    ///
    /// Edges are snapped rather than sizes, so rectangles sharing an edge
    /// before snapping still share it afterwards.
    ///
    /// A non-positive or non-finite scale returns the rectangle unchanged.
    #[must_use]
    pub fn snapped(&self, scale: f32) -> Self {
        if !scale.is_finite() || scale <= 0.0 {
            return *self;
        }
        let snap = |value: f32| (value * scale).round() / scale;
        let min_x = snap(self.x);
        let min_y = snap(self.y);
        Self::new(
            min_x,
            min_y,
            snap(self.max_x()) - min_x,
            snap(self.max_y()) - min_y,
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "({}, {}, {}, {})",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.max_x(), 40.0);
        assert_eq!(rect.max_y(), 60.0);
        assert_eq!(rect.mid_x(), 25.0);
        assert_eq!(rect.mid_y(), 40.0);
        assert_eq!(rect.center(), Point::new(25.0, 40.0));
    }

    #[test]
    fn test_union_includes_zero_sized_rect() {
        let rect = Rect::new(10.0, 10.0, 10.0, 10.0);
        let dot = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(rect.union(&dot), Rect::new(0.0, 0.0, 20.0, 20.0));
    }

    #[test]
    fn test_snapped_to_half_points() {
        let rect = Rect::new(10.2, 10.3, 20.74, 5.0);
        assert_eq!(rect.snapped(2.0), Rect::new(10.0, 10.5, 21.0, 5.0));
        assert_eq!(rect.snapped(0.0), rect);
    }

    #[test]
    fn test_snapped_neighbours_share_an_edge() {
        let first = Rect::new(0.4, 0.0, 0.4, 1.0).snapped(1.0);
        let second = Rect::new(0.8, 0.0, 0.4, 1.0).snapped(1.0);
        assert_eq!(first, Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(second, Rect::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(first.max_x(), second.min_x());
    }

    #[test]
    fn test_is_valid() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, -1.0, 1.0).is_valid());
        assert!(!Rect::new(f32::NAN, 0.0, 1.0, 1.0).is_valid());
    }
}
