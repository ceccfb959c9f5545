/// 2D affine transforms attached to elements.
///
/// Hosts apply an element's transform around the center of its untransformed
/// rectangle. The engine only needs two things from this module: the visible
/// frame of a transformed rectangle, and the untransformed rectangle that
/// produces a requested visible frame.
use crate::{Point, Rect, Size};

/// 2D transformation matrix in column-major order.
///
/// Matrix layout:
/// ```text
/// [ a  c  e ]   [ sx  shy tx ]
/// [ b  d  f ] = [ shx sy  ty ]
/// [ 0  0  1 ]   [ 0   0   1  ]
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

const EPSILON: f32 = 1e-6;

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// Identity transform (no transformation).
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Create a translation transform.
    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self {
            e: tx,
            f: ty,
            ..Self::IDENTITY
        }
    }

    /// Create a scale transform.
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        }
    }

    /// Create a rotation transform (angle in radians).
    pub fn rotate(angle: f32) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Multiply this transform by another (compose transformations).
    ///
    /// Returns `self * other` (applies `other` then `self`).
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    /// Transform a point.
    pub fn transform_point(&self, point: Point) -> Point {
        Point::new(
            self.a * point.x + self.c * point.y + self.e,
            self.b * point.x + self.d * point.y + self.f,
        )
    }

    /// Compute the inverse transformation.
    ///
    /// Returns None if the matrix is not invertible (determinant is zero).
    pub fn inverse(&self) -> Option<Self> {
        let det = self.a * self.d - self.b * self.c;
        if det.abs() < 1e-10 {
            return None;
        }

        let inv_det = 1.0 / det;
        Some(Self {
            a: self.d * inv_det,
            b: -self.b * inv_det,
            c: -self.c * inv_det,
            d: self.a * inv_det,
            e: (self.c * self.f - self.d * self.e) * inv_det,
            f: (self.b * self.e - self.a * self.f) * inv_det,
        })
    }

    /// Check if this is the identity transform.
    pub fn is_identity(&self) -> bool {
        (self.a - 1.0).abs() < EPSILON
            && self.b.abs() < EPSILON
            && self.c.abs() < EPSILON
            && (self.d - 1.0).abs() < EPSILON
            && self.e.abs() < EPSILON
            && self.f.abs() < EPSILON
    }

    /// True when the linear part only scales (no rotation or skew).
    pub fn is_axis_aligned(&self) -> bool {
        self.b.abs() < EPSILON && self.c.abs() < EPSILON
    }

    /// This transform applied around `pivot` instead of the origin.
    #[must_use]
    pub fn about(&self, pivot: Point) -> Self {
        Self::translate(pivot.x, pivot.y)
            .multiply(self)
            .multiply(&Self::translate(-pivot.x, -pivot.y))
    }

    /// Bounding box of `rect` once transformed around its own center.
    pub fn frame_of(&self, rect: &Rect) -> Rect {
        if self.is_identity() {
            return *rect;
        }
        let around_center = self.about(rect.center());
        let corners = [
            Point::new(rect.min_x(), rect.min_y()),
            Point::new(rect.max_x(), rect.min_y()),
            Point::new(rect.min_x(), rect.max_y()),
            Point::new(rect.max_x(), rect.max_y()),
        ]
        .map(|corner| around_center.transform_point(corner));

        let (mut min, mut max) = (corners[0], corners[0]);
        for corner in &corners[1..] {
            min = Point::new(min.x.min(corner.x), min.y.min(corner.y));
            max = Point::new(max.x.max(corner.x), max.y.max(corner.y));
        }
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// The untransformed rectangle whose [`frame_of`](Self::frame_of) is `frame`.
    ///
    /// Only axis-aligned, non-degenerate transforms can be undone this way;
    /// anything else returns `None`.
    pub fn unframe(&self, frame: &Rect) -> Option<Rect> {
        if self.is_identity() {
            return Some(*frame);
        }
        if !self.is_axis_aligned() || self.a.abs() < EPSILON || self.d.abs() < EPSILON {
            return None;
        }
        let size = Size::new(frame.width / self.a.abs(), frame.height / self.d.abs());
        let center = frame.center().offset_by(-self.e, -self.f);
        Some(Rect::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        ))
    }
}
