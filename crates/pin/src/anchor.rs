//! Reference points and edges on other elements.
//!
//! An [`Anchor`] names one of nine points on an element's rectangle, a
//! [`HorizontalEdge`] or [`VerticalEdge`] names one coordinate of it. All of
//! them are resolved lazily, when a directive consumes them, so the rectangle
//! read is the reference element's rectangle at that moment.

use crate::diagnostics::Unresolved;
use crate::direction::{Direction, HorizontalAlign, HorizontalPosition, VerticalAlign};
use crate::host::LayoutHost;
use pin_geometry::{Point, Rect};

/// One of the nine reference points of a rectangle.
///
/// `Start`/`End` flavours resolve to left or right using the direction of the
/// element the point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorPoint {
    TopLeft,
    TopCenter,
    TopRight,
    TopStart,
    TopEnd,
    CenterLeft,
    Center,
    CenterRight,
    CenterStart,
    CenterEnd,
    BottomLeft,
    BottomCenter,
    BottomRight,
    BottomStart,
    BottomEnd,
}

impl AnchorPoint {
    /// Vertical and horizontal components of the point.
    pub const fn parts(self) -> (VerticalAlign, HorizontalAlign) {
        match self {
            Self::TopLeft => (VerticalAlign::Top, HorizontalAlign::Left),
            Self::TopCenter => (VerticalAlign::Top, HorizontalAlign::Center),
            Self::TopRight => (VerticalAlign::Top, HorizontalAlign::Right),
            Self::TopStart => (VerticalAlign::Top, HorizontalAlign::Start),
            Self::TopEnd => (VerticalAlign::Top, HorizontalAlign::End),
            Self::CenterLeft => (VerticalAlign::Center, HorizontalAlign::Left),
            Self::Center => (VerticalAlign::Center, HorizontalAlign::Center),
            Self::CenterRight => (VerticalAlign::Center, HorizontalAlign::Right),
            Self::CenterStart => (VerticalAlign::Center, HorizontalAlign::Start),
            Self::CenterEnd => (VerticalAlign::Center, HorizontalAlign::End),
            Self::BottomLeft => (VerticalAlign::Bottom, HorizontalAlign::Left),
            Self::BottomCenter => (VerticalAlign::Bottom, HorizontalAlign::Center),
            Self::BottomRight => (VerticalAlign::Bottom, HorizontalAlign::Right),
            Self::BottomStart => (VerticalAlign::Bottom, HorizontalAlign::Start),
            Self::BottomEnd => (VerticalAlign::Bottom, HorizontalAlign::End),
        }
    }

    /// Location of the point on `rect`.
    pub fn locate(self, rect: &Rect, direction: Direction) -> Point {
        let (vertical, horizontal) = self.parts();
        Point::new(
            horizontal_coordinate(horizontal, rect, direction),
            vertical_coordinate(vertical, rect),
        )
    }

    /// Snake case name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "top_left",
            Self::TopCenter => "top_center",
            Self::TopRight => "top_right",
            Self::TopStart => "top_start",
            Self::TopEnd => "top_end",
            Self::CenterLeft => "center_left",
            Self::Center => "center",
            Self::CenterRight => "center_right",
            Self::CenterStart => "center_start",
            Self::CenterEnd => "center_end",
            Self::BottomLeft => "bottom_left",
            Self::BottomCenter => "bottom_center",
            Self::BottomRight => "bottom_right",
            Self::BottomStart => "bottom_start",
            Self::BottomEnd => "bottom_end",
        }
    }
}

/// A point on another element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor<N> {
    pub node: N,
    pub point: AnchorPoint,
}

impl<N> Anchor<N> {
    pub const fn new(node: N, point: AnchorPoint) -> Self {
        Self { node, point }
    }
}

/// A horizontal coordinate of another element (its left, center or right).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalEdge<N> {
    pub node: N,
    pub side: HorizontalAlign,
}

impl<N> HorizontalEdge<N> {
    pub const fn left(node: N) -> Self {
        Self {
            node,
            side: HorizontalAlign::Left,
        }
    }

    pub const fn h_center(node: N) -> Self {
        Self {
            node,
            side: HorizontalAlign::Center,
        }
    }

    pub const fn right(node: N) -> Self {
        Self {
            node,
            side: HorizontalAlign::Right,
        }
    }

    /// Left edge in ltr, right edge in rtl (of the referenced element).
    pub const fn start(node: N) -> Self {
        Self {
            node,
            side: HorizontalAlign::Start,
        }
    }

    /// Right edge in ltr, left edge in rtl (of the referenced element).
    pub const fn end(node: N) -> Self {
        Self {
            node,
            side: HorizontalAlign::End,
        }
    }
}

/// A vertical coordinate of another element (its top, center or bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalEdge<N> {
    pub node: N,
    pub side: VerticalAlign,
}

impl<N> VerticalEdge<N> {
    pub const fn top(node: N) -> Self {
        Self {
            node,
            side: VerticalAlign::Top,
        }
    }

    pub const fn v_center(node: N) -> Self {
        Self {
            node,
            side: VerticalAlign::Center,
        }
    }

    pub const fn bottom(node: N) -> Self {
        Self {
            node,
            side: VerticalAlign::Bottom,
        }
    }
}

pub fn horizontal_coordinate(side: HorizontalAlign, rect: &Rect, direction: Direction) -> f32 {
    match side.position(direction) {
        HorizontalPosition::Left => rect.min_x(),
        HorizontalPosition::Center => rect.mid_x(),
        HorizontalPosition::Right => rect.max_x(),
    }
}

pub fn vertical_coordinate(side: VerticalAlign, rect: &Rect) -> f32 {
    match side {
        VerticalAlign::Top => rect.min_y(),
        VerticalAlign::Center => rect.mid_y(),
        VerticalAlign::Bottom => rect.max_y(),
    }
}

/// Rectangle of `reference` expressed in the content space of `layout_parent`.
///
/// The conversion is skipped when both elements share the same parent.
/// Otherwise the result is the bounding box of the four converted corners.
///
/// # Errors
/// Returns [`Unresolved::DetachedReference`] when `reference` has no parent.
pub fn reference_rect<T: LayoutHost>(
    host: &T,
    layout_parent: T::Node,
    reference: T::Node,
    keep_transform: bool,
) -> Result<Rect, Unresolved<T::Node>> {
    let reference_parent = host
        .parent(reference)
        .ok_or(Unresolved::DetachedReference(reference))?;
    let rect = host.rect(reference, keep_transform);
    if reference_parent == layout_parent {
        return Ok(rect);
    }
    let corners = [
        Point::new(rect.min_x(), rect.min_y()),
        Point::new(rect.max_x(), rect.min_y()),
        Point::new(rect.min_x(), rect.max_y()),
        Point::new(rect.max_x(), rect.max_y()),
    ]
    .map(|corner| host.convert_point(corner, reference_parent, layout_parent));
    let (min, max) = corners.iter().fold(
        (
            Point::new(f32::INFINITY, f32::INFINITY),
            Point::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
        ),
        |(min, max), corner| {
            (
                Point::new(min.x.min(corner.x), min.y.min(corner.y)),
                Point::new(max.x.max(corner.x), max.y.max(corner.y)),
            )
        },
    );
    Ok(Rect::new(min.x, min.y, max.x - min.x, max.y - min.y))
}
