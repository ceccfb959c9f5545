//! Edges and anchor points taken from other elements.
//!
//! The reference element may live anywhere in the tree as long as it has a
//! parent; its rectangle is converted into this element's parent space.

use super::PinLayout;
use crate::anchor::{
    Anchor, AnchorPoint, HorizontalEdge, VerticalEdge, horizontal_coordinate, vertical_coordinate,
};
use crate::direction::{HorizontalAlign, HorizontalPosition, VerticalAlign};
use crate::host::LayoutHost;
use pin_geometry::{Point, Rect};

impl<T: LayoutHost> PinLayout<'_, T> {
    /// Put the top edge on `edge`.
    pub fn top_to(&mut self, edge: VerticalEdge<T::Node>) -> &mut Self {
        if let Some(coordinate) = self.vertical_edge(edge, "top_to") {
            self.directives.top = Some(coordinate);
        }
        self
    }

    pub fn v_center_to(&mut self, edge: VerticalEdge<T::Node>) -> &mut Self {
        if let Some(coordinate) = self.vertical_edge(edge, "v_center_to") {
            self.directives.v_center = Some(coordinate);
        }
        self
    }

    pub fn bottom_to(&mut self, edge: VerticalEdge<T::Node>) -> &mut Self {
        if let Some(coordinate) = self.vertical_edge(edge, "bottom_to") {
            self.directives.bottom = Some(coordinate);
        }
        self
    }

    /// Put the left edge on `edge`.
    pub fn left_to(&mut self, edge: HorizontalEdge<T::Node>) -> &mut Self {
        if let Some(coordinate) = self.horizontal_edge(edge, "left_to") {
            self.directives.left = Some(coordinate);
        }
        self
    }

    pub fn h_center_to(&mut self, edge: HorizontalEdge<T::Node>) -> &mut Self {
        if let Some(coordinate) = self.horizontal_edge(edge, "h_center_to") {
            self.directives.h_center = Some(coordinate);
        }
        self
    }

    pub fn right_to(&mut self, edge: HorizontalEdge<T::Node>) -> &mut Self {
        if let Some(coordinate) = self.horizontal_edge(edge, "right_to") {
            self.directives.right = Some(coordinate);
        }
        self
    }

    /// Put this element's start edge (left in ltr, right in rtl) on `edge`.
    pub fn start_to(&mut self, edge: HorizontalEdge<T::Node>) -> &mut Self {
        if let Some(coordinate) = self.horizontal_edge(edge, "start_to") {
            let position = HorizontalAlign::Start.position(self.direction());
            self.set_horizontal(position, coordinate);
        }
        self
    }

    /// Put this element's end edge (right in ltr, left in rtl) on `edge`.
    pub fn end_to(&mut self, edge: HorizontalEdge<T::Node>) -> &mut Self {
        if let Some(coordinate) = self.horizontal_edge(edge, "end_to") {
            let position = HorizontalAlign::End.position(self.direction());
            self.set_horizontal(position, coordinate);
        }
        self
    }

    /// Pin the `own` point of this element onto `target`.
    pub fn anchor_to(&mut self, own: AnchorPoint, target: Anchor<T::Node>) -> &mut Self {
        let rect = self.reference_rect(target.node, || {
            format!(
                "{}_to({}.{})",
                own.name(),
                self.host.describe(target.node),
                target.point.name()
            )
        });
        if let Some(rect) = rect {
            let point = target.point.locate(&rect, self.direction_of(target.node));
            self.pin_point(own, point);
        }
        self
    }

    /// Pin the `own` point of this element onto the same point of its parent.
    pub fn anchor_to_parent(&mut self, own: AnchorPoint) -> &mut Self {
        if let Some(parent) = self.parent_size(|| format!("{}()", own.name())) {
            let point = own.locate(&Rect::from_size(parent), self.direction());
            self.pin_point(own, point);
        }
        self
    }

    fn vertical_edge(&self, edge: VerticalEdge<T::Node>, name: &str) -> Option<f32> {
        let rect = self.reference_rect(edge.node, || {
            format!("{name}({})", self.host.describe(edge.node))
        })?;
        Some(vertical_coordinate(edge.side, &rect))
    }

    fn horizontal_edge(&self, edge: HorizontalEdge<T::Node>, name: &str) -> Option<f32> {
        let rect = self.reference_rect(edge.node, || {
            format!("{name}({})", self.host.describe(edge.node))
        })?;
        Some(horizontal_coordinate(
            edge.side,
            &rect,
            self.direction_of(edge.node),
        ))
    }

    fn set_horizontal(&mut self, position: HorizontalPosition, coordinate: f32) {
        match position {
            HorizontalPosition::Left => self.directives.left = Some(coordinate),
            HorizontalPosition::Center => self.directives.h_center = Some(coordinate),
            HorizontalPosition::Right => self.directives.right = Some(coordinate),
        }
    }

    fn set_vertical(&mut self, side: VerticalAlign, coordinate: f32) {
        match side {
            VerticalAlign::Top => self.directives.top = Some(coordinate),
            VerticalAlign::Center => self.directives.v_center = Some(coordinate),
            VerticalAlign::Bottom => self.directives.bottom = Some(coordinate),
        }
    }

    fn pin_point(&mut self, own: AnchorPoint, point: Point) {
        let (vertical, horizontal) = own.parts();
        self.set_horizontal(horizontal.position(self.direction()), point.x);
        self.set_vertical(vertical, point.y);
    }
}

/// Generates the named shorthands for every anchor point: one pinning the
/// point onto the parent's matching point and one pinning it onto an anchor.
macro_rules! anchor_shorthands {
    ($($point:ident => $to_parent:ident, $to_anchor:ident;)*) => {
        impl<T: LayoutHost> PinLayout<'_, T> {
            $(
                #[doc = concat!("Pin the `", stringify!($to_parent), "` point onto the parent's `", stringify!($to_parent), "` point.")]
                pub fn $to_parent(&mut self) -> &mut Self {
                    self.anchor_to_parent(AnchorPoint::$point)
                }

                #[doc = concat!("Pin the `", stringify!($to_parent), "` point onto `anchor`.")]
                pub fn $to_anchor(&mut self, anchor: Anchor<T::Node>) -> &mut Self {
                    self.anchor_to(AnchorPoint::$point, anchor)
                }
            )*
        }
    };
}

anchor_shorthands! {
    TopLeft => top_left, top_left_to;
    TopCenter => top_center, top_center_to;
    TopRight => top_right, top_right_to;
    TopStart => top_start, top_start_to;
    TopEnd => top_end, top_end_to;
    CenterLeft => center_left, center_left_to;
    Center => center, center_to;
    CenterRight => center_right, center_right_to;
    CenterStart => center_start, center_start_to;
    CenterEnd => center_end, center_end_to;
    BottomLeft => bottom_left, bottom_left_to;
    BottomCenter => bottom_center, bottom_center_to;
    BottomRight => bottom_right, bottom_right_to;
    BottomStart => bottom_start, bottom_start_to;
    BottomEnd => bottom_end, bottom_end_to;
}
