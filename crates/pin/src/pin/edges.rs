//! Edges and centers measured from the parent.
//!
//! Offsets are distances from the parent's matching edge: `right(10.0)`
//! places the right edge ten points left of the parent's right edge.

use super::PinLayout;
use crate::direction::{PhysicalAxis, PhysicalEdge, inline_end_edge, inline_start_edge};
use crate::host::LayoutHost;
use pin_geometry::{EdgeOffset, Insets, Length, Size};

const fn inset_for(insets: &Insets, edge: PhysicalEdge) -> f32 {
    match edge {
        PhysicalEdge::Top => insets.top,
        PhysicalEdge::Right => insets.right,
        PhysicalEdge::Bottom => insets.bottom,
        PhysicalEdge::Left => insets.left,
    }
}

impl<T: LayoutHost> PinLayout<'_, T> {
    /// Distance of the top edge from the parent's top edge.
    pub fn top(&mut self, offset: impl Into<EdgeOffset>) -> &mut Self {
        self.set_edge(PhysicalEdge::Top, offset.into(), "top");
        self
    }

    pub fn left(&mut self, offset: impl Into<EdgeOffset>) -> &mut Self {
        self.set_edge(PhysicalEdge::Left, offset.into(), "left");
        self
    }

    pub fn bottom(&mut self, offset: impl Into<EdgeOffset>) -> &mut Self {
        self.set_edge(PhysicalEdge::Bottom, offset.into(), "bottom");
        self
    }

    pub fn right(&mut self, offset: impl Into<EdgeOffset>) -> &mut Self {
        self.set_edge(PhysicalEdge::Right, offset.into(), "right");
        self
    }

    /// Left edge in ltr, right edge in rtl.
    pub fn start(&mut self, offset: impl Into<EdgeOffset>) -> &mut Self {
        let edge = inline_start_edge(self.direction());
        self.set_edge(edge, offset.into(), "start");
        self
    }

    /// Right edge in ltr, left edge in rtl.
    pub fn end(&mut self, offset: impl Into<EdgeOffset>) -> &mut Self {
        let edge = inline_end_edge(self.direction());
        self.set_edge(edge, offset.into(), "end");
        self
    }

    /// Horizontal center, offset from the parent's horizontal center.
    pub fn h_center(&mut self, offset: impl Into<Length>) -> &mut Self {
        let offset = offset.into();
        if let Some(parent) = self.parent_size(|| format!("h_center({offset})")) {
            self.directives.h_center = Some(parent.width / 2.0 + offset.resolve(parent.width));
        }
        self
    }

    /// Vertical center, offset from the parent's vertical center.
    pub fn v_center(&mut self, offset: impl Into<Length>) -> &mut Self {
        let offset = offset.into();
        if let Some(parent) = self.parent_size(|| format!("v_center({offset})")) {
            self.directives.v_center = Some(parent.height / 2.0 + offset.resolve(parent.height));
        }
        self
    }

    /// Same offset on all four edges.
    pub fn all(&mut self, offset: impl Into<EdgeOffset>) -> &mut Self {
        let offset = offset.into();
        self.top(offset).left(offset).bottom(offset).right(offset)
    }

    /// Same offset on the left and right edges.
    pub fn horizontally(&mut self, offset: impl Into<EdgeOffset>) -> &mut Self {
        let offset = offset.into();
        self.left(offset).right(offset)
    }

    /// Same offset on the top and bottom edges.
    pub fn vertically(&mut self, offset: impl Into<EdgeOffset>) -> &mut Self {
        let offset = offset.into();
        self.top(offset).bottom(offset)
    }

    fn set_edge(&mut self, edge: PhysicalEdge, offset: EdgeOffset, name: &'static str) {
        let needs_parent = matches!(offset, EdgeOffset::Percent(_))
            || matches!(edge, PhysicalEdge::Right | PhysicalEdge::Bottom);
        let parent = if needs_parent {
            match self.parent_size(|| format!("{name}({offset})")) {
                Some(size) => size,
                None => return,
            }
        } else {
            Size::ZERO
        };

        let reference = match edge.axis() {
            PhysicalAxis::Horizontal => parent.width,
            PhysicalAxis::Vertical => parent.height,
        };
        let value = match offset {
            EdgeOffset::Points(points) => points,
            EdgeOffset::Percent(percent) => percent.of(reference),
            EdgeOffset::Insets(insets) => inset_for(&insets, edge),
        };

        match edge {
            PhysicalEdge::Top => self.directives.top = Some(value),
            PhysicalEdge::Left => self.directives.left = Some(value),
            PhysicalEdge::Bottom => self.directives.bottom = Some(parent.height - value),
            PhysicalEdge::Right => self.directives.right = Some(parent.width - value),
        }
    }
}
