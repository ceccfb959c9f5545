//! Margin setters.
//!
//! Relative margins resolve against the parent's width for left/right and
//! against the parent's height for top/bottom.

use super::PinLayout;
use crate::direction::{PhysicalAxis, PhysicalEdge, inline_end_edge, inline_start_edge};
use crate::host::LayoutHost;
use pin_geometry::{Insets, Length};

impl<T: LayoutHost> PinLayout<'_, T> {
    pub fn margin_top(&mut self, margin: impl Into<Length>) -> &mut Self {
        self.set_margin(PhysicalEdge::Top, margin.into(), "margin_top");
        self
    }

    pub fn margin_left(&mut self, margin: impl Into<Length>) -> &mut Self {
        self.set_margin(PhysicalEdge::Left, margin.into(), "margin_left");
        self
    }

    pub fn margin_bottom(&mut self, margin: impl Into<Length>) -> &mut Self {
        self.set_margin(PhysicalEdge::Bottom, margin.into(), "margin_bottom");
        self
    }

    pub fn margin_right(&mut self, margin: impl Into<Length>) -> &mut Self {
        self.set_margin(PhysicalEdge::Right, margin.into(), "margin_right");
        self
    }

    /// Left margin in ltr, right margin in rtl.
    pub fn margin_start(&mut self, margin: impl Into<Length>) -> &mut Self {
        let edge = inline_start_edge(self.direction());
        self.set_margin(edge, margin.into(), "margin_start");
        self
    }

    /// Right margin in ltr, left margin in rtl.
    pub fn margin_end(&mut self, margin: impl Into<Length>) -> &mut Self {
        let edge = inline_end_edge(self.direction());
        self.set_margin(edge, margin.into(), "margin_end");
        self
    }

    pub fn margin_horizontal(&mut self, margin: impl Into<Length>) -> &mut Self {
        let margin = margin.into();
        self.margin_left(margin).margin_right(margin)
    }

    pub fn margin_vertical(&mut self, margin: impl Into<Length>) -> &mut Self {
        let margin = margin.into();
        self.margin_top(margin).margin_bottom(margin)
    }

    /// Same margin on all four sides.
    pub fn margin(&mut self, margin: impl Into<Length>) -> &mut Self {
        let margin = margin.into();
        self.margin_top(margin)
            .margin_left(margin)
            .margin_bottom(margin)
            .margin_right(margin)
    }

    /// One margin per side, in points.
    pub fn margin_insets(&mut self, insets: Insets) -> &mut Self {
        self.margin_top(insets.top)
            .margin_left(insets.left)
            .margin_bottom(insets.bottom)
            .margin_right(insets.right)
    }

    /// `vertical` on top and bottom, `horizontal` on left and right.
    pub fn margin_symmetric(
        &mut self,
        vertical: impl Into<Length>,
        horizontal: impl Into<Length>,
    ) -> &mut Self {
        self.margin_vertical(vertical).margin_horizontal(horizontal)
    }

    /// Top, shared left/right, and bottom margins.
    pub fn margin_sides(
        &mut self,
        top: impl Into<Length>,
        horizontal: impl Into<Length>,
        bottom: impl Into<Length>,
    ) -> &mut Self {
        self.margin_top(top)
            .margin_horizontal(horizontal)
            .margin_bottom(bottom)
    }

    /// Top, left, bottom and right margins.
    pub fn margin_edges(
        &mut self,
        top: impl Into<Length>,
        left: impl Into<Length>,
        bottom: impl Into<Length>,
        right: impl Into<Length>,
    ) -> &mut Self {
        self.margin_top(top)
            .margin_left(left)
            .margin_bottom(bottom)
            .margin_right(right)
    }

    /// Top, start, bottom and end margins.
    pub fn margin_logical(
        &mut self,
        top: impl Into<Length>,
        start: impl Into<Length>,
        bottom: impl Into<Length>,
        end: impl Into<Length>,
    ) -> &mut Self {
        self.margin_top(top)
            .margin_start(start)
            .margin_bottom(bottom)
            .margin_end(end)
    }

    fn set_margin(&mut self, edge: PhysicalEdge, margin: Length, name: &'static str) {
        let value = if margin.is_relative() {
            let Some(parent) = self.parent_size(|| format!("{name}({margin})")) else {
                return;
            };
            match edge.axis() {
                PhysicalAxis::Horizontal => margin.resolve(parent.width),
                PhysicalAxis::Vertical => margin.resolve(parent.height),
            }
        } else {
            margin.resolve(0.0)
        };

        let target = match edge {
            PhysicalEdge::Top => &mut self.directives.margin_top,
            PhysicalEdge::Left => &mut self.directives.margin_left,
            PhysicalEdge::Bottom => &mut self.directives.margin_bottom,
            PhysicalEdge::Right => &mut self.directives.margin_right,
        };
        *target = Some(value);
    }
}
