//! Placement inside the room left between two edges.

use super::PinLayout;
use crate::direction::{HorizontalAlign, VerticalAlign};
use crate::host::LayoutHost;

impl<T: LayoutHost> PinLayout<'_, T> {
    /// Horizontal placement when both horizontal edges and a width are set.
    ///
    /// `Start` and `End` follow the element's direction. Without both edges
    /// the directive is reported as unused when resolving.
    pub fn justify(&mut self, justify: HorizontalAlign) -> &mut Self {
        self.directives.justify = Some(justify);
        self
    }

    /// Vertical placement when both vertical edges and a height are set.
    pub fn align(&mut self, align: VerticalAlign) -> &mut Self {
        self.directives.align = Some(align);
        self
    }

    /// Turn each single positioned edge or center into a pair of edges using
    /// the element's size, so margins shrink the element instead of moving
    /// it.
    pub fn pin_edges(&mut self) -> &mut Self {
        self.directives.pin_edges = true;
        self
    }
}
