//! Sizing a container around its direct children.

use super::PinLayout;
use crate::direction::PhysicalAxis;
use crate::host::LayoutHost;
use pin_geometry::Insets;
use tracing::trace_span;

/// Axes adjusted by [`PinLayout::wrap_content`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapType {
    Horizontally,
    Vertically,
    All,
}

impl WrapType {
    const fn horizontal(self) -> bool {
        matches!(self, Self::Horizontally | Self::All)
    }

    const fn vertical(self) -> bool {
        matches!(self, Self::Vertically | Self::All)
    }
}

impl<T: LayoutHost> PinLayout<'_, T> {
    /// Size the element to the bounding box of its children and move the
    /// children so that box starts at the element's origin.
    pub fn wrap_content(&mut self, wrap_type: WrapType) -> &mut Self {
        self.wrap_content_with_padding(wrap_type, Insets::ZERO)
    }

    /// Like [`wrap_content`](Self::wrap_content), keeping `padding` around the
    /// children. Negative padding is allowed.
    ///
    /// The children are moved immediately; the element's new size is applied
    /// with the other directives.
    pub fn wrap_content_with_padding(&mut self, wrap_type: WrapType, padding: Insets) -> &mut Self {
        let _span = trace_span!("pin_layout.wrap_content", node = ?self.node).entered();
        let children = self.host.children(self.node);
        let Some(bounds) = children
            .iter()
            .map(|&child| self.host.rect(child, self.keep_transform))
            .reduce(|bounds, rect| bounds.union(&rect))
        else {
            return self;
        };

        let mut offset_x = 0.0;
        let mut offset_y = 0.0;
        if wrap_type.horizontal() {
            let content_width = bounds.width + padding.horizontal();
            if content_width >= 0.0 {
                self.set_content_size(PhysicalAxis::Horizontal, content_width);
            }
            offset_x = padding.left - bounds.min_x();
        }
        if wrap_type.vertical() {
            let content_height = bounds.height + padding.vertical();
            if content_height >= 0.0 {
                self.set_content_size(PhysicalAxis::Vertical, content_height);
            }
            offset_y = padding.top - bounds.min_y();
        }

        if offset_x != 0.0 || offset_y != 0.0 {
            for child in children {
                let rect = self.host.rect(child, self.keep_transform);
                self.host.set_rect(
                    child,
                    rect.offset_by(offset_x, offset_y),
                    self.keep_transform,
                );
            }
        }
        self
    }
}
