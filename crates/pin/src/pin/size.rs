//! Explicit sizes, size bounds and size adjustments.

use super::PinLayout;
use super::apply::SizeAdjustment;
use crate::direction::PhysicalAxis;
use crate::host::LayoutHost;
use pin_geometry::{Length, Size};

/// How [`PinLayout::fit_size`] asks the host for a preferred size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitType {
    /// Keep the width, take the height the content needs at that width.
    Width,
    /// Keep the height, take the width the content needs at that height.
    Height,
    /// Like `Width`, but the width may also shrink to the content.
    WidthFlexible,
    /// Like `Height`, but the height may also shrink to the content.
    HeightFlexible,
    /// Take whatever size the content wants, unbounded.
    Content,
}

impl FitType {
    /// Final size for `proposed` given the host's `size_that_fits`.
    pub fn adjust(self, proposed: Size, size_that_fits: impl Fn(Size) -> Size) -> Size {
        match self {
            Self::Width => {
                let fitted = size_that_fits(Size::new(proposed.width, f32::INFINITY));
                Size::new(proposed.width, fitted.height)
            }
            Self::WidthFlexible => {
                let fitted = size_that_fits(Size::new(proposed.width, f32::INFINITY));
                Size::new(fitted.width.min(proposed.width), fitted.height)
            }
            Self::Height => {
                let fitted = size_that_fits(Size::new(f32::INFINITY, proposed.height));
                Size::new(fitted.width, proposed.height)
            }
            Self::HeightFlexible => {
                let fitted = size_that_fits(Size::new(f32::INFINITY, proposed.height));
                Size::new(fitted.width, fitted.height.min(proposed.height))
            }
            Self::Content => size_that_fits(Size::UNBOUNDED),
        }
    }
}

#[derive(Clone, Copy)]
enum SizeSlot {
    Width,
    MinWidth,
    MaxWidth,
    Height,
    MinHeight,
    MaxHeight,
}

impl SizeSlot {
    const fn axis(self) -> PhysicalAxis {
        match self {
            Self::Width | Self::MinWidth | Self::MaxWidth => PhysicalAxis::Horizontal,
            Self::Height | Self::MinHeight | Self::MaxHeight => PhysicalAxis::Vertical,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::MinWidth => "min_width",
            Self::MaxWidth => "max_width",
            Self::Height => "height",
            Self::MinHeight => "min_height",
            Self::MaxHeight => "max_height",
        }
    }
}

impl<T: LayoutHost> PinLayout<'_, T> {
    /// Width in points, or relative to the parent's width.
    pub fn width(&mut self, width: impl Into<Length>) -> &mut Self {
        self.set_size(SizeSlot::Width, width.into());
        self
    }

    pub fn min_width(&mut self, width: impl Into<Length>) -> &mut Self {
        self.set_size(SizeSlot::MinWidth, width.into());
        self
    }

    pub fn max_width(&mut self, width: impl Into<Length>) -> &mut Self {
        self.set_size(SizeSlot::MaxWidth, width.into());
        self
    }

    /// Height in points, or relative to the parent's height.
    pub fn height(&mut self, height: impl Into<Length>) -> &mut Self {
        self.set_size(SizeSlot::Height, height.into());
        self
    }

    pub fn min_height(&mut self, height: impl Into<Length>) -> &mut Self {
        self.set_size(SizeSlot::MinHeight, height.into());
        self
    }

    pub fn max_height(&mut self, height: impl Into<Length>) -> &mut Self {
        self.set_size(SizeSlot::MaxHeight, height.into());
        self
    }

    /// Both dimensions at once.
    pub fn size(&mut self, size: Size) -> &mut Self {
        self.width(size.width).height(size.height)
    }

    /// Same length for width and height. A percentage resolves against the
    /// parent's width for the width and the parent's height for the height.
    pub fn square(&mut self, length: impl Into<Length>) -> &mut Self {
        let length = length.into();
        self.width(length).height(length)
    }

    /// Copy the width of another element.
    pub fn width_of(&mut self, node: T::Node) -> &mut Self {
        let width = self.host.rect(node, self.keep_transform).width;
        self.width(width)
    }

    /// Copy the height of another element.
    pub fn height_of(&mut self, node: T::Node) -> &mut Self {
        let height = self.host.rect(node, self.keep_transform).height;
        self.height(height)
    }

    /// Copy both dimensions of another element.
    pub fn size_of(&mut self, node: T::Node) -> &mut Self {
        let size = self.host.rect(node, self.keep_transform).size();
        self.size(size)
    }

    /// Ask the host for the element's preferred size when resolving.
    ///
    /// Replaces any earlier `fit_size` or `aspect_ratio` directive.
    pub fn fit_size(&mut self, fit_type: FitType) -> &mut Self {
        self.directives.adjust_size = Some(SizeAdjustment::Fit(fit_type));
        self
    }

    /// Derive the missing dimension from `ratio` (width / height).
    pub fn aspect_ratio(&mut self, ratio: f32) -> &mut Self {
        if ratio > 0.0 && ratio.is_finite() {
            self.directives.adjust_size = Some(SizeAdjustment::AspectRatio(ratio));
        } else {
            self.warn_invalid(|| format!("aspect_ratio({ratio})"), "the ratio must be greater than zero");
        }
        self
    }

    /// Use the aspect ratio of another element.
    pub fn aspect_ratio_of(&mut self, node: T::Node) -> &mut Self {
        let size = self.host.rect(node, self.keep_transform).size();
        if size.height > 0.0 {
            self.aspect_ratio(size.width / size.height)
        } else {
            let element = self.host.describe(node);
            self.warn_invalid(
                || format!("aspect_ratio_of({element})"),
                "the reference element has no height",
            );
            self
        }
    }

    fn set_size(&mut self, slot: SizeSlot, length: Length) {
        let value = if length.is_relative() {
            let Some(parent) = self.parent_size(|| format!("{}({length})", slot.name())) else {
                return;
            };
            match slot.axis() {
                PhysicalAxis::Horizontal => length.resolve(parent.width),
                PhysicalAxis::Vertical => length.resolve(parent.height),
            }
        } else {
            length.resolve(0.0)
        };

        if value < 0.0 || !value.is_finite() {
            self.warn_invalid(
                || format!("{}({length})", slot.name()),
                "sizes must be finite and not negative",
            );
            return;
        }

        let target = match slot {
            SizeSlot::Width => &mut self.directives.width,
            SizeSlot::MinWidth => &mut self.directives.min_width,
            SizeSlot::MaxWidth => &mut self.directives.max_width,
            SizeSlot::Height => &mut self.directives.height,
            SizeSlot::MinHeight => &mut self.directives.min_height,
            SizeSlot::MaxHeight => &mut self.directives.max_height,
        };
        *target = Some(value);
    }

    /// Size computed by wrap-content; same rules as [`width`](Self::width).
    pub(super) fn set_content_size(&mut self, axis: PhysicalAxis, value: f32) {
        match axis {
            PhysicalAxis::Horizontal => self.set_size(SizeSlot::Width, Length::Points(value)),
            PhysicalAxis::Vertical => self.set_size(SizeSlot::Height, Length::Points(value)),
        }
    }
}
