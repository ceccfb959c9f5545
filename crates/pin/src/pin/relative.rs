//! Placement next to a group of other elements.
//!
//! The group is reduced to the bounding box of its members (in this element's
//! parent space). Members without a parent are skipped with a warning.

use super::PinLayout;
use crate::direction::{HorizontalAlign, HorizontalPosition, VerticalAlign};
use crate::host::LayoutHost;
use pin_geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Above,
    Below,
    LeftOf,
    RightOf,
}

impl Side {
    const fn name(self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Below => "below",
            Self::LeftOf => "left_of",
            Self::RightOf => "right_of",
        }
    }
}

impl<T: LayoutHost> PinLayout<'_, T> {
    /// Put the bottom edge on the top of the highest element of `of`.
    pub fn above(&mut self, of: &[T::Node]) -> &mut Self {
        self.above_or_below(Side::Above, of, None)
    }

    /// Like [`above`](Self::above), also aligning horizontally with the group.
    pub fn above_aligned(&mut self, of: &[T::Node], aligned: HorizontalAlign) -> &mut Self {
        self.above_or_below(Side::Above, of, Some(aligned))
    }

    /// Put the top edge on the bottom of the lowest element of `of`.
    pub fn below(&mut self, of: &[T::Node]) -> &mut Self {
        self.above_or_below(Side::Below, of, None)
    }

    pub fn below_aligned(&mut self, of: &[T::Node], aligned: HorizontalAlign) -> &mut Self {
        self.above_or_below(Side::Below, of, Some(aligned))
    }

    /// Put the right edge on the left of the leftmost element of `of`.
    pub fn left_of(&mut self, of: &[T::Node]) -> &mut Self {
        self.beside(Side::LeftOf, of, None)
    }

    pub fn left_of_aligned(&mut self, of: &[T::Node], aligned: VerticalAlign) -> &mut Self {
        self.beside(Side::LeftOf, of, Some(aligned))
    }

    /// Put the left edge on the right of the rightmost element of `of`.
    pub fn right_of(&mut self, of: &[T::Node]) -> &mut Self {
        self.beside(Side::RightOf, of, None)
    }

    pub fn right_of_aligned(&mut self, of: &[T::Node], aligned: VerticalAlign) -> &mut Self {
        self.beside(Side::RightOf, of, Some(aligned))
    }

    /// [`left_of`](Self::left_of) in ltr, [`right_of`](Self::right_of) in rtl.
    pub fn before(&mut self, of: &[T::Node]) -> &mut Self {
        let side = self.logical_side(true);
        self.beside(side, of, None)
    }

    pub fn before_aligned(&mut self, of: &[T::Node], aligned: VerticalAlign) -> &mut Self {
        let side = self.logical_side(true);
        self.beside(side, of, Some(aligned))
    }

    /// [`right_of`](Self::right_of) in ltr, [`left_of`](Self::left_of) in rtl.
    pub fn after(&mut self, of: &[T::Node]) -> &mut Self {
        let side = self.logical_side(false);
        self.beside(side, of, None)
    }

    pub fn after_aligned(&mut self, of: &[T::Node], aligned: VerticalAlign) -> &mut Self {
        let side = self.logical_side(false);
        self.beside(side, of, Some(aligned))
    }

    fn logical_side(&self, before: bool) -> Side {
        if before == self.direction().is_ltr() {
            Side::LeftOf
        } else {
            Side::RightOf
        }
    }

    fn above_or_below(
        &mut self,
        side: Side,
        of: &[T::Node],
        aligned: Option<HorizontalAlign>,
    ) -> &mut Self {
        let Some(bounds) = self.group_bounds(side, of) else {
            return self;
        };
        if side == Side::Above {
            self.directives.bottom = Some(bounds.min_y());
        } else {
            self.directives.top = Some(bounds.max_y());
        }
        if let Some(aligned) = aligned {
            match aligned.position(self.direction()) {
                HorizontalPosition::Left => self.directives.left = Some(bounds.min_x()),
                HorizontalPosition::Center => self.directives.h_center = Some(bounds.mid_x()),
                HorizontalPosition::Right => self.directives.right = Some(bounds.max_x()),
            }
        }
        self
    }

    fn beside(&mut self, side: Side, of: &[T::Node], aligned: Option<VerticalAlign>) -> &mut Self {
        let Some(bounds) = self.group_bounds(side, of) else {
            return self;
        };
        if side == Side::LeftOf {
            self.directives.right = Some(bounds.min_x());
        } else {
            self.directives.left = Some(bounds.max_x());
        }
        match aligned {
            Some(VerticalAlign::Top) => self.directives.top = Some(bounds.min_y()),
            Some(VerticalAlign::Center) => self.directives.v_center = Some(bounds.mid_y()),
            Some(VerticalAlign::Bottom) => self.directives.bottom = Some(bounds.max_y()),
            None => {}
        }
        self
    }

    /// Bounding box of every usable member of `of`.
    fn group_bounds(&self, side: Side, of: &[T::Node]) -> Option<Rect> {
        let bounds = of
            .iter()
            .filter_map(|&node| {
                self.reference_rect(node, || {
                    format!("{}({})", side.name(), self.host.describe(node))
                })
            })
            .reduce(|bounds, rect| bounds.union(&rect));
        if bounds.is_none() {
            self.warn_invalid(
                || String::from(side.name()),
                "there is no usable reference element",
            );
        }
        bounds
    }
}
