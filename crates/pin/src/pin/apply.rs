//! Resolution of accumulated directives into one rectangle.
//!
//! Every slot holds an absolute coordinate in the parent's content space, so
//! resolution only needs the element's current rectangle, its effective
//! direction and a way to ask the host for a preferred size.
//!
//! Per axis the precedence is: both edges, then the start edge (left/top),
//! then the end edge (right/bottom), then the center. Lower-precedence slots
//! that were set anyway are reported as conflicts.

use super::size::FitType;
use crate::direction::{Direction, HorizontalAlign, HorizontalPosition, VerticalAlign};
use pin_geometry::{Rect, Size};
use smallvec::SmallVec;

/// Size rule applied after the explicit and edge-derived sizes are known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeAdjustment {
    Fit(FitType),
    AspectRatio(f32),
}

/// One slot per positioning concept. Later writes replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directives {
    pub top: Option<f32>,
    pub left: Option<f32>,
    pub bottom: Option<f32>,
    pub right: Option<f32>,
    pub h_center: Option<f32>,
    pub v_center: Option<f32>,

    pub width: Option<f32>,
    pub min_width: Option<f32>,
    pub max_width: Option<f32>,
    pub height: Option<f32>,
    pub min_height: Option<f32>,
    pub max_height: Option<f32>,

    pub margin_top: Option<f32>,
    pub margin_left: Option<f32>,
    pub margin_bottom: Option<f32>,
    pub margin_right: Option<f32>,

    pub justify: Option<HorizontalAlign>,
    pub align: Option<VerticalAlign>,
    pub pin_edges: bool,
    pub adjust_size: Option<SizeAdjustment>,
}

/// A slot ignored because a higher-precedence slot on the same axis was set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    pub ignored: &'static str,
    pub kept: &'static str,
}

/// A directive that had nothing to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unused {
    pub directive: &'static str,
    pub reason: &'static str,
}

/// Outcome of [`Directives::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub rect: Rect,
    pub conflicts: SmallVec<Conflict, 4>,
    pub unused: SmallVec<Unused, 2>,
    /// Computed sizes that were rejected, by dimension name.
    pub degenerate: SmallVec<(&'static str, f32), 2>,
}

impl Resolution {
    fn new(rect: Rect) -> Self {
        Self {
            rect,
            conflicts: SmallVec::new(),
            unused: SmallVec::new(),
            degenerate: SmallVec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty() && self.unused.is_empty() && self.degenerate.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Start,
    Center,
    End,
}

impl Placement {
    const fn horizontal(justify: HorizontalAlign, direction: Direction) -> Self {
        match justify.position(direction) {
            HorizontalPosition::Left => Self::Start,
            HorizontalPosition::Center => Self::Center,
            HorizontalPosition::Right => Self::End,
        }
    }

    const fn vertical(align: VerticalAlign) -> Self {
        match align {
            VerticalAlign::Top => Self::Start,
            VerticalAlign::Center => Self::Center,
            VerticalAlign::Bottom => Self::End,
        }
    }
}

struct AxisNames {
    start: &'static str,
    end: &'static str,
    center: &'static str,
    both: &'static str,
    alignment: &'static str,
    size: &'static str,
}

const HORIZONTAL: AxisNames = AxisNames {
    start: "left",
    end: "right",
    center: "h_center",
    both: "left and right",
    alignment: "justify",
    size: "width",
};

const VERTICAL: AxisNames = AxisNames {
    start: "top",
    end: "bottom",
    center: "v_center",
    both: "top and bottom",
    alignment: "align",
    size: "height",
};

/// Positioning slots of one axis with margins defaulted to zero.
struct Axis {
    start: Option<f32>,
    end: Option<f32>,
    center: Option<f32>,
    margin_start: f32,
    margin_end: f32,
    names: &'static AxisNames,
}

impl Axis {
    /// Room left between both edges once margins are removed.
    fn span(&self) -> Option<f32> {
        Some(self.end? - self.start? - self.margin_start - self.margin_end)
    }

    /// Origin of an element of `size` along this axis.
    fn place(
        &self,
        size: f32,
        current: f32,
        placement: Option<Placement>,
        resolution: &mut Resolution,
    ) -> f32 {
        let kept = match (self.start, self.end) {
            (Some(_), Some(_)) => Some(self.names.both),
            (Some(_), None) => Some(self.names.start),
            (None, Some(_)) => Some(self.names.end),
            (None, None) => None,
        };
        if let (Some(kept), Some(_)) = (kept, self.center) {
            resolution.conflicts.push(Conflict {
                ignored: self.names.center,
                kept,
            });
        }
        if placement.is_some() && kept != Some(self.names.both) {
            resolution.unused.push(Unused {
                directive: self.names.alignment,
                reason: "it needs both edges of its axis to be set",
            });
        }

        match (self.start, self.end, self.center) {
            (Some(start), Some(end), _) => {
                let origin = start + self.margin_start;
                let free = end - self.margin_end - origin - size;
                match placement.unwrap_or(Placement::Start) {
                    Placement::Start => origin,
                    Placement::Center => origin + free / 2.0,
                    Placement::End => origin + free,
                }
            }
            (Some(start), None, _) => start + self.margin_start,
            (None, Some(end), _) => end - self.margin_end - size,
            (None, None, Some(center)) => center - size / 2.0 + self.margin_start - self.margin_end,
            (None, None, None) => current,
        }
    }
}

fn clamp(value: f32, min: Option<f32>, max: Option<f32>) -> f32 {
    let raised = min.map_or(value, |min| value.max(min));
    max.map_or(raised, |max| raised.min(max))
}

/// Turn a single positioned slot plus a known size into both edges.
///
/// Returns true when the edges were filled in.
fn pin_axis(
    start: &mut Option<f32>,
    end: &mut Option<f32>,
    center: &mut Option<f32>,
    size: f32,
) -> bool {
    match (*start, *end, *center) {
        (Some(first), None, _) => *end = Some(first + size),
        (None, Some(last), _) => *start = Some(last - size),
        (None, None, Some(middle)) => {
            *start = Some(middle - size / 2.0);
            *end = Some(middle + size / 2.0);
            *center = None;
        }
        (Some(_), Some(_), _) | (None, None, None) => return false,
    }
    true
}

impl Directives {
    const fn horizontal(&self) -> Axis {
        Axis {
            start: self.left,
            end: self.right,
            center: self.h_center,
            margin_start: match self.margin_left {
                Some(margin) => margin,
                None => 0.0,
            },
            margin_end: match self.margin_right {
                Some(margin) => margin,
                None => 0.0,
            },
            names: &HORIZONTAL,
        }
    }

    const fn vertical(&self) -> Axis {
        Axis {
            start: self.top,
            end: self.bottom,
            center: self.v_center,
            margin_start: match self.margin_top {
                Some(margin) => margin,
                None => 0.0,
            },
            margin_end: match self.margin_bottom {
                Some(margin) => margin,
                None => 0.0,
            },
            names: &VERTICAL,
        }
    }

    fn clamped_width(&self, width: f32) -> f32 {
        clamp(width, self.min_width, self.max_width)
    }

    fn clamped_height(&self, height: f32) -> f32 {
        clamp(height, self.min_height, self.max_height)
    }

    /// Expand single edges into edge pairs so margins shrink the element.
    fn pin_edges_to_size(&mut self, current: Size) {
        let width = self.clamped_width(self.width.unwrap_or(current.width));
        if pin_axis(&mut self.left, &mut self.right, &mut self.h_center, width) {
            self.width = None;
        }
        let height = self.clamped_height(self.height.unwrap_or(current.height));
        if pin_axis(&mut self.top, &mut self.bottom, &mut self.v_center, height) {
            self.height = None;
        }
    }

    fn resolve_size(
        &self,
        current: Size,
        spans: (Option<f32>, Option<f32>),
        size_that_fits: impl Fn(Size) -> Size,
        resolution: &mut Resolution,
    ) -> Size {
        let mut width = self.width.or(spans.0);
        let mut height = self.height.or(spans.1);

        match self.adjust_size {
            Some(SizeAdjustment::Fit(fit_type)) => {
                let proposed = Size::new(
                    self.clamped_width(width.unwrap_or(current.width)),
                    self.clamped_height(height.unwrap_or(current.height)),
                );
                let fitted = fit_type.adjust(proposed, size_that_fits);
                width = Some(fitted.width);
                height = Some(fitted.height);
            }
            Some(SizeAdjustment::AspectRatio(ratio)) => match (width, height) {
                (Some(known), None) => height = Some(self.clamped_width(known) / ratio),
                (None, Some(known)) => width = Some(self.clamped_height(known) * ratio),
                (None, None) => height = Some(self.clamped_width(current.width) / ratio),
                (Some(_), Some(_)) => resolution.unused.push(Unused {
                    directive: "aspect_ratio",
                    reason: "width and height are both already set",
                }),
            },
            None => {}
        }

        let has_width_bounds = self.min_width.is_some() || self.max_width.is_some();
        let has_height_bounds = self.min_height.is_some() || self.max_height.is_some();
        let width = width
            .or_else(|| has_width_bounds.then_some(current.width))
            .map(|value| self.clamped_width(value));
        let height = height
            .or_else(|| has_height_bounds.then_some(current.height))
            .map(|value| self.clamped_height(value));

        Size::new(
            accept_size(width, current.width, HORIZONTAL.size, resolution),
            accept_size(height, current.height, VERTICAL.size, resolution),
        )
    }

    /// Compute the final rectangle.
    ///
    /// `current` is the element's rectangle before resolution, used for every
    /// dimension and origin no directive determines.
    pub fn resolve(
        &self,
        current: Rect,
        direction: Direction,
        size_that_fits: impl Fn(Size) -> Size,
    ) -> Resolution {
        let mut directives = self.clone();
        if directives.pin_edges {
            directives.pin_edges_to_size(current.size());
        }

        let mut resolution = Resolution::new(current);
        let horizontal = directives.horizontal();
        let vertical = directives.vertical();
        let size = directives.resolve_size(
            current.size(),
            (horizontal.span(), vertical.span()),
            size_that_fits,
            &mut resolution,
        );

        let justify = directives
            .justify
            .map(|justify| Placement::horizontal(justify, direction));
        let align = directives.align.map(Placement::vertical);
        let x = horizontal.place(size.width, current.x, justify, &mut resolution);
        let y = vertical.place(size.height, current.y, align, &mut resolution);

        resolution.rect = Rect::new(x, y, size.width, size.height);
        resolution
    }
}

/// Keep `computed` when it is a usable size, otherwise fall back to `current`.
fn accept_size(
    computed: Option<f32>,
    current: f32,
    dimension: &'static str,
    resolution: &mut Resolution,
) -> f32 {
    match computed {
        Some(value) if value >= 0.0 && value.is_finite() => value,
        Some(value) => {
            resolution.degenerate.push((dimension, value));
            current
        }
        None => current,
    }
}
