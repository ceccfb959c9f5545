//! Relative and absolute values accepted by positioning directives.

use crate::Insets;
use core::fmt;
use core::ops::Neg;

/// A signed percentage of a reference length.
///
/// `Percent::new(50.0)` is fifty percent. There is no clamping: values below
/// zero or above one hundred are valid.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percent(f32);

impl Percent {
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// The raw percentage, e.g. `50.0` for fifty percent.
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Resolve against a reference length.
    pub fn of(self, reference: f32) -> f32 {
        self.0 / 100.0 * reference
    }
}

/// Shorthand for [`Percent::new`].
pub const fn percent(value: f32) -> Percent {
    Percent::new(value)
}

impl Neg for Percent {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}%", self.0)
    }
}

/// A length in points or relative to the parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Points(f32),
    Percent(Percent),
}

impl Length {
    /// Resolve to points. `reference` is only read for relative values.
    pub fn resolve(self, reference: f32) -> f32 {
        match self {
            Self::Points(points) => points,
            Self::Percent(percent) => percent.of(reference),
        }
    }

    /// True when resolving needs a reference length.
    pub const fn is_relative(self) -> bool {
        matches!(self, Self::Percent(_))
    }
}

impl From<f32> for Length {
    fn from(points: f32) -> Self {
        Self::Points(points)
    }
}

impl From<Percent> for Length {
    fn from(percent: Percent) -> Self {
        Self::Percent(percent)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Points(points) => write!(formatter, "{points}"),
            Self::Percent(percent) => write!(formatter, "{percent}"),
        }
    }
}

/// Offset of an edge from the parent's matching edge.
///
/// The `Insets` form contributes only the component matching the edge it is
/// applied to: `top(insets)` reads `insets.top`, `right(insets)` reads
/// `insets.right`, and so on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeOffset {
    Points(f32),
    Percent(Percent),
    Insets(Insets),
}

impl From<f32> for EdgeOffset {
    fn from(points: f32) -> Self {
        Self::Points(points)
    }
}

impl From<Percent> for EdgeOffset {
    fn from(percent: Percent) -> Self {
        Self::Percent(percent)
    }
}

impl From<Insets> for EdgeOffset {
    fn from(insets: Insets) -> Self {
        Self::Insets(insets)
    }
}

impl From<Length> for EdgeOffset {
    fn from(length: Length) -> Self {
        match length {
            Length::Points(points) => Self::Points(points),
            Length::Percent(percent) => Self::Percent(percent),
        }
    }
}

impl fmt::Display for EdgeOffset {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Points(points) => write!(formatter, "{points}"),
            Self::Percent(percent) => write!(formatter, "{percent}"),
            Self::Insets(insets) => write!(formatter, "{insets}"),
        }
    }
}
