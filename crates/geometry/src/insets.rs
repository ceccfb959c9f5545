//! Four-sided inset quad used for margins, padding and safe areas.

use core::fmt;

/// Edge sizes (top, left, bottom, right).
///
/// Values may be negative; a negative padding grows the content instead of
/// shrinking it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Insets {
    /// All edges zero.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Create insets from individual values.
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Create insets with all edges set to the same value.
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create insets from a vertical (top and bottom) and a horizontal (left
    /// and right) value.
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Get the sum of horizontal edges (left + right).
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Get the sum of vertical edges (top + bottom).
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl fmt::Display for Insets {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "(top: {}, left: {}, bottom: {}, right: {})",
            self.top, self.left, self.bottom, self.right
        )
    }
}
