/// Directionality for start/end directives.
///
/// This module handles:
/// - The effective direction of an element (explicit override or host-reported)
/// - Mapping logical start/end sides to physical left/right edges
/// - Alignment values expressed in logical terms
///
/// Every start/end flavoured API in the builder funnels through
/// [`inline_start_edge`] and [`inline_end_edge`].

/// Text direction (ltr or rtl).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Left-to-right (default for most scripts).
    #[default]
    Ltr,
    /// Right-to-left (Arabic, Hebrew, etc.).
    Rtl,
}

impl Direction {
    pub const fn is_ltr(self) -> bool {
        matches!(self, Self::Ltr)
    }
}

/// Layout direction mode held by [`PinConfig`](crate::PinConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    /// Follow the direction reported by the host for each element.
    #[default]
    Auto,
    /// Force left-to-right everywhere.
    Ltr,
    /// Force right-to-left everywhere.
    Rtl,
}

impl LayoutDirection {
    /// Parse `auto`, `ltr` or `rtl` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "ltr" => Some(Self::Ltr),
            "rtl" => Some(Self::Rtl),
            _ => None,
        }
    }

    /// Effective direction given what the host reports.
    pub const fn resolve(self, reported: Direction) -> Direction {
        match self {
            Self::Auto => reported,
            Self::Ltr => Direction::Ltr,
            Self::Rtl => Direction::Rtl,
        }
    }
}

/// Physical direction in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicalAxis {
    Horizontal,
    Vertical,
}

/// Physical edge direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicalEdge {
    Top,
    Right,
    Bottom,
    Left,
}

impl PhysicalEdge {
    /// Axis along which this edge's coordinate is measured.
    pub const fn axis(self) -> PhysicalAxis {
        match self {
            Self::Left | Self::Right => PhysicalAxis::Horizontal,
            Self::Top | Self::Bottom => PhysicalAxis::Vertical,
        }
    }
}

/// Map the logical inline-start side to a physical edge.
///
/// # Examples:
/// - ltr: left edge
/// - rtl: right edge
pub const fn inline_start_edge(direction: Direction) -> PhysicalEdge {
    match direction {
        Direction::Ltr => PhysicalEdge::Left,
        Direction::Rtl => PhysicalEdge::Right,
    }
}

/// Map the logical inline-end side to a physical edge.
pub const fn inline_end_edge(direction: Direction) -> PhysicalEdge {
    match direction {
        Direction::Ltr => PhysicalEdge::Right,
        Direction::Rtl => PhysicalEdge::Left,
    }
}

/// Horizontal placement of an element inside the span between its left and
/// right edges, or relative to a group of reference elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
    /// Left in ltr, right in rtl.
    Start,
    /// Right in ltr, left in rtl.
    End,
}

/// Horizontal position once logical values are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalPosition {
    Left,
    Center,
    Right,
}

impl HorizontalAlign {
    /// Physical position for an element with the given direction.
    pub const fn position(self, direction: Direction) -> HorizontalPosition {
        match (self, direction) {
            (Self::Left, _) | (Self::Start, Direction::Ltr) | (Self::End, Direction::Rtl) => {
                HorizontalPosition::Left
            }
            (Self::Center, _) => HorizontalPosition::Center,
            (Self::Right, _) | (Self::End, Direction::Ltr) | (Self::Start, Direction::Rtl) => {
                HorizontalPosition::Right
            }
        }
    }
}

/// Vertical placement of an element inside the span between its top and
/// bottom edges, or relative to a group of reference elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_edges_follow_direction() {
        assert_eq!(inline_start_edge(Direction::Ltr), PhysicalEdge::Left);
        assert_eq!(inline_end_edge(Direction::Ltr), PhysicalEdge::Right);
        assert_eq!(inline_start_edge(Direction::Rtl), PhysicalEdge::Right);
        assert_eq!(inline_end_edge(Direction::Rtl), PhysicalEdge::Left);
    }

    #[test]
    fn test_logical_alignment_resolution() {
        assert_eq!(
            HorizontalAlign::Start.position(Direction::Rtl),
            HorizontalPosition::Right
        );
        assert_eq!(
            HorizontalAlign::End.position(Direction::Rtl),
            HorizontalPosition::Left
        );
        assert_eq!(
            HorizontalAlign::Center.position(Direction::Rtl),
            HorizontalPosition::Center
        );
        assert_eq!(
            HorizontalAlign::Start.position(Direction::Ltr),
            HorizontalPosition::Left
        );
    }

    #[test]
    fn test_layout_direction_from_name() {
        assert_eq!(LayoutDirection::from_name("RTL"), Some(LayoutDirection::Rtl));
        assert_eq!(LayoutDirection::from_name(" auto "), Some(LayoutDirection::Auto));
        assert_eq!(LayoutDirection::from_name("sideways"), None);
    }
}
