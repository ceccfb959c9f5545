//! Arena entries of a [`ViewTree`](crate::ViewTree).

use core::fmt;
use pin_geometry::{Insets, Rect, Size, Transform2D};
use pin_layout::Direction;

/// Index of a view in its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub(crate) usize);

impl fmt::Display for ViewId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "view#{}", self.0)
    }
}

/// What a view would like to display, used to answer size-that-fits queries.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Content {
    /// No preferred size; fitting returns the current size.
    #[default]
    Empty,
    /// Always the same size, like an image.
    Fixed(Size),
    /// A single run of text `length` points long that wraps into lines of
    /// `line_height` when narrower than `length`.
    Text { length: f32, line_height: f32 },
}

impl Content {
    pub fn size_that_fits(&self, proposed: Size, current: Size) -> Size {
        match *self {
            Self::Empty => current,
            Self::Fixed(size) => size,
            Self::Text {
                length,
                line_height,
            } => {
                if proposed.width >= length || proposed.width <= 0.0 {
                    Size::new(length, line_height)
                } else {
                    let lines = (length / proposed.width).ceil();
                    Size::new(proposed.width, lines * line_height)
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct View {
    pub name: Option<String>,
    pub parent: Option<ViewId>,
    pub children: Vec<ViewId>,
    /// Untransformed rectangle in the parent's content space.
    pub frame: Rect,
    /// Applied around the center of `frame`.
    pub transform: Transform2D,
    pub direction: Direction,
    pub content: Content,
    /// Explicit safe-area insets. Views without them derive theirs from the
    /// parent.
    pub safe_area: Option<Insets>,
}

impl View {
    pub(crate) fn new(frame: Rect) -> Self {
        Self {
            name: None,
            parent: None,
            children: Vec::new(),
            frame,
            transform: Transform2D::IDENTITY,
            direction: Direction::Ltr,
            content: Content::Empty,
            safe_area: None,
        }
    }

    /// Rectangle including the transform.
    pub fn visible_frame(&self) -> Rect {
        self.transform.frame_of(&self.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_wraps_when_narrow() {
        let text = Content::Text {
            length: 250.0,
            line_height: 20.0,
        };
        let current = Size::new(1.0, 1.0);
        assert_eq!(
            text.size_that_fits(Size::new(100.0, f32::INFINITY), current),
            Size::new(100.0, 60.0)
        );
        assert_eq!(
            text.size_that_fits(Size::UNBOUNDED, current),
            Size::new(250.0, 20.0)
        );
    }

    #[test]
    fn test_empty_content_keeps_current_size() {
        let current = Size::new(12.0, 8.0);
        assert_eq!(
            Content::Empty.size_that_fits(Size::UNBOUNDED, current),
            current
        );
    }

    #[test]
    fn test_view_id_display() {
        assert_eq!(ViewId(3).to_string(), "view#3");
    }
}
