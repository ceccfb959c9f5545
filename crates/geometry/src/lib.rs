//! Geometry value types shared by the pin layout engine and its hosts.
//!
//! Everything here is a plain `Copy` value: points, sizes, rectangles, inset
//! quads, relative values and 2D affine transforms. Coordinates are `f32`
//! points with the origin at the top-left corner and y growing downward.

mod insets;
mod rect;
mod transform;
mod value;

pub use insets::Insets;
pub use rect::{Point, Rect, Size};
pub use transform::Transform2D;
pub use value::{EdgeOffset, Length, Percent, percent};
