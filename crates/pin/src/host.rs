//! The host abstraction the engine lays out against.
//!
//! The engine never owns elements. It reads and writes rectangles through a
//! [`LayoutHost`], which may be a retained view tree, a scene graph or a test
//! double.

use crate::config::PinConfig;
use crate::direction::Direction;
use core::fmt::Debug;
use pin_geometry::{Insets, Point, Rect, Size};

/// A tree of rectangular elements the engine can position.
///
/// Rectangles returned by [`rect`](Self::rect) are expressed in the
/// coordinate space of the element's parent. When `keep_transform` is true
/// the host reports and accepts the untransformed rectangle; otherwise the
/// rectangle includes the element's transform (its visible frame).
pub trait LayoutHost {
    /// Handle identifying one element of the tree.
    type Node: Copy + Eq + Debug;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Children of `node` in insertion order.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    fn rect(&self, node: Self::Node, keep_transform: bool) -> Rect;

    fn set_rect(&mut self, node: Self::Node, rect: Rect, keep_transform: bool);

    /// Convert `point`, expressed in the coordinate space of `from`'s
    /// content, into the coordinate space of `to`'s content.
    fn convert_point(&self, point: Point, from: Self::Node, to: Self::Node) -> Point;

    /// Size the element would like to have when offered `proposed`.
    /// Unbounded dimensions are `f32::INFINITY`.
    fn size_that_fits(&self, node: Self::Node, proposed: Size) -> Size;

    /// Direction the host reports for the element.
    fn writing_direction(&self, node: Self::Node) -> Direction;

    /// Human readable description used in diagnostics.
    fn describe(&self, node: Self::Node) -> String {
        format!("{node:?}")
    }

    /// Configuration used by builders created with [`Pin::pin`](crate::Pin::pin).
    fn pin_config(&self) -> PinConfig {
        PinConfig::default()
    }
}

/// Hosts that know which part of each element is obscured by system chrome.
pub trait SafeAreaProvider: LayoutHost {
    /// Insets of `node` that content should avoid, in `node`'s own space.
    fn safe_area_insets(&self, node: Self::Node) -> Insets;
}
