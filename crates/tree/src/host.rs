//! [`LayoutHost`] and [`SafeAreaProvider`] for [`ViewTree`].

use crate::tree::ViewTree;
use crate::view::{View, ViewId};
use log::warn;
use pin_geometry::{Insets, Point, Rect, Size, Transform2D};
use pin_layout::{Direction, LayoutHost, PinConfig, SafeAreaProvider};

/// Map a point of `view`'s content space into its parent's content space.
fn to_parent_space(view: &View, point: Point) -> Point {
    let local = point.offset_by(view.frame.x, view.frame.y);
    view.transform
        .about(view.frame.center())
        .transform_point(local)
}

/// Inverse of [`to_parent_space`]. Non-invertible transforms are skipped.
fn from_parent_space(view: &View, point: Point) -> Point {
    let local = view
        .transform
        .about(view.frame.center())
        .inverse()
        .map_or(point, |inverse| inverse.transform_point(point));
    local.offset_by(-view.frame.x, -view.frame.y)
}

impl LayoutHost for ViewTree {
    type Node = ViewId;

    fn parent(&self, node: ViewId) -> Option<ViewId> {
        self.get(node).and_then(|view| view.parent)
    }

    fn children(&self, node: ViewId) -> Vec<ViewId> {
        self.get(node)
            .map(|view| view.children.clone())
            .unwrap_or_default()
    }

    fn rect(&self, node: ViewId, keep_transform: bool) -> Rect {
        self.get(node).map_or(Rect::ZERO, |view| {
            if keep_transform {
                view.frame
            } else {
                view.visible_frame()
            }
        })
    }

    /// Writes are snapped to the display scale, if any. Without
    /// `keep_transform` the rectangle is the visible frame; transforms that
    /// can't be undone (rotation, skew) are reset to identity.
    fn set_rect(&mut self, node: ViewId, rect: Rect, keep_transform: bool) {
        let rect = self
            .display_scale
            .map_or(rect, |scale| rect.snapped(scale));
        let Some(view) = self.views.get_mut(node.0) else {
            warn!("[TREE] ignoring rectangle {rect} for unknown {node}");
            return;
        };
        if keep_transform {
            view.frame = rect;
            return;
        }
        match view.transform.unframe(&rect) {
            Some(frame) => view.frame = frame,
            None => {
                warn!("[TREE] transform of {node} can't be preserved, resetting it");
                view.transform = Transform2D::IDENTITY;
                view.frame = rect;
            }
        }
    }

    fn convert_point(&self, point: Point, from: ViewId, to: ViewId) -> Point {
        if from == to {
            return point;
        }
        let upward = self.ancestry(from);
        let downward = self.ancestry(to);
        if upward.last() != downward.last() {
            warn!("[TREE] {from} and {to} are in different trees, point left unchanged");
            return point;
        }

        let in_top = upward
            .iter()
            .filter_map(|&id| self.get(id))
            .filter(|view| view.parent.is_some())
            .fold(point, |current, view| to_parent_space(view, current));
        downward
            .iter()
            .rev()
            .filter_map(|&id| self.get(id))
            .filter(|view| view.parent.is_some())
            .fold(in_top, |current, view| from_parent_space(view, current))
    }

    fn size_that_fits(&self, node: ViewId, proposed: Size) -> Size {
        self.get(node).map_or(Size::ZERO, |view| {
            view.content.size_that_fits(proposed, view.frame.size())
        })
    }

    fn writing_direction(&self, node: ViewId) -> Direction {
        self.get(node)
            .map_or(Direction::Ltr, |view| view.direction)
    }

    fn describe(&self, node: ViewId) -> String {
        match self.get(node).and_then(|view| view.name.as_deref()) {
            Some(name) => format!("{name} ({node})"),
            None => node.to_string(),
        }
    }

    fn pin_config(&self) -> PinConfig {
        self.config
    }
}

impl SafeAreaProvider for ViewTree {
    /// Views without explicit insets inherit the part of their parent's top
    /// and bottom insets they overlap, never more than the parent's.
    fn safe_area_insets(&self, node: ViewId) -> Insets {
        let Some(view) = self.get(node) else {
            return Insets::ZERO;
        };
        if let Some(insets) = view.safe_area {
            return insets;
        }
        let Some(parent) = view.parent else {
            return Insets::ZERO;
        };

        let parent_insets = self.safe_area_insets(parent);
        let parent_height = self.get(parent).map_or(0.0, |entry| entry.frame.height);
        let frame = view.visible_frame();
        let top = (parent_insets.top - frame.min_y())
            .min(parent_insets.top)
            .max(0.0);
        let bottom = (frame.max_y() - parent_height + parent_insets.bottom)
            .min(parent_insets.bottom)
            .max(0.0);
        Insets::new(top, 0.0, bottom, 0.0)
    }
}
