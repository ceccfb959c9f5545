//! The fluent positioning builder.
//!
//! A [`PinLayout`] collects directives for one element and resolves them into
//! a single rectangle when [`PinLayout::layout`] is called, or when the
//! builder is dropped. Each directive family lives in its own submodule:
//!
//! - `edges`: parent-relative edges, centers and their compounds
//! - `anchors`: edges and points of other elements
//! - `size`: explicit sizes, bounds and size adjustments
//! - `align`: justify, align and edge pinning
//! - `margins`: margin setters
//! - `relative`: placement next to groups of elements
//! - `wrap`: sizing a container around its children

mod align;
mod anchors;
mod apply;
mod edges;
mod margins;
mod relative;
mod size;
mod wrap;

pub use size::FitType;
pub use wrap::WrapType;

use crate::anchor;
use crate::config::PinConfig;
use crate::diagnostics::{self, Unresolved};
use crate::direction::Direction;
use crate::host::{LayoutHost, SafeAreaProvider};
use apply::Directives;
use pin_geometry::{Insets, Rect, Size};
use tracing::trace_span;

/// Directive accumulator for one element.
///
/// Chaining methods take and return `&mut Self`. Directives that need
/// geometry which doesn't exist yet (no parent, detached reference) are
/// dropped with a warning and leave the previously set slots untouched.
pub struct PinLayout<'tree, T: LayoutHost> {
    host: &'tree mut T,
    node: T::Node,
    config: PinConfig,
    keep_transform: bool,
    directives: Directives,
    finalized: bool,
}

impl<'tree, T: LayoutHost> PinLayout<'tree, T> {
    /// Start a builder for `node`.
    ///
    /// With `keep_transform` the element's untransformed rectangle is read
    /// and written; otherwise its visible frame is.
    pub fn new(host: &'tree mut T, node: T::Node, config: PinConfig, keep_transform: bool) -> Self {
        Self {
            host,
            node,
            config,
            keep_transform,
            directives: Directives::default(),
            finalized: false,
        }
    }

    /// Read access to the host while directives are being collected.
    pub fn host(&self) -> &T {
        &*self.host
    }

    /// Resolve the collected directives and write the rectangle back.
    ///
    /// Calling it again on the same builder does nothing.
    pub fn layout(&mut self) {
        if self.finalized {
            return;
        }
        self.finalized = true;
        self.apply();
    }

    fn apply(&mut self) {
        let _span = trace_span!("pin_layout.apply", node = ?self.node).entered();
        let current = self.host.rect(self.node, self.keep_transform);
        let direction = self.direction();
        let resolution = {
            let host = &*self.host;
            let node = self.node;
            self.directives
                .resolve(current, direction, |proposed| host.size_that_fits(node, proposed))
        };

        if !resolution.is_clean() {
            let element = self.host.describe(self.node);
            for conflict in &resolution.conflicts {
                diagnostics::warn_conflict(&self.config, &element, conflict.ignored, conflict.kept);
            }
            for unused in &resolution.unused {
                diagnostics::warn_not_applied(
                    &self.config,
                    || format!("{} on {element}", unused.directive),
                    || String::from(unused.reason),
                );
            }
            for &(dimension, value) in &resolution.degenerate {
                diagnostics::log_degenerate(&element, dimension, value);
            }
        }

        self.host
            .set_rect(self.node, resolution.rect, self.keep_transform);
    }

    /// Effective direction of the element being laid out.
    fn direction(&self) -> Direction {
        self.config
            .direction_for(self.host.writing_direction(self.node))
    }

    /// Effective direction of another element.
    fn direction_of(&self, node: T::Node) -> Direction {
        self.config.direction_for(self.host.writing_direction(node))
    }

    fn warn_unresolved(&self, directive: impl FnOnce() -> String, unresolved: Unresolved<T::Node>) {
        let host = &*self.host;
        diagnostics::warn_not_applied(&self.config, directive, || {
            unresolved.reason(|node| host.describe(node))
        });
    }

    fn warn_invalid(&self, directive: impl FnOnce() -> String, reason: &str) {
        diagnostics::warn_not_applied(&self.config, directive, || String::from(reason));
    }

    /// Content size of the parent, or `None` (with a warning) when detached.
    fn parent_size(&self, directive: impl FnOnce() -> String) -> Option<Size> {
        match self.host.parent(self.node) {
            Some(parent) => Some(self.host.rect(parent, true).size()),
            None => {
                self.warn_unresolved(directive, Unresolved::NoParent);
                None
            }
        }
    }

    /// Rectangle of `reference` in this element's parent space.
    fn reference_rect(
        &self,
        reference: T::Node,
        directive: impl FnOnce() -> String,
    ) -> Option<Rect> {
        let Some(parent) = self.host.parent(self.node) else {
            self.warn_unresolved(directive, Unresolved::NoParent);
            return None;
        };
        match anchor::reference_rect(&*self.host, parent, reference, self.keep_transform) {
            Ok(rect) => Some(rect),
            Err(unresolved) => {
                self.warn_unresolved(directive, unresolved);
                None
            }
        }
    }
}

impl<T: SafeAreaProvider> PinLayout<'_, T> {
    /// Safe-area insets of the element being laid out.
    pub fn safe_area(&self) -> Insets {
        self.host.safe_area_insets(self.node)
    }
}

impl<T: LayoutHost> Drop for PinLayout<'_, T> {
    fn drop(&mut self) {
        if self.finalized {
            return;
        }
        if self.directives != Directives::default() {
            diagnostics::warn_missing_layout(&self.config, &self.host.describe(self.node));
        }
        self.layout();
    }
}

/// Entry points on any [`LayoutHost`].
pub trait Pin: LayoutHost + Sized {
    /// Builder for `node` that keeps the element's transform.
    fn pin(&mut self, node: Self::Node) -> PinLayout<'_, Self> {
        let config = self.pin_config();
        PinLayout::new(self, node, config, true)
    }

    /// Builder for `node` working on its visible (transformed) frame.
    fn pin_frame(&mut self, node: Self::Node) -> PinLayout<'_, Self> {
        let config = self.pin_config();
        PinLayout::new(self, node, config, false)
    }

    /// Builder for `node` with an explicit configuration.
    fn pin_with(&mut self, node: Self::Node, config: PinConfig) -> PinLayout<'_, Self> {
        PinLayout::new(self, node, config, true)
    }
}

impl<T: LayoutHost> Pin for T {}
