//! Diagnostics and logging helpers for pin directives

use crate::config::PinConfig;
use log::{debug, warn};

/// Log target shared by every message the engine emits.
pub const TARGET: &str = "pin_layout";

/// Why a directive that needs another element could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unresolved<N> {
    /// The element being laid out has no parent.
    NoParent,
    /// The reference element has no parent, so its rectangle has no space.
    DetachedReference(N),
}

impl<N: Copy> Unresolved<N> {
    /// Reason phrase appended to a "won't be applied" warning.
    pub fn reason(self, describe: impl FnOnce(N) -> String) -> String {
        match self {
            Self::NoParent => String::from("the element must have a parent before being laid out"),
            Self::DetachedReference(node) => format!(
                "the reference element {} must have a parent before being used as a reference",
                describe(node)
            ),
        }
    }
}

/// Log a directive that has been dropped.
#[inline]
pub fn warn_not_applied(
    config: &PinConfig,
    directive: impl FnOnce() -> String,
    reason: impl FnOnce() -> String,
) {
    if config.log_warnings {
        warn!(
            target: TARGET,
            "PinLayout warning: {} won't be applied, {}.",
            directive(),
            reason()
        );
    }
}

/// Log a positioning slot ignored in favor of higher-precedence slots.
#[inline]
pub fn warn_conflict(config: &PinConfig, element: &str, ignored: &str, kept: &str) {
    if config.log_warnings {
        warn!(
            target: TARGET,
            "PinLayout conflict: {ignored} won't be applied on {element} since it conflicts with {kept}."
        );
    }
}

/// Log a builder finalized implicitly when it went out of scope.
#[inline]
pub fn warn_missing_layout(config: &PinConfig, element: &str) {
    if config.log_missing_layout_calls {
        warn!(
            target: TARGET,
            "PinLayout commands have been issued on {element} without calling layout() to complete the layout."
        );
    }
}

/// Log a computed size that fell back to the current one.
#[inline]
pub fn log_degenerate(element: &str, dimension: &str, value: f32) {
    debug!(
        target: TARGET,
        "[PIN {element}] computed {dimension}={value} is invalid, keeping the current {dimension}"
    );
}
