//! Configuration settings for the pin layout engine.
//!
//! Every switch that changes how directives resolve lives here and is handed
//! to each builder explicitly, so resolution never depends on hidden global
//! state. Configuration can be loaded from environment variables or
//! constructed programmatically.

use crate::direction::{Direction, LayoutDirection};
use std::env;

/// Runtime configuration for pin layout builders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinConfig {
    /// Direction used to resolve start/end directives.
    pub layout_direction: LayoutDirection,
    /// Whether "won't be applied" and conflict warnings are logged
    pub log_warnings: bool,
    /// Whether dropping a builder without calling `layout()` is logged
    pub log_missing_layout_calls: bool,
}

impl PinConfig {
    /// Construct a new `PinConfig` with explicit values.
    ///
    /// # Arguments
    ///
    /// * `layout_direction` - Direction override, or `Auto` to follow the host
    /// * `log_warnings` - Whether to log directives that can't be applied
    /// * `log_missing_layout_calls` - Whether to log builders finalized on drop
    #[inline]
    #[must_use]
    pub const fn new(
        layout_direction: LayoutDirection,
        log_warnings: bool,
        log_missing_layout_calls: bool,
    ) -> Self {
        Self {
            layout_direction,
            log_warnings,
            log_missing_layout_calls,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `PIN_LAYOUT_DIRECTION`: `auto`, `ltr` or `rtl` (default: auto)
    /// - `PIN_LOG_WARNINGS`: Set to "0" to silence warnings (default: enabled)
    /// - `PIN_LOG_MISSING_LAYOUT_CALLS`: Set to "1" to log builders that were
    ///   never finalized explicitly (default: disabled)
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        let layout_direction = env::var("PIN_LAYOUT_DIRECTION")
            .ok()
            .and_then(|val| LayoutDirection::from_name(&val))
            .unwrap_or_default();
        let log_warnings = env::var("PIN_LOG_WARNINGS").ok().as_deref() != Some("0");
        let log_missing_layout_calls =
            env::var("PIN_LOG_MISSING_LAYOUT_CALLS").ok().as_deref() == Some("1");
        Self {
            layout_direction,
            log_warnings,
            log_missing_layout_calls,
        }
    }

    /// Same configuration with a different direction override.
    #[inline]
    #[must_use]
    pub const fn with_layout_direction(mut self, layout_direction: LayoutDirection) -> Self {
        self.layout_direction = layout_direction;
        self
    }

    /// Effective direction for an element whose host reports `reported`.
    #[inline]
    pub const fn direction_for(&self, reported: Direction) -> Direction {
        self.layout_direction.resolve(reported)
    }
}

impl Default for PinConfig {
    #[inline]
    fn default() -> Self {
        Self::new(LayoutDirection::Auto, true, false)
    }
}
