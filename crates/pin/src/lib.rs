//! Fluent rectangle layout for retained element trees.
//!
//! A [`PinLayout`] builder collects positioning directives for one element
//! (edges, centers, anchors on other elements, sizes, margins, alignment)
//! and resolves them into one rectangle written back through a
//! [`LayoutHost`]:
//!
//! ```ignore
//! tree.pin(label)
//!     .top_to(VerticalEdge::bottom(title))
//!     .horizontally(10.0)
//!     .margin_top(8.0)
//!     .fit_size(FitType::Width)
//!     .layout();
//! ```
//!
//! Directives that need geometry which doesn't exist yet are dropped with a
//! warning on the `pin_layout` log target; resolution itself never fails.

mod anchor;
mod config;
mod diagnostics;
mod direction;
mod host;
mod pin;

pub use anchor::{Anchor, AnchorPoint, HorizontalEdge, VerticalEdge};
pub use config::PinConfig;
pub use diagnostics::TARGET as LOG_TARGET;
pub use direction::{Direction, HorizontalAlign, HorizontalPosition, LayoutDirection, VerticalAlign};
pub use host::{LayoutHost, SafeAreaProvider};
pub use pin::{FitType, Pin, PinLayout, WrapType};
pub use pin_geometry::{
    EdgeOffset, Insets, Length, Percent, Point, Rect, Size, Transform2D, percent,
};
