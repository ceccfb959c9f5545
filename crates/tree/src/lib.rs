//! In-memory view tree implementing [`pin_layout::LayoutHost`].
//!
//! Views live in an arena addressed by [`ViewId`]. Each view has an
//! untransformed frame in its parent's content space, an optional affine
//! transform applied around the frame's center, a writing direction, content
//! used for size-that-fits queries and optional safe-area insets.

mod host;
mod tree;
mod view;

pub use tree::ViewTree;
pub use view::{Content, View, ViewId};
