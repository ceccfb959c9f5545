use crate::view::{Content, View, ViewId};
use anyhow::{Result, anyhow, bail};
use log::debug;
use pin_geometry::{Insets, Rect, Size, Transform2D};
use pin_layout::{Direction, PinConfig};

/// An arena of views with one root.
///
/// Views are never freed; removing a view from its parent detaches it and it
/// can be added again later.
pub struct ViewTree {
    pub(crate) views: Vec<View>,
    root: ViewId,
    pub(crate) display_scale: Option<f32>,
    pub(crate) config: PinConfig,
}

impl ViewTree {
    /// Tree whose root has the given size at the origin.
    pub fn new(size: Size) -> Self {
        let mut root = View::new(Rect::from_size(size));
        root.name = Some(String::from("root"));
        Self {
            views: vec![root],
            root: ViewId(0),
            display_scale: None,
            config: PinConfig::default(),
        }
    }

    /// Scale rectangles are snapped to when written by a layout pass.
    /// Without one, rectangles are stored as computed.
    #[must_use]
    pub fn with_display_scale(mut self, scale: f32) -> Self {
        self.display_scale = Some(scale);
        self
    }

    /// Configuration handed to builders created with `pin`.
    #[must_use]
    pub fn with_config(mut self, config: PinConfig) -> Self {
        self.config = config;
        self
    }

    pub const fn root(&self) -> ViewId {
        self.root
    }

    /// Create a view that has no parent yet.
    pub fn create_view(&mut self, frame: Rect) -> ViewId {
        let id = ViewId(self.views.len());
        self.views.push(View::new(frame));
        id
    }

    /// Create a view and append it to `parent`.
    ///
    /// # Errors
    /// Returns an error when `parent` is not part of this tree.
    pub fn add_view(&mut self, parent: ViewId, frame: Rect) -> Result<ViewId> {
        self.view(parent)?;
        let id = self.create_view(frame);
        self.add_child(parent, id)?;
        Ok(id)
    }

    /// Append `child` to `parent`, detaching it from its previous parent.
    ///
    /// # Errors
    /// Returns an error for unknown views, for the root, and when `child` is
    /// `parent` or one of its ancestors.
    pub fn add_child(&mut self, parent: ViewId, child: ViewId) -> Result<()> {
        let index = self.view(parent)?.children.len();
        self.insert_child(parent, child, index)
    }

    /// Insert `child` at `index` among `parent`'s children.
    ///
    /// # Errors
    /// Same as [`add_child`](Self::add_child), plus an out of range `index`.
    pub fn insert_child(&mut self, parent: ViewId, child: ViewId, index: usize) -> Result<()> {
        self.view(child)?;
        if child == self.root {
            bail!("the root view can't be added to another view");
        }
        if self.is_ancestor_or_self(child, parent) {
            bail!("{child} can't be added to {parent}, it would create a cycle");
        }
        let sibling_count = self
            .view(parent)?
            .children
            .iter()
            .filter(|&&sibling| sibling != child)
            .count();
        if index > sibling_count {
            bail!("index {index} is out of range for {parent} with {sibling_count} children");
        }

        self.remove_from_parent(child)?;
        self.view_mut(parent)?.children.insert(index, child);
        self.view_mut(child)?.parent = Some(parent);
        debug!("[TREE] inserted {child} into {parent} at {index}");
        Ok(())
    }

    /// Detach `view` from its parent. Detaching a view without a parent does
    /// nothing.
    ///
    /// # Errors
    /// Returns an error when `view` is not part of this tree.
    pub fn remove_from_parent(&mut self, view: ViewId) -> Result<()> {
        let Some(parent) = self.view_mut(view)?.parent.take() else {
            return Ok(());
        };
        self.view_mut(parent)?
            .children
            .retain(|&child| child != view);
        Ok(())
    }

    /// Untransformed rectangle in the parent's content space.
    ///
    /// # Errors
    /// Returns an error when `view` is not part of this tree.
    pub fn frame(&self, view: ViewId) -> Result<Rect> {
        Ok(self.view(view)?.frame)
    }

    /// Rectangle including the view's transform.
    ///
    /// # Errors
    /// Returns an error when `view` is not part of this tree.
    pub fn visible_frame(&self, view: ViewId) -> Result<Rect> {
        Ok(self.view(view)?.visible_frame())
    }

    /// Replace the untransformed rectangle as is, without snapping.
    ///
    /// # Errors
    /// Returns an error when `view` is not part of this tree.
    pub fn set_frame(&mut self, view: ViewId, frame: Rect) -> Result<()> {
        self.view_mut(view)?.frame = frame;
        Ok(())
    }

    /// # Errors
    /// Returns an error when `view` is not part of this tree.
    pub fn set_transform(&mut self, view: ViewId, transform: Transform2D) -> Result<()> {
        self.view_mut(view)?.transform = transform;
        Ok(())
    }

    /// # Errors
    /// Returns an error when `view` is not part of this tree.
    pub fn set_direction(&mut self, view: ViewId, direction: Direction) -> Result<()> {
        self.view_mut(view)?.direction = direction;
        Ok(())
    }

    /// # Errors
    /// Returns an error when `view` is not part of this tree.
    pub fn set_content(&mut self, view: ViewId, content: Content) -> Result<()> {
        self.view_mut(view)?.content = content;
        Ok(())
    }

    /// Name shown in diagnostics instead of the view index.
    ///
    /// # Errors
    /// Returns an error when `view` is not part of this tree.
    pub fn set_name(&mut self, view: ViewId, name: impl Into<String>) -> Result<()> {
        self.view_mut(view)?.name = Some(name.into());
        Ok(())
    }

    /// Fix the safe-area insets of `view`, typically the root. Descendants
    /// without explicit insets derive theirs from it.
    ///
    /// # Errors
    /// Returns an error when `view` is not part of this tree.
    pub fn set_safe_area_insets(&mut self, view: ViewId, insets: Insets) -> Result<()> {
        self.view_mut(view)?.safe_area = Some(insets);
        Ok(())
    }

    /// # Errors
    /// Returns an error when `view` is not part of this tree.
    pub fn view(&self, view: ViewId) -> Result<&View> {
        self.views
            .get(view.0)
            .ok_or_else(|| anyhow!("{view} is not part of this tree"))
    }

    fn view_mut(&mut self, view: ViewId) -> Result<&mut View> {
        self.views
            .get_mut(view.0)
            .ok_or_else(|| anyhow!("{view} is not part of this tree"))
    }

    pub(crate) fn get(&self, view: ViewId) -> Option<&View> {
        self.views.get(view.0)
    }

    /// `view` followed by its ancestors, nearest first.
    pub(crate) fn ancestry(&self, view: ViewId) -> Vec<ViewId> {
        let mut chain = vec![view];
        let mut current = self.get(view).and_then(|entry| entry.parent);
        while let Some(ancestor) = current {
            chain.push(ancestor);
            current = self.get(ancestor).and_then(|entry| entry.parent);
        }
        chain
    }

    fn is_ancestor_or_self(&self, candidate: ViewId, view: ViewId) -> bool {
        self.ancestry(view).contains(&candidate)
    }
}
