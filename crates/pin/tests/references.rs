//! Anchors, relative placement, wrapping and safe areas on a `ViewTree`.

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use core::f32::consts::FRAC_PI_4;
    use pin_layout::{
        Anchor, AnchorPoint, Direction, FitType, HorizontalAlign, HorizontalEdge, Insets, Pin as _,
        Point, Rect, Size, Transform2D, VerticalAlign, VerticalEdge, WrapType,
    };
    use pin_tree::{Content, ViewId, ViewTree};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn tree() -> ViewTree {
        init_logger();
        ViewTree::new(Size::new(400.0, 300.0))
    }

    /// Root child at (100, 50) holding one 50x20 view at (10, 10).
    fn nested(tree: &mut ViewTree) -> Result<(ViewId, ViewId)> {
        let container = tree.add_view(tree.root(), Rect::new(100.0, 50.0, 200.0, 100.0))?;
        let inner = tree.add_view(container, Rect::new(10.0, 10.0, 50.0, 20.0))?;
        Ok((container, inner))
    }

    // ==================== Anchors ====================

    #[test]
    fn edges_of_views_in_other_parents() -> Result<()> {
        let mut tree = tree();
        let (_, inner) = nested(&mut tree)?;
        let label = tree.add_view(tree.root(), Rect::ZERO)?;

        tree.pin(label)
            .top_to(VerticalEdge::bottom(inner))
            .left_to(HorizontalEdge::left(inner))
            .size(Size::new(80.0, 10.0))
            .layout();
        assert_eq!(tree.frame(label)?, Rect::new(110.0, 80.0, 80.0, 10.0));
        Ok(())
    }

    #[test]
    fn edges_of_the_parent_itself() -> Result<()> {
        let mut tree = tree();
        let (container, inner) = nested(&mut tree)?;
        tree.pin(inner)
            .right_to(HorizontalEdge::right(container))
            .bottom_to(VerticalEdge::bottom(container))
            .layout();
        assert_eq!(tree.frame(inner)?, Rect::new(150.0, 80.0, 50.0, 20.0));
        Ok(())
    }

    #[test]
    fn edges_of_views_under_a_rotated_parent() -> Result<()> {
        let mut tree = tree();
        let rotated = tree.add_view(tree.root(), Rect::new(100.0, 100.0, 100.0, 100.0))?;
        tree.set_transform(rotated, Transform2D::rotate(FRAC_PI_4))?;
        let bar = tree.add_view(rotated, Rect::new(0.0, 0.0, 100.0, 20.0))?;
        let label = tree.add_view(tree.root(), Rect::ZERO)?;

        tree.pin(label)
            .left_to(HorizontalEdge::left(bar))
            .right_to(HorizontalEdge::right(bar))
            .top_to(VerticalEdge::top(bar))
            .bottom_to(VerticalEdge::bottom(bar))
            .layout();

        // A 100x20 bar turned by 45 degrees covers 120 / sqrt(2) on both axes.
        let expected = 120.0 * FRAC_PI_4.cos();
        let size = tree.frame(label)?.size();
        assert!((size.width - expected).abs() < 0.01, "{size}");
        assert!((size.height - expected).abs() < 0.01, "{size}");
        Ok(())
    }

    #[test]
    fn anchor_points_on_other_views() -> Result<()> {
        let mut tree = tree();
        let (_, inner) = nested(&mut tree)?;
        let badge = tree.add_view(tree.root(), Rect::new(0.0, 0.0, 80.0, 10.0))?;

        tree.pin(badge)
            .anchor_to(
                AnchorPoint::BottomRight,
                Anchor::new(inner, AnchorPoint::TopRight),
            )
            .layout();
        assert_eq!(tree.frame(badge)?, Rect::new(80.0, 50.0, 80.0, 10.0));

        tree.pin(badge)
            .top_left_to(Anchor::new(inner, AnchorPoint::Center))
            .layout();
        assert_eq!(tree.frame(badge)?.origin(), Point::new(135.0, 70.0));
        Ok(())
    }

    #[test]
    fn anchor_shorthands_use_parent() -> Result<()> {
        let mut tree = tree();
        let view = tree.add_view(tree.root(), Rect::new(0.0, 0.0, 100.0, 50.0))?;
        tree.pin(view).center().layout();
        assert_eq!(tree.frame(view)?, Rect::new(150.0, 125.0, 100.0, 50.0));

        tree.pin(view).bottom_right().layout();
        assert_eq!(tree.frame(view)?, Rect::new(300.0, 250.0, 100.0, 50.0));

        tree.set_direction(view, Direction::Rtl)?;
        tree.pin(view).top_start().layout();
        assert_eq!(tree.frame(view)?, Rect::new(300.0, 0.0, 100.0, 50.0));
        Ok(())
    }

    #[test]
    fn start_edge_of_rtl_reference() -> Result<()> {
        let mut tree = tree();
        let reference = tree.add_view(tree.root(), Rect::new(100.0, 0.0, 100.0, 20.0))?;
        tree.set_direction(reference, Direction::Rtl)?;
        let view = tree.add_view(tree.root(), Rect::new(0.0, 0.0, 30.0, 20.0))?;

        tree.pin(view).start_to(HorizontalEdge::start(reference)).layout();
        assert_eq!(tree.frame(view)?.x, 200.0);
        Ok(())
    }

    #[test]
    fn detached_reference_is_skipped() -> Result<()> {
        let mut tree = tree();
        let view = tree.add_view(tree.root(), Rect::new(5.0, 5.0, 30.0, 20.0))?;
        let loose = tree.create_view(Rect::new(0.0, 0.0, 10.0, 10.0));
        let root = tree.root();

        tree.pin(view)
            .top_to(VerticalEdge::bottom(loose))
            .left_to(HorizontalEdge::right(root))
            .layout();
        assert_eq!(tree.frame(view)?, Rect::new(5.0, 5.0, 30.0, 20.0));
        Ok(())
    }

    // ==================== Relative placement ====================

    #[test]
    fn below_and_above_groups() -> Result<()> {
        let mut tree = tree();
        let first = tree.add_view(tree.root(), Rect::new(10.0, 10.0, 100.0, 20.0))?;
        let second = tree.add_view(tree.root(), Rect::new(150.0, 40.0, 50.0, 50.0))?;
        let view = tree.add_view(tree.root(), Rect::new(0.0, 0.0, 30.0, 30.0))?;

        tree.pin(view).below(&[first, second]).left(0.0).layout();
        assert_eq!(tree.frame(view)?, Rect::new(0.0, 90.0, 30.0, 30.0));

        tree.pin(view)
            .above_aligned(&[second], HorizontalAlign::Right)
            .size(Size::new(20.0, 10.0))
            .layout();
        assert_eq!(tree.frame(view)?, Rect::new(180.0, 30.0, 20.0, 10.0));
        Ok(())
    }

    #[test]
    fn beside_groups_and_logical_sides() -> Result<()> {
        let mut tree = tree();
        let first = tree.add_view(tree.root(), Rect::new(10.0, 10.0, 100.0, 20.0))?;
        let second = tree.add_view(tree.root(), Rect::new(150.0, 40.0, 50.0, 50.0))?;
        let view = tree.add_view(tree.root(), Rect::new(0.0, 0.0, 10.0, 10.0))?;

        tree.pin(view)
            .right_of_aligned(&[first], VerticalAlign::Center)
            .layout();
        assert_eq!(tree.frame(view)?, Rect::new(110.0, 15.0, 10.0, 10.0));

        tree.pin(view).before(&[second]).layout();
        assert_eq!(tree.frame(view)?.x, 140.0);

        tree.set_direction(view, Direction::Rtl)?;
        tree.pin(view).after(&[first]).layout();
        assert_eq!(tree.frame(view)?.x, 0.0);
        tree.pin(view).before_aligned(&[second], VerticalAlign::Bottom).layout();
        assert_eq!(tree.frame(view)?, Rect::new(200.0, 80.0, 10.0, 10.0));
        Ok(())
    }

    #[test]
    fn group_of_detached_views_is_ignored() -> Result<()> {
        let mut tree = tree();
        let view = tree.add_view(tree.root(), Rect::new(3.0, 4.0, 10.0, 10.0))?;
        let loose = tree.create_view(Rect::new(0.0, 0.0, 10.0, 10.0));
        tree.pin(view).below(&[loose]).width(30.0).layout();
        assert_eq!(tree.frame(view)?, Rect::new(3.0, 4.0, 30.0, 10.0));
        Ok(())
    }

    // ==================== Wrap content ====================

    fn container_with_children(tree: &mut ViewTree, origins: [(f32, f32); 2]) -> Result<(ViewId, [ViewId; 2])> {
        let container = tree.add_view(tree.root(), Rect::new(50.0, 50.0, 100.0, 100.0))?;
        let first = tree.add_view(container, Rect::new(origins[0].0, origins[0].1, 10.0, 10.0))?;
        let second = tree.add_view(container, Rect::new(origins[1].0, origins[1].1, 10.0, 10.0))?;
        Ok((container, [first, second]))
    }

    #[test]
    fn wrap_content_fits_children() -> Result<()> {
        let mut tree = tree();
        let (container, [first, second]) = container_with_children(&mut tree, [(0.0, 0.0), (20.0, 20.0)])?;
        tree.pin(container).wrap_content(WrapType::All).layout();

        assert_eq!(tree.frame(container)?, Rect::new(50.0, 50.0, 30.0, 30.0));
        assert_eq!(tree.frame(first)?.origin(), Point::ZERO);
        assert_eq!(tree.frame(second)?, Rect::new(20.0, 20.0, 10.0, 10.0));
        Ok(())
    }

    #[test]
    fn wrap_content_with_padding_moves_children() -> Result<()> {
        let mut tree = tree();
        let (container, [first, second]) = container_with_children(&mut tree, [(0.0, 0.0), (20.0, 20.0)])?;
        tree.pin(container)
            .wrap_content_with_padding(WrapType::All, Insets::uniform(5.0))
            .layout();

        assert_eq!(tree.frame(container)?.size(), Size::new(40.0, 40.0));
        assert_eq!(tree.frame(first)?, Rect::new(5.0, 5.0, 10.0, 10.0));
        assert_eq!(tree.frame(second)?, Rect::new(25.0, 25.0, 10.0, 10.0));
        Ok(())
    }

    #[test]
    fn wrap_content_on_one_axis() -> Result<()> {
        let mut tree = tree();
        let (container, [first, _]) = container_with_children(&mut tree, [(10.0, 10.0), (30.0, 30.0)])?;
        tree.pin(container).wrap_content(WrapType::Horizontally).layout();

        assert_eq!(tree.frame(container)?.size(), Size::new(30.0, 100.0));
        assert_eq!(tree.frame(first)?, Rect::new(0.0, 10.0, 10.0, 10.0));
        Ok(())
    }

    #[test]
    fn wrap_content_negative_padding_still_translates() -> Result<()> {
        let mut tree = tree();
        let container = tree.add_view(tree.root(), Rect::new(50.0, 50.0, 100.0, 100.0))?;
        let child = tree.add_view(container, Rect::new(10.0, 10.0, 10.0, 10.0))?;
        tree.pin(container)
            .wrap_content_with_padding(WrapType::All, Insets::uniform(-20.0))
            .layout();

        assert_eq!(tree.frame(container)?, Rect::new(50.0, 50.0, 100.0, 100.0));
        assert_eq!(tree.frame(child)?, Rect::new(-20.0, -20.0, 10.0, 10.0));
        Ok(())
    }

    #[test]
    fn wrap_content_zero_size_child() -> Result<()> {
        let mut tree = tree();
        let container = tree.add_view(tree.root(), Rect::new(50.0, 50.0, 100.0, 100.0))?;
        let dot = tree.add_view(container, Rect::new(10.0, 10.0, 0.0, 0.0))?;
        tree.pin(container).wrap_content(WrapType::All).layout();

        assert_eq!(tree.frame(container)?, Rect::new(50.0, 50.0, 0.0, 0.0));
        assert_eq!(tree.frame(dot)?, Rect::ZERO);
        Ok(())
    }

    #[test]
    fn wrap_content_without_children() -> Result<()> {
        let mut tree = tree();
        let empty = tree.add_view(tree.root(), Rect::new(1.0, 1.0, 20.0, 20.0))?;
        tree.pin(empty).wrap_content(WrapType::All).layout();
        assert_eq!(tree.frame(empty)?, Rect::new(1.0, 1.0, 20.0, 20.0));
        Ok(())
    }

    // ==================== Fit and aspect ratio ====================

    #[test]
    fn fit_width_uses_content() -> Result<()> {
        let mut tree = tree();
        let label = tree.add_view(tree.root(), Rect::new(0.0, 0.0, 10.0, 10.0))?;
        tree.set_content(
            label,
            Content::Text {
                length: 250.0,
                line_height: 20.0,
            },
        )?;

        tree.pin(label).left(0.0).width(100.0).fit_size(FitType::Width).layout();
        assert_eq!(tree.frame(label)?.size(), Size::new(100.0, 60.0));

        tree.pin(label).fit_size(FitType::Content).layout();
        assert_eq!(tree.frame(label)?.size(), Size::new(250.0, 20.0));
        Ok(())
    }

    #[test]
    fn aspect_ratio_derives_missing_dimension() -> Result<()> {
        let mut tree = tree();
        let view = tree.add_view(tree.root(), Rect::new(0.0, 0.0, 10.0, 10.0))?;
        tree.pin(view).height(30.0).aspect_ratio(2.0).layout();
        assert_eq!(tree.frame(view)?.size(), Size::new(60.0, 30.0));

        tree.pin(view).aspect_ratio(0.0).width(10.0).layout();
        assert_eq!(tree.frame(view)?.size(), Size::new(10.0, 30.0));
        Ok(())
    }

    // ==================== Safe area and transforms ====================

    #[test]
    fn safe_area_insets_feed_edges() -> Result<()> {
        let mut tree = tree();
        tree.set_safe_area_insets(tree.root(), Insets::new(44.0, 0.0, 34.0, 0.0))?;
        let screen = tree.add_view(tree.root(), Rect::new(0.0, 0.0, 400.0, 300.0))?;

        let mut builder = tree.pin(screen);
        let safe = builder.safe_area();
        builder.top(safe.top).bottom(safe.bottom).horizontally(0.0).layout();
        drop(builder);
        assert_eq!(tree.frame(screen)?, Rect::new(0.0, 44.0, 400.0, 222.0));
        Ok(())
    }

    #[test]
    fn pin_keeps_transform_and_pin_frame_uses_visible_frame() -> Result<()> {
        let mut tree = tree();
        let kept = tree.add_view(tree.root(), Rect::new(100.0, 100.0, 50.0, 50.0))?;
        let visible = tree.add_view(tree.root(), Rect::new(100.0, 100.0, 50.0, 50.0))?;
        tree.set_transform(kept, Transform2D::scale(2.0, 2.0))?;
        tree.set_transform(visible, Transform2D::scale(2.0, 2.0))?;

        tree.pin(kept).top(0.0).left(0.0).layout();
        assert_eq!(tree.frame(kept)?, Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(tree.visible_frame(kept)?, Rect::new(-25.0, -25.0, 100.0, 100.0));

        tree.pin_frame(visible).top(0.0).left(0.0).layout();
        assert_eq!(tree.visible_frame(visible)?, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(tree.frame(visible)?, Rect::new(25.0, 25.0, 50.0, 50.0));
        Ok(())
    }
}
