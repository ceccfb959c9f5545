#![allow(clippy::unwrap_used, missing_docs, reason = "benchmark")]

use criterion::{Criterion, criterion_group, criterion_main};
use pin_layout::{
    Anchor, AnchorPoint, HorizontalEdge, Pin as _, Rect, Size, VerticalEdge, WrapType,
};
use pin_tree::{ViewId, ViewTree};
use std::hint::black_box;

/// A list of rows, each holding an icon and a label, inside one container.
fn build_list(rows: usize) -> (ViewTree, ViewId, Vec<(ViewId, ViewId, ViewId)>) {
    let mut tree = ViewTree::new(Size::new(375.0, 812.0));
    let list = tree.add_view(tree.root(), Rect::ZERO).unwrap();
    let mut entries = Vec::with_capacity(rows);
    for _ in 0..rows {
        let row = tree.add_view(list, Rect::ZERO).unwrap();
        let icon = tree.add_view(row, Rect::ZERO).unwrap();
        let label = tree.add_view(row, Rect::ZERO).unwrap();
        entries.push((row, icon, label));
    }
    (tree, list, entries)
}

/// One full layout pass: rows stacked under each other, children anchored
/// inside each row, the list wrapped around its rows.
fn layout_list(tree: &mut ViewTree, list: ViewId, entries: &[(ViewId, ViewId, ViewId)]) {
    tree.pin(list).top(0.0).horizontally(0.0).layout();
    let mut previous: Option<ViewId> = None;
    for &(row, icon, label) in entries {
        match previous {
            Some(above) => tree.pin(row).below(&[above]).horizontally(0.0).height(44.0).layout(),
            None => tree.pin(row).top(0.0).horizontally(0.0).height(44.0).layout(),
        }
        tree.pin(icon)
            .center_left()
            .margin_left(16.0)
            .size(Size::new(24.0, 24.0))
            .layout();
        tree.pin(label)
            .left_to(HorizontalEdge::right(icon))
            .right(16.0)
            .v_center_to(VerticalEdge::v_center(icon))
            .height(20.0)
            .margin_left(12.0)
            .layout();
        previous = Some(row);
    }
    tree.pin(list).wrap_content(WrapType::Vertically).layout();
}

fn bench_pin_pass(c: &mut Criterion) {
    let (mut tree, list, entries) = build_list(50);
    c.bench_function("pin_list_50_rows", |b| {
        b.iter(|| {
            layout_list(&mut tree, list, &entries);
            black_box(tree.frame(list).unwrap());
        });
    });

    let (mut sibling_tree, _, sibling_entries) = build_list(1);
    let (_, icon, label) = sibling_entries.first().copied().unwrap();
    c.bench_function("pin_anchor_to_sibling", |b| {
        b.iter(|| {
            sibling_tree.pin(label)
                .anchor_to(
                    AnchorPoint::TopLeft,
                    Anchor::new(icon, AnchorPoint::BottomRight),
                )
                .layout();
            black_box(sibling_tree.frame(label).unwrap());
        });
    });
}

criterion_group!(pin_benches, bench_pin_pass);
criterion_main!(pin_benches);
