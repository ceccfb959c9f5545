//! Properties of `Rect::union` relied on by wrap-content.

#[cfg(test)]
mod tests {
    use pin_geometry::Rect;

    fn samples() -> Vec<Rect> {
        vec![
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(20.0, 20.0, 10.0, 10.0),
            Rect::new(-5.0, 3.0, 2.0, 40.0),
            Rect::new(7.5, -12.25, 0.0, 0.0),
            Rect::new(100.0, 50.0, 1.0, 1.0),
        ]
    }

    #[test]
    fn union_contains_both_operands() {
        for first in samples() {
            for second in samples() {
                let union = first.union(&second);
                assert!(union.contains_rect(&first), "{union} should contain {first}");
                assert!(union.contains_rect(&second), "{union} should contain {second}");
            }
        }
    }

    #[test]
    fn union_is_the_smallest_bounding_box() {
        for first in samples() {
            for second in samples() {
                let union = first.union(&second);
                assert_eq!(union.min_x(), first.min_x().min(second.min_x()));
                assert_eq!(union.min_y(), first.min_y().min(second.min_y()));
                assert_eq!(union.max_x(), first.max_x().max(second.max_x()));
                assert_eq!(union.max_y(), first.max_y().max(second.max_y()));
            }
        }
    }

    #[test]
    fn union_is_commutative() {
        for first in samples() {
            for second in samples() {
                assert_eq!(first.union(&second), second.union(&first));
            }
        }
    }

    #[test]
    fn union_is_associative() {
        let rects = samples();
        for first in &rects {
            for second in &rects {
                for third in &rects {
                    let left = first.union(second).union(third);
                    let right = first.union(&second.union(third));
                    assert_eq!(left, right);
                }
            }
        }
    }
}
