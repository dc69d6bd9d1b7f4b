//! Collision detection
//!
//! One overlap test between axis-aligned boxes. Inequalities are strict:
//! boxes that merely share an edge do not collide, so a bird grazing a pipe
//! lip by exactly zero pixels survives.

use super::rect::Rect;

/// True iff the two boxes overlap with positive area.
pub fn collides(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_detected() {
        let bird = Rect::new(50.0, 100.0, 34.0, 24.0);
        let pipe = Rect::new(60.0, 0.0, 52.0, 110.0);
        assert!(collides(&bird, &pipe));
    }

    #[test]
    fn test_disjoint_boxes_miss() {
        let bird = Rect::new(50.0, 300.0, 34.0, 24.0);
        let pipe = Rect::new(200.0, 0.0, 52.0, 110.0);
        assert!(!collides(&bird, &pipe));
    }

    #[test]
    fn test_shared_edge_is_not_collision() {
        let bird = Rect::new(50.0, 100.0, 34.0, 24.0);
        // Pipe's left edge exactly at the bird's right edge
        let pipe = Rect::new(84.0, 0.0, 52.0, 480.0);
        assert!(!collides(&bird, &pipe));

        // Pipe's bottom exactly at the bird's top
        let pipe = Rect::new(40.0, 0.0, 52.0, 100.0);
        assert!(!collides(&bird, &pipe));
    }

    #[test]
    fn test_one_pixel_overlap_collides() {
        let bird = Rect::new(50.0, 100.0, 34.0, 24.0);
        let pipe = Rect::new(83.0, 123.0, 52.0, 480.0);
        assert!(collides(&bird, &pipe));
    }

    #[test]
    fn test_containment_collides() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(collides(&outer, &inner));
        assert!(collides(&inner, &outer));
    }

    proptest! {
        #[test]
        fn prop_collision_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.1f32..200.0, ah in 0.1f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.1f32..200.0, bh in 0.1f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(collides(&a, &b), collides(&b, &a));
        }

        #[test]
        fn prop_box_collides_with_itself(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 0.1f32..200.0, h in 0.1f32..200.0,
        ) {
            let r = Rect::new(x, y, w, h);
            prop_assert!(collides(&r, &r));
        }
    }
}
