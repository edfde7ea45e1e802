//! Axis-aligned rectangle collision
//!
//! All hitboxes in the runner are axis-aligned boxes in world space
//! (y grows downward). The player's box shrinks while sliding; that
//! derivation lives on [`crate::sim::Player`], this module only knows
//! rectangles.

use glam::Vec2;

/// An axis-aligned bounding box: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// True if the two boxes overlap. Edge-touching boxes do not count;
    /// an obstacle grazing the player's edge is a near miss, not a crash.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.pos.x < other.right()
            && other.pos.x < self.right()
            && self.pos.y < other.bottom()
            && other.pos.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_disjoint() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(20.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));

        let below = Aabb::new(0.0, 30.0, 10.0, 10.0);
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_edge_touch_is_not_a_hit() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_containment() {
        let outer = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::new(40.0, 40.0, 10.0, 10.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }
}
