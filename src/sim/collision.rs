//! Collision geometry
//!
//! Everything in the playfield is either a circle (balls, power-ups) or an
//! axis-aligned rectangle (paddle, blocks), so one test covers every contact.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Scale position and size per axis
    pub fn scaled(&self, sx: f32, sy: f32) -> Self {
        Self::new(self.x * sx, self.y * sy, self.width * sx, self.height * sy)
    }

    /// Closest point inside the rectangle to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(self.x, self.right()), p.y.clamp(self.y, self.bottom()))
    }
}

/// Check whether a circle overlaps a rectangle (touching counts)
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.distance_squared(rect.closest_point(center)) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_inside_rect() {
        let rect = Rect::new(0.0, 0.0, 100.0, 20.0);
        assert!(circle_rect_overlap(Vec2::new(50.0, 10.0), 4.0, &rect));
    }

    #[test]
    fn test_circle_touching_edge() {
        let rect = Rect::new(0.0, 0.0, 100.0, 20.0);
        assert!(circle_rect_overlap(Vec2::new(50.0, 28.0), 8.0, &rect));
        assert!(!circle_rect_overlap(Vec2::new(50.0, 28.5), 8.0, &rect));
    }

    #[test]
    fn test_circle_near_corner_misses() {
        // Inside the bounding box grown by the radius, but outside the rounded corner
        let rect = Rect::new(0.0, 0.0, 100.0, 20.0);
        assert!(!circle_rect_overlap(Vec2::new(-6.0, -6.0), 8.0, &rect));
        assert!(circle_rect_overlap(Vec2::new(-5.0, -5.0), 8.0, &rect));
    }

    #[test]
    fn test_rect_helpers() {
        let rect = Rect::new(10.0, 20.0, 70.0, 20.0);
        assert_eq!(rect.right(), 80.0);
        assert_eq!(rect.bottom(), 40.0);
        assert_eq!(rect.center(), Vec2::new(45.0, 30.0));
        assert_eq!(rect.scaled(2.0, 0.5), Rect::new(20.0, 10.0, 140.0, 10.0));
    }
}
