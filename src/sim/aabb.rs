//! Axis-aligned box geometry for the paddle and bricks
//!
//! Everything in the arena is a box or a circle, so a center + half-extent
//! box with edge accessors covers all the collision queries we need.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box defined by its center and half-extents
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    /// Half-extents (box spans center ± half)
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Build from a full size rather than half-extents
    pub fn from_size(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size / 2.0,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.half.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// Check if a point is inside the box (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Closest point on or inside the box to an arbitrary point
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.left(), self.right()),
            point.y.clamp(self.top(), self.bottom()),
        )
    }
}
