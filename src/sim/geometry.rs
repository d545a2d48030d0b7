//! Circles, bounds, and the pairwise overlap test

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A circle in surface coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Distance between the two centers
    #[inline]
    pub fn center_distance(&self, other: &Circle) -> f32 {
        self.center.distance(other.center)
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle anchored at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Map a unit-square sample `t` (components in [0, 1)) into the rectangle
    #[inline]
    pub fn lerp(&self, t: Vec2) -> Vec2 {
        self.min + self.size() * t
    }
}

/// True iff the circles are closer than the sum of their radii plus `buffer`.
///
/// Circles that exactly touch do not collide.
#[inline]
pub fn collides(a: &Circle, b: &Circle, buffer: f32) -> bool {
    a.center_distance(b) < a.radius + b.radius + buffer
}
