//! The player circle, which chases the pointer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Circle;

/// The player's circle and movement speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub circle: Circle,
    /// Maximum distance travelled per frame
    pub speed: f32,
}

impl Player {
    pub fn new(center: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            circle: Circle::new(center, radius),
            speed,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.circle.center
    }

    /// Step toward the pointer by exactly `speed`.
    ///
    /// Within one step of the pointer the player stays put, so it never
    /// overshoots and jitters around the target.
    pub fn update(&mut self, pointer: Vec2) {
        let delta = pointer - self.circle.center;
        let distance = delta.length();
        if distance > self.speed {
            self.circle.center += delta.normalize_or_zero() * self.speed;
        }
    }
}
