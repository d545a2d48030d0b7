//! Static obstacles and their sprite-sheet frames

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Circle, Rect};
use crate::consts::{SPRITE_COLUMNS, SPRITE_LIFT, SPRITE_ROWS, SPRITE_SIZE};

/// A cell of the obstacle sprite sheet drawn above the collision circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    /// Sheet column
    pub frame_x: u32,
    /// Sheet row
    pub frame_y: u32,
    /// Drawn size in pixels
    pub size: Vec2,
    /// Top-left corner of the drawn box
    pub origin: Vec2,
}

impl Sprite {
    /// Random sheet cell, positioned so the circle sits at the sprite's base
    pub fn random<R: Rng + ?Sized>(center: Vec2, rng: &mut R) -> Self {
        let size = Vec2::splat(SPRITE_SIZE);
        Self {
            frame_x: rng.random_range(0..SPRITE_COLUMNS),
            frame_y: rng.random_range(0..SPRITE_ROWS),
            size,
            origin: center - size * 0.5 - Vec2::new(0.0, SPRITE_LIFT),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.origin, self.origin + self.size)
    }

    /// Source region of this frame within the sprite sheet
    pub fn source_rect(&self) -> Rect {
        let min = Vec2::new(self.frame_x as f32, self.frame_y as f32) * self.size;
        Rect::new(min, min + self.size)
    }
}

/// An obstacle placed once at initialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub circle: Circle,
    pub sprite: Option<Sprite>,
}

impl Obstacle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            circle: Circle::new(center, radius),
            sprite: None,
        }
    }

    pub fn with_sprite(mut self, sprite: Sprite) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn center(&self) -> Vec2 {
        self.circle.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_sprite_sits_above_circle() {
        let mut rng = Pcg32::seed_from_u64(7);
        let sprite = Sprite::random(Vec2::new(500.0, 400.0), &mut rng);
        assert_eq!(sprite.origin, Vec2::new(375.0, 195.0));
        assert_eq!(sprite.bounds().max, Vec2::new(625.0, 445.0));
    }

    #[test]
    fn test_sprite_frames_within_sheet() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let sprite = Sprite::random(Vec2::ZERO, &mut rng);
            assert!(sprite.frame_x < SPRITE_COLUMNS);
            assert!(sprite.frame_y < SPRITE_ROWS);
            let src = sprite.source_rect();
            assert!(src.max.x <= SPRITE_COLUMNS as f32 * SPRITE_SIZE);
            assert!(src.max.y <= SPRITE_ROWS as f32 * SPRITE_SIZE);
        }
    }
}
