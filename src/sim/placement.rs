//! Random non-overlapping obstacle placement
//!
//! Rejection sampling: draw a uniformly random candidate, keep it only if it
//! clears every obstacle accepted so far. The attempt budget bounds the loop;
//! running out just leaves the field short of the requested count.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Circle, Rect, collides};
use super::obstacle::{Obstacle, Sprite};

/// Where sprite boxes may land on the surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteRules {
    /// Surface size in pixels
    pub surface: Vec2,
    /// Sprite boxes must start right of this
    pub side_margin: f32,
    /// Sprite boxes must start below this (UI band)
    pub top_margin: f32,
}

impl SpriteRules {
    /// Whether a sprite box fits the margins
    pub fn admits(&self, sprite: &Sprite) -> bool {
        let origin = sprite.origin;
        origin.x > self.side_margin
            && origin.x < self.surface.x - sprite.size.x
            && origin.y > self.top_margin
            && origin.y < self.surface.y
    }
}

/// Parameters for one placement run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementRules {
    /// Requested number of obstacles
    pub count: usize,
    /// Region candidate centers are drawn from
    pub bounds: Rect,
    /// Collision radius of every obstacle
    pub radius: f32,
    /// Total candidate draws allowed
    pub max_attempts: u32,
    /// Required gap between accepted circles
    pub min_separation: f32,
    /// Sprite constraints (sprite variant only)
    pub sprites: Option<SpriteRules>,
}

/// Outcome of a placement run
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub obstacles: Vec<Obstacle>,
    /// Candidate draws used
    pub attempts: u32,
}

/// Place up to `rules.count` obstacles by rejection sampling
pub fn place_obstacles<R: Rng + ?Sized>(rules: &PlacementRules, rng: &mut R) -> Placement {
    // Never more obstacles than attempts
    let mut obstacles: Vec<Obstacle> =
        Vec::with_capacity(rules.count.min(rules.max_attempts as usize));
    let mut attempts = 0;

    while obstacles.len() < rules.count && attempts < rules.max_attempts {
        attempts += 1;

        let t = Vec2::new(rng.random::<f32>(), rng.random::<f32>());
        let mut candidate = Obstacle::new(rules.bounds.lerp(t), rules.radius);

        if let Some(sprite_rules) = &rules.sprites {
            let sprite = Sprite::random(candidate.center(), rng);
            if !sprite_rules.admits(&sprite) {
                continue;
            }
            candidate = candidate.with_sprite(sprite);
        }

        let overlaps = obstacles
            .iter()
            .any(|placed| collides(&candidate.circle, &placed.circle, rules.min_separation));
        if !overlaps {
            obstacles.push(candidate);
        }
    }

    log::debug!(
        "Placement finished: {}/{} after {} attempts",
        obstacles.len(),
        rules.count,
        attempts
    );

    Placement {
        obstacles,
        attempts,
    }
}

/// Place up to `n` bare circles of `radius` inside `bounds`
pub fn place<R: Rng + ?Sized>(
    n: usize,
    bounds: Rect,
    radius: f32,
    max_attempts: u32,
    min_separation: f32,
    rng: &mut R,
) -> Vec<Circle> {
    let rules = PlacementRules {
        count: n,
        bounds,
        radius,
        max_attempts,
        min_separation,
        sprites: None,
    };
    place_obstacles(&rules, rng)
        .obstacles
        .into_iter()
        .map(|obstacle| obstacle.circle)
        .collect()
}
