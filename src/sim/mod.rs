//! Simulation module
//!
//! All gameplay logic lives here, free of rendering and platform code:
//! - Seeded RNG only, so a seed always yields the same obstacle field
//! - One `update` per displayed frame

pub mod geometry;
pub mod obstacle;
pub mod placement;
pub mod player;
pub mod pointer;
pub mod state;

pub use geometry::{Circle, Rect, collides};
pub use obstacle::{Obstacle, Sprite};
pub use placement::{Placement, PlacementRules, SpriteRules, place, place_obstacles};
pub use player::Player;
pub use pointer::PointerState;
pub use state::{GameState, Renderable, SceneVariant, WorldConfig};
