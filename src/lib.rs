//! Circle Chase - a pointer-chasing circle among static obstacles
//!
//! Core modules:
//! - `sim`: Simulation (player movement, obstacle placement, draw order)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Frame loop driver with cancellation
//! - `settings`: User preferences persisted in LocalStorage

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{GameState, SceneVariant, WorldConfig};

/// World configuration constants
pub mod consts {
    /// Surface dimensions (pixels)
    pub const SURFACE_WIDTH: f32 = 1280.0;
    pub const SURFACE_HEIGHT: f32 = 720.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 30.0;
    /// Maximum distance the player travels per frame
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Player spawn position as a fraction of the surface size
    pub const PLAYER_SPAWN_X: f32 = 0.5;
    pub const PLAYER_SPAWN_Y: f32 = 0.6;

    /// Obstacle defaults
    pub const OBSTACLE_COUNT: usize = 7;
    pub const OBSTACLE_RADIUS: f32 = 40.0;

    /// Rejection sampling budget
    pub const PLACEMENT_MAX_ATTEMPTS: u32 = 500;
    /// Extra gap required between obstacle circles
    pub const PLACEMENT_BUFFER: f32 = 100.0;

    /// Band at the top of the surface reserved for UI
    pub const TOP_MARGIN: f32 = 100.0;
    /// Minimum distance from the left edge to a sprite box
    pub const SIDE_MARGIN: f32 = 40.0;

    /// Sprite sheet layout: 4 columns x 3 rows of 250x250 cells
    pub const SPRITE_SIZE: f32 = 250.0;
    pub const SPRITE_COLUMNS: u32 = 4;
    pub const SPRITE_ROWS: u32 = 3;
    /// Sprite box is lifted above the collision circle by this much
    pub const SPRITE_LIFT: f32 = 80.0;

    /// Outline and trajectory line width (pixels)
    pub const LINE_WIDTH: f32 = 3.0;
    /// Fill opacity for circles
    pub const FILL_ALPHA: f32 = 0.5;
}
