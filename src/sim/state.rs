//! World state: surface, pointer, player, and obstacles
//!
//! The whole world is one explicitly owned value; input handlers and the
//! frame loop both go through it rather than shared globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::obstacle::Obstacle;
use super::placement::{PlacementRules, SpriteRules, place_obstacles};
use super::player::Player;
use super::pointer::PointerState;
use crate::consts::*;

/// Which flavour of the scene to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneVariant {
    /// Bare circles, drawn in placement order with the player last
    Plain,
    /// Sprite-sheet obstacles, depth-sorted by vertical position
    #[default]
    Sprites,
}

impl SceneVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneVariant::Plain => "plain",
            SceneVariant::Sprites => "sprites",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "plain" | "circles" => Some(SceneVariant::Plain),
            "sprites" | "sprite" => Some(SceneVariant::Sprites),
            _ => None,
        }
    }

    pub fn has_sprites(&self) -> bool {
        matches!(self, SceneVariant::Sprites)
    }

    pub fn depth_sorted(&self) -> bool {
        matches!(self, SceneVariant::Sprites)
    }
}

/// Tunable world parameters, defaulting to the constants in `consts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    pub player_radius: f32,
    pub player_speed: f32,
    pub obstacle_count: usize,
    pub obstacle_radius: f32,
    pub max_attempts: u32,
    pub min_separation: f32,
    pub top_margin: f32,
    pub side_margin: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            obstacle_count: OBSTACLE_COUNT,
            obstacle_radius: OBSTACLE_RADIUS,
            max_attempts: PLACEMENT_MAX_ATTEMPTS,
            min_separation: PLACEMENT_BUFFER,
            top_margin: TOP_MARGIN,
            side_margin: SIDE_MARGIN,
        }
    }
}

impl WorldConfig {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Placement parameters for the given variant
    pub fn placement_rules(&self, variant: SceneVariant) -> PlacementRules {
        PlacementRules {
            count: self.obstacle_count,
            bounds: Rect::from_size(self.width, self.height),
            radius: self.obstacle_radius,
            max_attempts: self.max_attempts,
            min_separation: self.min_separation,
            sprites: variant.has_sprites().then(|| SpriteRules {
                surface: self.size(),
                side_margin: self.side_margin,
                top_margin: self.top_margin,
            }),
        }
    }
}

/// Something drawn each frame
#[derive(Debug, Clone, Copy)]
pub enum Renderable<'a> {
    Player(&'a Player),
    Obstacle(&'a Obstacle),
}

impl Renderable<'_> {
    /// Depth proxy: lower on screen means closer to the viewer
    pub fn depth(&self) -> f32 {
        match self {
            Renderable::Player(player) => player.center().y,
            Renderable::Obstacle(obstacle) => obstacle.center().y,
        }
    }
}

/// Complete world state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed used for obstacle placement
    pub seed: u64,
    pub config: WorldConfig,
    pub variant: SceneVariant,
    pub pointer: PointerState,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    /// Frames simulated so far
    pub frame: u64,
}

impl GameState {
    /// Create a world with no obstacles yet; call `init` to place them
    pub fn new(config: WorldConfig, variant: SceneVariant, seed: u64) -> Self {
        let size = config.size();
        let player = Player::new(
            size * Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            config.player_radius,
            config.player_speed,
        );
        Self {
            seed,
            pointer: PointerState::new(size * 0.5),
            player,
            obstacles: Vec::new(),
            frame: 0,
            config,
            variant,
        }
    }

    /// Place obstacles from the seed. Returns how many were placed.
    pub fn init(&mut self) -> usize {
        let rules = self.config.placement_rules(self.variant);
        let mut rng = Pcg32::seed_from_u64(self.seed);
        let placement = place_obstacles(&rules, &mut rng);

        log::info!(
            "Placed {}/{} obstacles in {} attempts (seed {})",
            placement.obstacles.len(),
            rules.count,
            placement.attempts,
            self.seed
        );
        if placement.obstacles.len() < rules.count {
            log::warn!(
                "Attempt budget of {} exhausted, continuing with {} obstacles",
                rules.max_attempts,
                placement.obstacles.len()
            );
        }

        self.obstacles = placement.obstacles;
        if log::log_enabled!(log::Level::Debug) {
            if let Ok(json) = serde_json::to_string(self) {
                log::debug!("World: {}", json);
            }
        }
        self.obstacles.len()
    }

    /// Advance one frame: the player chases the pointer
    pub fn update(&mut self) {
        self.player.update(self.pointer.position);
        self.frame += 1;
    }

    /// Player and obstacles in the order they should be drawn
    pub fn draw_order(&self) -> Vec<Renderable<'_>> {
        let mut renderables: Vec<Renderable<'_>> = self
            .obstacles
            .iter()
            .map(Renderable::Obstacle)
            .chain(std::iter::once(Renderable::Player(&self.player)))
            .collect();
        if self.variant.depth_sorted() {
            renderables.sort_by(|a, b| a.depth().total_cmp(&b.depth()));
        }
        renderables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depths(state: &GameState) -> Vec<f32> {
        state.draw_order().iter().map(Renderable::depth).collect()
    }

    #[test]
    fn test_new_world_layout() {
        let state = GameState::new(WorldConfig::default(), SceneVariant::Sprites, 1);
        assert!((state.player.center() - Vec2::new(640.0, 432.0)).length() < 1e-3);
        assert_eq!(state.pointer.position, Vec2::new(640.0, 360.0));
        assert!(!state.pointer.pressed);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_init_respects_count_and_variant() {
        let mut sprites = GameState::new(WorldConfig::default(), SceneVariant::Sprites, 5);
        let placed = sprites.init();
        assert!(placed <= OBSTACLE_COUNT);
        assert!(sprites.obstacles.iter().all(|o| o.sprite.is_some()));

        let mut plain = GameState::new(WorldConfig::default(), SceneVariant::Plain, 5);
        plain.init();
        assert!(plain.obstacles.iter().all(|o| o.sprite.is_none()));
    }

    #[test]
    fn test_same_seed_same_world() {
        let mut a = GameState::new(WorldConfig::default(), SceneVariant::Sprites, 2024);
        let mut b = GameState::new(WorldConfig::default(), SceneVariant::Sprites, 2024);
        a.init();
        b.init();
        assert_eq!(a.obstacles, b.obstacles);
    }

    #[test]
    fn test_large_obstacles_never_overfill() {
        let config = WorldConfig {
            obstacle_count: 6,
            obstacle_radius: 60.0,
            max_attempts: 500,
            ..Default::default()
        };
        for seed in 0..50 {
            let mut state = GameState::new(config.clone(), SceneVariant::Plain, seed);
            assert!(state.init() <= 6);
        }
    }

    #[test]
    fn test_depth_sorted_draw_order() {
        let mut state = GameState::new(WorldConfig::default(), SceneVariant::Sprites, 0);
        state.obstacles = vec![
            Obstacle::new(Vec2::new(100.0, 50.0), 40.0),
            Obstacle::new(Vec2::new(200.0, 10.0), 40.0),
            Obstacle::new(Vec2::new(300.0, 30.0), 40.0),
        ];
        // Move the player below everything
        state.player.circle.center = Vec2::new(0.0, 700.0);
        assert_eq!(depths(&state), vec![10.0, 30.0, 50.0, 700.0]);

        // And above everything
        state.player.circle.center = Vec2::new(0.0, 0.0);
        let order = state.draw_order();
        assert!(matches!(order[0], Renderable::Player(_)));
        assert_eq!(depths(&state), vec![0.0, 10.0, 30.0, 50.0]);
    }

    #[test]
    fn test_plain_draw_order_keeps_placement_order() {
        let mut state = GameState::new(WorldConfig::default(), SceneVariant::Plain, 0);
        state.obstacles = vec![
            Obstacle::new(Vec2::new(100.0, 50.0), 40.0),
            Obstacle::new(Vec2::new(200.0, 10.0), 40.0),
            Obstacle::new(Vec2::new(300.0, 30.0), 40.0),
        ];
        assert_eq!(depths(&state)[..3], [50.0, 10.0, 30.0]);
        assert!(matches!(state.draw_order()[3], Renderable::Player(_)));
    }

    #[test]
    fn test_update_chases_pointer() {
        let mut state = GameState::new(WorldConfig::default(), SceneVariant::Plain, 0);
        state.pointer.press(Vec2::new(640.0, 0.0));
        state.update();
        assert_eq!(state.frame, 1);
        assert!((state.player.center() - Vec2::new(640.0, 427.0)).length() < 1e-3);
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!(SceneVariant::from_str("Plain"), Some(SceneVariant::Plain));
        assert_eq!(SceneVariant::from_str("sprites"), Some(SceneVariant::Sprites));
        assert_eq!(SceneVariant::from_str("nope"), None);
        assert_eq!(SceneVariant::Plain.as_str(), "plain");
    }
}
