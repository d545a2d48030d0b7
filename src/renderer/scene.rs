//! Scene assembly: world state to a triangle list in surface pixels

use super::shapes::{self, CIRCLE_SEGMENTS};
use super::vertex::{Vertex, colors};
use crate::consts::LINE_WIDTH;
use crate::settings::Settings;
use crate::sim::{Circle, GameState, Obstacle, Player, Renderable};

/// Build every vertex for one frame, back to front
pub fn build(state: &GameState, settings: &Settings) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for renderable in state.draw_order() {
        match renderable {
            Renderable::Obstacle(obstacle) => push_obstacle(&mut vertices, obstacle),
            Renderable::Player(player) => {
                push_player(&mut vertices, player, state, settings.show_trajectory)
            }
        }
    }
    vertices
}

/// Translucent disc with a solid outline
fn push_circle(vertices: &mut Vec<Vertex>, circle: &Circle) {
    vertices.extend(shapes::circle(
        circle.center,
        circle.radius,
        colors::FILL,
        CIRCLE_SEGMENTS,
    ));
    vertices.extend(shapes::outline(
        circle.center,
        circle.radius,
        LINE_WIDTH,
        colors::STROKE,
        CIRCLE_SEGMENTS,
    ));
}

fn push_obstacle(vertices: &mut Vec<Vertex>, obstacle: &Obstacle) {
    // Sprite first so the hitbox shows through on top of it
    if let Some(sprite) = &obstacle.sprite {
        let bounds = sprite.bounds();
        vertices.extend(shapes::rect(
            bounds.min,
            bounds.max,
            colors::sprite(sprite.frame_x, sprite.frame_y),
        ));
    }
    push_circle(vertices, &obstacle.circle);
}

fn push_player(vertices: &mut Vec<Vertex>, player: &Player, state: &GameState, trajectory: bool) {
    push_circle(vertices, &player.circle);
    if trajectory {
        vertices.extend(shapes::line(
            player.center(),
            state.pointer.position,
            LINE_WIDTH,
            colors::TRAJECTORY,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{SceneVariant, WorldConfig};
    use glam::Vec2;

    /// Vertices emitted for one circle (fill + outline)
    const CIRCLE_VERTS: usize = (CIRCLE_SEGMENTS * 3 + CIRCLE_SEGMENTS * 6) as usize;

    fn world(variant: SceneVariant) -> GameState {
        let mut state = GameState::new(WorldConfig::default(), variant, 0);
        let sprite = crate::sim::Sprite {
            frame_x: 1,
            frame_y: 2,
            size: Vec2::splat(250.0),
            origin: Vec2::new(300.0, 100.0),
        };
        state.obstacles = vec![
            Obstacle::new(Vec2::new(200.0, 600.0), 40.0),
            Obstacle::new(Vec2::new(600.0, 300.0), 40.0).with_sprite(sprite),
        ];
        state
    }

    #[test]
    fn test_vertex_count_with_trajectory() {
        let state = world(SceneVariant::Sprites);
        let settings = Settings::default();
        let vertices = build(&state, &settings);
        // Two obstacles, one sprite quad, player, trajectory quad
        assert_eq!(vertices.len(), CIRCLE_VERTS * 3 + 6 + 6);
    }

    #[test]
    fn test_trajectory_can_be_hidden() {
        let state = world(SceneVariant::Plain);
        let settings = Settings {
            show_trajectory: false,
            ..Default::default()
        };
        assert_eq!(build(&state, &settings).len(), CIRCLE_VERTS * 3 + 6);
    }

    #[test]
    fn test_trajectory_absent_when_on_pointer() {
        let mut state = world(SceneVariant::Plain);
        state.pointer.position = state.player.center();
        assert_eq!(build(&state, &Settings::default()).len(), CIRCLE_VERTS * 3 + 6);
    }

    #[test]
    fn test_depth_sorted_scene_draws_top_first() {
        let state = world(SceneVariant::Sprites);
        let vertices = build(&state, &Settings::default());
        // Sprite obstacle (y = 300) is highest on screen, so its quad leads
        assert_eq!(vertices[0].position, [300.0, 100.0]);
        // Obstacle at y = 600 is below the player (y = 432), so it comes last
        let last_fill_center = vertices[vertices.len() - CIRCLE_VERTS].position;
        assert_eq!(last_fill_center, [200.0, 600.0]);
    }

    #[test]
    fn test_plain_scene_draws_player_last() {
        let state = world(SceneVariant::Plain);
        let settings = Settings {
            show_trajectory: false,
            ..Default::default()
        };
        let vertices = build(&state, &settings);
        assert_eq!(vertices[0].position, [200.0, 600.0]);
        let player_fill = vertices[vertices.len() - CIRCLE_VERTS].position;
        assert!((glam::Vec2::from(player_fill) - state.player.center()).length() < 1e-3);
    }
}
