//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Segments used for full circles
pub const CIRCLE_SEGMENTS: u32 = 48;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a circle outline `width` pixels wide, centered on the radius
pub fn outline(center: Vec2, radius: f32, width: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let half = width * 0.5;
    let inner_radius = (radius - half).max(0.0);
    let outer_radius = radius + half;
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;
        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());

        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Generate vertices for a line segment as a quad. Degenerate segments yield nothing.
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width * 0.5);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_circle_vertices_on_radius() {
        let center = Vec2::new(100.0, 50.0);
        let vertices = circle(center, 10.0, WHITE, 16);
        assert_eq!(vertices.len(), 16 * 3);
        for tri in vertices.chunks(3) {
            assert_eq!(tri[0].position, [100.0, 50.0]);
            let edge = Vec2::from(tri[1].position);
            assert!((edge.distance(center) - 10.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_outline_straddles_radius() {
        let vertices = outline(Vec2::ZERO, 30.0, 3.0, WHITE, 8);
        assert_eq!(vertices.len(), 8 * 6);
        let inner = Vec2::from(vertices[0].position).length();
        let outer = Vec2::from(vertices[1].position).length();
        assert!((inner - 28.5).abs() < 1e-3);
        assert!((outer - 31.5).abs() < 1e-3);
    }

    #[test]
    fn test_line_width() {
        let vertices = line(Vec2::ZERO, Vec2::new(10.0, 0.0), 3.0, WHITE);
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0].position, [0.0, 1.5]);
        assert_eq!(vertices[1].position, [0.0, -1.5]);
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        assert!(line(Vec2::ONE, Vec2::ONE, 3.0, WHITE).is_empty());
    }
}
