//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for scene elements
pub mod colors {
    use crate::consts::FILL_ALPHA;

    pub const STROKE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const FILL: [f32; 4] = [1.0, 1.0, 1.0, FILL_ALPHA];
    pub const TRAJECTORY: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    /// Placeholder tints for sprite sheet rows (mushrooms, bushes, grass)
    pub const SPRITE_ROWS: [[f32; 3]; 3] = [[0.75, 0.35, 0.3], [0.25, 0.55, 0.3], [0.5, 0.7, 0.25]];

    /// Tint for a sprite cell; columns vary brightness within a row
    pub fn sprite(frame_x: u32, frame_y: u32) -> [f32; 4] {
        let [r, g, b] = SPRITE_ROWS[frame_y as usize % SPRITE_ROWS.len()];
        let shade = 0.7 + 0.1 * (frame_x % 4) as f32;
        [r * shade, g * shade, b * shade, 0.85]
    }
}
