//! WebGPU rendering module
//!
//! The scene is tessellated on the CPU into flat-colored triangles in
//! surface pixels, then mapped to NDC and drawn in a single pass.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderInitError, RenderState};
pub use vertex::Vertex;
