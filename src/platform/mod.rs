//! Platform abstraction layer
//!
//! Handles browser/native differences for driving frames.

pub mod frame_loop;

pub use frame_loop::FrameLoop;
#[cfg(target_arch = "wasm32")]
pub use frame_loop::run_animation_frames;
pub use tokio_util::sync::CancellationToken;
