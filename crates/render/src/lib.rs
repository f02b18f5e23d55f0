//! Rendering Adapter: camera math, scene parameters and the renderer interface.
//!
//! # Invariants
//! - Renderers never mutate editor state; they only read a [`FrameData`].
//! - View and projection matrices are pure functions of [`Camera`] fields.
//!
//! The GPU backend lives in `engine-render-wgpu`. [`DebugTextRenderer`]
//! implements the same trait for tests and headless runs.

mod camera;
mod frame;
mod renderer;
mod scene;

pub use camera::{Camera, ProjectionMode, WORLD_FORWARD, WORLD_RIGHT, WORLD_UP};
pub use frame::FrameData;
pub use renderer::{DebugTextRenderer, Renderer};
pub use scene::{Light, Material, ObjectTransform, SceneParams};

pub fn crate_info() -> &'static str {
    concat!("engine-render v", env!("CARGO_PKG_VERSION"))
}
