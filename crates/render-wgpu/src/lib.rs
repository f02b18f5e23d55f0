//! wgpu render backend for the engine editor.
//!
//! Draws one textured quad lit by a point light, plus a small cube at the
//! light position, over the editor's background color.
//!
//! # Invariants
//! - Renderer never mutates editor state; it reads a `FrameData`.
//! - Shader and pipeline validation happens once, in [`WgpuRenderer::new`].

mod error;
mod gpu;
mod mesh;
mod shaders;
mod uniforms;

pub use error::RenderError;
pub use gpu::{WgpuRenderer, clear_color};
pub use mesh::{Vertex, checkerboard, cube_mesh, quad_mesh};
pub use uniforms::SceneUniforms;
