use crate::camera::{Camera, ProjectionMode};
use crate::scene::{Light, Material, SceneParams};
use engine_common::{Rgba, Viewport};
use glam::{Mat4, Vec3};

/// Renderer-agnostic snapshot of one frame.
///
/// Built once per tick from the camera and scene parameters. Renderers only
/// read it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameData {
    pub viewport: Viewport,
    pub clear_color: Rgba,
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub projection_mode: ProjectionMode,
    pub camera_position: Vec3,
    pub light: Light,
    pub material: Material,
}

impl FrameData {
    pub fn new(camera: &Camera, scene: &SceneParams, viewport: Viewport) -> Self {
        Self {
            viewport,
            clear_color: scene.background,
            model: scene.object.model_matrix(),
            view: camera.view_matrix(),
            projection: camera.projection_matrix(),
            projection_mode: camera.projection_mode(),
            camera_position: camera.position(),
            light: scene.light,
            material: scene.material,
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Model matrix of the light marker cube.
    pub fn light_model(&self, size: f32) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(size),
            glam::Quat::IDENTITY,
            self.light.position,
        )
    }
}
