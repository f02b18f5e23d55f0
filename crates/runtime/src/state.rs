use crate::intent::Intent;
use engine_common::Viewport;
use engine_input::InputDelta;
use engine_render::{Camera, FrameData, SceneParams};

/// Everything the editor can change: the camera and the scene parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    pub camera: Camera,
    pub scene: SceneParams,
}

impl EditorState {
    pub fn new(camera: Camera, scene: SceneParams) -> Self {
        Self { camera, scene }
    }

    /// Apply one parameter change. `Exit` is handled by the loop and is a
    /// no-op here.
    pub fn apply(&mut self, intent: &Intent) {
        let scene = &mut self.scene;
        match *intent {
            Intent::SetCameraPosition(p) => self.camera.set_position(p),
            Intent::SetCameraRotation(r) => self.camera.set_rotation(r),
            Intent::SetFieldOfView(fov) => self.camera.set_field_of_view(fov),
            Intent::SetNearClipPlane(near) => self.camera.set_near_clip_plane(near),
            Intent::SetFarClipPlane(far) => self.camera.set_far_clip_plane(far),
            Intent::SetProjectionMode(mode) => self.camera.set_projection_mode(mode),
            Intent::SetLightPosition(p) => scene.light.position = p,
            Intent::SetLightColor(c) => scene.light.color = c,
            Intent::SetAmbientFactor(v) => scene.material.ambient = v,
            Intent::SetDiffuseFactor(v) => scene.material.diffuse = v,
            Intent::SetSpecularFactor(v) => scene.material.specular = v,
            Intent::SetShininess(v) => scene.material.shininess = v,
            Intent::SetBackground(c) => scene.background = c,
            Intent::SetObjectScale(s) => scene.object.scale = s,
            Intent::SetObjectRotation(deg) => scene.object.rotation = deg,
            Intent::SetObjectTranslation(t) => scene.object.translation = t,
            Intent::Exit => {}
        }
    }

    /// Pan first, then move and rotate.
    pub fn apply_input(&mut self, delta: &InputDelta) {
        if delta.pan.x != 0.0 {
            self.camera.move_right(delta.pan.x);
        }
        if delta.pan.y != 0.0 {
            self.camera.move_up(delta.pan.y);
        }
        self.camera
            .add_movement_and_rotation(delta.movement, delta.rotation);
    }

    pub fn frame(&self, viewport: Viewport) -> FrameData {
        FrameData::new(&self.camera, &self.scene, viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_common::Rgba;
    use engine_render::ProjectionMode;
    use glam::{Vec2, Vec3};

    #[test]
    fn apply_camera_intents() {
        let mut s = EditorState::default();
        s.apply(&Intent::SetCameraPosition(Vec3::new(1.0, 2.0, 3.0)));
        s.apply(&Intent::SetFieldOfView(90.0));
        s.apply(&Intent::SetProjectionMode(ProjectionMode::Orthographic));
        assert_eq!(s.camera.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(s.camera.field_of_view(), 90.0);
        assert_eq!(s.camera.projection_mode(), ProjectionMode::Orthographic);
    }

    #[test]
    fn apply_scene_intents() {
        let mut s = EditorState::default();
        s.apply(&Intent::SetShininess(64.0));
        s.apply(&Intent::SetBackground(Rgba::new(1.0, 0.0, 0.0, 1.0)));
        s.apply(&Intent::SetObjectRotation(45.0));
        assert_eq!(s.scene.material.shininess, 64.0);
        assert_eq!(s.scene.background, Rgba::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(s.scene.object.rotation, 45.0);
    }

    #[test]
    fn exit_does_not_touch_state() {
        let mut s = EditorState::default();
        let before = s.clone();
        s.apply(&Intent::Exit);
        assert_eq!(s, before);
    }

    #[test]
    fn pan_moves_along_camera_axes() {
        let mut s = EditorState::default();
        let start = s.camera.position();
        s.apply_input(&InputDelta {
            pan: Vec2::new(1.0, 0.5),
            ..InputDelta::default()
        });
        // Zero rotation: right is -Y, up is +Z.
        let moved = s.camera.position() - start;
        assert!(moved.abs_diff_eq(Vec3::new(0.0, -1.0, 0.5), 1e-6));
    }
}
