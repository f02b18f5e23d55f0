use engine_common::Rgba;
use engine_render::ProjectionMode;
use glam::Vec3;

/// A parameter change requested by the UI.
///
/// The UI never writes editor state while drawing. It returns intents, and
/// the render loop applies them before the next camera update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    SetCameraPosition(Vec3),
    /// Degrees: (roll, pitch, yaw).
    SetCameraRotation(Vec3),
    SetFieldOfView(f32),
    SetNearClipPlane(f32),
    SetFarClipPlane(f32),
    SetProjectionMode(ProjectionMode),
    SetLightPosition(Vec3),
    SetLightColor(Vec3),
    SetAmbientFactor(f32),
    SetDiffuseFactor(f32),
    SetSpecularFactor(f32),
    SetShininess(f32),
    SetBackground(Rgba),
    SetObjectScale(Vec3),
    /// Degrees about Z.
    SetObjectRotation(f32),
    SetObjectTranslation(Vec3),
    /// Leave the render loop.
    Exit,
}
