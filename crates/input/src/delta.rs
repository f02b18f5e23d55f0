use glam::{Vec2, Vec3};

/// Camera-relative motion derived from one frame of input.
///
/// `movement` is (forward, right, up), `rotation` is (roll, pitch, yaw) in
/// degrees, and `pan` is (right, up) applied before the movement.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputDelta {
    pub movement: Vec3,
    pub rotation: Vec3,
    pub pan: Vec2,
}

impl InputDelta {
    pub fn is_zero(&self) -> bool {
        self.movement == Vec3::ZERO && self.rotation == Vec3::ZERO && self.pan == Vec2::ZERO
    }
}
