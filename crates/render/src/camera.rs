use glam::{EulerRot, Mat3, Mat4, Vec3};

/// World forward axis at zero rotation.
pub const WORLD_FORWARD: Vec3 = Vec3::X;
/// World right axis at zero rotation.
pub const WORLD_RIGHT: Vec3 = Vec3::NEG_Y;
/// World up axis at zero rotation.
pub const WORLD_UP: Vec3 = Vec3::Z;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

/// Editor camera with Euler rotation and switchable projection.
///
/// Rotation is stored in degrees as (roll, pitch, yaw) about (X, Y, Z).
/// Matrices are recomputed from the fields on every call; nothing is cached.
/// The camera never clamps its inputs. Keeping `0 < near < far` is the
/// caller's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    rotation: Vec3,
    projection_mode: ProjectionMode,
    field_of_view: f32,
    near_clip_plane: f32,
    far_clip_plane: f32,
    aspect: f32,
    ortho_half_height: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(-5.0, 0.0, 0.0),
            rotation: Vec3::ZERO,
            projection_mode: ProjectionMode::Perspective,
            field_of_view: 60.0,
            near_clip_plane: 0.1,
            far_clip_plane: 100.0,
            aspect: 1024.0 / 768.0,
            ortho_half_height: 2.0,
        }
    }
}

impl Camera {
    pub fn new(position: Vec3, rotation: Vec3, projection_mode: ProjectionMode) -> Self {
        Self {
            position,
            rotation,
            projection_mode,
            ..Self::default()
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection_mode
    }

    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    pub fn near_clip_plane(&self) -> f32 {
        self.near_clip_plane
    }

    pub fn far_clip_plane(&self) -> f32 {
        self.far_clip_plane
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn ortho_half_height(&self) -> f32 {
        self.ortho_half_height
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    pub fn set_position_rotation(&mut self, position: Vec3, rotation: Vec3) {
        self.position = position;
        self.rotation = rotation;
    }

    pub fn set_projection_mode(&mut self, mode: ProjectionMode) {
        if self.projection_mode != mode {
            tracing::debug!(?mode, "camera projection changed");
        }
        self.projection_mode = mode;
    }

    /// Vertical field of view in degrees.
    pub fn set_field_of_view(&mut self, degrees: f32) {
        self.field_of_view = degrees;
    }

    pub fn set_near_clip_plane(&mut self, near: f32) {
        self.near_clip_plane = near;
    }

    pub fn set_far_clip_plane(&mut self, far: f32) {
        self.far_clip_plane = far;
    }

    pub fn set_ortho_half_height(&mut self, half_height: f32) {
        self.ortho_half_height = half_height;
    }

    /// Update the aspect ratio from framebuffer size. A zero-sized side
    /// (minimized window) keeps the previous aspect.
    pub fn set_viewport_size(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    fn basis_rotation(&self) -> Mat3 {
        let roll = self.rotation.x.to_radians();
        let pitch = self.rotation.y.to_radians();
        let yaw = self.rotation.z.to_radians();
        // Rz(yaw) * Ry(pitch) * Rx(roll)
        Mat3::from_euler(EulerRot::ZYX, yaw, pitch, roll)
    }

    pub fn forward(&self) -> Vec3 {
        (self.basis_rotation() * WORLD_FORWARD).normalize()
    }

    pub fn right(&self) -> Vec3 {
        (self.basis_rotation() * WORLD_RIGHT).normalize()
    }

    pub fn up(&self) -> Vec3 {
        let r = self.basis_rotation();
        (r * WORLD_RIGHT).cross(r * WORLD_FORWARD).normalize()
    }

    /// Translate along the camera-local right axis.
    pub fn move_right(&mut self, delta: f32) {
        self.position += self.right() * delta;
    }

    /// Translate along the camera-local up axis.
    pub fn move_up(&mut self, delta: f32) {
        self.position += self.up() * delta;
    }

    /// `movement` is (forward, right, up) in camera space; `rotation` is added
    /// to the Euler angles after the move, using the pre-rotation basis.
    pub fn add_movement_and_rotation(&mut self, movement: Vec3, rotation: Vec3) {
        let forward = self.forward();
        let right = self.right();
        let up = self.up();
        self.position += forward * movement.x + right * movement.y + up * movement.z;
        self.rotation += rotation;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), self.up())
    }

    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection_mode {
            ProjectionMode::Perspective => Mat4::perspective_rh(
                self.field_of_view.to_radians(),
                self.aspect,
                self.near_clip_plane,
                self.far_clip_plane,
            ),
            ProjectionMode::Orthographic => {
                let h = self.ortho_half_height;
                let w = h * self.aspect;
                Mat4::orthographic_rh(-w, w, -h, h, self.near_clip_plane, self.far_clip_plane)
            }
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
