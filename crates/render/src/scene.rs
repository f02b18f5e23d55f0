use engine_common::Rgba;
use glam::{Mat4, Quat, Vec3};

/// Point light used by the Phong shading pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    /// RGB in 0..1.
    pub color: Vec3,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::new(-2.0, 1.0, 1.0),
            color: Vec3::ONE,
        }
    }
}

/// Phong material factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: 0.1,
            diffuse: 1.0,
            specular: 0.5,
            shininess: 32.0,
        }
    }
}

/// Transform of the demo quad. Independent of the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectTransform {
    pub scale: Vec3,
    /// Degrees about the world Z axis.
    pub rotation: f32,
    pub translation: Vec3,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            rotation: 0.0,
            translation: Vec3::ZERO,
        }
    }
}

impl ObjectTransform {
    /// Translation * rotation * scale.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_rotation_z(self.rotation.to_radians()),
            self.translation,
        )
    }
}

/// Everything the editor can tweak besides the camera.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneParams {
    pub light: Light,
    pub material: Material,
    pub object: ObjectTransform,
    pub background: Rgba,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_object_is_identity() {
        assert_eq!(ObjectTransform::default().model_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn model_matrix_scales_then_rotates_then_translates() {
        let t = ObjectTransform {
            scale: Vec3::new(2.0, 1.0, 1.0),
            rotation: 90.0,
            translation: Vec3::new(0.0, 0.0, 5.0),
        };
        let p = t.model_matrix().transform_point3(Vec3::X);
        // (1,0,0) -> scale (2,0,0) -> rotate 90 about Z (0,2,0) -> translate.
        assert!(p.abs_diff_eq(Vec3::new(0.0, 2.0, 5.0), 1e-5));
    }

    #[test]
    fn material_defaults_in_range() {
        let m = Material::default();
        for f in [m.ambient, m.diffuse, m.specular] {
            assert!((0.0..=1.0).contains(&f));
        }
        assert!((1.0..=128.0).contains(&m.shininess));
    }
}
