use bytemuck::{Pod, Zeroable};
use engine_render::FrameData;
use glam::Mat4;

/// Per-draw uniform block. Layout matches `SceneUniforms` in the WGSL.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 4],
    pub view_proj: [[f32; 4]; 4],
    pub camera_position: [f32; 4],
    pub light_position: [f32; 4],
    pub light_color: [f32; 4],
    /// ambient, diffuse, specular, shininess
    pub material: [f32; 4],
}

impl SceneUniforms {
    pub fn new(frame: &FrameData, model: Mat4) -> Self {
        let m = frame.material;
        Self {
            model: model.to_cols_array_2d(),
            normal: normal_matrix(model).to_cols_array_2d(),
            view_proj: frame.view_projection().to_cols_array_2d(),
            camera_position: frame.camera_position.extend(1.0).to_array(),
            light_position: frame.light.position.extend(1.0).to_array(),
            light_color: frame.light.color.extend(1.0).to_array(),
            material: [m.ambient, m.diffuse, m.specular, m.shininess],
        }
    }
}

/// Inverse transpose of the model matrix. Degenerate scales fall back to identity.
pub fn normal_matrix(model: Mat4) -> Mat4 {
    if model.determinant().abs() <= f32::EPSILON {
        return Mat4::IDENTITY;
    }
    model.inverse().transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_common::Viewport;
    use engine_render::{Camera, SceneParams};
    use glam::Vec3;

    #[test]
    fn uniform_block_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 3 * 64 + 4 * 16);
    }

    #[test]
    fn degenerate_scale_keeps_normals_finite() {
        let model = Mat4::from_scale(Vec3::new(0.0, 1.0, 1.0));
        assert_eq!(normal_matrix(model), Mat4::IDENTITY);
    }

    #[test]
    fn normal_matrix_undoes_non_uniform_scale() {
        let model = Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0));
        let n = normal_matrix(model).transform_vector3(Vec3::X);
        assert!(n.abs_diff_eq(Vec3::new(0.5, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn material_is_packed_in_order() {
        let scene = SceneParams::default();
        let frame = FrameData::new(&Camera::default(), &scene, Viewport::default());
        let u = SceneUniforms::new(&frame, frame.model);
        assert_eq!(
            u.material,
            [
                scene.material.ambient,
                scene.material.diffuse,
                scene.material.specular,
                scene.material.shininess
            ]
        );
        assert_eq!(u.light_position[3], 1.0);
    }
}
