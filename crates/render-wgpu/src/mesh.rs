use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Unit quad in the YZ plane facing the default camera (-X).
pub fn quad_mesh() -> (Vec<Vertex>, Vec<u16>) {
    let p = 0.5_f32;
    let n = [-1.0, 0.0, 0.0];
    #[rustfmt::skip]
    let vertices = vec![
        Vertex { position: [0.0,  p, -p], normal: n, uv: [0.0, 1.0] },
        Vertex { position: [0.0, -p, -p], normal: n, uv: [1.0, 1.0] },
        Vertex { position: [0.0, -p,  p], normal: n, uv: [1.0, 0.0] },
        Vertex { position: [0.0,  p,  p], normal: n, uv: [0.0, 0.0] },
    ];
    let indices: Vec<u16> = vec![0, 1, 2, 2, 3, 0];
    (vertices, indices)
}

/// Unit cube centred on the origin, used as the light marker.
pub fn cube_mesh() -> (Vec<Vertex>, Vec<u16>) {
    let p = 0.5_f32;
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        ([0.0, 0.0, 1.0], [[-p, -p, p], [p, -p, p], [p, p, p], [-p, p, p]]),
        ([0.0, 0.0, -1.0], [[p, -p, -p], [-p, -p, -p], [-p, p, -p], [p, p, -p]]),
        ([1.0, 0.0, 0.0], [[p, -p, p], [p, -p, -p], [p, p, -p], [p, p, p]]),
        ([-1.0, 0.0, 0.0], [[-p, -p, -p], [-p, -p, p], [-p, p, p], [-p, p, -p]]),
        ([0.0, 1.0, 0.0], [[-p, p, p], [p, p, p], [p, p, -p], [-p, p, -p]]),
        ([0.0, -1.0, 0.0], [[-p, -p, -p], [p, -p, -p], [p, -p, p], [-p, -p, p]]),
    ];
    let uvs = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, corners) in faces {
        let base = vertices.len() as u16;
        for (position, uv) in corners.into_iter().zip(uvs) {
            vertices.push(Vertex { position, normal, uv });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }
    (vertices, indices)
}

/// RGBA8 checkerboard, `size` x `size` texels split into `cells` squares per side.
pub fn checkerboard(size: u32, cells: u32) -> Vec<u8> {
    let cell = (size / cells.max(1)).max(1);
    let light = [230u8, 230, 230, 255];
    let dark = [40u8, 90, 160, 255];
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let texel = if ((x / cell) + (y / cell)) % 2 == 0 {
                light
            } else {
                dark
            };
            data.extend_from_slice(&texel);
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_lies_in_yz_plane() {
        let (verts, indices) = quad_mesh();
        assert_eq!(verts.len(), 4);
        assert_eq!(indices.len(), 6);
        assert!(verts.iter().all(|v| v.position[0] == 0.0));
        assert!(indices.iter().all(|&i| (i as usize) < verts.len()));
    }

    #[test]
    fn quad_winding_faces_negative_x() {
        let (verts, indices) = quad_mesh();
        let a = glam::Vec3::from(verts[indices[0] as usize].position);
        let b = glam::Vec3::from(verts[indices[1] as usize].position);
        let c = glam::Vec3::from(verts[indices[2] as usize].position);
        let n = (b - a).cross(c - a).normalize();
        assert!(n.abs_diff_eq(glam::Vec3::NEG_X, 1e-6));
    }

    #[test]
    fn cube_has_six_faces() {
        let (verts, indices) = cube_mesh();
        assert_eq!(verts.len(), 24);
        assert_eq!(indices.len(), 36);
        assert!(indices.iter().all(|&i| (i as usize) < verts.len()));
    }

    #[test]
    fn checkerboard_alternates() {
        let data = checkerboard(8, 2);
        assert_eq!(data.len(), 8 * 8 * 4);
        let texel = |x: usize, y: usize| &data[(y * 8 + x) * 4..(y * 8 + x) * 4 + 4];
        assert_eq!(texel(0, 0), texel(5, 5));
        assert_ne!(texel(0, 0), texel(4, 0));
        assert_ne!(texel(0, 0), texel(0, 4));
    }

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }
}
