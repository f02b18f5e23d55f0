/// WGSL shader for the textured, Phong-lit quad and the light marker.
pub const SCENE_SHADER: &str = r#"
struct SceneUniforms {
    model: mat4x4<f32>,
    normal: mat4x4<f32>,
    view_proj: mat4x4<f32>,
    camera_position: vec4<f32>,
    light_position: vec4<f32>,
    light_color: vec4<f32>,
    // ambient, diffuse, specular, shininess
    material: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: SceneUniforms;
@group(0) @binding(1)
var t_diffuse: texture_2d<f32>;
@group(0) @binding(2)
var s_diffuse: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    let world_pos = uniforms.model * vec4<f32>(vertex.position, 1.0);

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world_pos;
    out.world_position = world_pos.xyz;
    out.world_normal = normalize((uniforms.normal * vec4<f32>(vertex.normal, 0.0)).xyz);
    out.uv = vertex.uv;
    return out;
}

@fragment
fn fs_main(in: VertexOutput, @builtin(front_facing) front: bool) -> @location(0) vec4<f32> {
    let base = textureSample(t_diffuse, s_diffuse, in.uv);
    let n = select(-normalize(in.world_normal), normalize(in.world_normal), front);
    let light_dir = normalize(uniforms.light_position.xyz - in.world_position);
    let view_dir = normalize(uniforms.camera_position.xyz - in.world_position);
    let reflect_dir = reflect(-light_dir, n);
    let light = uniforms.light_color.rgb;

    let ambient = uniforms.material.x * light;
    let diffuse = uniforms.material.y * max(dot(n, light_dir), 0.0) * light;
    let specular = uniforms.material.z
        * pow(max(dot(view_dir, reflect_dir), 0.0), uniforms.material.w)
        * light;
    return vec4<f32>((ambient + diffuse + specular) * base.rgb, base.a);
}

@fragment
fn fs_light(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(uniforms.light_color.rgb, 1.0);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_declares_entry_points() {
        for entry in ["fn vs_main", "fn fs_main", "fn fs_light"] {
            assert!(SCENE_SHADER.contains(entry), "missing {entry}");
        }
    }
}
