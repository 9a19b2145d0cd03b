use glam::Mat4;

use crate::camera::DepthCamera;
use crate::entities::Material;
use crate::lighting::Lighting;

/// Mesh vertex for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Per-mesh instance data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    /// Linear RGB plus opacity
    pub color: [f32; 4],
    /// Roughness, metalness, distort, distort speed
    pub material: [f32; 4],
}

impl InstanceRaw {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4
    ];

    pub fn new(model: Mat4, material: &Material) -> Self {
        let [r, g, b] = material.color;
        Self {
            model: model.to_cols_array_2d(),
            color: [r, g, b, material.opacity],
            material: [
                material.roughness,
                material.metalness,
                material.distort,
                material.distort_speed,
            ],
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Scene uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    /// xyz camera position, w elapsed time driving surface distortion
    pub camera_position: [f32; 4],
    pub fog_color: [f32; 4],
    /// near, far, unused, unused
    pub fog_range: [f32; 4],
    /// rgb premultiplied by intensity
    pub ambient: [f32; 4],
    /// xyz toward the light, w intensity
    pub sun_direction: [f32; 4],
    pub sun_color: [f32; 4],
    /// xyz position, w intensity
    pub point_position: [f32; 4],
    pub point_color: [f32; 4],
}

impl SceneUniform {
    pub fn new(camera: &DepthCamera, lighting: &Lighting, aspect: f32, time: f32) -> Self {
        let fog = camera.fog();
        let ambient = lighting.ambient.color.map(|c| c * lighting.ambient.intensity);
        let sun = lighting.sun.direction();
        let [sr, sg, sb] = lighting.sun.color;
        let [pr, pg, pb] = lighting.point.color;
        let point = lighting.point.position;

        Self {
            view_proj: camera.view_projection(aspect).to_cols_array_2d(),
            view: camera.view_matrix().to_cols_array_2d(),
            camera_position: camera.position.extend(time).to_array(),
            fog_color: [fog.color[0], fog.color[1], fog.color[2], 1.0],
            fog_range: [fog.near, fog.far, 0.0, 0.0],
            ambient: [ambient[0], ambient[1], ambient[2], 1.0],
            sun_direction: sun.extend(lighting.sun.intensity).to_array(),
            sun_color: [sr, sg, sb, 1.0],
            point_position: point.extend(lighting.point.intensity).to_array(),
            point_color: [pr, pg, pb, 1.0],
        }
    }
}
