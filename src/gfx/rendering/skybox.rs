//! Background skybox rendered from a cubemap
//!
//! The skybox is a unit cube drawn around the camera. Its view matrix
//! keeps only the camera rotation so the background never translates,
//! and its shader pins the depth to the far plane so it stays behind
//! all scene geometry.

use bytemuck::{Pod, Zeroable};
use cgmath::Matrix4;
use wgpu::util::DeviceExt;

use crate::gfx::camera::camera_utils::convert_matrix4_to_array;
use crate::gfx::geometry::generate_cube;
use crate::gfx::resources::Cubemap;
use crate::gfx::scene::Vertex3D;
use crate::wgpu_utils::{
    binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
    binding_types,
    uniform_buffer::UniformBuffer,
};

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct SkyboxUniformContent {
    /// Projection * rotation-only view, translation removed.
    pub proj_rot_view: [[f32; 4]; 4],
}

/// Cubemap-backed skybox with its own cube geometry and bindings.
pub struct Skybox {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: UniformBuffer<SkyboxUniformContent>,
    bind_group: wgpu::BindGroup,
}

impl Skybox {
    /// Builds the bind group layout shared by the skybox pipeline.
    pub fn bind_group_layout(device: &wgpu::Device) -> BindGroupLayoutWithDesc {
        BindGroupLayoutBuilder::new()
            .next_binding_vertex(binding_types::uniform())
            .next_binding_fragment(binding_types::texture_cube())
            .next_binding_fragment(binding_types::sampler(wgpu::SamplerBindingType::Filtering))
            .create(device, "Skybox Bind Group Layout")
    }

    pub fn new(
        device: &wgpu::Device,
        layout: &BindGroupLayoutWithDesc,
        cubemap: &Cubemap,
    ) -> Self {
        let cube = generate_cube();
        let vertices: Vec<Vertex3D> = cube
            .vertices
            .iter()
            .zip(&cube.normals)
            .map(|(position, normal)| Vertex3D {
                position: *position,
                normal: *normal,
            })
            .collect();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Skybox Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Skybox Index Buffer"),
            contents: bytemuck::cast_slice(&cube.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let uniform_buffer = UniformBuffer::new(device);

        let bind_group = BindGroupBuilder::new(layout)
            .resource(uniform_buffer.binding_resource())
            .resource(wgpu::BindingResource::TextureView(&cubemap.view))
            .resource(wgpu::BindingResource::Sampler(&cubemap.sampler))
            .create(device, "Skybox Bind Group");

        Self {
            vertex_buffer,
            index_buffer,
            index_count: cube.indices.len() as u32,
            uniform_buffer,
            bind_group,
        }
    }

    /// Uploads the rotation-only view-projection for this frame.
    pub fn update(&mut self, queue: &wgpu::Queue, proj_rot_view: Matrix4<f32>) {
        self.uniform_buffer.update_content(
            queue,
            SkyboxUniformContent {
                proj_rot_view: convert_matrix4_to_array(proj_rot_view),
            },
        );
    }

    /// Records the skybox draw into an open render pass.
    ///
    /// The pipeline must be set by the caller; only the skybox's own
    /// bind group (group 0) and buffers are bound here.
    pub fn draw<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
