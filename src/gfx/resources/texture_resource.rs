//! Texture resource management for wgpu
//!
//! Creates and bundles GPU textures with their views. The main client is
//! the render engine's combined depth-stencil attachment.

/// GPU texture resource containing texture and view
#[derive(Clone)]
pub struct TextureResource {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl TextureResource {
    /// Combined depth-stencil format used by every scene pipeline.
    ///
    /// The 8-bit stencil plane carries the outline silhouette mask.
    pub const DEPTH_STENCIL_FORMAT: wgpu::TextureFormat =
        wgpu::TextureFormat::Depth24PlusStencil8;

    /// Creates a depth-stencil texture matching the surface configuration.
    ///
    /// Recreated on every resize so the attachment always matches the
    /// surface dimensions. Used only as a render attachment, never sampled,
    /// so no sampler is attached.
    pub fn create_depth_stencil_texture(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: config.width.max(1),
            height: config.height.max(1),
            depth_or_array_layers: 1,
        };

        let desc = wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::DEPTH_STENCIL_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        };

        let texture = device.create_texture(&desc);
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self { texture, view }
    }
}
