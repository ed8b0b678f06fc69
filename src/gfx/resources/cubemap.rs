//! Cubemap textures for skybox rendering
//!
//! A cubemap is a six-layer texture addressed by 3D direction. Faces are
//! supplied either as image files or as solid colors for asset-free demos.

use std::path::Path;

use crate::error::AssetError;

/// wgpu cube texture layer order: +X, -X, +Y, -Y, +Z, -Z.
pub const FACE_ORDER: [&str; 6] = ["right", "left", "top", "bottom", "front", "back"];

/// Six-face cube texture with a cube-dimension view and sampler.
pub struct Cubemap {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl Cubemap {
    /// Loads six equally sized square face images.
    ///
    /// `paths` follow [`FACE_ORDER`]. Every face must match the first face's
    /// dimensions and be square.
    pub fn from_files(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        paths: &[impl AsRef<Path>; 6],
    ) -> Result<Self, AssetError> {
        let mut faces = Vec::with_capacity(6);
        let mut face_size = 0u32;

        for path in paths {
            let path = path.as_ref();
            let img = image::open(path)
                .map_err(|source| AssetError::CubemapFace {
                    path: path.to_path_buf(),
                    source,
                })?
                .to_rgba8();

            let (width, height) = img.dimensions();
            if face_size == 0 {
                face_size = width;
            }
            if width != face_size || height != face_size {
                return Err(AssetError::CubemapFaceSize {
                    path: path.to_path_buf(),
                    width,
                    height,
                    expected: face_size,
                });
            }

            faces.push(img.into_raw());
        }

        Ok(Self::from_face_data(device, queue, &faces, face_size))
    }

    /// Builds a 1x1-per-face cubemap from six solid colors.
    ///
    /// Used by the demos so the skybox variant runs without image assets.
    pub fn from_colors(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        colors: &[[u8; 4]; 6],
    ) -> Self {
        Self::from_face_data(device, queue, &color_faces(colors), 1)
    }

    fn from_face_data(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        faces: &[Vec<u8>],
        face_size: u32,
    ) -> Self {
        assert_eq!(faces.len(), 6, "a cubemap needs exactly six faces");

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Cubemap Texture"),
            size: wgpu::Extent3d {
                width: face_size,
                height: face_size,
                depth_or_array_layers: 6,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (layer, data) in faces.iter().enumerate() {
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d {
                        x: 0,
                        y: 0,
                        z: layer as u32,
                    },
                    aspect: wgpu::TextureAspect::All,
                },
                data,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * face_size),
                    rows_per_image: Some(face_size),
                },
                wgpu::Extent3d {
                    width: face_size,
                    height: face_size,
                    depth_or_array_layers: 1,
                },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("Cubemap View"),
            dimension: Some(wgpu::TextureViewDimension::Cube),
            ..Default::default()
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Cubemap Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }
}

/// Expands six RGBA colors into 1x1 face texel data, one face per layer.
fn color_faces(colors: &[[u8; 4]; 6]) -> Vec<Vec<u8>> {
    colors.iter().map(|c| c.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_faces_produces_six_single_texel_faces() {
        let colors = [
            [255, 0, 0, 255],
            [0, 255, 0, 255],
            [0, 0, 255, 255],
            [255, 255, 0, 255],
            [0, 255, 255, 255],
            [255, 0, 255, 255],
        ];
        let faces = color_faces(&colors);

        // One 1x1 RGBA texel per layer, layers in the order given.
        assert_eq!(faces.len(), 6);
        for (face, color) in faces.iter().zip(colors.iter()) {
            assert_eq!(face.len(), 4);
            assert_eq!(face.as_slice(), color);
        }
    }
}
