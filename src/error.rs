// src/error.rs
//! Error types for GPU initialization and asset loading.

use std::path::PathBuf;

/// Failures while bringing up the wgpu surface, adapter, or device.
///
/// These are startup-fatal: the application logs them and exits instead of
/// continuing with a dead graphics context.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable graphics adapter found: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to request graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

/// Failures while loading meshes or cubemap images from disk.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to load OBJ file {path}: {source}")]
    ObjLoad {
        path: PathBuf,
        source: tobj::LoadError,
    },

    #[error("OBJ file {path} references vertex index {index}, but only {vertex_count} vertices exist")]
    ObjIndexOutOfRange {
        path: PathBuf,
        index: u32,
        vertex_count: usize,
    },

    #[error("failed to decode cubemap face {path}: {source}")]
    CubemapFace {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("cubemap face {path} is {width}x{height}, expected {expected}x{expected}")]
    CubemapFaceSize {
        path: PathBuf,
        width: u32,
        height: u32,
        expected: u32,
    },
}
