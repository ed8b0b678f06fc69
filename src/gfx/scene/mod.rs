//! # Scene Management Module
//!
//! Scene container, objects with GPU-resident meshes, vertex layout, and the
//! per-frame parameter block shared between the UI panel and the renderer.

pub mod object;
pub mod params;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use object::{DrawObject, Mesh, Object};
pub use params::FrameParams;
pub use scene::Scene;
pub use vertex::Vertex3D;
