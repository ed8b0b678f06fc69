//! # Procedural Geometry Generation
//!
//! Generates the primitive shapes the demos use so no external model files
//! are required: a floor plane, a "planet" sphere, and the skybox cube.

pub mod primitives;

pub use primitives::*;

/// Generated geometry ready for GPU upload
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Converts into the mesh format used by the renderer.
    pub fn into_mesh(self) -> crate::gfx::scene::Mesh {
        use crate::gfx::scene::Vertex3D;

        let vertices: Vec<Vertex3D> = (0..self.vertices.len())
            .map(|i| Vertex3D {
                position: self.vertices[i],
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
            })
            .collect();

        crate::gfx::scene::Mesh::from_vertices(vertices, self.indices)
    }
}
