// src/gfx/resources/mod.rs
//! GPU resource management
//!
//! Global uniform bindings, the depth-stencil attachment, and cubemap textures.

pub mod cubemap;
pub mod global_bindings;
pub mod texture_resource;

// Re-export main types
pub use cubemap::Cubemap;
pub use global_bindings::{update_global_ubo, GlobalBindings, GlobalUBO, LightConfig};
pub use texture_resource::TextureResource;
