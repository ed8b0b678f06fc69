//! # Graphics Module
//!
//! Camera system, scene management, procedural geometry, GPU resources, and
//! the frame renderer that issues the per-frame draw sequence.

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::orbit_camera::OrbitCamera;
pub use rendering::render_engine::RenderEngine;
