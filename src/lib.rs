// src/lib.rs
//! Selkie
//!
//! A small real-time 3D rendering demo built on wgpu and winit. It draws a
//! hand-written frame sequence: opaque scene geometry, a stencil-based
//! silhouette outline around one designated object, an optional skybox
//! cubemap, and an imgui overlay for runtime parameter tweaking.

pub mod app;
pub mod error;
pub mod gfx;
pub mod ui;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::SelkieApp;
pub use error::{AssetError, RenderError};
pub use gfx::scene::FrameParams;

/// Creates a default Selkie application instance
pub fn default() -> SelkieApp {
    SelkieApp::new()
}
