//! # User Interface Module
//!
//! Dear ImGui-based debug overlay. [`UiManager`] owns the ImGui context and
//! its wgpu renderer; [`panel`] provides the parameter panels the demos use.
//!
//! The overlay is rendered in its own pass with only a color attachment, so
//! it is never depth- or stencil-tested against the 3D scene.

pub mod manager;
pub mod panel;

pub use manager::UiManager;
pub use panel::params_panel;
