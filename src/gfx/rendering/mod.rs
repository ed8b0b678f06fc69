//! # Rendering Module
//!
//! Pipeline management, the stencil outline sequence, the skybox, and the
//! frame renderer that ties them together.

pub mod outline;
pub mod pipeline_manager;
pub mod render_engine;
pub mod skybox;

// Re-export main types
pub use outline::OutlineSequence;
pub use pipeline_manager::{PipelineConfig, PipelineManager};
pub use render_engine::RenderEngine;
pub use skybox::Skybox;
