//! # Stencil Outline Demo
//!
//! A floor plane and a floating "planet" sphere; the planet is drawn with a
//! teal silhouette outline produced by the two-pass stencil technique.
//!
//! ## What this demo shows:
//! - Adding procedural geometry to the scene
//! - Designating one object as outlined
//! - The parameter panels: clear color, planet position, and border thickness
//!
//! ## Usage:
//! ```bash
//! cargo run --example outline
//! ```
//!
//! Drag with the left mouse button to orbit the camera, scroll to zoom,
//! hold shift and drag to pan. Escape exits.

use selkie::gfx::geometry::{generate_plane, generate_sphere};
use selkie::ui::params_panel;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut app = selkie::default();

    let floor = app.add_geometry(generate_plane(20.0, 20.0, 1, 1), "floor");
    let planet = app.add_geometry(generate_sphere(48, 24), "planet");

    if let Some(object) = app.scene_mut().get_object_mut(floor) {
        object.color = [0.45, 0.45, 0.5, 1.0];
    }
    if let Some(object) = app.scene_mut().get_object_mut(planet) {
        object.color = [0.35, 0.55, 0.9, 1.0];
    }

    app.set_outlined(planet);
    app.set_ui(|ui, params| {
        params_panel(ui, params);
    });

    app.run();
    Ok(())
}
