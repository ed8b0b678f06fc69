//! # Skybox Demo
//!
//! The outline scene wrapped in a cubemap skybox. The faces here are solid
//! colors so the demo needs no image assets; swap in
//! [`SelkieApp::set_skybox_files`](selkie::SelkieApp::set_skybox_files) with
//! six square images (+X -X +Y -Y +Z -Z) for a real environment.
//!
//! The skybox follows camera rotation but never camera position, so it reads
//! as infinitely distant. It is drawn at the far plane and never disturbs the
//! stencil outline.
//!
//! ## Usage:
//! ```bash
//! cargo run --example skybox
//! ```

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

    // Horizon-tinted faces: +X -X +Y -Y +Z -Z.
    app.set_skybox_colors([
        [96, 134, 182, 255],
        [96, 134, 182, 255],
        [140, 180, 220, 255],
        [60, 72, 90, 255],
        [96, 134, 182, 255],
        [96, 134, 182, 255],
    ]);

    app.set_ui(|ui, params| {
        params_panel(ui, params);
    });

    app.run();
    Ok(())
}
