// src/ui/panel.rs
//! Parameter panels for the outline demos
//!
//! Two small fixed-position windows: frame statistics plus the background
//! clear color, and the outlined object's position and border thickness.
//! Slider bounds match the clamping the renderer applies each frame.

use crate::gfx::scene::params::{FrameParams, OUTLINE_SCALE_RANGE, POSITION_RANGE};

/// Draws the two debug panels and edits `params` in place.
///
/// Edits take effect on the next frame; the frame being recorded has
/// already consumed the previous values.
pub fn params_panel(ui: &imgui::Ui, params: &mut FrameParams) {
    ui.window("Window")
        .position([0.0, 0.0], imgui::Condition::FirstUseEver)
        .size([300.0, 100.0], imgui::Condition::FirstUseEver)
        .build(|| {
            let fps = ui.io().framerate;
            ui.text(format!(
                "Application average {:.3} ms/frame ({:.1} FPS)",
                1000.0 / fps,
                fps
            ));
            ui.color_edit3("clear color", &mut params.clear_color);
        });

    ui.window("planet")
        .position([0.0, 100.0], imgui::Condition::FirstUseEver)
        .size([300.0, 140.0], imgui::Condition::FirstUseEver)
        .build(|| {
            ui.slider(
                "outline",
                OUTLINE_SCALE_RANGE.0,
                OUTLINE_SCALE_RANGE.1,
                &mut params.outline_scale,
            );
            ui.slider(
                "x",
                POSITION_RANGE.0,
                POSITION_RANGE.1,
                &mut params.planet_position[0],
            );
            ui.slider(
                "y",
                POSITION_RANGE.0,
                POSITION_RANGE.1,
                &mut params.planet_position[1],
            );
            ui.slider(
                "z",
                POSITION_RANGE.0,
                POSITION_RANGE.1,
                &mut params.planet_position[2],
            );
        });
}
