//! Per-frame tweakable parameters
//!
//! One explicit struct instead of scattered globals: the UI panel edits it,
//! the renderer reads it, and `clamp()` is applied once per frame so edited
//! values take effect immediately and fully on the next drawn frame.

/// Range for each component of the outlined object's position slider.
pub const POSITION_RANGE: (f32, f32) = (-10.0, 10.0);

/// Range for the outline scale slider.
///
/// The lower bound stays strictly above 1.0: a scale of exactly 1.0 produces
/// a zero-width rim by construction. The upper bound keeps the rim thin
/// relative to the object instead of a detached halo.
pub const OUTLINE_SCALE_RANGE: (f32, f32) = (1.001, 1.05);

/// Parameters the debug panel exposes, re-read by the renderer every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    /// Background clear color, RGB in 0..1 by convention (not clamped).
    pub clear_color: [f32; 3],
    /// World position of the outlined object, clamped per axis.
    pub planet_position: [f32; 3],
    /// Uniform enlargement factor for the outline pass, clamped.
    pub outline_scale: f32,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0],
            planet_position: [0.0, 2.0, 0.0],
            outline_scale: 1.01,
        }
    }
}

impl FrameParams {
    /// Clamps position and outline scale back into their slider ranges.
    ///
    /// Called once per frame after UI edits; the sliders already constrain
    /// values, this guards programmatic writes.
    pub fn clamp(&mut self) {
        for axis in &mut self.planet_position {
            *axis = axis.clamp(POSITION_RANGE.0, POSITION_RANGE.1);
        }
        self.outline_scale = self
            .outline_scale
            .clamp(OUTLINE_SCALE_RANGE.0, OUTLINE_SCALE_RANGE.1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_in_range() {
        let mut params = FrameParams::default();
        let before = params;
        params.clamp();
        assert_eq!(params, before);
    }

    #[test]
    fn test_position_clamped_per_axis() {
        let mut params = FrameParams {
            planet_position: [-25.0, 3.5, 99.0],
            ..Default::default()
        };
        params.clamp();
        assert_eq!(params.planet_position, [-10.0, 3.5, 10.0]);
    }

    #[test]
    fn test_outline_scale_clamped() {
        let mut params = FrameParams {
            outline_scale: 2.0,
            ..Default::default()
        };
        params.clamp();
        assert_eq!(params.outline_scale, 1.05);

        params.outline_scale = 0.5;
        params.clamp();
        assert_eq!(params.outline_scale, 1.001);
    }

    #[test]
    fn test_degenerate_scale_is_unreachable() {
        // s = 1.0 would produce an invisible outline; the clamp floor keeps
        // the effective range strictly above 1.0.
        let mut params = FrameParams {
            outline_scale: 1.0,
            ..Default::default()
        };
        params.clamp();
        assert!(params.outline_scale > 1.0);
    }
}
