//! Stencil-based outline effect
//!
//! The outline is drawn in two passes over the same depth/stencil
//! attachment. First the highlighted object is rendered normally while
//! writing the reference value into the stencil buffer. Then a slightly
//! enlarged copy is rendered in a flat color, restricted to fragments
//! whose stencil value differs from the reference, so only the silhouette
//! band around the object survives. The enlarged pass ignores the depth
//! test so the border stays visible through closer geometry.
//!
//! [`OutlineSequence`] enforces that ordering at compile time: the
//! enlarged pass can only be recorded after the stencil-writing pass.

use std::marker::PhantomData;

use wgpu::*;

use super::super::scene::{DrawObject, Object};

/// Stencil reference value written by the highlighted object.
pub const STENCIL_REF: u32 = 1;

/// Stencil state for geometry that must not disturb the outline.
///
/// Stencil test always passes, nothing is written. The floor and the
/// skybox use this so stale fragments never mask the border.
pub fn silent_stencil() -> StencilState {
    let face = StencilFaceState {
        compare: CompareFunction::Always,
        fail_op: StencilOperation::Keep,
        depth_fail_op: StencilOperation::Keep,
        pass_op: StencilOperation::Keep,
    };
    StencilState {
        front: face,
        back: face,
        read_mask: 0xFF,
        write_mask: 0x00,
    }
}

/// Stencil state for the highlighted object's normal draw.
///
/// Every covered fragment replaces its stencil value with the reference.
pub fn write_stencil() -> StencilState {
    let face = StencilFaceState {
        compare: CompareFunction::Always,
        fail_op: StencilOperation::Keep,
        depth_fail_op: StencilOperation::Replace,
        pass_op: StencilOperation::Replace,
    };
    StencilState {
        front: face,
        back: face,
        read_mask: 0xFF,
        write_mask: 0xFF,
    }
}

/// Stencil state for the enlarged flat-color draw.
///
/// Passes only where the stencil value differs from the reference, which
/// carves the object's own footprint out of the enlarged silhouette.
/// Writes nothing so the buffer stays intact for the next frame.
pub fn exclude_stencil() -> StencilState {
    let face = StencilFaceState {
        compare: CompareFunction::NotEqual,
        fail_op: StencilOperation::Keep,
        depth_fail_op: StencilOperation::Keep,
        pass_op: StencilOperation::Keep,
    };
    StencilState {
        front: face,
        back: face,
        read_mask: 0xFF,
        write_mask: 0x00,
    }
}

/// Marker states for [`OutlineSequence`].
pub mod state {
    /// Nothing recorded yet.
    pub struct Idle;
    /// The highlighted object has been drawn and its stencil written.
    pub struct ObjectWritten;
    /// The enlarged border copy has been drawn.
    pub struct OutlineDrawn;
}

/// Records the two outline draws in their required order.
///
/// The sequence wraps the open render pass and only exposes the next
/// legal step, so drawing the border before the stencil write (or
/// twice) does not compile.
pub struct OutlineSequence<'p, 'e, S> {
    pass: &'p mut RenderPass<'e>,
    _state: PhantomData<S>,
}

impl<'p, 'e> OutlineSequence<'p, 'e, state::Idle> {
    pub fn new(pass: &'p mut RenderPass<'e>) -> Self {
        Self {
            pass,
            _state: PhantomData,
        }
    }

    /// Draws the highlighted object normally while writing the stencil.
    ///
    /// The pass must already have the shared globals bound at group 0;
    /// `pipeline` must use [`write_stencil`] state.
    pub fn draw_object(
        self,
        pipeline: &'e RenderPipeline,
        object: &'e Object,
    ) -> OutlineSequence<'p, 'e, state::ObjectWritten> {
        self.pass.set_pipeline(pipeline);
        self.pass.set_stencil_reference(STENCIL_REF);
        if let Some(bind_group) = object.bind_group() {
            self.pass.set_bind_group(1, bind_group, &[]);
        }
        self.pass.draw_object(object);
        OutlineSequence {
            pass: self.pass,
            _state: PhantomData,
        }
    }
}

impl<'p, 'e> OutlineSequence<'p, 'e, state::ObjectWritten> {
    /// Draws the enlarged flat-color copy where the stencil excludes it.
    ///
    /// `pipeline` must use [`exclude_stencil`] state and disable the
    /// depth test; `outline_bind_group` carries the enlarged model
    /// matrix and border color at group 1.
    pub fn draw_outline(
        self,
        pipeline: &'e RenderPipeline,
        outline_bind_group: &'e BindGroup,
        object: &'e Object,
    ) -> OutlineSequence<'p, 'e, state::OutlineDrawn> {
        self.pass.set_pipeline(pipeline);
        self.pass.set_stencil_reference(STENCIL_REF);
        self.pass.set_bind_group(1, outline_bind_group, &[]);
        for mesh in &object.meshes {
            self.pass.draw_mesh(mesh);
        }
        OutlineSequence {
            pass: self.pass,
            _state: PhantomData,
        }
    }
}

impl<'p, 'e> OutlineSequence<'p, 'e, state::OutlineDrawn> {
    /// Hands the render pass back for subsequent draws.
    pub fn finish(self) -> &'p mut RenderPass<'e> {
        self.pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_stencil_never_writes() {
        let s = silent_stencil();
        assert_eq!(s.write_mask, 0x00);
        assert_eq!(s.front.compare, CompareFunction::Always);
        assert_eq!(s.front.pass_op, StencilOperation::Keep);
    }

    #[test]
    fn test_write_stencil_replaces_on_pass_and_depth_fail() {
        let s = write_stencil();
        assert_eq!(s.write_mask, 0xFF);
        assert_eq!(s.front.compare, CompareFunction::Always);
        assert_eq!(s.front.pass_op, StencilOperation::Replace);
        assert_eq!(s.front.depth_fail_op, StencilOperation::Replace);
        assert_eq!(s.front.fail_op, StencilOperation::Keep);
    }

    #[test]
    fn test_exclude_stencil_reads_without_writing() {
        let s = exclude_stencil();
        assert_eq!(s.front.compare, CompareFunction::NotEqual);
        assert_eq!(s.write_mask, 0x00);
        assert_eq!(s.read_mask, 0xFF);
        assert_eq!(s.front.pass_op, StencilOperation::Keep);
    }

    #[test]
    fn test_front_and_back_faces_match() {
        for s in [silent_stencil(), write_stencil(), exclude_stencil()] {
            assert_eq!(s.front, s.back);
        }
    }

    #[test]
    fn test_stencil_ref_is_nonzero() {
        // The attachment clears to zero each frame, so the reference must
        // differ from the clear value for NotEqual to isolate the border.
        assert_ne!(STENCIL_REF, 0);
    }
}
