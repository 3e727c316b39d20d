//! Host capabilities the engine drives but never implements itself.

use crate::config::Layout;

/// Which navigation control a disabled flag refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// The "previous" button.
    Prev,
    /// The "next" button.
    Next,
}

/// Applies engine decisions to the host rendering surface.
pub trait Renderer {
    /// Translate the track to `offset_px` over `duration_ms`. A zero
    /// duration means an instantaneous jump; `ease` is `None` when the
    /// host should use its own default.
    fn apply_offset(
        &mut self,
        offset_px: f32,
        duration_ms: u32,
        ease: Option<&str>,
    );

    /// Mark `index` (padded track index) as the active slide.
    fn set_active_slide_marker(&mut self, index: usize);

    /// Enable or disable a navigation control.
    fn set_control_disabled(&mut self, control: Control, disabled: bool);
}

/// Measures the host layout on demand.
pub trait GeometryProbe {
    /// Current frame and slide widths.
    fn measure(&self) -> Layout;
}

impl GeometryProbe for Layout {
    fn measure(&self) -> Layout {
        *self
    }
}

/// Renderer that discards everything. Useful for headless evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn apply_offset(
        &mut self,
        _offset_px: f32,
        _duration_ms: u32,
        _ease: Option<&str>,
    ) {
    }

    fn set_active_slide_marker(&mut self, _index: usize) {}

    fn set_control_disabled(&mut self, _control: Control, _disabled: bool) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn apply_offset(
        &mut self,
        offset_px: f32,
        duration_ms: u32,
        ease: Option<&str>,
    ) {
        (**self).apply_offset(offset_px, duration_ms, ease)
    }

    fn set_active_slide_marker(&mut self, index: usize) {
        (**self).set_active_slide_marker(index)
    }

    fn set_control_disabled(&mut self, control: Control, disabled: bool) {
        (**self).set_control_disabled(control, disabled)
    }
}
