use slidetrack_core::{Control, Renderer};
use tracing::{debug, info};

/// Renderer that logs every call and remembers what a real surface would
/// currently show.
#[derive(Debug, Clone, Default)]
pub struct TracingRenderer {
    pub offset_px: f32,
    pub active_slide: Option<usize>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl Renderer for TracingRenderer {
    fn apply_offset(
        &mut self,
        offset_px: f32,
        duration_ms: u32,
        ease: Option<&str>,
    ) {
        info!(offset_px, duration_ms, ease = ease.unwrap_or("-"), "translate");
        self.offset_px = offset_px;
    }

    fn set_active_slide_marker(&mut self, index: usize) {
        debug!(index, "active slide");
        self.active_slide = Some(index);
    }

    fn set_control_disabled(&mut self, control: Control, disabled: bool) {
        debug!(?control, disabled, "control");
        match control {
            Control::Prev => self.prev_disabled = disabled,
            Control::Next => self.next_disabled = disabled,
        }
    }
}
