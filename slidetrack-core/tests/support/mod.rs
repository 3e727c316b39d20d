#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use slidetrack_core::{
    Control, EventBus, Layout, Renderer, Slider, SliderConfig, SliderEvent,
};

/// One call received by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    Offset {
        offset_px: f32,
        duration_ms: u32,
        ease: Option<String>,
    },
    Active(usize),
    Disabled(Control, bool),
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn offsets(&self) -> Vec<(f32, u32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::Offset {
                    offset_px,
                    duration_ms,
                    ..
                } => Some((*offset_px, *duration_ms)),
                _ => None,
            })
            .collect()
    }

    pub fn last_offset(&self) -> Option<(f32, u32)> {
        self.offsets().last().copied()
    }

    /// Final disabled flag reported for `control`, if any.
    pub fn disabled(&self, control: Control) -> Option<bool> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::Disabled(c, disabled) if *c == control => {
                Some(*disabled)
            }
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn apply_offset(
        &mut self,
        offset_px: f32,
        duration_ms: u32,
        ease: Option<&str>,
    ) {
        self.calls.push(RenderCall::Offset {
            offset_px,
            duration_ms,
            ease: ease.map(str::to_owned),
        });
    }

    fn set_active_slide_marker(&mut self, index: usize) {
        self.calls.push(RenderCall::Active(index));
    }

    fn set_control_disabled(&mut self, control: Control, disabled: bool) {
        self.calls.push(RenderCall::Disabled(control, disabled));
    }
}

/// Shared log of emitted events.
pub fn event_log() -> (EventBus, Arc<Mutex<Vec<SliderEvent>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let bus = EventBus::new().with(move |event: &SliderEvent| {
        sink.lock().expect("event log").push(*event);
    });
    (bus, log)
}

/// One slide per page: frame and slide are both 100px wide.
pub fn single_page() -> Layout {
    Layout::new(100.0, 100.0)
}

pub fn slider(
    slides: usize,
    config: SliderConfig,
) -> Slider<RecordingRenderer> {
    slider_with_layout(slides, config, single_page())
}

pub fn slider_with_layout(
    slides: usize,
    config: SliderConfig,
    layout: Layout,
) -> Slider<RecordingRenderer> {
    Slider::setup(
        slides,
        config,
        layout,
        RecordingRenderer::default(),
        EventBus::new(),
    )
    .expect("valid slider")
}

/// A clock reading safely past the reset hold window of a slider set up
/// just now.
pub fn after_reset_hold() -> Instant {
    Instant::now() + Duration::from_millis(250)
}

/// `current_offset == -left_edge(current_index)`.
pub fn assert_aligned<R: Renderer>(slider: &Slider<R>) {
    let track = slider.track();
    assert!(track.current_index() < track.len(), "index out of bounds");
    assert_eq!(
        track.current_offset_px(),
        track.offset_of(track.current_index()),
        "offset does not match index {}",
        track.current_index()
    );
}
