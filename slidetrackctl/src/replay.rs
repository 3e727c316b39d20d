//! Drives a [`Slider`] through a [`Script`] and records what happened.

use std::{
    fmt,
    time::{Duration, Instant},
};

use anyhow::Context;
use serde::Serialize;
use slidetrack_config::SliderProfile;
use slidetrack_core::{
    EventBus, Layout, MoveResult, NavigationWarning, Slider, SliderEvent,
    gesture::GestureSummary,
};
use tracing::debug;

use crate::renderer::TracingRenderer;
use crate::script::{ReplayStep, Script};

/// Layout used when the profile does not pin one.
pub const DEFAULT_LAYOUT: Layout = Layout {
    frame_width_px: 100.0,
    slide_width_px: 100.0,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Moved { movement: MoveResult },
    NotFound { warning: String },
    Tracking { accepted: bool },
    Drag { offset_px: Option<f32> },
    Gesture {
        summary: GestureSummary,
        movement: Option<MoveResult>,
    },
    Cancelled,
    Fixup { offset_px: Option<f32> },
    Resized { movement: Option<MoveResult> },
    Ignored,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Moved { movement } => write_move(f, movement),
            Outcome::NotFound { warning } => write!(f, "warning: {warning}"),
            Outcome::Tracking { accepted: true } => f.write_str("tracking"),
            Outcome::Tracking { accepted: false } => {
                f.write_str("ignored (mouse gestures disabled)")
            }
            Outcome::Drag {
                offset_px: Some(offset),
            } => write!(f, "drag to {offset}px"),
            Outcome::Drag { offset_px: None } => f.write_str("scroll"),
            Outcome::Gesture { summary, movement } => {
                write!(
                    f,
                    "{:?} (moved {})",
                    summary.intent, summary.moved_slides
                )?;
                if let Some(movement) = movement {
                    f.write_str(", ")?;
                    write_move(f, movement)?;
                }
                Ok(())
            }
            Outcome::Cancelled => f.write_str("cancelled"),
            Outcome::Fixup {
                offset_px: Some(offset),
            } => write!(f, "fixup to {offset}px"),
            Outcome::Fixup { offset_px: None } => {
                f.write_str("no fixup pending")
            }
            Outcome::Resized {
                movement: Some(movement),
            } => {
                f.write_str("resynced, ")?;
                write_move(f, movement)
            }
            Outcome::Resized { movement: None } => {
                f.write_str("resize dropped")
            }
            Outcome::Ignored => f.write_str("ignored"),
        }
    }
}

fn write_move(
    f: &mut fmt::Formatter<'_>,
    movement: &MoveResult,
) -> fmt::Result {
    write!(
        f,
        "moved {} -> {} over {}ms",
        movement.previous_index, movement.index, movement.duration_ms
    )?;
    if movement.wrapped {
        f.write_str(" [wrap]")?;
    }
    if movement.rewound {
        f.write_str(" [rewind]")?;
    }
    Ok(())
}

/// Slider state after one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    pub step: usize,
    pub action: &'static str,
    pub index: usize,
    pub real_index: usize,
    /// Offset the renderer currently shows, which differs from the
    /// committed offset during a drag or before a fixup.
    pub offset_px: f32,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3} {:<14} index={:<3} real={:<3} offset={}px  {}",
            self.step,
            self.action,
            self.index,
            self.real_index,
            self.offset_px,
            self.outcome
        )
    }
}

#[derive(Debug)]
pub struct Replay {
    slider: Slider<TracingRenderer>,
    started: Instant,
    clock_ms: u64,
    mouse: bool,
}

impl Replay {
    /// Set up a slider from `profile`. The session clock starts at zero at
    /// setup, so a resize stamped inside the reset hold window is dropped.
    pub fn new(profile: &SliderProfile) -> anyhow::Result<Self> {
        let slides = profile
            .slide_count
            .context("profile has no slide_count; replay needs one")?;
        let layout = profile.layout.unwrap_or(DEFAULT_LAYOUT);
        let events = EventBus::new().with(|event: &SliderEvent| {
            debug!(%event, payload = ?event.payload, "event");
        });
        let started = Instant::now();
        let slider = Slider::setup_at(
            slides,
            profile.slider.clone(),
            layout,
            TracingRenderer::default(),
            events,
            started,
        )
        .context("failed to set up slider")?;

        Ok(Self {
            slider,
            started,
            clock_ms: 0,
            mouse: false,
        })
    }

    pub fn step(&mut self, number: usize, step: ReplayStep) -> StepRecord {
        if let Some(t_ms) = step.timestamp_ms() {
            self.clock_ms = self.clock_ms.max(t_ms);
        }
        let now = self.started + Duration::from_millis(self.clock_ms);

        let outcome = match step {
            ReplayStep::Next => moved(self.slider.next()),
            ReplayStep::Prev => moved(self.slider.prev()),
            ReplayStep::SlideTo { index } => moved(self.slider.slide_to(index)),
            ReplayStep::Cancel => {
                self.slider.gesture_cancel();
                Outcome::Cancelled
            }
            ReplayStep::TransitionEnd => Outcome::Fixup {
                offset_px: self.slider.on_transition_complete(),
            },
            ReplayStep::Resize {
                frame_width_px,
                slide_width_px,
                ..
            } => Outcome::Resized {
                movement: self
                    .slider
                    .resize_to_at(frame_width_px, slide_width_px, now),
            },
            gesture => self.gesture(gesture),
        };

        StepRecord {
            step: number,
            action: step.name(),
            index: self.slider.current_index(),
            real_index: self.slider.real_index(),
            offset_px: self.slider.renderer().offset_px,
            outcome,
        }
    }

    fn gesture(&mut self, step: ReplayStep) -> Outcome {
        if let ReplayStep::Begin { mouse, .. } = step {
            self.mouse = mouse;
        }
        let Some(sample) = step.sample(self.mouse) else {
            return Outcome::Ignored;
        };
        match step {
            ReplayStep::Begin { .. } => Outcome::Tracking {
                accepted: self.slider.gesture_begin(sample),
            },
            ReplayStep::Move { .. } => Outcome::Drag {
                offset_px: self
                    .slider
                    .gesture_move(sample)
                    .map(|d| d.offset_px),
            },
            _ => {
                let end = self.slider.gesture_end(sample);
                Outcome::Gesture {
                    summary: end.summary,
                    movement: end.movement,
                }
            }
        }
    }

    /// Tear the slider down and return what the renderer ended up showing.
    pub fn finish(self) -> TracingRenderer {
        self.slider.teardown()
    }
}

fn moved(result: Result<MoveResult, NavigationWarning>) -> Outcome {
    match result {
        Ok(movement) => Outcome::Moved { movement },
        Err(warning) => Outcome::NotFound {
            warning: warning.to_string(),
        },
    }
}

/// Run every step of `script` against a fresh slider.
pub fn run(
    profile: &SliderProfile,
    script: &Script,
) -> anyhow::Result<Vec<StepRecord>> {
    let mut replay = Replay::new(profile)?;
    let records = script
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| replay.step(i + 1, *step))
        .collect();
    let renderer = replay.finish();
    debug!(
        offset_px = renderer.offset_px,
        active_slide = ?renderer.active_slide,
        prev_disabled = renderer.prev_disabled,
        next_disabled = renderer.next_disabled,
        "replay finished"
    );
    Ok(records)
}
