//! Gesture classifier: one pointer interaction in, one intent out.
//!
//! `Idle -> Tracking(Undetermined) -> Tracking(Swipe | Scroll) -> Idle`

use tracing::trace;

use super::types::{
    AxisLock, DragUpdate, GestureIntent, GestureSummary, PointerDelta,
    PointerSample, PointerSource,
};
use crate::navigation::Direction;
use crate::track::TrackState;

/// State of the gesture in flight. Lives from `begin` to `end`/`cancel`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    /// Sample that began the gesture.
    pub origin: PointerSample,
    /// Travel at the latest move sample, if any.
    pub delta: Option<PointerDelta>,
    /// Axis decision, locked on the first move.
    pub axis: AxisLock,
}

/// Turns pointer samples into drag offsets and a final [`GestureIntent`].
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    accept_mouse: bool,
    state: Option<GestureState>,
    /// Horizontal travel of the most recent gesture, kept past `end` so a
    /// click fired by the same pointer release can be swallowed.
    last_dx: f32,
}

impl GestureClassifier {
    /// Idle classifier; mouse samples are refused unless `accept_mouse`.
    pub fn new(accept_mouse: bool) -> Self {
        Self {
            accept_mouse,
            ..Self::default()
        }
    }

    /// Whether a gesture is in flight.
    pub fn is_tracking(&self) -> bool {
        self.state.is_some()
    }

    /// The gesture in flight.
    pub fn state(&self) -> Option<&GestureState> {
        self.state.as_ref()
    }

    /// Axis decision of the gesture in flight.
    pub fn axis(&self) -> Option<AxisLock> {
        self.state.map(|s| s.axis)
    }

    /// Start tracking. Mouse samples are refused unless mouse gestures are
    /// enabled. A begin while already tracking restarts from the new origin.
    pub fn begin(&mut self, sample: PointerSample) -> bool {
        if sample.source == PointerSource::Mouse && !self.accept_mouse {
            trace!("mouse gesture ignored");
            return false;
        }
        self.state = Some(GestureState {
            origin: sample,
            delta: None,
            axis: AxisLock::Undetermined,
        });
        self.last_dx = 0.0;
        true
    }

    /// Feed a move sample. Returns the live drag offset while the gesture
    /// is locked to a horizontal swipe.
    pub fn update(
        &mut self,
        sample: PointerSample,
        current_offset_px: f32,
    ) -> Option<DragUpdate> {
        let state = self.state.as_mut()?;
        let delta = PointerDelta {
            x: sample.x - state.origin.x,
            y: sample.y - state.origin.y,
        };
        state.delta = Some(delta);
        self.last_dx = delta.x;

        if state.axis == AxisLock::Undetermined {
            state.axis = if delta.y.abs() > delta.x.abs() {
                AxisLock::Scroll
            } else {
                AxisLock::Swipe
            };
            trace!(
                axis = ?state.axis,
                dx = delta.x,
                dy = delta.y,
                "axis locked"
            );
        }

        match state.axis {
            AxisLock::Swipe => Some(DragUpdate {
                offset_px: current_offset_px + delta.x,
                delta,
            }),
            AxisLock::Scroll | AxisLock::Undetermined => None,
        }
    }

    /// Finish the gesture and classify it against the track.
    pub fn end(
        &mut self,
        sample: PointerSample,
        track: &TrackState,
    ) -> GestureSummary {
        let Some(state) = self.state.take() else {
            return GestureSummary {
                intent: GestureIntent::NoOp,
                delta: None,
                held_ms: None,
                moved_slides: 0,
            };
        };

        // Measured but deliberately not used to reject short swipes.
        let held_ms =
            sample.timestamp_ms.saturating_sub(state.origin.timestamp_ms);

        let dx = state.delta.map(|d| d.x).unwrap_or(0.0);
        let forward = dx < 0.0;
        // Float casts saturate; so must the arithmetic built on them.
        let whole_slides = (dx / track.slide_width_px()).trunc() as isize;
        let moved_slides =
            whole_slides.saturating_add(if forward { -1 } else { 1 });

        let intent = if state.axis == AxisLock::Scroll {
            GestureIntent::NoOp
        } else {
            let is_valid = dx != 0.0;
            let current = track.current_index();
            let out_of_bounds = current + 1 == track.len() && forward;
            let direction = if forward {
                Direction::Forward
            } else {
                Direction::Backward
            };

            if is_valid && !out_of_bounds {
                if moved_slides.unsigned_abs() == 1 {
                    GestureIntent::Step { direction }
                } else {
                    GestureIntent::JumpTo {
                        index: (current as isize).saturating_sub(moved_slides),
                        direction,
                    }
                }
            } else {
                GestureIntent::SnapBack
            }
        };

        trace!(?intent, dx, held_ms, moved_slides, "gesture classified");

        GestureSummary {
            intent,
            delta: state.delta,
            held_ms: Some(held_ms),
            moved_slides,
        }
    }

    /// Abort the gesture without an intent.
    pub fn cancel(&mut self) {
        self.state = None;
        self.last_dx = 0.0;
    }

    /// Whether a click at the end of the last gesture should be swallowed
    /// because the pointer was dragged horizontally.
    pub fn should_suppress_click(&self) -> bool {
        self.last_dx != 0.0
    }
}
