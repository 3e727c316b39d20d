//! Slider: the owning facade over track, navigator and gesture classifier.
//!
//! Every public operation runs synchronously to completion. The only
//! deferred work is the wrap fixup, released by
//! [`Slider::on_transition_complete`].

use std::time::Instant;

use tracing::{debug, warn};

use crate::config::{Layout, SliderConfig};
use crate::error::{NavigationWarning, Result};
use crate::events::{EventBus, EventKind, EventPayload, Phase, SliderEvent};
use crate::gesture::{
    DragUpdate, GestureClassifier, GestureIntent, GestureSummary, PointerSample,
};
use crate::navigation::{Direction, MoveRequest, MoveResult, Navigator};
use crate::render::{Control, GeometryProbe, Renderer};
use crate::reset_guard::ResetGuard;
use crate::track::TrackState;

/// Result of [`Slider::gesture_end`].
#[derive(Debug, Clone, PartialEq)]
pub struct GestureEnd {
    /// How the classifier read the gesture.
    pub summary: GestureSummary,
    /// The move the gesture triggered, if it navigated and the target
    /// existed.
    pub movement: Option<MoveResult>,
}

impl GestureEnd {
    fn idle() -> Self {
        Self {
            summary: GestureSummary {
                intent: GestureIntent::NoOp,
                delta: None,
                held_ms: None,
                moved_slides: 0,
            },
            movement: None,
        }
    }

    /// Shorthand for `summary.intent`.
    pub fn intent(&self) -> GestureIntent {
        self.summary.intent
    }
}

/// One carousel: the track, its gesture classifier and the host renderer
/// and observers the engine's decisions are pushed to.
#[derive(Debug)]
pub struct Slider<R: Renderer> {
    config: SliderConfig,
    track: TrackState,
    gestures: GestureClassifier,
    reset_guard: ResetGuard,
    renderer: R,
    events: EventBus,
}

impl<R: Renderer> Slider<R> {
    /// Build a slider over `slide_count` real slides and align it to the
    /// initial index.
    pub fn setup(
        slide_count: usize,
        config: SliderConfig,
        layout: Layout,
        renderer: R,
        events: EventBus,
    ) -> Result<Self> {
        Self::setup_at(
            slide_count,
            config,
            layout,
            renderer,
            events,
            Instant::now(),
        )
    }

    /// [`setup`](Self::setup) with an explicit clock reading for the
    /// initial reset.
    pub fn setup_at(
        slide_count: usize,
        config: SliderConfig,
        layout: Layout,
        renderer: R,
        mut events: EventBus,
        now: Instant,
    ) -> Result<Self> {
        events.emit(SliderEvent::new(Phase::Before, EventKind::Init));

        let track = TrackState::new(slide_count, &config, layout)?;
        let gestures = GestureClassifier::new(config.enable_mouse_events);
        let mut slider = Self {
            config,
            track,
            gestures,
            reset_guard: ResetGuard::default(),
            renderer,
            events,
        };

        if !slider.track.is_infinite() {
            if !slider.config.rewind_on_boundary {
                slider.renderer.set_control_disabled(Control::Prev, true);
            }
            if slider.track.real_len() == 1 && !slider.config.rewind {
                slider.renderer.set_control_disabled(Control::Next, true);
            }
        }

        slider.reset_at(now);

        debug!(
            slides = slider.track.real_len(),
            padded = slider.track.len(),
            index = slider.track.current_index(),
            "slider initialised"
        );
        slider
            .events
            .emit(SliderEvent::new(Phase::After, EventKind::Init));
        Ok(slider)
    }

    /// Configuration the slider was set up with.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Read-only view of the track.
    pub fn track(&self) -> &TrackState {
        &self.track
    }

    /// The host renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the host renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Subscribe further observers after setup.
    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    /// Padded index of the current slide.
    pub fn current_index(&self) -> usize {
        self.track.current_index()
    }

    /// Real index of the current slide, clones mapped back.
    pub fn real_index(&self) -> usize {
        self.track.real_index()
    }

    /// Committed track offset.
    pub fn current_offset_px(&self) -> f32 {
        self.track.current_offset_px()
    }

    /// Resolve and commit a move, then drive the renderer and observers.
    pub fn move_to(
        &mut self,
        request: MoveRequest,
        direction: Direction,
    ) -> std::result::Result<MoveResult, NavigationWarning> {
        let index = self.track.current_index();
        self.events.emit(
            SliderEvent::new(Phase::Before, EventKind::Slide).with_payload(
                EventPayload::SlideStart {
                    index,
                    next_slide: index as isize + direction.nominal_step(),
                },
            ),
        );

        let result = Navigator::new(&self.config).move_to(
            &mut self.track,
            request,
            direction,
        )?;

        self.renderer.set_control_disabled(Control::Prev, false);
        self.renderer.set_control_disabled(Control::Next, false);

        self.renderer.apply_offset(
            result.offset_px,
            result.duration_ms,
            Some(result.ease.as_str()),
        );

        if self.config.mark_active_slide {
            self.renderer.set_active_slide_marker(result.index);
        }

        self.update_controls(result.target_index);

        self.events.emit(
            SliderEvent::new(Phase::After, EventKind::Slide).with_payload(
                EventPayload::SlideDone {
                    previous_index: result.previous_index,
                    current_slide: result.index,
                },
            ),
        );
        Ok(result)
    }

    /// Step forward by `slides_to_scroll`.
    pub fn next(
        &mut self,
    ) -> std::result::Result<MoveResult, NavigationWarning> {
        self.move_to(MoveRequest::Step, Direction::Forward)
    }

    /// Step backward by `slides_to_scroll`.
    pub fn prev(
        &mut self,
    ) -> std::result::Result<MoveResult, NavigationWarning> {
        self.move_to(MoveRequest::Step, Direction::Backward)
    }

    /// Jump to a real slide index.
    pub fn slide_to(
        &mut self,
        real_index: usize,
    ) -> std::result::Result<MoveResult, NavigationWarning> {
        let index = isize::try_from(real_index).unwrap_or(isize::MAX);
        self.move_to(MoveRequest::Index(index), Direction::Absolute)
    }

    /// Transition-complete signal from the renderer. Applies the pending
    /// wrap fixup instantly, at most once per move.
    pub fn on_transition_complete(&mut self) -> Option<f32> {
        let fixup = self.track.take_loop_fixup()?;
        debug!(
            index = fixup.index,
            offset_px = fixup.offset_px,
            "loop fixup applied"
        );
        self.renderer.apply_offset(fixup.offset_px, 0, None);
        Some(fixup.offset_px)
    }

    /// Pointer down. Returns whether the gesture is being tracked.
    pub fn gesture_begin(&mut self, sample: PointerSample) -> bool {
        if !self.gestures.begin(sample) {
            return false;
        }
        self.events.emit(
            SliderEvent::new(Phase::On, EventKind::TouchStart)
                .with_payload(EventPayload::Pointer { sample }),
        );
        true
    }

    /// Pointer move. Drags the renderer instantly while swiping.
    pub fn gesture_move(
        &mut self,
        sample: PointerSample,
    ) -> Option<DragUpdate> {
        if !self.gestures.is_tracking() {
            return None;
        }
        let update = self
            .gestures
            .update(sample, self.track.current_offset_px());
        if let Some(drag) = update {
            self.renderer.apply_offset(drag.offset_px, 0, None);
        }
        self.events.emit(
            SliderEvent::new(Phase::On, EventKind::TouchMove)
                .with_payload(EventPayload::Pointer { sample }),
        );
        update
    }

    /// Pointer up. Classifies the gesture and performs its intent.
    pub fn gesture_end(&mut self, sample: PointerSample) -> GestureEnd {
        if !self.gestures.is_tracking() {
            return GestureEnd::idle();
        }
        let summary = self.gestures.end(sample, &self.track);

        let movement = match summary.intent {
            GestureIntent::Step { direction } => {
                self.move_to(MoveRequest::Step, direction).ok()
            }
            GestureIntent::JumpTo { index, direction } => {
                self.move_to(MoveRequest::Index(index), direction).ok()
            }
            GestureIntent::SnapBack => {
                self.renderer.apply_offset(
                    self.track.current_offset_px(),
                    self.config.snap_back_speed_ms,
                    None,
                );
                None
            }
            GestureIntent::NoOp => None,
        };

        self.events.emit(
            SliderEvent::new(Phase::On, EventKind::TouchEnd)
                .with_payload(EventPayload::Pointer { sample }),
        );
        GestureEnd { summary, movement }
    }

    /// Abort the gesture in flight, if any. Never navigates.
    pub fn gesture_cancel(&mut self) -> GestureIntent {
        self.gestures.cancel();
        GestureIntent::NoOp
    }

    /// Whether a click that ends the last gesture should be swallowed.
    pub fn should_suppress_click(&self) -> bool {
        self.gestures.should_suppress_click()
    }

    /// Re-derive bounds for new widths and realign. Returns `None` when the
    /// resync was dropped or the layout is invalid.
    pub fn resize_to(
        &mut self,
        frame_width_px: f32,
        slide_width_px: f32,
    ) -> Option<MoveResult> {
        self.resize_to_at(frame_width_px, slide_width_px, Instant::now())
    }

    /// [`resize_to`](Self::resize_to) with an explicit clock reading.
    pub fn resize_to_at(
        &mut self,
        frame_width_px: f32,
        slide_width_px: f32,
        now: Instant,
    ) -> Option<MoveResult> {
        let layout = Layout::new(frame_width_px, slide_width_px)
            .with_override(self.config.slide_width_px);
        if let Err(err) = layout.validate() {
            warn!("resize ignored: {err}");
            return None;
        }
        self.resync(Some(layout), now)
    }

    /// Host resize notification. Only resyncs when the frame width changed.
    pub fn on_resize<G: GeometryProbe + ?Sized>(
        &mut self,
        probe: &G,
    ) -> Option<MoveResult> {
        self.on_resize_at(probe, Instant::now())
    }

    /// [`on_resize`](Self::on_resize) with an explicit clock reading.
    pub fn on_resize_at<G: GeometryProbe + ?Sized>(
        &mut self,
        probe: &G,
        now: Instant,
    ) -> Option<MoveResult> {
        let measured = probe.measure();
        if measured.frame_width_px == self.track.frame_width_px() {
            return None;
        }
        let result = self.resize_to_at(
            measured.frame_width_px,
            measured.slide_width_px,
            now,
        );
        self.events.emit(
            SliderEvent::new(Phase::On, EventKind::Resize).with_payload(
                EventPayload::Resize {
                    layout: self.track.layout(),
                },
            ),
        );
        result
    }

    /// Realign with the current layout.
    pub fn reset(&mut self) -> Option<MoveResult> {
        self.reset_at(Instant::now())
    }

    /// [`reset`](Self::reset) with an explicit clock reading.
    pub fn reset_at(&mut self, now: Instant) -> Option<MoveResult> {
        self.resync(None, now)
    }

    fn resync(
        &mut self,
        layout: Option<Layout>,
        now: Instant,
    ) -> Option<MoveResult> {
        if !self.reset_guard.try_engage(now) {
            debug!("reset already in flight, dropped");
            return None;
        }

        self.gestures.cancel();
        if let Some(layout) = layout {
            self.track.set_layout(layout);
        }

        let real = if self.config.rewind_on_resize {
            self.config.initial_index
        } else {
            self.track.real_index()
        };
        debug!(
            real,
            per_page = self.track.per_page(),
            max_index = self.track.max_index(),
            "resetting"
        );

        self.slide_to(real).ok()
    }

    fn update_controls(&mut self, target_index: usize) {
        if self.track.is_infinite() {
            return;
        }
        if !self.config.rewind_on_boundary && target_index == 0 {
            self.renderer.set_control_disabled(Control::Prev, true);
        }
        if !self.config.rewind && target_index >= self.track.max_index() {
            self.renderer.set_control_disabled(Control::Next, true);
        }
    }

    /// Tear the slider down, dropping clone padding, and hand the renderer
    /// back.
    pub fn teardown(mut self) -> R {
        self.events
            .emit(SliderEvent::new(Phase::Before, EventKind::Destroy));
        self.gestures.cancel();
        self.track.release_clones();
        debug!(slides = self.track.len(), "slider destroyed");
        self.events
            .emit(SliderEvent::new(Phase::After, EventKind::Destroy));
        self.renderer
    }
}
