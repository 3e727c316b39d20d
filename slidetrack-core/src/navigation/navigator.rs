//! Navigator: resolves a move request against the track and commits it.

use tracing::{debug, warn};

use super::types::{Direction, MoveRequest, MoveResult};
use crate::config::SliderConfig;
use crate::error::NavigationWarning;
use crate::track::{LoopFixup, TrackState, clones};

/// Offsets closer than this are considered equal.
const OFFSET_EPSILON_PX: f32 = 1e-3;

#[inline]
fn same_offset(a: f32, b: f32) -> bool {
    (a - b).abs() <= OFFSET_EPSILON_PX
}

/// Stateless move resolver borrowing the slider's configuration.
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'a> {
    config: &'a SliderConfig,
}

impl<'a> Navigator<'a> {
    /// Navigator for `config`.
    pub fn new(config: &'a SliderConfig) -> Self {
        Self { config }
    }

    /// Resolve `request` into a target index and offset, commit both to
    /// `track`, and register a wrap fixup when the target is a clone
    /// boundary or lies beyond the first back clone.
    ///
    /// Returns [`NavigationWarning::SlideNotFound`] without touching the
    /// track when the resolved index has no slide.
    pub fn move_to(
        &self,
        track: &mut TrackState,
        request: MoveRequest,
        direction: Direction,
    ) -> Result<MoveResult, NavigationWarning> {
        let config = self.config;
        let previous_index = track.current_index();
        let mut duration_ms = config.slide_speed_ms;
        let mut rewound = false;

        let mut candidate = match request {
            MoveRequest::Index(index) => index,
            MoveRequest::Step => self.step_candidate(track, direction),
        };

        candidate = candidate.clamp(0, track.max_index() as isize);

        // Explicit programmatic indices address the real window.
        if track.is_infinite() && direction == Direction::Absolute {
            candidate += track.infinite() as isize;
        }

        if config.rewind_on_boundary
            && same_offset(track.current_offset_px(), 0.0)
            && direction == Direction::Backward
        {
            candidate = track.len() as isize - 1;
            duration_ms = config.rewind_speed_ms;
            rewound = true;
        }

        if !track.contains(candidate) {
            let warning = NavigationWarning::SlideNotFound {
                index: candidate,
                len: track.len(),
            };
            warn!("{warning}");
            return Err(warning);
        }

        let mut target = candidate as usize;
        let mut offset_px = track.offset_of(target);

        let at_end =
            same_offset(track.current_offset_px().abs(), track.max_offset_px());
        if config.rewind && at_end && direction == Direction::Forward
        {
            offset_px = 0.0;
            target = 0;
            duration_ms = config.rewind_speed_ms;
            rewound = true;
        }

        track.set_current_offset(offset_px);
        if direction != Direction::Forward || target <= track.len() {
            track.set_current_index(target);
        }

        let boundary = track.landing_boundary(target);
        let fixup = if track.is_infinite() && boundary.is_wrap() {
            let index = clones::mirror_of(target, track.real_len(), boundary);
            let fixed_offset = track.offset_of(index);
            track.set_current_index(index);
            track.set_current_offset(fixed_offset);
            Some(LoopFixup {
                index,
                offset_px: fixed_offset,
            })
        } else {
            None
        };
        let wrapped = fixup.is_some();
        track.set_loop_fixup(fixup);

        debug!(
            previous_index,
            target,
            index = track.current_index(),
            offset_px,
            duration_ms,
            wrapped,
            rewound,
            "slide committed"
        );

        Ok(MoveResult {
            previous_index,
            index: track.current_index(),
            offset_px,
            duration_ms,
            ease: config.ease.clone(),
            target_index: target,
            wrapped,
            rewound,
        })
    }

    /// Candidate for a relative step. In infinite mode a forward step that
    /// would overshoot the first back clone lands on it instead, so the wrap
    /// re-seat always fires. An absolute step stays on the current real
    /// slide, which the real-window shift maps back to where it started.
    fn step_candidate(
        &self,
        track: &TrackState,
        direction: Direction,
    ) -> isize {
        let current = track.current_index() as isize;
        let step = self.config.slides_to_scroll as isize;
        match direction {
            Direction::Forward => {
                let next = current + step;
                if track.is_infinite() {
                    let boundary = (track.len() - track.infinite()) as isize;
                    if current < boundary && next > boundary {
                        return boundary;
                    }
                }
                next
            }
            Direction::Backward => current - step,
            Direction::Absolute => track.real_index() as isize,
        }
    }
}
