//! Static slider configuration.
//!
//! Every option the engine understands is enumerated here with a default, so
//! callers only spell out what differs. `validate` runs the checks that do
//! not depend on the slide count; the track model checks the rest.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default duration of a regular slide transition.
pub const DEFAULT_SLIDE_SPEED_MS: u32 = 300;
/// Default duration of a rewind transition.
pub const DEFAULT_REWIND_SPEED_MS: u32 = 600;
/// Default duration of the snap back after an invalid swipe.
pub const DEFAULT_SNAP_BACK_SPEED_MS: u32 = 200;
/// Default easing token handed to the renderer.
pub const DEFAULT_EASE: &str = "ease";

/// Immutable per-instance slider options.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderConfig {
    /// Slides moved by a single prev/next step.
    pub slides_to_scroll: usize,
    /// Number of clones padded onto each end of the track. Zero disables
    /// infinite mode. Should be at least the number of slides visible per
    /// page, otherwise forward navigation stops before the wrap point.
    pub infinite: usize,
    /// Stepping forward from the last page returns to the first slide.
    /// Use either `infinite` or `rewind`, not both.
    pub rewind: bool,
    /// Stepping backward from the first slide jumps to the last one.
    #[cfg_attr(feature = "serde", serde(alias = "rewind_prev"))]
    pub rewind_on_boundary: bool,
    /// Real slide index shown after setup (and after a resize when
    /// `rewind_on_resize` is set).
    pub initial_index: usize,
    /// Transition time of a valid slide attempt.
    pub slide_speed_ms: u32,
    /// Transition time of a rewind.
    pub rewind_speed_ms: u32,
    /// Transition time of the snap back after an invalid swipe.
    pub snap_back_speed_ms: u32,
    /// Easing token, opaque to the engine.
    pub ease: String,
    /// Fixed slide width. When unset the width comes from the layout.
    pub slide_width_px: Option<f32>,
    /// Return to `initial_index` whenever the layout is recomputed.
    pub rewind_on_resize: bool,
    /// Accept gestures coming from a mouse, not only touch.
    pub enable_mouse_events: bool,
    /// Tell the renderer which slide is current after every move.
    pub mark_active_slide: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            slides_to_scroll: 1,
            infinite: 0,
            rewind: false,
            rewind_on_boundary: false,
            initial_index: 0,
            slide_speed_ms: DEFAULT_SLIDE_SPEED_MS,
            rewind_speed_ms: DEFAULT_REWIND_SPEED_MS,
            snap_back_speed_ms: DEFAULT_SNAP_BACK_SPEED_MS,
            ease: DEFAULT_EASE.to_string(),
            slide_width_px: None,
            rewind_on_resize: true,
            enable_mouse_events: false,
            mark_active_slide: true,
        }
    }
}

impl SliderConfig {
    /// Whether clone padding is active.
    pub fn is_infinite(&self) -> bool {
        self.infinite > 0
    }

    /// Checks that hold for any slide count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slides_to_scroll == 0 {
            return Err(ConfigError::ZeroSlidesToScroll);
        }
        if let Some(width) = self.slide_width_px
            && !(width.is_finite() && width > 0.0)
        {
            return Err(ConfigError::InvalidSlideWidth {
                slide_width_px: width,
            });
        }
        Ok(())
    }

    /// Checks that need the raw slide count.
    pub fn validate_for(&self, slides: usize) -> Result<(), ConfigError> {
        self.validate()?;
        if slides == 0 {
            return Err(ConfigError::NoSlides);
        }
        if self.infinite >= slides {
            return Err(ConfigError::InfiniteOverlap {
                infinite: self.infinite,
                slides,
            });
        }
        if self.initial_index >= slides {
            return Err(ConfigError::InitialIndexOutOfRange {
                index: self.initial_index,
                slides,
            });
        }
        Ok(())
    }
}

/// Measured frame and slide widths.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layout {
    /// Visible width of the frame the track scrolls inside.
    pub frame_width_px: f32,
    /// Width of one slide; every slide has the same width.
    pub slide_width_px: f32,
}

impl Layout {
    /// Layout from measured widths. Not validated.
    pub fn new(frame_width_px: f32, slide_width_px: f32) -> Self {
        Self {
            frame_width_px,
            slide_width_px,
        }
    }

    /// Both widths must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = |w: f32| w.is_finite() && w > 0.0;
        if ok(self.frame_width_px) && ok(self.slide_width_px) {
            Ok(())
        } else {
            Err(ConfigError::InvalidLayout {
                frame_width_px: self.frame_width_px,
                slide_width_px: self.slide_width_px,
            })
        }
    }

    /// Applies the configured fixed slide width, if any.
    pub fn with_override(self, slide_width_px: Option<f32>) -> Self {
        match slide_width_px {
            Some(width) => Self {
                slide_width_px: width,
                ..self
            },
            None => self,
        }
    }
}
