//! Pointer samples and gesture intents

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::navigation::Direction;

/// Input device behind a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointerSource {
    /// Always accepted.
    #[default]
    Touch,
    /// Accepted only with `enable_mouse_events`.
    Mouse,
}

/// One pointer position in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointerSample {
    /// Horizontal page coordinate.
    pub x: f32,
    /// Vertical page coordinate.
    pub y: f32,
    /// Host clock reading.
    pub timestamp_ms: u64,
    /// Device that produced the sample.
    #[cfg_attr(feature = "serde", serde(default))]
    pub source: PointerSource,
}

impl PointerSample {
    /// Touch sample.
    pub fn touch(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self {
            x,
            y,
            timestamp_ms,
            source: PointerSource::Touch,
        }
    }

    /// Mouse sample.
    pub fn mouse(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self {
            x,
            y,
            timestamp_ms,
            source: PointerSource::Mouse,
        }
    }
}

/// Pointer travel since the gesture began.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointerDelta {
    /// Horizontal travel; negative is leftward.
    pub x: f32,
    /// Vertical travel.
    pub y: f32,
}

/// Axis decision of the running gesture. Locked on the first comparison
/// and never re-evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AxisLock {
    /// No move sample seen yet.
    #[default]
    Undetermined,
    /// Horizontal: the track follows the finger.
    Swipe,
    /// Vertical: the page scrolls, the slider ignores the gesture.
    Scroll,
}

/// Terminal decision of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "intent", rename_all = "snake_case"))]
pub enum GestureIntent {
    /// Nothing to do (scroll passthrough, cancelled or idle).
    NoOp,
    /// One regular prev/next step.
    Step {
        /// Forward for leftward swipes.
        direction: Direction,
    },
    /// Jump to a padded track index; may be negative and is clamped by the
    /// navigator.
    JumpTo {
        /// Padded target index.
        index: isize,
        /// Forward for leftward swipes.
        direction: Direction,
    },
    /// Animate back to the pre-gesture offset.
    SnapBack,
}

/// Live drag position to apply with zero duration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DragUpdate {
    /// Committed offset plus the horizontal travel.
    pub offset_px: f32,
    /// Travel that produced the offset.
    pub delta: PointerDelta,
}

/// What a finished gesture amounted to.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GestureSummary {
    /// Classified intent.
    pub intent: GestureIntent,
    /// Last horizontal/vertical delta, if the pointer moved at all.
    pub delta: Option<PointerDelta>,
    /// Time between begin and end. Reported only; it never gates validity.
    pub held_ms: Option<u64>,
    /// Signed slide count derived from the horizontal delta.
    pub moved_slides: isize,
}
