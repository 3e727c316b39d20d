//! Shared types for navigation requests and results

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Navigation hint attached to a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Towards higher indices.
    Forward,
    /// Towards lower indices.
    Backward,
    /// Programmatic jump without a forward/backward hint. Explicit indices
    /// carried with this direction are real indices.
    Absolute,
}

impl Direction {
    /// Index delta of a single nominal step, used for the before-slide
    /// notification.
    pub fn nominal_step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward | Direction::Absolute => -1,
        }
    }
}

/// What the caller asks the navigator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MoveRequest {
    /// Compute the target from the direction and `slides_to_scroll`.
    Step,
    /// Explicit target. Real index with [`Direction::Absolute`], padded
    /// track index otherwise. May be negative; it is clamped.
    Index(isize),
}

/// A committed move, ready to be handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveResult {
    /// Current index before the move.
    pub previous_index: usize,
    /// Current index after the move, re-seated when a wrap happened.
    pub index: usize,
    /// Offset the renderer should animate to.
    pub offset_px: f32,
    /// Transition length; rewinds use `rewind_speed_ms`.
    pub duration_ms: u32,
    /// Easing function name, passed through to the renderer.
    pub ease: String,
    /// Index the move resolved to before any wrap re-seat. Drives the
    /// control-disabled rules.
    pub target_index: usize,
    /// A wrap fixup was registered by this move.
    pub wrapped: bool,
    /// The move was a rewind (either end).
    pub rewound: bool,
}
