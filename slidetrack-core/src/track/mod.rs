//! Track model: the authoritative slide list and its clone bookkeeping.
//!
//! Infinite mode pads the real slides with `infinite` clones on each end.
//! Clones are never materialised; a padded index maps back to the real slide
//! it mirrors through [`TrackState::real_index_of`].

/// Padded index arithmetic
pub mod clones;
/// The track model
pub mod state;

pub use clones::CloneBoundary;
pub use state::{LoopFixup, TrackState};
