//! TrackState: slide bookkeeping, bounds and the current index/offset pair.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::clones::{self, CloneBoundary};
use crate::config::{Layout, SliderConfig};
use crate::error::ConfigError;

/// Deferred zero-duration offset correction registered when a transition
/// crosses a clone boundary. Consumed once by the transition-complete signal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoopFixup {
    /// Real-window index the track was re-seated to.
    pub index: usize,
    /// Offset to apply instantly once the visible transition has finished.
    pub offset_px: f32,
}

/// The padded slide list, its layout and the committed index/offset pair.
/// Offsets are always `-left_edge(current_index)` between moves.
#[derive(Debug, Clone)]
pub struct TrackState {
    // Content
    raw_len: usize,
    infinite: usize,

    // Position
    current_index: usize,
    current_offset_px: f32,

    // Layout
    frame_width_px: f32,
    slide_width_px: f32,

    pending_loop_fixup: Option<LoopFixup>,
}

impl TrackState {
    /// Build the track for `raw_len` real slides, padding both ends with
    /// `config.infinite` clones. The current index starts on
    /// `config.initial_index` inside the real window.
    pub fn new(
        raw_len: usize,
        config: &SliderConfig,
        layout: Layout,
    ) -> Result<Self, ConfigError> {
        config.validate_for(raw_len)?;
        let layout = layout.with_override(config.slide_width_px);
        layout.validate()?;

        let current_index = config.initial_index + config.infinite;
        let mut track = Self {
            raw_len,
            infinite: config.infinite,
            current_index,
            current_offset_px: 0.0,
            frame_width_px: layout.frame_width_px,
            slide_width_px: layout.slide_width_px,
            pending_loop_fixup: None,
        };
        track.current_offset_px = track.offset_of(current_index);
        Ok(track)
    }

    /// Number of slides on the track, clones included.
    #[inline]
    pub fn len(&self) -> usize {
        clones::padded_len(self.raw_len, self.infinite)
    }

    /// Always false for a constructed track.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of real slides.
    #[inline]
    pub fn real_len(&self) -> usize {
        self.raw_len
    }

    /// Clones per side; zero when infinite mode is off.
    #[inline]
    pub fn infinite(&self) -> usize {
        self.infinite
    }

    /// Whether clone padding is active.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.infinite > 0
    }

    /// Padded index of the current slide.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Committed offset; non-positive.
    #[inline]
    pub fn current_offset_px(&self) -> f32 {
        self.current_offset_px
    }

    /// Frame width in effect.
    #[inline]
    pub fn frame_width_px(&self) -> f32 {
        self.frame_width_px
    }

    /// Slide width in effect, fixed override applied.
    #[inline]
    pub fn slide_width_px(&self) -> f32 {
        self.slide_width_px
    }

    /// Widths in effect as a [`Layout`].
    pub fn layout(&self) -> Layout {
        Layout::new(self.frame_width_px, self.slide_width_px)
    }

    /// Fully visible slides per frame, at least one.
    pub fn per_page(&self) -> usize {
        let raw = (self.frame_width_px / self.slide_width_px).floor();
        if raw.is_finite() && raw >= 1.0 {
            raw as usize
        } else {
            1
        }
    }

    /// Highest index the track may be aligned to.
    pub fn max_index(&self) -> usize {
        self.len().saturating_sub(self.per_page())
    }

    /// Left edge of a slide inside the track.
    #[inline]
    pub fn left_edge_of(&self, index: usize) -> f32 {
        index as f32 * self.slide_width_px
    }

    /// Track offset that aligns `index` with the frame's left edge.
    #[inline]
    pub fn offset_of(&self, index: usize) -> f32 {
        -self.left_edge_of(index)
    }

    /// Magnitude of the offset at the last alignable index.
    pub fn max_offset_px(&self) -> f32 {
        self.left_edge_of(self.max_index())
    }

    /// Whether `index` addresses a slide on the track.
    pub fn contains(&self, index: isize) -> bool {
        index >= 0 && (index as usize) < self.len()
    }

    /// Which wrap boundary, if any, sits at `index`.
    pub fn clone_boundary(&self, index: usize) -> CloneBoundary {
        clones::boundary_of(index, self.raw_len, self.infinite)
    }

    /// Wrap a move committed to `index` triggers.
    pub fn landing_boundary(&self, index: usize) -> CloneBoundary {
        clones::landing_of(index, self.raw_len, self.infinite)
    }

    /// Real slide displayed at a padded index.
    pub fn real_index_of(&self, padded: usize) -> usize {
        clones::real_of(padded, self.raw_len, self.infinite)
    }

    /// Padded index of a real slide inside the real window.
    pub fn padded_index_of(&self, real: usize) -> usize {
        real + self.infinite
    }

    /// Real slide currently shown.
    pub fn real_index(&self) -> usize {
        self.real_index_of(self.current_index)
    }

    /// Fixup waiting for the transition-complete signal.
    pub fn pending_loop_fixup(&self) -> Option<LoopFixup> {
        self.pending_loop_fixup
    }

    /// Take the pending fixup, leaving none behind.
    pub fn take_loop_fixup(&mut self) -> Option<LoopFixup> {
        self.pending_loop_fixup.take()
    }

    pub(crate) fn set_layout(&mut self, layout: Layout) {
        self.frame_width_px = layout.frame_width_px;
        self.slide_width_px = layout.slide_width_px;
    }

    pub(crate) fn set_current_index(&mut self, index: usize) {
        debug_assert!(index < self.len());
        self.current_index = index;
    }

    pub(crate) fn set_current_offset(&mut self, offset_px: f32) {
        self.current_offset_px = offset_px;
    }

    /// Overwrites any stale fixup; only the latest transition's is valid.
    pub(crate) fn set_loop_fixup(&mut self, fixup: Option<LoopFixup>) {
        self.pending_loop_fixup = fixup;
    }

    /// Drop clone padding, keeping the same real slide current.
    pub(crate) fn release_clones(&mut self) {
        let real = self.real_index();
        self.infinite = 0;
        self.pending_loop_fixup = None;
        self.current_index = real;
        self.current_offset_px = self.offset_of(real);
    }
}
