//! Real <-> padded index mapping for infinite mode.
//!
//! Padded layout for `raw` real slides and `k` clones per side:
//!
//! ```text
//! [ real raw-k .. raw-1 ][ real 0 .. raw-1 ][ real 0 .. k-1 ]
//!   front clones           real window        back clones
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which wrap, if any, a padded index sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CloneBoundary {
    /// Not a wrap boundary.
    #[default]
    None,
    /// Past the end of the real window; re-seat one real length back.
    WrapForward,
    /// At the very first clone; re-seat one real length ahead.
    WrapBackward,
}

impl CloneBoundary {
    /// Whether landing here re-seats the track.
    pub fn is_wrap(self) -> bool {
        !matches!(self, CloneBoundary::None)
    }
}

/// Padded track length.
#[inline]
pub fn padded_len(raw: usize, infinite: usize) -> usize {
    raw + 2 * infinite
}

/// Classify `index` against the clone boundaries of a padded track.
///
/// The forward boundary is `len - infinite`, the first back clone. When the
/// padded length is not a multiple of `infinite`, the last multiple
/// (`len - len % infinite`) also counts as a forward wrap.
pub fn boundary_of(index: usize, raw: usize, infinite: usize) -> CloneBoundary {
    if infinite == 0 {
        return CloneBoundary::None;
    }
    let len = padded_len(raw, infinite);
    let remainder = len % infinite;
    if index == len - infinite || (remainder != 0 && index == len - remainder) {
        CloneBoundary::WrapForward
    } else if index == 0 {
        CloneBoundary::WrapBackward
    } else {
        CloneBoundary::None
    }
}

/// Boundary a committed move lands on. Same as [`boundary_of`], except
/// that any index past the first back clone also wraps forward: a jump can
/// skip the boundary itself and still end up in the back clones.
pub fn landing_of(index: usize, raw: usize, infinite: usize) -> CloneBoundary {
    if infinite > 0 && index > padded_len(raw, infinite) - infinite {
        return CloneBoundary::WrapForward;
    }
    boundary_of(index, raw, infinite)
}

/// The padded index showing the same real slide as `index`, inside the
/// real window. Only defined for wrap boundaries.
pub fn mirror_of(index: usize, raw: usize, boundary: CloneBoundary) -> usize {
    match boundary {
        CloneBoundary::WrapForward => index - raw,
        CloneBoundary::WrapBackward => index + raw,
        CloneBoundary::None => index,
    }
}

/// Real slide shown at a padded index.
#[inline]
pub fn real_of(padded: usize, raw: usize, infinite: usize) -> usize {
    if infinite == 0 || raw == 0 {
        return padded;
    }
    (padded + raw - infinite) % raw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_for_two_clones_of_five() {
        // len 9: 0 wraps backward, 7 is the first back clone, 8 is the
        // modulo-aligned equivalent (9 - 9 % 2).
        assert_eq!(boundary_of(0, 5, 2), CloneBoundary::WrapBackward);
        assert_eq!(boundary_of(7, 5, 2), CloneBoundary::WrapForward);
        assert_eq!(boundary_of(8, 5, 2), CloneBoundary::WrapForward);
        for index in 1..7 {
            assert_eq!(boundary_of(index, 5, 2), CloneBoundary::None);
        }
    }

    #[test]
    fn aligned_length_has_a_single_forward_boundary() {
        // len 8 is a multiple of 2, so only 6 wraps forward.
        assert_eq!(boundary_of(6, 4, 2), CloneBoundary::WrapForward);
        assert_eq!(boundary_of(7, 4, 2), CloneBoundary::None);
    }

    #[test]
    fn landings_past_the_first_back_clone_wrap() {
        // len 11 with three clones: 8 is the first back clone, 9 the
        // modulo-aligned one, 10 only reachable by a jump.
        assert_eq!(boundary_of(10, 5, 3), CloneBoundary::None);
        for index in 8..11 {
            assert_eq!(landing_of(index, 5, 3), CloneBoundary::WrapForward);
            let mirrored = mirror_of(index, 5, CloneBoundary::WrapForward);
            assert_eq!(real_of(mirrored, 5, 3), real_of(index, 5, 3));
        }
        assert_eq!(landing_of(7, 5, 3), CloneBoundary::None);
        assert_eq!(landing_of(0, 5, 3), CloneBoundary::WrapBackward);
        assert_eq!(landing_of(7, 5, 0), CloneBoundary::None);
    }

    #[test]
    fn finite_tracks_never_wrap() {
        assert_eq!(boundary_of(0, 5, 0), CloneBoundary::None);
        assert_eq!(boundary_of(4, 5, 0), CloneBoundary::None);
    }

    #[test]
    fn mirrors_land_on_the_same_real_slide() {
        let (raw, k) = (5, 2);
        for index in [0, 7, 8] {
            let boundary = boundary_of(index, raw, k);
            let mirrored = mirror_of(index, raw, boundary);
            assert_eq!(real_of(mirrored, raw, k), real_of(index, raw, k));
            assert!(mirrored >= k && mirrored < raw + k);
        }
        assert_eq!(mirror_of(7, raw, CloneBoundary::WrapForward), 2);
        assert_eq!(mirror_of(0, raw, CloneBoundary::WrapBackward), 5);
    }

    #[test]
    fn front_clones_show_the_tail_in_order() {
        assert_eq!(real_of(0, 5, 2), 3);
        assert_eq!(real_of(1, 5, 2), 4);
        assert_eq!(real_of(2, 5, 2), 0);
        assert_eq!(real_of(6, 5, 2), 4);
        assert_eq!(real_of(7, 5, 2), 0);
        assert_eq!(real_of(8, 5, 2), 1);
    }
}
