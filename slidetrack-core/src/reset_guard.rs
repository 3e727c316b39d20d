//! Reentrancy guard for layout resyncs.
//!
//! Layout settling is not observable from the engine, so an engaged guard
//! releases itself once the hold window has elapsed instead of waiting for
//! an explicit signal. Requests arriving inside the window are dropped.

use std::time::{Duration, Instant};

/// Hold window of an engaged guard.
pub const DEFAULT_RESET_HOLD: Duration = Duration::from_millis(100);

/// Drops resyncs requested while an earlier one is still settling.
#[derive(Debug, Clone, Copy)]
pub struct ResetGuard {
    engaged_at: Option<Instant>,
    hold: Duration,
}

impl Default for ResetGuard {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_HOLD)
    }
}

impl ResetGuard {
    /// Disengaged guard with the given hold window.
    pub fn new(hold: Duration) -> Self {
        Self {
            engaged_at: None,
            hold,
        }
    }

    /// Hold window.
    pub fn hold(&self) -> Duration {
        self.hold
    }

    /// True while a reset started less than `hold` ago. A clock reading
    /// earlier than the engagement counts as inside the window.
    pub fn is_engaged(&self, now: Instant) -> bool {
        match self.engaged_at {
            Some(started) => now
                .checked_duration_since(started)
                .is_none_or(|elapsed| elapsed < self.hold),
            None => false,
        }
    }

    /// Engage for a new reset. Returns `false` (and changes nothing) when a
    /// reset is already in flight.
    pub fn try_engage(&mut self, now: Instant) -> bool {
        if self.is_engaged(now) {
            return false;
        }
        self.engaged_at = Some(now);
        true
    }

    /// Disengage early.
    pub fn release(&mut self) {
        self.engaged_at = None;
    }
}
