//! Countdown over {Armed, Disarmed}
//!
//! Armed while a Command phase is live. Disarm is a test-and-clear: the
//! first caller wins, every later call is a no-op. That single flag is
//! what keeps the timeout tick and the interrupt key from both resolving
//! the same round.

use std::time::{Duration, Instant};

/// Countdown state for the active Command phase
#[derive(Debug, Clone)]
pub struct Countdown {
    /// Full duration of the window
    initial: Duration,
    /// When the window opened; unset reads as zero elapsed
    started_at: Option<Instant>,
    /// Armed flag, cleared exactly once per round
    armed: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Countdown {
    /// Create a disarmed countdown
    pub fn new() -> Self {
        Self {
            initial: Duration::ZERO,
            started_at: None,
            armed: false,
        }
    }

    /// Arm for a new window starting at `now`
    pub fn arm(&mut self, initial: Duration, now: Instant) {
        self.initial = initial;
        self.started_at = Some(now);
        self.armed = true;
    }

    /// Test-and-clear the armed flag. Returns true for the first caller
    /// only; that caller owns the round's terminal transition.
    pub fn disarm(&mut self) -> bool {
        std::mem::replace(&mut self.armed, false)
    }

    /// Is the countdown armed?
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Full duration of the current window
    pub fn initial(&self) -> Duration {
        self.initial
    }

    /// Elapsed time since the window opened; zero if it never opened
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.started_at
            .map(|start| now.duration_since(start))
            .unwrap_or(Duration::ZERO)
    }

    /// Time left in the window, saturating at zero
    pub fn remaining(&self, now: Instant) -> Duration {
        if !self.armed {
            return Duration::ZERO;
        }
        self.initial.saturating_sub(self.elapsed(now))
    }

    /// Has an armed window run out?
    pub fn expired(&self, now: Instant) -> bool {
        self.armed && self.remaining(now) == Duration::ZERO
    }
}

// =============================================================================
// TESTS
// =============================================================================
