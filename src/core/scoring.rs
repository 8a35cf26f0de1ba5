//! Scoring: pure functions of (reaction, level, correctness)
//!
//! Score deltas only; the caller applies them to the session state.
//! The score itself is clamped at zero by `ScoreState::penalize`.

use std::time::Duration;

use crate::types::Level;
use crate::{
    COMPLETION_AWARD_PER_LEVEL, FALSE_INTERRUPT_PENALTY_PER_LEVEL,
    INTERRUPT_AWARD_FLOOR, INTERRUPT_POINTS_PER_TENTH, INTERRUPT_WINDOW_SECS,
};

/// Award for interrupting a dangerous command.
///
/// Faster reactions and higher levels pay more. The `(window - t)` term is
/// deliberately unclamped; the floor absorbs reactions at or past the
/// window bound.
pub fn interrupt_award(reaction: Duration, level: Level) -> u32 {
    let left = INTERRUPT_WINDOW_SECS - reaction.as_secs_f64();
    let raw = (left * INTERRUPT_POINTS_PER_TENTH).floor() as i64 * level.multiplier() as i64;
    raw.max(INTERRUPT_AWARD_FLOOR as i64) as u32
}

/// Award for letting a safe command run to completion
pub fn completion_award(level: Level) -> u32 {
    level.multiplier() * COMPLETION_AWARD_PER_LEVEL
}

/// Penalty for interrupting a valid command, capped so the score stays
/// non-negative
pub fn false_interrupt_penalty(score: u32, level: Level) -> u32 {
    (level.multiplier() * FALSE_INTERRUPT_PENALTY_PER_LEVEL).min(score)
}

// =============================================================================
// TESTS
// =============================================================================
