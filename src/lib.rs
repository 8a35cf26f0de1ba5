//! sigint-dojo: a terminal reflex trainer
//!
//! Shows a task and a simulated shell command; the player decides under
//! time pressure whether to interrupt it (Ctrl+C) or let it run.

pub mod core;
pub mod types;

// =============================================================================
// TIMING [C]
// =============================================================================

/// Countdown tick cadence (milliseconds)
pub const COUNTDOWN_TICK_MS: u64 = 100;

/// Countdown duration for level 1 (milliseconds)
pub const LEVEL_ONE_COUNTDOWN_MS: u64 = 2500;

/// Countdown duration for level 2 (milliseconds)
pub const LEVEL_TWO_COUNTDOWN_MS: u64 = 1600;

/// Countdown duration for level 3 (milliseconds)
pub const LEVEL_THREE_COUNTDOWN_MS: u64 = 900;

// =============================================================================
// SCORING [C]
// =============================================================================

/// Reaction window for correct-interrupt scoring (seconds)
/// Reactions slower than this still pay out the floor award
pub const INTERRUPT_WINDOW_SECS: f64 = 3.0;

/// Points per tenth of a second left in the reaction window
pub const INTERRUPT_POINTS_PER_TENTH: f64 = 10.0;

/// Minimum award for a correct interrupt, however slow
pub const INTERRUPT_AWARD_FLOOR: u32 = 1;

/// Award per level step when a safe command runs to completion
pub const COMPLETION_AWARD_PER_LEVEL: u32 = 5;

/// Penalty per level step for interrupting a valid command
pub const FALSE_INTERRUPT_PENALTY_PER_LEVEL: u32 = 5;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
