//! Difficulty levels
//!
//! Level controls the countdown duration and the point multiplier.
//! Durations are strictly decreasing with difficulty.

use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::{LEVEL_ONE_COUNTDOWN_MS, LEVEL_TWO_COUNTDOWN_MS, LEVEL_THREE_COUNTDOWN_MS};

/// Difficulty level (1-3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Level {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Level {
    /// Countdown duration for a Command phase at this level
    pub fn countdown(self) -> Duration {
        let ms = match self {
            Level::One => LEVEL_ONE_COUNTDOWN_MS,
            Level::Two => LEVEL_TWO_COUNTDOWN_MS,
            Level::Three => LEVEL_THREE_COUNTDOWN_MS,
        };
        Duration::from_millis(ms)
    }

    /// Point multiplier for this level
    pub fn multiplier(self) -> u32 {
        self as u32
    }

    /// All levels, easiest first
    pub fn all() -> [Level; 3] {
        [Level::One, Level::Two, Level::Three]
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::One
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level as u8
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::One),
            2 => Ok(Level::Two),
            3 => Ok(Level::Three),
            other => Err(format!("level must be 1-3, got {}", other)),
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_matches_table() {
        assert_eq!(Level::One.countdown(), Duration::from_millis(2500));
        assert_eq!(Level::Two.countdown(), Duration::from_millis(1600));
        assert_eq!(Level::Three.countdown(), Duration::from_millis(900));
    }

    #[test]
    fn test_countdown_strictly_decreasing() {
        let levels = Level::all();
        for pair in levels.windows(2) {
            assert!(
                pair[0].countdown() > pair[1].countdown(),
                "countdown must shrink from level {} to {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_multiplier() {
        assert_eq!(Level::One.multiplier(), 1);
        assert_eq!(Level::Two.multiplier(), 2);
        assert_eq!(Level::Three.multiplier(), 3);
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert!(Level::try_from(0).is_err());
        assert!(Level::try_from(4).is_err());
        assert_eq!(Level::try_from(2).unwrap(), Level::Two);
    }
}
