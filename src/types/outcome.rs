//! Round outcome codes

use serde::{Deserialize, Serialize};

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// Dangerous command interrupted before it finished
    CaughtInTime,
    /// Valid command interrupted by mistake
    FalseInterrupt,
    /// Safe command ran to completion
    CleanRun,
    /// Dangerous command ran to completion - game over
    Breached,
}

impl Outcome {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::CaughtInTime => "CAUGHT_IN_TIME",
            Self::FalseInterrupt => "FALSE_INTERRUPT",
            Self::CleanRun => "CLEAN_RUN",
            Self::Breached => "BREACHED",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::CaughtInTime => "Dangerous command interrupted in time",
            Self::FalseInterrupt => "Valid command interrupted by mistake",
            Self::CleanRun => "Safe command ran to completion",
            Self::Breached => "Dangerous command ran to completion",
        }
    }

    /// Did this outcome earn points?
    pub fn is_win(&self) -> bool {
        matches!(self, Self::CaughtInTime | Self::CleanRun)
    }

    /// Does this outcome end the game?
    pub fn ends_game(&self) -> bool {
        matches!(self, Self::Breached)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
