//! Round phase definitions

use serde::{Deserialize, Serialize};

/// The three phases of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Task shown, command still hidden
    Pretext,
    /// Command shown, countdown running
    Command,
    /// Outcome shown, waiting for next round
    Result,
}

impl Phase {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            Phase::Pretext => "\x1b[90m", // Gray
            Phase::Command => "\x1b[33m", // Orange/Yellow
            Phase::Result => "\x1b[36m",  // Cyan
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get emoji for phase
    pub fn emoji(&self) -> &'static str {
        match self {
            Phase::Pretext => "🎯",
            Phase::Command => "⏳",
            Phase::Result => "🏁",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Pretext => "PRETEXT",
            Phase::Command => "COMMAND",
            Phase::Result => "RESULT",
        };
        write!(f, "{}", name)
    }
}
