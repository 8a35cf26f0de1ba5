//! Output structures for terminal display

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::types::{Outcome, Phase};

/// Output structure emitted when a round resolves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Phase after the transition (always Result)
    pub phase: Phase,
    /// How the round ended
    pub outcome: Outcome,
    /// The command that was on screen
    pub command: String,
    /// Countdown remaining when the round resolved (milliseconds)
    pub remaining_ms: u64,
    /// Reaction time, present only on interrupt outcomes (milliseconds)
    pub reaction_ms: Option<u64>,
    /// Signed point delta applied by this outcome
    pub points_delta: i32,
    /// Score after the delta
    pub score: u32,
    /// High score after the delta
    pub high_score: u32,
    /// Did the round end the game?
    pub game_over: bool,
    /// Outcome flavor text
    pub message: String,
}

impl RoundOutput {
    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = if self.outcome.is_win() {
            "\x1b[32m"
        } else {
            "\x1b[31m"
        };
        let reset = Phase::color_reset();
        let reaction = match self.reaction_ms {
            Some(ms) => format!(" | reaction={:.3}s", ms as f64 / 1000.0),
            None => String::new(),
        };

        format!(
            "{}{} | {:+} | score={} | high={}{}{}",
            color,
            self.outcome.code(),
            self.points_delta,
            self.score,
            self.high_score,
            reaction,
            reset
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        let reaction = match self.reaction_ms {
            Some(ms) => format!("{:.3}s", ms as f64 / 1000.0),
            None => "-".to_string(),
        };

        format!(
            "outcome={} | delta={:+} | score={} | high={} | reaction={} | game_over={}",
            self.outcome.code(),
            self.points_delta,
            self.score,
            self.high_score,
            reaction,
            self.game_over
        )
    }
}
