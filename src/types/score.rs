//! Session scoring state
//!
//! Lives for the whole session, across rounds. Never persisted.

use std::time::Duration;

use crate::types::Level;

/// Score and reaction statistics for the session
#[derive(Debug, Clone)]
pub struct ScoreState {
    /// Current score, never negative
    pub score: u32,
    /// Best score seen this session, monotone non-decreasing
    pub high_score: u32,
    /// Active difficulty level
    pub level: Level,
    /// Reaction time of the most recent interrupt
    pub last_reaction: Option<Duration>,
    /// Fastest interrupt of the session
    pub best_reaction: Option<Duration>,
}

impl ScoreState {
    /// Create a zeroed score state at the given level
    pub fn new(level: Level) -> Self {
        Self {
            score: 0,
            high_score: 0,
            level,
            last_reaction: None,
            best_reaction: None,
        }
    }

    /// Add points and keep the high score in sync
    pub fn award(&mut self, points: u32) {
        self.score += points;
        self.high_score = self.high_score.max(self.score);
    }

    /// Deduct points, saturating at zero. Returns the amount actually deducted.
    pub fn penalize(&mut self, points: u32) -> u32 {
        let deducted = points.min(self.score);
        self.score -= deducted;
        deducted
    }

    /// Record an interrupt reaction time
    pub fn record_reaction(&mut self, reaction: Duration) {
        self.last_reaction = Some(reaction);
        self.best_reaction = Some(match self.best_reaction {
            Some(best) => best.min(reaction),
            None => reaction,
        });
    }
}

// =============================================================================
// TESTS
// =============================================================================
