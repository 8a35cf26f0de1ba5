//! Per-round state
//!
//! A RoundState is created fresh for each round and replaced on the next.
//! `should_interrupt` is fixed at round start and never changes.

use crate::types::Phase;

/// State of the current round
#[derive(Debug, Clone)]
pub struct RoundState {
    /// The stated task
    pub task: String,
    /// The command being "run"
    pub command: String,
    /// Whether interrupting is the correct response
    pub should_interrupt: bool,
    /// Current phase
    pub phase: Phase,
    /// Did a dangerous command run to completion?
    pub game_over: bool,
    /// Outcome flavor text, empty until the round resolves
    pub message: String,
}

impl RoundState {
    /// Create a fresh round in the Pretext phase
    pub fn new(task: impl Into<String>, command: impl Into<String>, should_interrupt: bool) -> Self {
        Self {
            task: task.into(),
            command: command.into(),
            should_interrupt,
            phase: Phase::Pretext,
            game_over: false,
            message: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_round_is_clean() {
        let round = RoundState::new("List files", "ls -la", false);
        assert_eq!(round.phase, Phase::Pretext);
        assert!(!round.game_over);
        assert!(round.message.is_empty());
    }
}
