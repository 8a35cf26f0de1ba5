//! Trainer engine: round state machine
//!
//! Phase transitions:
//! - Pretext → Command: start() arms the countdown for the level's window
//! - Command → Result: interrupt (key) or timeout (tick), never both
//! - Result → Pretext: begin_challenge() draws the next round
//!
//! The interrupt and timeout paths both pass through the countdown's
//! test-and-clear disarm, so whichever event the loop delivers first
//! resolves the round and the other becomes a no-op.

use std::time::{Duration, Instant};

use chrono::Utc;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::core::content::{CHALLENGES, FAILURE_MESSAGES};
use crate::core::countdown::Countdown;
use crate::core::scoring;
use crate::types::{Level, Outcome, Phase, RoundOutput, RoundState, ScoreState};

/// Round controller and session state
#[derive(Debug)]
pub struct TrainerEngine {
    /// Current round, replaced by begin_challenge()
    round: RoundState,
    /// Countdown for the active Command phase
    countdown: Countdown,
    /// Session scores, survive across rounds
    scores: ScoreState,
    /// Challenge draw
    rng: StdRng,
    /// Rounds resolved this session
    rounds_played: u32,
}

impl TrainerEngine {
    /// Create an engine with an OS-seeded draw and a first challenge ready
    pub fn new(level: Level) -> Self {
        Self::with_rng(level, StdRng::from_os_rng())
    }

    /// Create an engine with a deterministic draw (reproducible drills)
    pub fn with_seed(level: Level, seed: u64) -> Self {
        Self::with_rng(level, StdRng::seed_from_u64(seed))
    }

    fn with_rng(level: Level, rng: StdRng) -> Self {
        let mut engine = Self {
            round: RoundState::new("", "", false),
            countdown: Countdown::new(),
            scores: ScoreState::new(level),
            rng,
            rounds_played: 0,
        };
        engine.begin_challenge();
        engine
    }

    /// Draw a fresh round: uniform task, unbiased good/bad coin, uniform
    /// command from the matching pool. Phase returns to Pretext.
    pub fn begin_challenge(&mut self) {
        self.countdown.disarm();

        let challenge = &CHALLENGES[self.rng.random_range(0..CHALLENGES.len())];
        let dangerous = self.rng.random_bool(0.5);
        let pool = if dangerous { challenge.bad } else { challenge.good };
        let command = pool[self.rng.random_range(0..pool.len())];

        self.round = RoundState::new(challenge.task, command, dangerous);
    }

    /// Entry point for the next round after a Result phase
    pub fn reset(&mut self) {
        self.begin_challenge();
    }

    /// Install a specific round instead of drawing one (custom drills)
    pub fn load_drill(&mut self, task: &str, command: &str, should_interrupt: bool) {
        self.countdown.disarm();
        self.round = RoundState::new(task, command, should_interrupt);
    }

    /// Pretext → Command: reveal the command and arm the countdown.
    /// Returns false if no Pretext round is waiting.
    pub fn start(&mut self) -> bool {
        self.start_at(Instant::now())
    }

    /// start() with an explicit clock
    pub fn start_at(&mut self, now: Instant) -> bool {
        if self.round.phase != Phase::Pretext {
            return false;
        }
        self.round.phase = Phase::Command;
        self.countdown.arm(self.scores.level.countdown(), now);
        true
    }

    /// Disarm the countdown and leave the Command phase without scoring.
    /// Idempotent; safe to call when nothing is running.
    pub fn stop(&mut self) {
        let was_armed = self.countdown.disarm();
        if was_armed && self.round.phase == Phase::Command {
            self.round.phase = Phase::Pretext;
            self.round.message.clear();
        }
    }

    /// The player hit the interrupt key
    pub fn interrupt(&mut self) -> Option<RoundOutput> {
        self.interrupt_at(Instant::now())
    }

    /// interrupt() with an explicit clock. No-op outside the Command
    /// phase or after the countdown has already been disarmed.
    pub fn interrupt_at(&mut self, now: Instant) -> Option<RoundOutput> {
        if self.round.phase != Phase::Command {
            return None;
        }
        if !self.countdown.disarm() {
            return None;
        }

        let reaction = self.countdown.elapsed(now);
        let remaining = self.countdown.initial().saturating_sub(reaction);
        self.scores.record_reaction(reaction);

        let (outcome, delta, message) = if self.round.should_interrupt {
            let award = scoring::interrupt_award(reaction, self.scores.level);
            self.scores.award(award);
            let message = format!(
                "Interrupted in {:.3}s. That command had no business running. +{} points.",
                reaction.as_secs_f64(),
                award
            );
            (Outcome::CaughtInTime, award as i32, message)
        } else {
            let penalty = scoring::false_interrupt_penalty(self.scores.score, self.scores.level);
            self.scores.penalize(penalty);
            let message = format!(
                "That command was doing exactly what was asked. -{} points.",
                penalty
            );
            (Outcome::FalseInterrupt, -(penalty as i32), message)
        };

        Some(self.resolve(outcome, delta, Some(reaction), remaining, message))
    }

    /// Periodic tick. Resolves the round once the armed window runs out;
    /// returns None while time remains or after the round is resolved.
    pub fn tick(&mut self) -> Option<RoundOutput> {
        self.tick_at(Instant::now())
    }

    /// tick() with an explicit clock
    pub fn tick_at(&mut self, now: Instant) -> Option<RoundOutput> {
        if !self.countdown.expired(now) {
            return None;
        }
        if !self.countdown.disarm() {
            return None;
        }

        let (outcome, delta, message) = if self.round.should_interrupt {
            let index = self.rng.random_range(0..FAILURE_MESSAGES.len());
            (Outcome::Breached, 0, FAILURE_MESSAGES[index].to_string())
        } else {
            let award = scoring::completion_award(self.scores.level);
            self.scores.award(award);
            let message = format!("Command completed cleanly. +{} points.", award);
            (Outcome::CleanRun, award as i32, message)
        };

        Some(self.resolve(outcome, delta, None, Duration::ZERO, message))
    }

    /// Change difficulty. Rejected while a command is running.
    pub fn set_level(&mut self, level: Level) -> bool {
        if self.round.phase == Phase::Command {
            return false;
        }
        self.scores.level = level;
        true
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.round.phase
    }

    /// Current round
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Session scores
    pub fn scores(&self) -> &ScoreState {
        &self.scores
    }

    /// Is a command running (countdown armed)?
    pub fn is_active(&self) -> bool {
        self.countdown.is_armed()
    }

    /// Time left in the active window; zero when nothing is running
    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.countdown.remaining(now)
    }

    /// Rounds resolved this session
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Apply the terminal transition and build the round report
    fn resolve(
        &mut self,
        outcome: Outcome,
        points_delta: i32,
        reaction: Option<Duration>,
        remaining: Duration,
        message: String,
    ) -> RoundOutput {
        self.round.phase = Phase::Result;
        self.round.game_over = outcome.ends_game();
        self.round.message = message.clone();
        self.rounds_played += 1;

        RoundOutput {
            timestamp: Utc::now(),
            phase: Phase::Result,
            outcome,
            command: self.round.command.clone(),
            remaining_ms: remaining.as_millis() as u64,
            reaction_ms: reaction.map(|r| r.as_millis() as u64),
            points_delta,
            score: self.scores.score,
            high_score: self.scores.high_score,
            game_over: self.round.game_over,
            message,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
