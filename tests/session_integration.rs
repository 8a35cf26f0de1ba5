//! Integration tests for session-level behavior
//!
//! Output formats, level switching, stop semantics, and one real-time
//! run with the wall clock.

use std::thread::sleep;
use std::time::{Duration, Instant};

use sigint_dojo::core::TrainerEngine;
use sigint_dojo::types::{Level, Outcome, Phase, RoundOutput};
use sigint_dojo::COUNTDOWN_TICK_MS;

#[test]
fn test_round_output_json_round_trips() {
    let mut engine = TrainerEngine::with_seed(Level::One, 31);
    engine.load_drill("Show the current load.", "uptime", true);
    let t0 = Instant::now();
    engine.start_at(t0);
    let output = engine
        .interrupt_at(t0 + Duration::from_millis(500))
        .expect("interrupt must resolve");

    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"outcome\""));
    assert!(json.contains("CAUGHT_IN_TIME"));
    assert!(json.contains("\"score\""));

    let parsed: RoundOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.outcome, Outcome::CaughtInTime);
    assert_eq!(parsed.points_delta, output.points_delta);
}

#[test]
fn test_parseable_output_format() {
    let mut engine = TrainerEngine::with_seed(Level::Two, 31);
    engine.load_drill("Show the current load.", "uptime", false);
    let t0 = Instant::now();
    engine.start_at(t0);
    let output = engine
        .tick_at(t0 + Duration::from_millis(1600))
        .expect("expired window must resolve");

    let formatted = output.to_parseable_string();
    assert!(formatted.contains("outcome=CLEAN_RUN"));
    assert!(formatted.contains("delta=+10"));
    assert!(formatted.contains("score="));
    assert!(formatted.contains("game_over=false"));
}

#[test]
fn test_level_switch_only_between_rounds() {
    let mut engine = TrainerEngine::with_seed(Level::One, 31);

    assert!(engine.set_level(Level::Two));
    let t0 = Instant::now();
    engine.start_at(t0);
    assert!(!engine.set_level(Level::Three), "level is locked mid-command");
    assert_eq!(engine.scores().level, Level::Two);

    engine.tick_at(t0 + Duration::from_millis(1600));
    assert!(engine.set_level(Level::Three), "level unlocks after the round");
}

#[test]
fn test_stop_cancels_pending_timeout() {
    let mut engine = TrainerEngine::with_seed(Level::One, 31);
    let t0 = Instant::now();
    engine.start_at(t0);
    engine.stop();

    // A tick long past the window must find nothing to resolve
    assert!(engine.tick_at(t0 + Duration::from_secs(60)).is_none());
    assert_eq!(engine.rounds_played(), 0);
    assert_eq!(engine.phase(), Phase::Pretext);
}

#[test]
fn test_best_reaction_tracks_fastest_round() {
    let mut engine = TrainerEngine::with_seed(Level::One, 31);

    for millis in [800u64, 300, 600] {
        engine.load_drill("Show the current load.", "uptime", true);
        let t0 = Instant::now();
        engine.start_at(t0);
        engine.interrupt_at(t0 + Duration::from_millis(millis));
    }

    assert_eq!(
        engine.scores().best_reaction,
        Some(Duration::from_millis(300))
    );
    assert_eq!(
        engine.scores().last_reaction,
        Some(Duration::from_millis(600))
    );
}

/// Real-time run: a level-3 dangerous command left alone resolves as a
/// breach within a few ticks past the 0.9s window
#[test]
fn test_real_time_breach() {
    let mut engine = TrainerEngine::with_seed(Level::Three, 31);
    engine.load_drill("Create a backup copy of notes.txt.", "rm notes.txt", true);
    engine.start();

    let deadline = Instant::now() + Duration::from_secs(3);
    let output = loop {
        if let Some(output) = engine.tick() {
            break output;
        }
        assert!(Instant::now() < deadline, "window never expired");
        sleep(Duration::from_millis(COUNTDOWN_TICK_MS));
    };

    assert_eq!(output.outcome, Outcome::Breached);
    assert!(output.game_over);
}
