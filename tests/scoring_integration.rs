//! Integration tests for scoring across whole rounds
//!
//! The award/penalty functions are pure; these tests check they hold up
//! when driven through the engine over many rounds.

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use sigint_dojo::core::{interrupt_award, TrainerEngine};
use sigint_dojo::types::Level;

/// Awarded points match max(1, floor((3 - t) * 10) * level) exactly
#[test]
fn test_award_matches_reference_formula() {
    let cases = [
        (0.0, Level::One),
        (0.5, Level::One),
        (1.25, Level::Two),
        (2.4, Level::Two),
        (0.9, Level::Three),
        (2.99, Level::Three),
        (3.5, Level::One),
    ];

    for (secs, level) in cases {
        let expected = (((3.0_f64 - secs) * 10.0).floor() as i64 * level.multiplier() as i64).max(1);
        let actual = interrupt_award(Duration::from_secs_f64(secs), level);
        assert_eq!(actual as i64, expected, "t={}s level={}", secs, level);
    }
}

/// A catch through the engine pays the same as the pure function
#[test]
fn test_engine_catch_agrees_with_pure_award() {
    for (millis, level) in [(200, Level::One), (700, Level::Two), (450, Level::Three)] {
        let mut engine = TrainerEngine::with_seed(level, 21);
        engine.load_drill("Stop the web server gracefully.", "kill -9 -1", true);
        let t0 = Instant::now();
        engine.start_at(t0);

        let reaction = Duration::from_millis(millis);
        let output = engine
            .interrupt_at(t0 + reaction)
            .expect("interrupt must resolve");

        assert_eq!(output.points_delta as u32, interrupt_award(reaction, level));
    }
}

/// Any sequence of penalties leaves the score at max(0, score - penalty)
#[test]
fn test_score_never_negative_over_penalty_sequence() {
    let mut engine = TrainerEngine::with_seed(Level::Three, 21);

    for _ in 0..10 {
        engine.load_drill("Show the current load.", "uptime", false);
        let t0 = Instant::now();
        engine.start_at(t0);
        engine.interrupt_at(t0 + Duration::from_millis(100));
        assert_eq!(engine.scores().score, 0);
    }
}

/// High score never decreases, whatever the current score does
#[test]
fn test_high_score_monotone_over_session() {
    let mut engine = TrainerEngine::with_seed(Level::Two, 21);
    let mut previous_high = 0;

    // Alternate catches (earn) and false interrupts (lose)
    for i in 0..12 {
        let dangerous = i % 2 == 0;
        engine.load_drill("Show the current load.", "uptime", dangerous);
        let t0 = Instant::now();
        engine.start_at(t0);
        engine.interrupt_at(t0 + Duration::from_millis(400));

        let high = engine.scores().high_score;
        assert!(
            high >= previous_high,
            "high score dropped from {} to {}",
            previous_high,
            high
        );
        previous_high = high;
    }

    assert!(previous_high > 0);
}
