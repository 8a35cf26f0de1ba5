//! sigint-dojo CLI
//!
//! Usage:
//!   sigint-dojo                      # Interactive session, level 1
//!   sigint-dojo --level 3            # Start at the hardest level
//!   sigint-dojo --seed 42 --rounds 5 # Reproducible five-round drill
//!   sigint-dojo --json               # JSON line per round on exit
//!   sigint-dojo --tasks              # Print the drill table

use clap::Parser;
use std::io::{self, stdout, Stdout};
use std::time::{Duration, Instant};

use colored::Colorize;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use sigint_dojo::core::{TrainerEngine, CHALLENGES};
use sigint_dojo::types::{Level, Phase, RoundOutput};
use sigint_dojo::{COUNTDOWN_TICK_MS, VERSION};

/// Input poll interval; well under the countdown tick so keys feel instant
const POLL_INTERVAL_MS: u64 = 10;

#[derive(Parser, Debug)]
#[command(
    name = "sigint-dojo",
    version = VERSION,
    about = "Terminal reflex trainer - spot the dangerous command and interrupt it in time",
    long_about = "sigint-dojo shows a task and a simulated shell command, then runs the\n\
                  command against a countdown. Press Ctrl+C in time if the command is\n\
                  wrong or dangerous for the task; let it run if it is correct.\n\n\
                  Keys:\n  \
                  Ctrl+C        interrupt the running command\n  \
                  Enter/Space   start / stop / next challenge\n  \
                  1 2 3         pick a level (between rounds)\n  \
                  q or Esc      quit\n\n\
                  Nothing is executed; every command is a simulation."
)]
struct Args {
    /// Starting difficulty level (1-3)
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
    level: u8,

    /// Seed the challenge draw (reproducible drills)
    #[arg(long)]
    seed: Option<u64>,

    /// Emit one JSON line per resolved round when the session ends
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Print the drill table and exit
    #[arg(long)]
    tasks: bool,

    /// End the session after this many rounds
    #[arg(long)]
    rounds: Option<u32>,
}

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    if args.tasks {
        print_tasks();
        return;
    }

    let level = Level::try_from(args.level).unwrap_or(Level::One);
    let mut engine = match args.seed {
        Some(seed) => TrainerEngine::with_seed(level, seed),
        None => TrainerEngine::new(level),
    };

    match run_session(&mut engine, &args) {
        Ok(history) => report_session(&engine, &history, &args),
        Err(e) => {
            eprintln!("terminal error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Enter raw mode, run the session, always restore the terminal
fn run_session(engine: &mut TrainerEngine, args: &Args) -> io::Result<Vec<RoundOutput>> {
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = run_loop(&mut stdout, engine, args);

    execute!(stdout, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

/// Single-threaded event loop: short input polls multiplexed with the
/// 100ms countdown tick. Both round-ending paths go through the engine,
/// which guarantees at-most-once resolution.
fn run_loop(
    stdout: &mut Stdout,
    engine: &mut TrainerEngine,
    args: &Args,
) -> io::Result<Vec<RoundOutput>> {
    let mut history: Vec<RoundOutput> = Vec::new();
    let mut last_tick = Instant::now();

    loop {
        let limit_reached = args
            .rounds
            .map_or(false, |limit| engine.rounds_played() >= limit);

        render(stdout, engine, history.last(), args.no_color, limit_reached)?;

        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        if let Some(output) = engine.interrupt() {
                            history.push(output);
                        }
                    }
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Enter | KeyCode::Char(' ') => match engine.phase() {
                        Phase::Pretext => {
                            engine.start();
                        }
                        Phase::Command => {
                            engine.stop();
                        }
                        Phase::Result => {
                            if limit_reached {
                                break;
                            }
                            engine.reset();
                        }
                    },
                    KeyCode::Char(c @ '1'..='3') => {
                        if let Ok(level) = Level::try_from(c as u8 - b'0') {
                            engine.set_level(level);
                        }
                    }
                    _ => {}
                }
            }
        }

        let now = Instant::now();
        if now.duration_since(last_tick) >= Duration::from_millis(COUNTDOWN_TICK_MS) {
            last_tick = now;
            if let Some(output) = engine.tick_at(now) {
                history.push(output);
            }
        }
    }

    Ok(history)
}

/// Project the engine state onto the screen. Pure render, no state changes.
fn render(
    stdout: &mut Stdout,
    engine: &TrainerEngine,
    last: Option<&RoundOutput>,
    no_color: bool,
    limit_reached: bool,
) -> io::Result<()> {
    let now = Instant::now();
    let round = engine.round();
    let scores = engine.scores();
    let phase = engine.phase();

    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    let title = format!("SIGINT DOJO v{}", VERSION);
    line(stdout, 0, &title.bold().to_string())?;

    let phase_tag = if no_color {
        format!("[{}]", phase)
    } else {
        format!(
            "{}{} [{}]{}",
            phase.color_code(),
            phase.emoji(),
            phase,
            Phase::color_reset()
        )
    };
    let best = match scores.best_reaction {
        Some(best) => format!("{:.3}s", best.as_secs_f64()),
        None => "-".to_string(),
    };
    line(
        stdout,
        1,
        &format!(
            "{} level {} | score {} | high {} | best {}",
            phase_tag, scores.level, scores.score, scores.high_score, best
        ),
    )?;

    line(stdout, 3, &format!("TASK: {}", round.task.bold()))?;

    match phase {
        Phase::Pretext => {
            line(
                stdout,
                5,
                "A command is about to run for this task. If it looks wrong,",
            )?;
            line(stdout, 6, "kill it with Ctrl+C before it finishes.")?;
        }
        Phase::Command => {
            line(stdout, 5, &format!("$ {}", round.command.bold()))?;
            let remaining = engine.remaining_at(now).as_secs_f64();
            line(
                stdout,
                7,
                &format!("time left: {}", format!("{:.1}s", remaining).yellow()),
            )?;
        }
        Phase::Result => {
            line(stdout, 5, &format!("$ {}", round.command.bold()))?;
            let won = last.map_or(false, |output| output.outcome.is_win());
            let message = if round.game_over {
                round.message.red().to_string()
            } else if won {
                round.message.green().to_string()
            } else {
                round.message.yellow().to_string()
            };
            line(stdout, 7, &message)?;
            if round.game_over {
                line(stdout, 8, &"GAME OVER".red().bold().to_string())?;
            }
            if let Some(ms) = last.and_then(|output| output.reaction_ms) {
                line(stdout, 9, &format!("reaction: {:.3}s", ms as f64 / 1000.0))?;
            }
        }
    }

    let hint = match phase {
        Phase::Pretext => "[Enter] run the command   [1-3] level   [q] quit",
        Phase::Command => "[Ctrl+C] interrupt   [Enter] stop",
        Phase::Result if limit_reached => "[Enter] finish session   [q] quit",
        Phase::Result => "[Enter] next challenge   [1-3] level   [q] quit",
    };
    line(stdout, 11, &hint.dimmed().to_string())?;

    Ok(())
}

/// Write one row; raw mode needs explicit positioning, not newlines
fn line(stdout: &mut Stdout, row: u16, text: &str) -> io::Result<()> {
    execute!(stdout, MoveTo(0, row), Print(text))
}

/// Print the session summary, or the JSON event stream in --json mode
fn report_session(engine: &TrainerEngine, history: &[RoundOutput], args: &Args) {
    if args.json {
        for output in history {
            println!("{}", serde_json::to_string(output).unwrap());
        }
        return;
    }

    let scores = engine.scores();
    println!();
    println!("Session ended. Rounds: {}", engine.rounds_played());
    println!("  score         {}", scores.score);
    println!("  high score    {}", scores.high_score);
    if let Some(best) = scores.best_reaction {
        println!("  best reaction {:.3}s", best.as_secs_f64());
    }
    if let Some(last) = history.last() {
        println!("  last round    {}", last.to_parseable_string());
    }
}

/// Print the drill table: every task with both command pools
fn print_tasks() {
    println!("{}", "Drill table".bold());
    for challenge in CHALLENGES.iter() {
        println!();
        println!("{}", challenge.task.bold());
        for command in challenge.good {
            println!("  {} {}", "ok".green(), command);
        }
        for command in challenge.bad {
            println!("  {} {}", "!!".red(), command);
        }
    }
}
