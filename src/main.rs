//! Lane Dodge headless runner
//!
//! Plays a run in demo mode until the player crashes or the tick cap is hit, logging
//! events along the way, then prints a JSON summary.
//!
//! Usage: `lane-dodge [--seed N] [--tuning FILE] [--max-ticks N] [--snapshot]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use lane_dodge::sim::{GameEvent, GameState, Snapshot, TickInput, tick};
use lane_dodge::Tuning;

/// 60 fps for ten minutes
const DEFAULT_MAX_TICKS: u64 = 60 * 60 * 10;

/// Run a demo-mode game headlessly and print a JSON summary
#[derive(Parser, Debug)]
#[command(name = "lane-dodge", version, about)]
struct Options {
    /// Seed for the traffic pattern
    #[arg(long, default_value_t = 0x1a2e_d0d6e)]
    seed: u64,

    /// JSON tuning file (missing fields take their defaults)
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Stop after this many ticks even if the player is still alive
    #[arg(long, default_value_t = DEFAULT_MAX_TICKS)]
    max_ticks: u64,

    /// Include the final render snapshot in the summary
    #[arg(long)]
    snapshot: bool,
}

#[derive(Serialize)]
struct Summary {
    seed: u64,
    ticks: u64,
    score: u64,
    speed: f32,
    crashed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot: Option<Snapshot>,
}

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::parse();

    let tuning = match &options.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    log::info!("Lane Dodge (headless) starting, seed {}", options.seed);
    let mut state = GameState::with_tuning(options.seed, tuning)?;
    let mut input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    while state.time_ticks < options.max_ticks {
        let result = tick(&mut state, &mut input);
        for event in &result.events {
            match event {
                GameEvent::ScoreChanged { score } => log::debug!("Score: {score}"),
                GameEvent::SpeedIncreased { speed } => log::info!("Speed up: {speed:.1}"),
                GameEvent::GameOver { score } => log::info!("Crashed with score {score}"),
                other => log::trace!("{other:?}"),
            }
        }
        if result.game_over {
            break;
        }
    }

    let summary = Summary {
        seed: options.seed,
        ticks: state.time_ticks,
        score: state.score,
        speed: state.speed,
        crashed: state.is_game_over(),
        snapshot: options.snapshot.then(|| Snapshot::capture(&state)),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
