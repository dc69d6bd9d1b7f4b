//! Flapwing entry point
//!
//! Headless demo driver: stands in for a renderer and an input device by
//! running the autopilot against the simulation at full speed and logging
//! what a real frontend would draw.

use std::fs;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use flapwing::sim::{GamePhase, GameState, TickInput, tick};
use flapwing::tuning::Tuning;
use flapwing::view::Frame;

/// Demo length cap, ~1 minute at 60 ticks/s.
const DEMO_TICKS: u64 = 3600;

/// Driver owning the state and the coalesced one-shot input.
struct Driver {
    state: GameState,
    input: TickInput,
}

impl Driver {
    fn new(tuning: Tuning, seed: u64) -> Result<Self, flapwing::TuningError> {
        Ok(Self {
            state: GameState::new(tuning, seed)?,
            input: TickInput::default(),
        })
    }

    /// Run one tick, consuming any queued activation.
    fn step(&mut self) {
        let input = self.input;
        tick(&mut self.state, &input);
        self.input.activate = false;
    }
}

fn load_tuning(path: &str) -> Result<Tuning, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("reading {path}: {e}"))?;
    serde_json::from_str(&text).map_err(|e| format!("parsing {path}: {e}"))
}

fn main() -> ExitCode {
    env_logger::init();

    let tuning = match std::env::args().nth(1) {
        Some(path) => match load_tuning(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning override from {path}");
                tuning
            }
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Tuning::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut driver = match Driver::new(tuning, seed) {
        Ok(driver) => driver,
        Err(e) => {
            log::error!("Invalid tuning: {e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Flapwing demo starting (seed {seed})");
    driver.input.idle = true;

    let mut last_score = 0;
    for _ in 0..DEMO_TICKS {
        driver.step();
        let state = &driver.state;
        if state.score != last_score {
            last_score = state.score;
            log::info!("Score: {} (tick {})", state.score, state.tick_count);
        }
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let frame = Frame::capture(&driver.state);
    println!(
        "Demo over: score {}, {} ticks, phase {:?}, {} pipes on screen",
        frame.score,
        driver.state.tick_count,
        frame.phase,
        frame.pipes.len() / 2,
    );

    ExitCode::SUCCESS
}
