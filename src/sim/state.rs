//! Game state and core simulation types
//!
//! Everything the simulation owns lives here: the bird, the live pipe
//! pairs, the score, and the phase machine. The state is serializable and,
//! together with the seed, fully determines a run.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::decor::Decor;
use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Scene visible, nothing moving, waiting for the first activation
    Start,
    /// Active gameplay
    Playing,
    /// Run ended; next activation resets back to Start
    GameOver,
}

/// Which piece of a pipe pair a box belongs to (render boundary only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipeKind {
    Top,
    Bottom,
}

/// Number of wing sprites in the flap cycle.
pub const FLAP_FRAME_COUNT: u64 = 3;
/// Ticks each wing sprite is held before advancing.
pub const FLAP_FRAME_DELAY: u64 = 5;

/// The player's bird.
///
/// Only vertical motion is simulated; the horizontal position is fixed and
/// the world scrolls past. Velocity is never clamped: the accelerating fall
/// after a death is part of the feel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner
    pub pos: Vec2,
    /// Vertical velocity in px/tick (positive = falling)
    pub vel: f32,
}

impl Bird {
    /// Bird at its spawn pose: fixed x, vertically centered, at rest.
    pub fn at_start(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.bird_x, tuning.bird_start_y()),
            vel: 0.0,
        }
    }

    /// Kick the bird upward. Unconditional; callers gate on phase.
    pub fn flap(&mut self, tuning: &Tuning) {
        self.vel = tuning.flap_impulse;
    }

    /// One step of vertical physics.
    pub fn integrate(&mut self, tuning: &Tuning) {
        self.vel += tuning.gravity;
        self.pos.y += self.vel;
    }

    pub fn rect(&self, tuning: &Tuning) -> Rect {
        Rect::new(self.pos.x, self.pos.y, tuning.bird_w, tuning.bird_h)
    }

    /// Which wing sprite to show, as a pure function of the game clock.
    pub fn animation_frame(tick_count: u64) -> usize {
        ((tick_count / FLAP_FRAME_DELAY) % FLAP_FRAME_COUNT) as usize
    }
}

/// One spawn event: a top and a bottom pipe sharing an x position, split by
/// the gap. A single record with one `passed` flag, so a pair can never be
/// half-scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipePair {
    /// Left edge of both pieces
    pub x: f32,
    /// Height of the top piece; also the gap's upper edge
    pub gap_y: f32,
    /// One-shot scoring flag
    pub passed: bool,
}

impl PipePair {
    pub fn new(x: f32, gap_y: f32) -> Self {
        Self {
            x,
            gap_y,
            passed: false,
        }
    }

    /// Scroll the pair left by `speed`.
    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// Right edge of both pieces; scoring compares this to the bird's left.
    pub fn trailing_edge(&self, tuning: &Tuning) -> f32 {
        self.x + tuning.pipe_w
    }

    /// Fully left of `left_bound`, ready for removal.
    pub fn is_offscreen(&self, left_bound: f32, tuning: &Tuning) -> bool {
        self.trailing_edge(tuning) < left_bound
    }

    pub fn top_rect(&self, tuning: &Tuning) -> Rect {
        Rect::new(self.x, 0.0, tuning.pipe_w, self.gap_y)
    }

    pub fn bottom_rect(&self, tuning: &Tuning) -> Rect {
        let y = self.gap_y + tuning.pipe_gap;
        Rect::new(self.x, y, tuning.pipe_w, tuning.screen_h - y)
    }

    /// Vertical midline of the gap (autopilot steering target).
    pub fn gap_center(&self, tuning: &Tuning) -> f32 {
        self.gap_y + tuning.pipe_gap / 2.0
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance constants, validated at construction
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gap-placement RNG, advanced only by the spawner
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    pub score: u32,
    /// Ticks since the last reset
    pub tick_count: u64,
    /// Tick of the most recent pipe spawn
    pub last_spawn_tick: u64,
    pub bird: Bird,
    /// Live pipe pairs in spawn order
    pub pipes: Vec<PipePair>,
    /// Cosmetic backdrop, generated once from the seed
    pub decor: Decor,
}

impl GameState {
    /// Create a session. Rejects malformed tuning up front rather than
    /// letting the spawner trip over an empty gap range later.
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        let decor = Decor::generate(seed, tuning.screen_w, tuning.screen_h);
        let bird = Bird::at_start(&tuning);
        Ok(Self {
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            score: 0,
            tick_count: 0,
            last_spawn_tick: 0,
            bird,
            pipes: Vec::new(),
            decor,
        })
    }

    /// Dispatch one activation signal through the phase machine.
    ///
    /// Start begins play, Playing flaps, GameOver resets back to the Start
    /// preview. The RNG and backdrop carry across resets.
    pub fn handle_activate(&mut self) {
        match self.phase {
            GamePhase::Start => self.phase = GamePhase::Playing,
            GamePhase::Playing => self.bird.flap(&self.tuning),
            GamePhase::GameOver => {
                self.reset();
                self.phase = GamePhase::Start;
            }
        }
    }

    /// Back to a fresh run: bird re-centered, pipes gone, counters zeroed.
    fn reset(&mut self) {
        self.bird = Bird::at_start(&self.tuning);
        self.pipes.clear();
        self.score = 0;
        self.tick_count = 0;
        self.last_spawn_tick = 0;
    }
}
