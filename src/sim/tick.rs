//! Fixed timestep simulation tick
//!
//! One call advances the world by exactly one tick. The ordering inside is
//! load-bearing: spawning happens before physics, scoring sees each pipe's
//! post-move position before its collision test, and a death stops the rest
//! of the tick without rolling anything back.

use rand::Rng;

use super::collision::collides;
use super::state::{GamePhase, GameState, PipePair};

/// Input for a single tick (deterministic)
///
/// `activate` is the coalesced one-shot signal from whatever input device
/// the driver listens to; the driver clears it after each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Activation signal (key press, click, tap) since the last tick
    pub activate: bool,
    /// Demo autopilot: synthesize activations instead of a player
    pub idle: bool,
}

/// Advance the game state by one tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    let activate = input.activate || (input.idle && autopilot_wants_flap(state));

    if activate {
        let was_playing = state.phase == GamePhase::Playing;
        state.handle_activate();
        // Leaving Start or GameOver consumes the tick; the scene stays
        // static until the next one.
        if !was_playing {
            return;
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.tick_count += 1;

    if state.tick_count - state.last_spawn_tick > state.tuning.spawn_interval {
        spawn_pair(state);
        state.last_spawn_tick = state.tick_count;
    }

    state.bird.integrate(&state.tuning);
    let bird_rect = state.bird.rect(&state.tuning);
    let bird_left = state.bird.pos.x;
    let speed = state.tuning.pipe_speed;

    for i in 0..state.pipes.len() {
        state.pipes[i].advance(speed);

        // Score when the pair's trailing edge slips strictly past the
        // bird's leading edge. One flag per pair, so at most once.
        if !state.pipes[i].passed && state.pipes[i].trailing_edge(&state.tuning) < bird_left {
            state.pipes[i].passed = true;
            state.score += 1;
        }

        let pair = &state.pipes[i];
        if collides(&bird_rect, &pair.top_rect(&state.tuning))
            || collides(&bird_rect, &pair.bottom_rect(&state.tuning))
        {
            state.phase = GamePhase::GameOver;
            // Pipes already advanced this tick stay advanced.
            return;
        }
    }

    let tuning = &state.tuning;
    state.pipes.retain(|p| !p.is_offscreen(0.0, tuning));

    if state.bird.pos.y <= 0.0
        || state.bird.pos.y + state.tuning.bird_h >= state.tuning.screen_h
    {
        state.phase = GamePhase::GameOver;
    }
}

/// Append a fresh pair at the right edge with a uniformly placed gap.
///
/// The draw is an inclusive integer range, so the shortest and tallest
/// legal top pipes are both reachable. Tuning validation guarantees the
/// range is non-empty.
pub fn spawn_pair(state: &mut GameState) {
    let t = &state.tuning;
    let min = t.min_pipe_height as u32;
    let max = (t.screen_h - t.pipe_gap - t.min_pipe_height) as u32;
    let gap_y = state.rng.random_range(min..=max) as f32;
    state.pipes.push(PipePair::new(state.tuning.screen_w, gap_y));
}

/// Demo-mode pilot: flap whenever the bird is sinking below the midline of
/// the nearest gap still ahead of it.
fn autopilot_wants_flap(state: &GameState) -> bool {
    match state.phase {
        // Keep the demo running through menus
        GamePhase::Start | GamePhase::GameOver => true,
        GamePhase::Playing => {
            let t = &state.tuning;
            let bird_mid = state.bird.pos.y + t.bird_h / 2.0;
            // Aim a quarter-gap below center: the rise of one flap cycle
            // then keeps the whole hover band inside the gap.
            let target = state
                .pipes
                .iter()
                .find(|p| p.trailing_edge(t) >= state.bird.pos.x)
                .map(|p| p.gap_center(t) + t.pipe_gap / 4.0)
                .unwrap_or(t.screen_h / 2.0);
            state.bird.vel > 0.0 && bird_mid > target
        }
    }
}
