//! Read-only render snapshot
//!
//! The render boundary: everything a renderer needs for one frame, captured
//! from the state without exposing any way to mutate it. Which overlay to
//! draw ("press to start", nothing, "game over") follows from `phase`.

use std::f32::consts::FRAC_PI_4;

use crate::decor::Decor;
use crate::sim::rect::Rect;
use crate::sim::state::{Bird, GamePhase, GameState, PipeKind};

/// One frame's worth of drawable state.
#[derive(Debug)]
pub struct Frame<'a> {
    pub bird: Rect,
    /// Vertical velocity, px/tick
    pub bird_vel: f32,
    /// Body rotation in radians; positive tips the beak down
    pub tilt: f32,
    /// Index into the wing sprite cycle
    pub wing_frame: usize,
    /// Live pipe boxes with their kinds, in spawn order (Top before Bottom
    /// within a pair)
    pub pipes: Vec<(Rect, PipeKind)>,
    pub score: u32,
    pub phase: GamePhase,
    pub decor: &'a Decor,
}

impl<'a> Frame<'a> {
    pub fn capture(state: &'a GameState) -> Self {
        let t = &state.tuning;
        let mut pipes = Vec::with_capacity(state.pipes.len() * 2);
        for pair in &state.pipes {
            pipes.push((pair.top_rect(t), PipeKind::Top));
            pipes.push((pair.bottom_rect(t), PipeKind::Bottom));
        }
        Self {
            bird: state.bird.rect(t),
            bird_vel: state.bird.vel,
            tilt: tilt_angle(state.bird.vel),
            wing_frame: Bird::animation_frame(state.tick_count),
            pipes,
            score: state.score,
            phase: state.phase,
            decor: &state.decor,
        }
    }
}

/// Body tilt from vertical velocity, clamped to ±45°.
pub fn tilt_angle(vel: f32) -> f32 {
    (vel * 0.1).clamp(-FRAC_PI_4, FRAC_PI_4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PipePair;
    use crate::tuning::Tuning;

    #[test]
    fn test_tilt_tracks_velocity_within_clamp() {
        assert_eq!(tilt_angle(0.0), 0.0);
        assert_eq!(tilt_angle(2.0), 0.2);
        assert_eq!(tilt_angle(-3.0), -0.3);
    }

    #[test]
    fn test_tilt_clamped_to_quarter_pi() {
        assert_eq!(tilt_angle(100.0), FRAC_PI_4);
        assert_eq!(tilt_angle(-100.0), -FRAC_PI_4);
    }

    #[test]
    fn test_frame_lists_pairs_in_order() {
        let mut state = GameState::new(Tuning::default(), 5).unwrap();
        state.pipes.push(PipePair::new(200.0, 150.0));
        state.pipes.push(PipePair::new(320.0, 250.0));

        let frame = Frame::capture(&state);
        assert_eq!(frame.pipes.len(), 4);
        assert_eq!(frame.pipes[0].1, PipeKind::Top);
        assert_eq!(frame.pipes[0].0.left(), 200.0);
        assert_eq!(frame.pipes[1].1, PipeKind::Bottom);
        assert_eq!(frame.pipes[1].0.left(), 200.0);
        assert_eq!(frame.pipes[2].0.left(), 320.0);
    }

    #[test]
    fn test_frame_reflects_phase_and_score() {
        let mut state = GameState::new(Tuning::default(), 5).unwrap();
        state.score = 3;
        state.phase = GamePhase::GameOver;
        let frame = Frame::capture(&state);
        assert_eq!(frame.score, 3);
        assert_eq!(frame.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_frame_bird_box_matches_tuning() {
        let state = GameState::new(Tuning::default(), 5).unwrap();
        let frame = Frame::capture(&state);
        assert_eq!(frame.bird.width, 34.0);
        assert_eq!(frame.bird.height, 24.0);
        assert_eq!(frame.bird.left(), 50.0);
        assert_eq!(frame.bird.top(), 228.0);
    }
}
