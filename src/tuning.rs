//! Data-driven game balance
//!
//! Every number that shapes the feel of the game lives here, so the
//! simulation itself contains no hardcoded magic values. A `Tuning` can be
//! loaded from JSON (see the demo binary) and is validated once, up front:
//! a gap that leaves no legal spawn range is a construction-time error, not
//! something the spawner discovers mid-run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid tuning detected at session construction.
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("screen dimensions must be positive, got {width}x{height}")]
    BadScreen { width: f32, height: f32 },
    #[error("no valid spawn range: 2*min_pipe_height + pipe_gap = {required} exceeds screen height {screen_h}")]
    GapTooLarge { required: f32, screen_h: f32 },
    #[error("gravity must be positive, got {0}")]
    BadGravity(f32),
    #[error("flap impulse must be negative (upward), got {0}")]
    BadFlapImpulse(f32),
    #[error("pipe speed must be positive, got {0}")]
    BadPipeSpeed(f32),
    #[error("spawn interval must be at least 1 tick")]
    BadSpawnInterval,
    #[error("bird {bird_w}x{bird_h} does not fit the {screen_w}x{screen_h} screen")]
    BirdTooLarge {
        bird_w: f32,
        bird_h: f32,
        screen_w: f32,
        screen_h: f32,
    },
}

/// Tunable constants for one game session.
///
/// Defaults reproduce the classic feel: a 320x480 surface, quarter-pixel
/// gravity, a 120 px gap scrolling at 2 px/tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Play surface width in pixels
    pub screen_w: f32,
    /// Play surface height in pixels
    pub screen_h: f32,
    /// Downward acceleration per tick (px/tick^2)
    pub gravity: f32,
    /// Velocity set on each flap (negative = upward)
    pub flap_impulse: f32,
    /// Bird bounding box
    pub bird_w: f32,
    pub bird_h: f32,
    /// Bird's fixed horizontal position
    pub bird_x: f32,
    /// Vertical extent of the opening between a pipe pair
    pub pipe_gap: f32,
    /// Leftward pipe travel per tick (px/tick)
    pub pipe_speed: f32,
    /// Pipe bounding-box width
    pub pipe_w: f32,
    /// Ticks that must elapse between spawns
    pub spawn_interval: u64,
    /// Shortest pipe the spawner may produce (both pieces)
    pub min_pipe_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_w: 320.0,
            screen_h: 480.0,
            gravity: 0.25,
            flap_impulse: -5.0,
            bird_w: 34.0,
            bird_h: 24.0,
            bird_x: 50.0,
            pipe_gap: 120.0,
            pipe_speed: 2.0,
            pipe_w: 52.0,
            spawn_interval: 90,
            min_pipe_height: 50.0,
        }
    }
}

impl Tuning {
    /// Bird spawn position (top-left), vertically centered.
    pub fn bird_start_y(&self) -> f32 {
        self.screen_h / 2.0 - self.bird_h / 2.0
    }

    /// Validate the tuning as a whole. Called by `GameState::new`.
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.screen_w <= 0.0 || self.screen_h <= 0.0 {
            return Err(TuningError::BadScreen {
                width: self.screen_w,
                height: self.screen_h,
            });
        }
        let required = 2.0 * self.min_pipe_height + self.pipe_gap;
        if self.pipe_gap <= 0.0 || self.min_pipe_height < 0.0 || required > self.screen_h {
            return Err(TuningError::GapTooLarge {
                required,
                screen_h: self.screen_h,
            });
        }
        if self.gravity <= 0.0 {
            return Err(TuningError::BadGravity(self.gravity));
        }
        if self.flap_impulse >= 0.0 {
            return Err(TuningError::BadFlapImpulse(self.flap_impulse));
        }
        if self.pipe_speed <= 0.0 {
            return Err(TuningError::BadPipeSpeed(self.pipe_speed));
        }
        if self.spawn_interval == 0 {
            return Err(TuningError::BadSpawnInterval);
        }
        if self.bird_w <= 0.0
            || self.bird_h <= 0.0
            || self.bird_x + self.bird_w > self.screen_w
            || self.bird_h > self.screen_h
        {
            return Err(TuningError::BirdTooLarge {
                bird_w: self.bird_w,
                bird_h: self.bird_h,
                screen_w: self.screen_w,
                screen_h: self.screen_h,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_gap_exceeding_screen_rejected() {
        let tuning = Tuning {
            pipe_gap: 480.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::GapTooLarge { .. })
        ));
    }

    #[test]
    fn test_min_height_squeeze_rejected() {
        // Gap fits, but the two minimum pipe pieces no longer do
        let tuning = Tuning {
            min_pipe_height: 200.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::GapTooLarge { .. })
        ));
    }

    #[test]
    fn test_upward_flap_required() {
        let tuning = Tuning {
            flap_impulse: 5.0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::BadFlapImpulse(5.0)));
    }

    #[test]
    fn test_bird_start_centered() {
        let tuning = Tuning::default();
        assert_eq!(tuning.bird_start_y(), 228.0);
    }

    #[test]
    fn test_tuning_json_round_trip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.spawn_interval, tuning.spawn_interval);
        assert_eq!(back.gravity, tuning.gravity);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"pipe_gap": 140.0}"#).unwrap();
        assert_eq!(tuning.pipe_gap, 140.0);
        assert_eq!(tuning.screen_w, 320.0);
    }
}
