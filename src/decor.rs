//! Procedural backdrop
//!
//! Clouds, a building skyline with lit windows, and the ground band. All of
//! it is cosmetic and generated exactly once: a pure function of the seed
//! and screen size into an immutable descriptor. The decor RNG stream is
//! separate from the gameplay RNG, so adding or removing decoration draws
//! can never shift gap placement.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Height of the ground band along the bottom edge.
pub const GROUND_HEIGHT: f32 = 80.0;
/// Height of the grass lip on top of the ground band.
pub const GRASS_HEIGHT: f32 = 15.0;
/// Number of clouds in the upper sky.
pub const CLOUD_COUNT: usize = 5;
/// Spacing between the centers of a building's window grid.
pub const WINDOW_SPACING: f32 = 8.0;
/// Side length of one window.
pub const WINDOW_SIZE: f32 = 5.0;

const BUILDING_SPACING: f32 = 5.0;

/// Stream offset separating decor draws from gameplay draws.
const DECOR_STREAM: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cloud {
    /// Center position in the upper half of the sky
    pub pos: Vec2,
    /// Radius of the main puff
    pub size: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Height above the ground band
    pub height: f32,
    /// Row-major lit flags for the window grid (`window_rows` x
    /// `window_cols` entries)
    pub lit_windows: Vec<bool>,
}

impl Building {
    pub fn window_rows(&self) -> usize {
        ((self.height / WINDOW_SPACING) as usize).saturating_sub(1)
    }

    pub fn window_cols(&self) -> usize {
        ((self.width / WINDOW_SPACING) as usize).saturating_sub(1)
    }
}

/// Immutable backdrop descriptor for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decor {
    pub clouds: Vec<Cloud>,
    pub buildings: Vec<Building>,
    pub ground_height: f32,
    pub grass_height: f32,
}

impl Decor {
    /// Generate the backdrop for a `width` x `height` sky.
    pub fn generate(seed: u64, width: f32, height: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed ^ DECOR_STREAM);

        let cloud_ceiling = (height / 2.0 - 30.0).max(0.0);
        let clouds = (0..CLOUD_COUNT)
            .map(|_| Cloud {
                pos: Vec2::new(
                    rng.random_range(0.0..=width),
                    rng.random_range(0.0..=cloud_ceiling),
                ),
                size: 20.0 + rng.random_range(0.0..=30.0),
            })
            .collect();

        let mut buildings = Vec::new();
        let mut x = 0.0;
        while x < width {
            let bw = 20.0 + rng.random_range(0.0..=40.0);
            let bh = 40.0 + rng.random_range(0.0..=60.0);
            let mut building = Building {
                x,
                width: bw,
                height: bh,
                lit_windows: Vec::new(),
            };
            let windows = building.window_rows() * building.window_cols();
            building.lit_windows = (0..windows).map(|_| rng.random_bool(0.5)).collect();
            buildings.push(building);
            x += bw + BUILDING_SPACING;
        }

        Self {
            clouds,
            buildings,
            ground_height: GROUND_HEIGHT,
            grass_height: GRASS_HEIGHT,
        }
    }
}
