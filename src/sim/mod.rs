//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, touched only by the spawner
//! - Stable iteration order (pipes in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::collides;
pub use rect::Rect;
pub use state::{Bird, GamePhase, GameState, PipeKind, PipePair};
pub use tick::{TickInput, spawn_pair, tick};
