//! Flapwing - a side-scrolling flap-through-the-gap arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collision, phase machine)
//! - `tuning`: Data-driven game balance, validated at construction
//! - `decor`: Seeded, immutable backdrop generation
//! - `view`: Read-only frame snapshots for renderers
//!
//! Renderers and input devices are external collaborators: they feed
//! activation signals into [`sim::TickInput`] and draw from [`view::Frame`].

pub mod decor;
pub mod sim;
pub mod tuning;
pub mod view;

pub use decor::Decor;
pub use sim::{GamePhase, GameState, TickInput, tick};
pub use tuning::{Tuning, TuningError};
pub use view::Frame;
