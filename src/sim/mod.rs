//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, input-device, or filesystem dependencies

pub mod collision;
pub mod particles;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use particles::{MAX_PARTICLES, Particle};
pub use state::{GamePhase, GameState, Obstacle, Player};
pub use tick::{TickInput, TickOutcome, tick};
