//! Neon Runner - an endless-runner for the terminal
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Single-integer high score persistence

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScoreStore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// World dimensions (simulation units, y grows downward)
    pub const WORLD_WIDTH: f32 = 900.0;
    pub const WORLD_HEIGHT: f32 = 540.0;
    /// Walking surface: bottom edges of grounded entities sit here
    pub const GROUND_Y: f32 = WORLD_HEIGHT - 90.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 150.0;
    pub const PLAYER_WIDTH: f32 = 48.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;

    /// Points awarded when an obstacle passes behind the player
    pub const PASS_POINTS: u32 = 15;
}
