//! Game tuning parameters
//!
//! Every gameplay constant lives in one immutable value constructed once and
//! handed to the world on reset. Tests build variants (e.g. zero speed
//! growth) without touching any shared state.

use crate::consts::*;

/// Full set of gameplay constants for one simulation.
///
/// Units are per-tick: velocities move that many world units each tick,
/// accelerations add to velocity each tick. The world runs at
/// [`TICK_RATE`] ticks per second.
#[derive(Debug, Clone)]
pub struct Tuning {
    // World
    pub world_width: f32,
    pub ground_y: f32,

    // Player
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Vertical impulse on a grounded jump (negative = up)
    pub jump_impulse: f32,
    /// Vertical impulse on the airborne double jump
    pub double_jump_impulse: f32,
    /// Slide duration in ticks
    pub slide_ticks: u32,

    // Scrolling and spawning
    pub base_scroll_speed: f32,
    /// Scroll speed gained every tick (unbounded)
    pub speed_growth: f32,
    /// Spawn interval at tick zero
    pub base_spawn_interval: f32,
    /// Interval shrinks by `speed_growth` per elapsed tick down to this floor
    pub min_spawn_interval: f32,
    /// Horizontal margin past the right edge where obstacles appear
    pub spawn_margin: f32,

    // Obstacle dimension ranges (inclusive)
    pub obstacle_width_min: f32,
    pub obstacle_width_max: f32,
    pub obstacle_height_min: f32,
    pub obstacle_height_max: f32,

    // Scoring
    pub pass_points: u32,

    // Particles (cosmetic only)
    /// Particles emitted by the crash burst
    pub burst_count: usize,
    /// Downward velocity drift per tick
    pub particle_drift: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            ground_y: GROUND_Y,

            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            gravity: 1.05,
            jump_impulse: -17.0,
            double_jump_impulse: -14.0,
            slide_ticks: 25,

            base_scroll_speed: 8.0,
            speed_growth: 0.004,
            base_spawn_interval: 95.0,
            min_spawn_interval: 40.0,
            spawn_margin: 20.0,

            obstacle_width_min: 40.0,
            obstacle_width_max: 70.0,
            obstacle_height_min: 40.0,
            obstacle_height_max: 100.0,

            pass_points: PASS_POINTS,

            burst_count: 30,
            particle_drift: 0.25,
        }
    }
}

impl Tuning {
    /// Spawn-interval reset value after `ticks` elapsed ticks: linearly
    /// shrinking, clamped to the floor, so cadence only ever speeds up.
    pub fn spawn_interval(&self, ticks: u64) -> u32 {
        let interval = self.base_spawn_interval - ticks as f32 * self.speed_growth;
        interval.max(self.min_spawn_interval) as u32
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_interval_shrinks_to_floor() {
        let tuning = Tuning::default();
        let mut prev = tuning.spawn_interval(0);
        assert_eq!(prev, tuning.base_spawn_interval as u32);

        for ticks in (0..100_000).step_by(500) {
            let interval = tuning.spawn_interval(ticks);
            assert!(interval <= prev, "interval must never grow");
            assert!(interval >= tuning.min_spawn_interval as u32);
            prev = interval;
        }

        // Far enough out the floor is reached exactly
        assert_eq!(
            tuning.spawn_interval(10_000_000),
            tuning.min_spawn_interval as u32
        );
    }
}
