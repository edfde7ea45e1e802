//! Fixed timestep simulation tick
//!
//! One call advances the world by exactly one tick. Only the Playing phase
//! runs physics; every other phase just waits for its transition input.

use glam::Vec2;
use rand::Rng;

use super::particles::{self, BURST_COLOR};
use super::state::{GamePhase, GameState, Obstacle};

/// Input snapshot for a single tick.
///
/// `jump` and `slide` are sampled held-state; `start`, `pause`, and
/// `restart` are edge-triggered events, at most one transition each per
/// tick. Quit is the caller's concern and never reaches the sim.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub jump: bool,
    pub slide: bool,
    pub start: bool,
    pub pause: bool,
    pub restart: bool,
}

/// What a tick amounted to, for callers that react to events (sound,
/// persistence) without diffing the whole state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing notable happened
    Continue,
    /// At least one obstacle was passed and scored this tick
    Scored,
    /// The run ended this tick; the high score is already updated
    Collided,
}

/// Advance the game state by one fixed timestep.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    match state.phase {
        GamePhase::Title => {
            if input.start {
                state.reset();
                state.phase = GamePhase::Playing;
            }
            return TickOutcome::Continue;
        }
        GamePhase::GameOver => {
            if input.restart {
                state.reset();
                state.phase = GamePhase::Playing;
            }
            return TickOutcome::Continue;
        }
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
            }
            return TickOutcome::Continue;
        }
        GamePhase::Playing => {
            if input.pause {
                // Freeze in place; the last snapshot stays renderable
                state.phase = GamePhase::Paused;
                return TickOutcome::Continue;
            }
        }
    }

    // Player physics
    if input.jump {
        state.player.jump(&state.tuning);
    }
    if input.slide {
        state.player.slide(&state.tuning);
    }
    state.player.update(&state.tuning);

    // Cosmetic particles
    particles::update_particles(&mut state.particles, &state.tuning);

    // Obstacle spawner
    state.spawn_timer = state.spawn_timer.saturating_sub(1);
    if state.spawn_timer == 0 {
        spawn_obstacle(state);
        state.spawn_timer = state.tuning.spawn_interval(state.ticks);
    }

    // Collision & scoring: scroll, cull off-screen, award passes, then test
    // the player's hitbox
    let speed = state.scroll_speed;
    for ob in &mut state.obstacles {
        ob.x -= speed;
    }
    state.obstacles.retain(|ob| ob.right() >= 0.0);

    let mut scored = false;
    let player_left = state.player.x;
    for ob in &mut state.obstacles {
        if !ob.passed && ob.right() < player_left {
            ob.passed = true;
            state.score += state.tuning.pass_points;
            scored = true;
        }
    }

    let hitbox = state.player.hitbox();
    if state.obstacles.iter().any(|ob| ob.aabb().intersects(&hitbox)) {
        state.phase = GamePhase::GameOver;
        let center = Vec2::new(
            state.player.x + state.player.width / 2.0,
            state.player.y + state.player.height / 2.0,
        );
        particles::spawn_burst(
            &mut state.particles,
            &mut state.rng,
            center,
            state.tuning.burst_count,
            BURST_COLOR,
        );
        if state.score > state.high_score {
            state.high_score = state.score;
        }
        return TickOutcome::Collided;
    }

    // Difficulty scaler
    state.ticks += 1;
    state.scroll_speed += state.tuning.speed_growth;

    if scored {
        TickOutcome::Scored
    } else {
        TickOutcome::Continue
    }
}

/// Instantiate one obstacle just past the right edge with randomized
/// dimensions.
fn spawn_obstacle(state: &mut GameState) {
    let width = state
        .rng
        .random_range(state.tuning.obstacle_width_min..=state.tuning.obstacle_width_max);
    let height = state
        .rng
        .random_range(state.tuning.obstacle_height_min..=state.tuning.obstacle_height_max);
    let x = state.tuning.world_width + state.tuning.spawn_margin;
    let obstacle = Obstacle::new(x, width, height, &state.tuning);
    state.obstacles.push(obstacle);
}
