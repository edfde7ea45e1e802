//! Game state and core simulation types
//!
//! The world aggregate is owned by the main loop and mutated only through
//! [`crate::sim::tick`]; nothing retains references into it across ticks.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::particles::Particle;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting on the title screen for a start input
    Title,
    /// Active gameplay
    Playing,
    /// Frozen mid-run; the last snapshot stays renderable
    Paused,
    /// Run ended, waiting for a restart input
    GameOver,
}

/// The runner. X is fixed for the whole run; only vertical motion is
/// simulated.
#[derive(Debug, Clone)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity, positive = downward
    pub vy: f32,
    pub width: f32,
    pub height: f32,
    pub on_ground: bool,
    /// Airborne jump charge: armed on takeoff, consumed on use
    pub can_double_jump: bool,
    pub is_sliding: bool,
    /// Ticks of slide remaining
    pub slide_timer: u32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: tuning.player_x,
            y: tuning.ground_y - tuning.player_height,
            vy: 0.0,
            width: tuning.player_width,
            height: tuning.player_height,
            on_ground: true,
            can_double_jump: true,
            is_sliding: false,
            slide_timer: 0,
        }
    }

    /// Jump input. Grounded: full impulse and re-arm the double jump.
    /// Airborne with the charge available: smaller impulse, charge consumed.
    /// Otherwise a no-op. Jumping while sliding is allowed; the slide ends
    /// on the next landing.
    pub fn jump(&mut self, tuning: &Tuning) {
        if self.on_ground {
            self.vy = tuning.jump_impulse;
            self.on_ground = false;
            self.can_double_jump = true;
        } else if self.can_double_jump {
            self.vy = tuning.double_jump_impulse;
            self.can_double_jump = false;
        }
    }

    /// Slide input. Only takes effect when grounded and not already sliding.
    pub fn slide(&mut self, tuning: &Tuning) {
        if self.on_ground && !self.is_sliding {
            self.is_sliding = true;
            self.slide_timer = tuning.slide_ticks;
        }
    }

    /// One tick of vertical physics: semi-implicit Euler, then ground clamp.
    /// Landing zeroes velocity and force-ends any active slide.
    pub fn update(&mut self, tuning: &Tuning) {
        self.vy += tuning.gravity;
        self.y += self.vy;

        if self.y + self.height >= tuning.ground_y {
            self.y = tuning.ground_y - self.height;
            self.vy = 0.0;
            self.on_ground = true;
            self.is_sliding = false;
        }

        if self.is_sliding {
            self.slide_timer = self.slide_timer.saturating_sub(1);
            if self.slide_timer == 0 {
                self.is_sliding = false;
            }
        }
    }

    /// Collision box: full bounding box normally, lower half while sliding.
    pub fn hitbox(&self) -> Aabb {
        if self.is_sliding {
            Aabb::new(
                self.x,
                self.y + self.height / 2.0,
                self.width,
                self.height / 2.0,
            )
        } else {
            Aabb::new(self.x, self.y, self.width, self.height)
        }
    }
}

/// A ground obstacle scrolling leftward at the world speed.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Set once when the trailing edge clears the player; gates pass scoring
    pub passed: bool,
}

impl Obstacle {
    /// Spawn with the given dimensions, base resting on the ground.
    pub fn new(x: f32, width: f32, height: f32, tuning: &Tuning) -> Self {
        Self {
            x,
            y: tuning.ground_y - height,
            width,
            height,
            passed: false,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

/// Complete world aggregate for one simulation.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving obstacle dimensions and particle bursts
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Score this run (monotone while Playing)
    pub score: u32,
    /// Best score seen this process lifetime (monotone across runs)
    pub high_score: u32,
    /// World units scrolled per tick; grows every Playing tick
    pub scroll_speed: f32,
    /// Ticks until the next obstacle spawns
    pub spawn_timer: u32,
    /// Playing ticks elapsed this run
    pub ticks: u64,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Immutable gameplay constants for this simulation
    pub tuning: Tuning,
}

impl GameState {
    /// Create a new world on the title screen.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Title,
            score: 0,
            high_score: 0,
            scroll_speed: tuning.base_scroll_speed,
            spawn_timer: tuning.base_spawn_interval as u32,
            ticks: 0,
            player: Player::new(&tuning),
            obstacles: Vec::new(),
            particles: Vec::new(),
            tuning,
        }
    }

    /// Full world reset for a fresh run: new player, cleared collections,
    /// base speed and spawn countdown, score zeroed. The high score and the
    /// RNG stream survive.
    pub fn reset(&mut self) {
        self.player = Player::new(&self.tuning);
        self.obstacles.clear();
        self.particles.clear();
        self.score = 0;
        self.scroll_speed = self.tuning.base_scroll_speed;
        self.spawn_timer = self.tuning.base_spawn_interval as u32;
        self.ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_world_is_on_title() {
        let state = GameState::new(7, Tuning::default());
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.score, 0);
        assert_eq!(state.scroll_speed, state.tuning.base_scroll_speed);
        assert!(state.obstacles.is_empty());
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_reset_keeps_high_score() {
        let mut state = GameState::new(7, Tuning::default());
        state.score = 300;
        state.high_score = 450;
        state.scroll_speed = 12.0;
        state.ticks = 999;
        let tuning = state.tuning.clone();
        state.obstacles.push(Obstacle::new(500.0, 50.0, 60.0, &tuning));

        state.reset();
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 450);
        assert_eq!(state.scroll_speed, state.tuning.base_scroll_speed);
        assert_eq!(state.ticks, 0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_slide_hitbox_is_lower_half() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        let full = player.hitbox();

        player.slide(&tuning);
        let low = player.hitbox();
        assert_eq!(low.size.y, full.size.y / 2.0);
        assert_eq!(low.pos.y, full.pos.y + full.size.y / 2.0);
        // Bottom edge unchanged: still standing on the ground
        assert_eq!(low.bottom(), full.bottom());
    }

    #[test]
    fn test_slide_requires_ground() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.jump(&tuning);
        assert!(!player.on_ground);

        player.slide(&tuning);
        assert!(!player.is_sliding);
    }

    #[test]
    fn test_landing_ends_slide() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.slide(&tuning);
        assert!(player.is_sliding);

        player.jump(&tuning);
        // Run physics until the player lands again
        for _ in 0..200 {
            player.update(&tuning);
            if player.on_ground {
                break;
            }
        }
        assert!(player.on_ground);
        assert!(!player.is_sliding);
    }

    #[test]
    fn test_obstacle_base_sits_on_ground() {
        let tuning = Tuning::default();
        let ob = Obstacle::new(920.0, 50.0, 80.0, &tuning);
        assert_eq!(ob.y + ob.height, tuning.ground_y);
        assert!(!ob.passed);
    }
}
