//! Cosmetic particle pool
//!
//! Purely visual: nothing here feeds back into scoring, collision, or
//! phase transitions, so headless tests can ignore it entirely.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::tuning::Tuning;

/// Hard cap on live particles; bursts past the cap are dropped oldest-first.
pub const MAX_PARTICLES: usize = 256;

/// Crash burst color
pub const BURST_COLOR: (u8, u8, u8) = (90, 240, 255);

/// A single ephemeral particle.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks remaining
    pub life: u32,
    /// Initial lifetime, kept for the fade ratio
    pub max_life: u32,
    pub radius: f32,
    pub color: (u8, u8, u8),
}

impl Particle {
    /// Remaining-life ratio in [0, 1]; renderers use it for fade-out.
    pub fn fade(&self) -> f32 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f32 / self.max_life as f32
        }
    }
}

/// Emit a burst of `count` particles at `pos` with randomized velocity,
/// lifetime, and radius.
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    rng: &mut Pcg32,
    pos: Vec2,
    count: usize,
    color: (u8, u8, u8),
) {
    for _ in 0..count {
        let vel = Vec2::new(rng.random_range(-3.0..=3.0), rng.random_range(-5.0..=-2.0));
        let life = rng.random_range(20..=40);
        particles.push(Particle {
            pos,
            vel,
            life,
            max_life: life,
            radius: rng.random_range(2.0..=5.0),
            color,
        });
    }
    if particles.len() > MAX_PARTICLES {
        let excess = particles.len() - MAX_PARTICLES;
        particles.drain(..excess);
    }
}

/// One tick of particle kinematics: advance, drift downward, age out.
pub fn update_particles(particles: &mut Vec<Particle>, tuning: &Tuning) {
    for p in particles.iter_mut() {
        p.pos += p.vel;
        p.vel.y += tuning.particle_drift;
        p.life -= 1;
    }
    particles.retain(|p| p.life > 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_burst_ranges() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut particles = Vec::new();
        spawn_burst(&mut particles, &mut rng, Vec2::new(100.0, 100.0), 30, BURST_COLOR);
        assert_eq!(particles.len(), 30);
        for p in &particles {
            assert!((-3.0..=3.0).contains(&p.vel.x));
            assert!((-5.0..=-2.0).contains(&p.vel.y));
            assert!((20..=40).contains(&p.life));
            assert_eq!(p.life, p.max_life);
            assert!((2.0..=5.0).contains(&p.radius));
        }
    }

    #[test]
    fn test_particles_age_out() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut particles = Vec::new();
        let tuning = Tuning::default();
        spawn_burst(&mut particles, &mut rng, Vec2::ZERO, 10, BURST_COLOR);

        // Max lifetime is 40 ticks; everything must be gone by then
        for _ in 0..40 {
            update_particles(&mut particles, &tuning);
        }
        assert!(particles.is_empty());
    }

    #[test]
    fn test_fade_decreases() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut particles = Vec::new();
        let tuning = Tuning::default();
        spawn_burst(&mut particles, &mut rng, Vec2::ZERO, 1, BURST_COLOR);
        assert_eq!(particles[0].fade(), 1.0);

        update_particles(&mut particles, &tuning);
        assert!(particles[0].fade() < 1.0);
    }

    #[test]
    fn test_pool_cap() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut particles = Vec::new();
        for _ in 0..20 {
            spawn_burst(&mut particles, &mut rng, Vec2::ZERO, 30, BURST_COLOR);
        }
        assert!(particles.len() <= MAX_PARTICLES);
    }
}
