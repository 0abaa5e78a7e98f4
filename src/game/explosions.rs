//! Particle bursts left behind by anything that blows up.

use std::f64::consts::TAU;

use crate::game::rng::SeededRng;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    /// Remaining life in frames.
    pub life: f64,
}

impl Particle {
    /// Draw radius, shrinking as the particle burns out.
    #[must_use]
    pub fn radius(&self) -> f64 {
        (self.life / 10.0).floor().max(1.0)
    }
}

#[derive(Debug, Default)]
pub struct ExplosionManager {
    pub bursts: Vec<Vec<Particle>>,
}

impl ExplosionManager {
    pub fn spawn(&mut self, rng: &mut SeededRng, x: f64, y: f64, count: usize) {
        let burst = (0..count)
            .map(|_| {
                let vel_x = rng.uniform(1.8, 5.4) * rng.uniform(0.0, TAU).cos();
                let vel_y = rng.uniform(1.8, 5.4) * rng.uniform(0.0, TAU).sin();
                Particle {
                    x,
                    y,
                    vel_x,
                    vel_y,
                    life: f64::from(rng.range_inclusive(20, 40)),
                }
            })
            .collect();
        self.bursts.push(burst);
    }

    pub fn update(&mut self, frames: f64) {
        for burst in &mut self.bursts {
            for p in burst.iter_mut() {
                p.x += p.vel_x * frames;
                p.y += p.vel_y * frames;
                p.life -= frames;
            }
            burst.retain(|p| p.life > 0.0);
        }
        self.bursts.retain(|burst| !burst.is_empty());
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.bursts.iter().flatten()
    }

    pub fn clear(&mut self) {
        self.bursts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_creates_burst() {
        let mut rng = SeededRng::new(1);
        let mut explosions = ExplosionManager::default();
        explosions.spawn(&mut rng, 10.0, 10.0, 20);
        assert_eq!(explosions.bursts.len(), 1);
        assert_eq!(explosions.particles().count(), 20);
        assert!(explosions
            .particles()
            .all(|p| (20.0..=40.0).contains(&p.life)));
    }

    #[test]
    fn test_bursts_burn_out() {
        let mut rng = SeededRng::new(1);
        let mut explosions = ExplosionManager::default();
        explosions.spawn(&mut rng, 0.0, 0.0, 8);
        explosions.update(19.0);
        assert_eq!(explosions.particles().count(), 8);
        explosions.update(21.0);
        assert!(explosions.bursts.is_empty());
    }

    #[test]
    fn test_particle_radius_floor() {
        let p = Particle {
            x: 0.0,
            y: 0.0,
            vel_x: 0.0,
            vel_y: 0.0,
            life: 5.0,
        };
        assert!((p.radius() - 1.0).abs() < f64::EPSILON);
    }
}
