//! Roaming black hole: fades in, drifts, fades out. Flying into it while it
//! is fully formed warps the ship home with a shield and rapid fire.

use std::f64::consts::TAU;

use crate::constants::{
    BLACK_HOLE_ACTIVE_MS, BLACK_HOLE_DANGER_OFFSET_MS, BLACK_HOLE_FADE_IN_MS,
    BLACK_HOLE_FADE_OUT_MS, BLACK_HOLE_RADIUS, BLACK_HOLE_SPEED, BLACK_HOLE_SPIN_DEG,
    BLACK_HOLE_SPIRAL_TURNS, HEIGHT, SHIP_RADIUS, WIDTH,
};
use crate::game::geometry::{distance, transform, wrap_position, Point};
use crate::game::rng::SeededRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BlackHolePhase {
    #[default]
    FadingIn,
    Active,
    FadingOut,
}

#[derive(Clone, Debug)]
pub struct BlackHole {
    pub x: f64,
    pub y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    /// Spin in degrees.
    pub rotation: f64,
    pub phase: BlackHolePhase,
    pub opacity: u8,
    pub spawned_at: u64,
}

const FADE_OUT_START_MS: u64 = BLACK_HOLE_FADE_IN_MS + BLACK_HOLE_ACTIVE_MS;
const LIFETIME_MS: u64 = FADE_OUT_START_MS + BLACK_HOLE_FADE_OUT_MS;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn ramp(elapsed: u64, duration: u64) -> u8 {
    (255.0 * (elapsed as f64 / duration as f64)).clamp(0.0, 255.0) as u8
}

impl BlackHole {
    pub fn spawn(rng: &mut SeededRng, now: u64) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let (w, h) = (WIDTH as i32, HEIGHT as i32);
        let x = f64::from(rng.range_inclusive(0, w));
        let y = f64::from(rng.range_inclusive(0, h));
        let direction = rng.uniform(0.0, TAU);
        Self {
            x,
            y,
            vel_x: BLACK_HOLE_SPEED * direction.cos(),
            vel_y: BLACK_HOLE_SPEED * direction.sin(),
            rotation: 0.0,
            phase: BlackHolePhase::FadingIn,
            opacity: 0,
            spawned_at: now,
        }
    }

    pub fn update(&mut self, now: u64, frames: f64) {
        let elapsed = now.saturating_sub(self.spawned_at);

        match self.phase {
            BlackHolePhase::FadingIn => {
                if elapsed < BLACK_HOLE_FADE_IN_MS {
                    self.opacity = ramp(elapsed, BLACK_HOLE_FADE_IN_MS);
                } else {
                    self.phase = BlackHolePhase::Active;
                    self.opacity = 255;
                }
            }
            BlackHolePhase::Active => {
                if elapsed >= FADE_OUT_START_MS {
                    self.phase = BlackHolePhase::FadingOut;
                }
            }
            BlackHolePhase::FadingOut => {
                let fade = elapsed.saturating_sub(FADE_OUT_START_MS);
                self.opacity = 255 - ramp(fade.min(BLACK_HOLE_FADE_OUT_MS), BLACK_HOLE_FADE_OUT_MS);
            }
        }

        self.rotation += BLACK_HOLE_SPIN_DEG * frames;
        (self.x, self.y) = wrap_position(self.x + self.vel_x * frames, self.y + self.vel_y * frames);
    }

    /// Whether contact with the ship counts right now.
    #[must_use]
    pub fn is_dangerous(&self, now: u64) -> bool {
        let elapsed = now.saturating_sub(self.spawned_at);
        elapsed >= BLACK_HOLE_DANGER_OFFSET_MS
            && elapsed < FADE_OUT_START_MS + BLACK_HOLE_DANGER_OFFSET_MS
    }

    #[must_use]
    pub fn finished(&self, now: u64) -> bool {
        now.saturating_sub(self.spawned_at) >= LIFETIME_MS
    }

    #[must_use]
    pub fn touches_ship(&self, sx: f64, sy: f64) -> bool {
        distance(sx, sy, self.x, self.y) < BLACK_HOLE_RADIUS + SHIP_RADIUS
    }

    /// Archimedean spiral in world space, rotated by the current spin.
    #[must_use]
    pub fn spiral(&self) -> Vec<Point> {
        let max_theta = TAU * BLACK_HOLE_SPIRAL_TURNS;
        let scale = BLACK_HOLE_RADIUS / max_theta;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = (max_theta / 0.1) as u32 + 1;
        let local: Vec<Point> = (0..steps)
            .map(|i| {
                let theta = f64::from(i) * 0.1;
                (scale * theta * theta.cos(), scale * theta * theta.sin())
            })
            .collect();
        transform(&local, self.x, self.y, self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hole_at(x: f64, y: f64) -> BlackHole {
        BlackHole {
            x,
            y,
            vel_x: 0.0,
            vel_y: 0.0,
            rotation: 0.0,
            phase: BlackHolePhase::FadingIn,
            opacity: 0,
            spawned_at: 0,
        }
    }

    #[test]
    fn test_lifecycle_phases() {
        let mut hole = hole_at(500.0, 500.0);

        hole.update(1000, 1.0);
        assert_eq!(hole.phase, BlackHolePhase::FadingIn);
        assert_eq!(hole.opacity, 127);

        hole.update(2000, 1.0);
        assert_eq!(hole.phase, BlackHolePhase::Active);
        assert_eq!(hole.opacity, 255);

        hole.update(13_000, 1.0);
        assert_eq!(hole.phase, BlackHolePhase::FadingOut);

        hole.update(14_000, 1.0);
        assert_eq!(hole.opacity, 128);
        assert!(!hole.finished(14_999));
        assert!(hole.finished(15_000));
    }

    #[test]
    fn test_danger_window() {
        let hole = hole_at(0.0, 0.0);
        assert!(!hole.is_dangerous(999));
        assert!(hole.is_dangerous(1000));
        assert!(hole.is_dangerous(13_999));
        assert!(!hole.is_dangerous(14_000));
    }

    #[test]
    fn test_touches_ship() {
        let hole = hole_at(500.0, 500.0);
        assert!(hole.touches_ship(500.0 + 125.0, 500.0));
        assert!(!hole.touches_ship(500.0 + 126.0, 500.0));
    }

    #[test]
    fn test_spiral_fits_radius() {
        let hole = hole_at(500.0, 500.0);
        let spiral = hole.spiral();
        assert!(spiral.len() > 300);
        assert!(spiral
            .iter()
            .all(|&(x, y)| distance(x, y, 500.0, 500.0) <= BLACK_HOLE_RADIUS + 1e-9));
    }

    #[test]
    fn test_spawn_drifts_slowly() {
        let mut rng = SeededRng::new(8);
        let hole = BlackHole::spawn(&mut rng, 42);
        assert_eq!(hole.spawned_at, 42);
        assert!((hole.vel_x.hypot(hole.vel_y) - BLACK_HOLE_SPEED).abs() < 1e-12);
    }
}
