//! The hostile saucer: chases the ship, reels it in and launches missiles.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::constants::{
    HEIGHT, TRACTOR_PULL_SPEED, TRACTOR_WAVES, UFO_DETECTION_RADIUS, UFO_HEALTH, UFO_HEIGHT,
    UFO_RADIUS, UFO_RIB_COUNT, UFO_SPEED, UFO_TURN_RATE, UFO_WIDTH, WIDTH,
};
use crate::game::geometry::{distance, turn_toward, wrap_position, Point};
use crate::game::rng::SeededRng;
use crate::game::ship::Ship;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Clone, Debug)]
pub struct Ufo {
    pub x: f64,
    pub y: f64,
    /// Heading in radians, y down.
    pub angle: f64,
    pub health: u32,
    pub rib_offset: f64,
    pub tractor_offset: f64,
}

impl Ufo {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            angle: 0.0,
            health: UFO_HEALTH,
            rib_offset: 0.0,
            tractor_offset: 0.0,
        }
    }

    /// Appear at a random point on a random edge of the playfield.
    pub fn spawn_on_edge(rng: &mut SeededRng) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let (w, h) = (WIDTH as i32, HEIGHT as i32);
        match rng.pick(&[Edge::Left, Edge::Right, Edge::Top, Edge::Bottom]) {
            Edge::Left => Self::new(0.0, f64::from(rng.range_inclusive(0, h))),
            Edge::Right => Self::new(WIDTH, f64::from(rng.range_inclusive(0, h))),
            Edge::Top => Self::new(f64::from(rng.range_inclusive(0, w)), 0.0),
            Edge::Bottom => Self::new(f64::from(rng.range_inclusive(0, w)), HEIGHT),
        }
    }

    pub fn update(&mut self, target: Point, frames: f64) {
        let desired = f64::atan2(target.1 - self.y, target.0 - self.x);
        self.angle = turn_toward(self.angle, desired, UFO_TURN_RATE * frames);
        let (sin_a, cos_a) = self.angle.sin_cos();
        (self.x, self.y) = wrap_position(
            self.x + UFO_SPEED * cos_a * frames,
            self.y + UFO_SPEED * sin_a * frames,
        );
        self.rib_offset += 0.54 * frames;
        self.tractor_offset += 2.0 * frames;
    }

    /// Take one bullet. Returns whether the saucer is destroyed.
    pub fn take_hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.health == 0
    }

    #[must_use]
    pub fn within_hit_radius(&self, x: f64, y: f64) -> bool {
        distance(x, y, self.x, self.y) < UFO_RADIUS
    }

    #[must_use]
    pub fn in_tractor_range(&self, x: f64, y: f64) -> bool {
        distance(x, y, self.x, self.y) < UFO_DETECTION_RADIUS
    }

    /// Hold a vulnerable ship in the beam: kill its momentum and reel it in.
    pub fn apply_tractor(&self, ship: &mut Ship, frames: f64) {
        if !ship.is_vulnerable() || !self.in_tractor_range(ship.x, ship.y) {
            return;
        }
        ship.vel_x = 0.0;
        ship.vel_y = 0.0;
        let toward = f64::atan2(self.y - ship.y, self.x - ship.x);
        let (sin_a, cos_a) = toward.sin_cos();
        (ship.x, ship.y) = wrap_position(
            ship.x + TRACTOR_PULL_SPEED * cos_a * frames,
            ship.y + TRACTOR_PULL_SPEED * sin_a * frames,
        );
    }

    /// Hull outline: the lower half of the saucer plus its dome.
    #[must_use]
    pub fn polygon(&self) -> Vec<Point> {
        let (half_w, half_h) = (UFO_WIDTH / 2.0, UFO_HEIGHT / 2.0);
        let hull = (0..6_u8).map(|i| {
            let a = PI - f64::from(i) * (PI / 5.0);
            (self.x + half_w * a.cos(), self.y + half_h * a.sin())
        });
        let dome_y = self.y - half_h;
        let dome = (0..4_u8).map(|i| {
            let a = -FRAC_PI_2 - f64::from(i) * (PI / 3.0);
            (self.x + half_h * a.cos(), dome_y + half_h * a.sin())
        });
        hull.chain(dome).collect()
    }

    /// Rib x positions with their tapered half-heights, scrolling across the hull.
    #[must_use]
    pub fn ribs(&self) -> Vec<(f64, f64)> {
        let half_w = UFO_WIDTH / 2.0;
        #[allow(clippy::cast_precision_loss)]
        let spacing = UFO_WIDTH / UFO_RIB_COUNT as f64;
        let full_height = UFO_HEIGHT / 2.0;
        (0..UFO_RIB_COUNT)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let rel = -half_w + i as f64 * spacing;
                let x = self.x + ((rel + self.rib_offset + half_w).rem_euclid(UFO_WIDTH) - half_w);
                let taper = 0.5 + 0.5 * (1.0 - ((x - self.x) / half_w).abs());
                (x, full_height * taper / 2.0)
            })
            .collect()
    }

    /// Radii of the tractor beam arcs, animating inward toward the saucer.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn tractor_wave_radii(&self) -> Vec<f64> {
        let interval = UFO_DETECTION_RADIUS / TRACTOR_WAVES as f64;
        let phase = self.tractor_offset.rem_euclid(interval);
        (0..TRACTOR_WAVES)
            .map(|i| UFO_DETECTION_RADIUS - (i as f64 * interval + phase))
            .filter(|r| (0.0..=UFO_DETECTION_RADIUS).contains(r))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::geometry::point_in_polygon;

    #[test]
    fn test_spawns_on_an_edge() {
        let mut rng = SeededRng::new(77);
        for _ in 0..50 {
            let ufo = Ufo::spawn_on_edge(&mut rng);
            let on_edge = ufo.x == 0.0 || ufo.x == WIDTH || ufo.y == 0.0 || ufo.y == HEIGHT;
            assert!(on_edge, "ufo at ({}, {})", ufo.x, ufo.y);
            assert_eq!(ufo.health, UFO_HEALTH);
        }
    }

    #[test]
    fn test_takes_five_hits() {
        let mut ufo = Ufo::new(0.0, 0.0);
        for _ in 0..4 {
            assert!(!ufo.take_hit());
        }
        assert!(ufo.take_hit());
    }

    #[test]
    fn test_turns_slowly_toward_target() {
        let mut ufo = Ufo::new(500.0, 500.0);
        ufo.update((500.0, 900.0), 1.0);
        assert!((ufo.angle - UFO_TURN_RATE).abs() < 1e-12);
    }

    #[test]
    fn test_polygon_contains_center() {
        let ufo = Ufo::new(300.0, 300.0);
        let poly = ufo.polygon();
        assert_eq!(poly.len(), 10);
        assert!(point_in_polygon(300.0, 305.0, &poly));
    }

    #[test]
    fn test_tractor_pulls_and_freezes_ship() {
        let ufo = Ufo::new(600.0, 540.0);
        let mut ship = Ship {
            spawned: true,
            x: 500.0,
            y: 540.0,
            vel_x: 3.0,
            ..Ship::default()
        };
        ufo.apply_tractor(&mut ship, 1.0);
        assert_eq!(ship.vel_x, 0.0);
        assert!((ship.x - (500.0 + TRACTOR_PULL_SPEED)).abs() < 1e-9);
    }

    #[test]
    fn test_tractor_ignores_distant_or_shielded_ship() {
        let ufo = Ufo::new(100.0, 100.0);
        let mut far = Ship {
            spawned: true,
            x: 900.0,
            y: 900.0,
            vel_x: 2.0,
            ..Ship::default()
        };
        ufo.apply_tractor(&mut far, 1.0);
        assert_eq!((far.x, far.y, far.vel_x), (900.0, 900.0, 2.0));

        let mut shielded = Ship {
            spawned: true,
            x: 120.0,
            y: 100.0,
            vel_x: 2.0,
            invulnerable: Some(crate::game::ship::Timed {
                started_at: 0,
                duration_ms: 5000,
            }),
            ..Ship::default()
        };
        ufo.apply_tractor(&mut shielded, 1.0);
        assert_eq!((shielded.x, shielded.vel_x), (120.0, 2.0));
    }

    #[test]
    fn test_tractor_waves_stay_in_range() {
        let mut ufo = Ufo::new(0.0, 0.0);
        for _ in 0..100 {
            ufo.tractor_offset += 7.3;
            let radii = ufo.tractor_wave_radii();
            assert!(!radii.is_empty());
            assert!(radii.iter().all(|r| (0.0..=UFO_DETECTION_RADIUS).contains(r)));
        }
    }
}
