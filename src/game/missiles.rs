//! Homing missiles launched by the UFO.
//!
//! A missile steers toward the ship with a bounded turn rate and speeds up
//! over its lifetime. It cannot wrap around the playfield, so near a wall it
//! steers away first, using a margin of twice its current turning radius.

use crate::constants::{
    HEIGHT, MISSILE_ACCEL, MISSILE_HIT_RADIUS, MISSILE_INITIAL_SPEED, MISSILE_LENGTH,
    MISSILE_LIFETIME_MS, MISSILE_MAX_SPEED, MISSILE_SHIP_RADIUS, MISSILE_TURN_RATE,
    MISSILE_WIDTH, SHIP_RADIUS, WIDTH,
};
use crate::game::bullets::BulletManager;
use crate::game::geometry::{distance, point_in_polygon, polygons_collide, turn_toward, Point};
use crate::game::ship::Ship;

#[derive(Clone, Debug)]
pub struct Missile {
    pub x: f64,
    pub y: f64,
    /// Heading in radians, y down.
    pub angle: f64,
    pub speed: f64,
    pub launched_at: u64,
}

impl Missile {
    #[must_use]
    pub fn new(x: f64, y: f64, now: u64) -> Self {
        Self {
            x,
            y,
            angle: 0.0,
            speed: MISSILE_INITIAL_SPEED,
            launched_at: now,
        }
    }

    #[must_use]
    pub fn expired(&self, now: u64) -> bool {
        now.saturating_sub(self.launched_at) >= MISSILE_LIFETIME_MS
    }

    /// Direction the missile wants to fly: away from nearby walls, else at the target.
    fn desired_heading(&self, target: Point) -> f64 {
        let margin = 2.0 * self.speed / MISSILE_TURN_RATE;
        let mut away_x = 0.0;
        let mut away_y = 0.0;
        if self.x < margin {
            away_x += 1.0;
        }
        if self.x > WIDTH - margin {
            away_x -= 1.0;
        }
        if self.y < margin {
            away_y += 1.0;
        }
        if self.y > HEIGHT - margin {
            away_y -= 1.0;
        }

        if away_x != 0.0 || away_y != 0.0 {
            f64::atan2(away_y, away_x)
        } else {
            f64::atan2(target.1 - self.y, target.0 - self.x)
        }
    }

    pub fn update(&mut self, target: Point, frames: f64) {
        let desired = self.desired_heading(target);
        self.angle = turn_toward(self.angle, desired, MISSILE_TURN_RATE * frames);
        self.speed = (self.speed + MISSILE_ACCEL * frames).min(MISSILE_MAX_SPEED);

        let (sin_a, cos_a) = self.angle.sin_cos();
        self.x = (self.x + self.speed * cos_a * frames).clamp(0.0, WIDTH);
        self.y = (self.y + self.speed * sin_a * frames).clamp(0.0, HEIGHT);
    }

    #[must_use]
    pub fn polygon(&self) -> [Point; 3] {
        let (sin_a, cos_a) = self.angle.sin_cos();
        let back = MISSILE_LENGTH * 0.5;
        [
            (self.x + MISSILE_LENGTH * cos_a, self.y + MISSILE_LENGTH * sin_a),
            (
                self.x - back * cos_a - MISSILE_WIDTH * sin_a,
                self.y - back * sin_a + MISSILE_WIDTH * cos_a,
            ),
            (
                self.x - back * cos_a + MISSILE_WIDTH * sin_a,
                self.y - back * sin_a - MISSILE_WIDTH * cos_a,
            ),
        ]
    }

    /// Exhaust flame behind the body.
    #[must_use]
    pub fn flame(&self) -> [Point; 3] {
        let (sin_a, cos_a) = self.angle.sin_cos();
        let bx = self.x - MISSILE_LENGTH * 0.6 * cos_a;
        let by = self.y - MISSILE_LENGTH * 0.6 * sin_a;
        [
            (bx + 3.6 * sin_a, by - 3.6 * cos_a),
            (bx - 9.0 * cos_a, by - 9.0 * sin_a),
            (bx - 3.6 * sin_a, by + 3.6 * cos_a),
        ]
    }
}

/// Where a missile was shot down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MissileKill {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Default)]
pub struct MissileManager {
    pub missiles: Vec<Missile>,
}

impl MissileManager {
    pub fn launch(&mut self, x: f64, y: f64, now: u64) {
        self.missiles.push(Missile::new(x, y, now));
    }

    #[must_use]
    pub fn has_active(&self) -> bool {
        !self.missiles.is_empty()
    }

    /// Steer every missile toward `target` and drop the ones past their lifetime.
    /// Returns how many expired.
    pub fn update(&mut self, target: Point, now: u64, frames: f64) -> usize {
        let before = self.missiles.len();
        self.missiles.retain(|m| !m.expired(now));
        let expired = before - self.missiles.len();

        for m in &mut self.missiles {
            m.update(target, frames);
        }
        expired
    }

    pub fn handle_bullet_collisions(&mut self, bullets: &mut BulletManager) -> Vec<MissileKill> {
        let mut kills = Vec::new();

        bullets.bullets.retain(|b| {
            let hit = self.missiles.iter().position(|m| {
                distance(b.x, b.y, m.x, m.y) < MISSILE_HIT_RADIUS
                    && point_in_polygon(b.x, b.y, &m.polygon())
            });
            let Some(idx) = hit else {
                return true;
            };
            let m = self.missiles.remove(idx);
            kills.push(MissileKill { x: m.x, y: m.y });
            false
        });

        kills
    }

    /// Remove and report the first missile touching a vulnerable ship.
    pub fn take_ship_hit(&mut self, ship: &Ship) -> bool {
        if !ship.is_vulnerable() {
            return false;
        }
        let ship_poly = ship.polygon();
        let hit = self.missiles.iter().position(|m| {
            distance(ship.x, ship.y, m.x, m.y) < SHIP_RADIUS + MISSILE_SHIP_RADIUS
                && polygons_collide(&ship_poly, &m.polygon())
        });
        match hit {
            Some(idx) => {
                self.missiles.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.missiles.clear();
    }
}
