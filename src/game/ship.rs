//! Player ship physics, respawn and timed power states.

use crate::constants::{
    HEIGHT, INVULN_BLINK_MS, SHIP_FRICTION, SHIP_LENGTH, SHIP_MAX_SPEED, SHIP_THRUST,
    SHIP_TURN_DEG, SHIP_WING_LENGTH, WIDTH,
};
use crate::game::geometry::{wrap_position, Point};
use crate::game::Controls;

/// A respawn requested on death, wave clear or black hole capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingRespawn {
    pub requested_at: u64,
    pub delay_ms: u64,
    pub invuln_ms: u64,
}

/// A power state that expires at a fixed time on the world clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timed {
    pub started_at: u64,
    pub duration_ms: u64,
}

impl Timed {
    #[must_use]
    pub fn expired(self, now: u64) -> bool {
        now.saturating_sub(self.started_at) >= self.duration_ms
    }
}

#[derive(Clone, Debug)]
pub struct Ship {
    pub x: f64,
    pub y: f64,
    /// Heading in degrees, counter-clockwise, 0 pointing right.
    pub angle: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub thrusting: bool,
    pub spawned: bool,
    pub invulnerable: Option<Timed>,
    pub rapid_fire: Option<Timed>,
    pub pending_respawn: Option<PendingRespawn>,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            x: WIDTH / 2.0,
            y: HEIGHT / 2.0,
            angle: 0.0,
            vel_x: 0.0,
            vel_y: 0.0,
            thrusting: false,
            spawned: false,
            invulnerable: None,
            rapid_fire: None,
            pending_respawn: None,
        }
    }
}

impl Ship {
    pub fn reset_position(&mut self) {
        self.x = WIDTH / 2.0;
        self.y = HEIGHT / 2.0;
        self.vel_x = 0.0;
        self.vel_y = 0.0;
        self.angle = 0.0;
        self.thrusting = false;
    }

    /// Despawn the ship and bring it back at the center after `delay_ms`.
    pub fn trigger_respawn(&mut self, now: u64, delay_ms: u64, invuln_ms: u64) {
        self.spawned = false;
        self.vel_x = 0.0;
        self.vel_y = 0.0;
        self.thrusting = false;
        self.pending_respawn = Some(PendingRespawn {
            requested_at: now,
            delay_ms,
            invuln_ms,
        });
    }

    pub fn grant_rapid_fire(&mut self, now: u64, duration_ms: u64) {
        self.rapid_fire = Some(Timed {
            started_at: now,
            duration_ms,
        });
    }

    #[must_use]
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable.is_some()
    }

    #[must_use]
    pub fn has_rapid_fire(&self) -> bool {
        self.rapid_fire.is_some()
    }

    /// Spawned and not shielded, i.e. something can destroy it.
    #[must_use]
    pub fn is_vulnerable(&self) -> bool {
        self.spawned && self.invulnerable.is_none()
    }

    pub fn apply_controls(&mut self, controls: Controls, frames: f64) {
        if !self.spawned {
            self.thrusting = false;
            return;
        }
        if controls.left {
            self.angle += SHIP_TURN_DEG * frames;
        }
        if controls.right {
            self.angle -= SHIP_TURN_DEG * frames;
        }
        self.thrusting = controls.thrust;
        if controls.thrust {
            let (sin_a, cos_a) = self.angle.to_radians().sin_cos();
            self.vel_x += SHIP_THRUST * cos_a * frames;
            self.vel_y -= SHIP_THRUST * sin_a * frames;
        }
    }

    pub fn update(&mut self, now: u64, frames: f64) {
        if let Some(pending) = self.pending_respawn {
            if now.saturating_sub(pending.requested_at) >= pending.delay_ms {
                self.reset_position();
                self.spawned = true;
                self.invulnerable = Some(Timed {
                    started_at: now,
                    duration_ms: pending.invuln_ms,
                });
                self.pending_respawn = None;
            }
        }

        if !self.spawned {
            return;
        }

        self.x += self.vel_x * frames;
        self.y += self.vel_y * frames;

        let speed = self.vel_x.hypot(self.vel_y);
        if speed > SHIP_MAX_SPEED {
            let factor = SHIP_MAX_SPEED / speed;
            self.vel_x *= factor;
            self.vel_y *= factor;
        }
        let drag = SHIP_FRICTION.powf(frames);
        self.vel_x *= drag;
        self.vel_y *= drag;
        (self.x, self.y) = wrap_position(self.x, self.y);

        if self.invulnerable.is_some_and(|t| t.expired(now)) {
            self.invulnerable = None;
        }
        if self.rapid_fire.is_some_and(|t| t.expired(now)) {
            self.rapid_fire = None;
        }
    }

    /// Whether the ship should be drawn this frame (blinks while shielded).
    #[must_use]
    pub fn visible(&self, now: u64) -> bool {
        self.spawned && !(self.is_invulnerable() && (now / INVULN_BLINK_MS) % 2 == 0)
    }

    fn offset(&self, length: f64, angle_deg: f64) -> Point {
        let (sin_a, cos_a) = angle_deg.to_radians().sin_cos();
        (self.x + length * cos_a, self.y - length * sin_a)
    }

    /// The nose of the ship, where bullets leave.
    #[must_use]
    pub fn tip(&self) -> Point {
        self.offset(SHIP_LENGTH, self.angle)
    }

    #[must_use]
    pub fn polygon(&self) -> [Point; 3] {
        [
            self.tip(),
            self.offset(SHIP_WING_LENGTH, self.angle + 135.0),
            self.offset(SHIP_WING_LENGTH, self.angle - 135.0),
        ]
    }

    /// Exhaust flame triangle, drawn while thrusting.
    #[must_use]
    pub fn flame(&self) -> [Point; 3] {
        let (sin_a, cos_a) = self.angle.to_radians().sin_cos();
        [
            self.offset(12.6, self.angle + 160.0),
            (self.x - 27.0 * cos_a, self.y + 27.0 * sin_a),
            self.offset(12.6, self.angle - 160.0),
        ]
    }
}
