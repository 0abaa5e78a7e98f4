//! Player bullets and the firing cooldown.

use crate::constants::{
    BULLET_COOLDOWN_FRAMES, BULLET_SPEED, HEIGHT, RAPID_FIRE_COOLDOWN_FRAMES, WIDTH,
};
use crate::game::ship::Ship;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bullet {
    pub x: f64,
    pub y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
}

impl Bullet {
    fn on_screen(&self) -> bool {
        (0.0..=WIDTH).contains(&self.x) && (0.0..=HEIGHT).contains(&self.y)
    }
}

#[derive(Debug, Default)]
pub struct BulletManager {
    pub bullets: Vec<Bullet>,
    /// Frames until the next shot is allowed.
    pub cooldown: f64,
    /// Frames of firing lockout right after a game starts.
    pub grace: f64,
}

impl BulletManager {
    /// Fire from the ship's nose if the gun is ready. Returns whether a shot left.
    pub fn shoot(&mut self, ship: &Ship) -> bool {
        if self.cooldown > 0.0 || self.grace > 0.0 || !ship.spawned {
            return false;
        }

        let (x, y) = ship.tip();
        let (sin_a, cos_a) = ship.angle.to_radians().sin_cos();
        self.bullets.push(Bullet {
            x,
            y,
            vel_x: BULLET_SPEED * cos_a,
            vel_y: -BULLET_SPEED * sin_a,
        });
        self.cooldown = if ship.has_rapid_fire() {
            RAPID_FIRE_COOLDOWN_FRAMES
        } else {
            BULLET_COOLDOWN_FRAMES
        };
        true
    }

    pub fn update(&mut self, frames: f64) {
        self.cooldown = (self.cooldown - frames).max(0.0);
        self.grace = (self.grace - frames).max(0.0);

        for b in &mut self.bullets {
            b.x += b.vel_x * frames;
            b.y += b.vel_y * frames;
        }
        self.bullets.retain(Bullet::on_screen);
    }

    pub fn clear(&mut self) {
        self.bullets.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ship::Timed;

    fn ready_ship() -> Ship {
        Ship {
            spawned: true,
            ..Ship::default()
        }
    }

    #[test]
    fn test_cooldown_blocks_second_shot() {
        let ship = ready_ship();
        let mut bullets = BulletManager::default();
        assert!(bullets.shoot(&ship));
        assert!(!bullets.shoot(&ship));
        assert_eq!(bullets.bullets.len(), 1);

        bullets.update(BULLET_COOLDOWN_FRAMES);
        assert!(bullets.shoot(&ship));
        assert_eq!(bullets.bullets.len(), 2);
    }

    #[test]
    fn test_rapid_fire_shortens_cooldown() {
        let mut ship = ready_ship();
        ship.rapid_fire = Some(Timed {
            started_at: 0,
            duration_ms: 10_000,
        });
        let mut bullets = BulletManager::default();
        assert!(bullets.shoot(&ship));
        assert!((bullets.cooldown - RAPID_FIRE_COOLDOWN_FRAMES).abs() < f64::EPSILON);
    }

    #[test]
    fn test_grace_timer_blocks_fire() {
        let ship = ready_ship();
        let mut bullets = BulletManager {
            grace: 15.0,
            ..BulletManager::default()
        };
        assert!(!bullets.shoot(&ship));
        bullets.update(15.0);
        assert!(bullets.shoot(&ship));
    }

    #[test]
    fn test_cannot_fire_while_despawned() {
        let ship = Ship::default();
        let mut bullets = BulletManager::default();
        assert!(!bullets.shoot(&ship));
    }

    #[test]
    fn test_bullets_leave_the_screen() {
        let ship = ready_ship();
        let mut bullets = BulletManager::default();
        bullets.shoot(&ship);
        // Heading right from the center: (960 - 36) / 10.8 frames to leave.
        bullets.update(80.0);
        assert_eq!(bullets.bullets.len(), 1);
        bullets.update(20.0);
        assert!(bullets.bullets.is_empty());
    }
}
