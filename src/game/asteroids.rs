//! Asteroid field: jagged rocks that drift, spin and split when shot.

use std::f64::consts::TAU;

use crate::constants::{
    ASTEROID_DRIFT, ASTEROID_VERTICES, HEIGHT, LARGE_REWARD, LARGE_SIZE, MEDIUM_REWARD,
    MEDIUM_SIZE, SAFE_SPAWN_DISTANCE, SHIP_RADIUS, SMALL_REWARD, SMALL_SIZE, WIDTH,
};
use crate::game::bullets::BulletManager;
use crate::game::geometry::{
    distance, point_in_polygon, polygons_collide, transform, wrap_position, Point,
};
use crate::game::rng::SeededRng;
use crate::game::ship::Ship;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AsteroidSize {
    Large,
    Medium,
    Small,
}

impl AsteroidSize {
    #[must_use]
    pub const fn radius(self) -> f64 {
        match self {
            Self::Large => LARGE_SIZE,
            Self::Medium => MEDIUM_SIZE,
            Self::Small => SMALL_SIZE,
        }
    }

    #[must_use]
    pub const fn reward(self) -> u32 {
        match self {
            Self::Large => LARGE_REWARD,
            Self::Medium => MEDIUM_REWARD,
            Self::Small => SMALL_REWARD,
        }
    }

    /// What a destroyed rock of this size breaks into.
    #[must_use]
    pub const fn fragment(self) -> Option<Self> {
        match self {
            Self::Large => Some(Self::Medium),
            Self::Medium => Some(Self::Small),
            Self::Small => None,
        }
    }
}

impl std::fmt::Display for AsteroidSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Large => write!(f, "large"),
            Self::Medium => write!(f, "medium"),
            Self::Small => write!(f, "small"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Asteroid {
    pub x: f64,
    pub y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub size: AsteroidSize,
    /// Outline in local space, centered on the origin.
    pub shape: Vec<Point>,
    /// Rotation in degrees.
    pub angle: f64,
    pub spin: f64,
    /// Distance from the center to the furthest vertex.
    pub bounding_radius: f64,
}

impl Asteroid {
    #[must_use]
    pub fn polygon(&self) -> Vec<Point> {
        transform(&self.shape, self.x, self.y, self.angle)
    }
}

/// A destroyed rock, reported back to the world for scoring and effects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsteroidHit {
    pub x: f64,
    pub y: f64,
    pub size: AsteroidSize,
}

/// Number of large asteroids a wave opens with.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn wave_size(wave: u32) -> usize {
    (f64::from(3 + wave) * 1.3).floor() as usize
}

fn random_shape(rng: &mut SeededRng, radius: f64) -> Vec<Point> {
    #[allow(clippy::cast_precision_loss)]
    let step = TAU / ASTEROID_VERTICES as f64;
    (0..ASTEROID_VERTICES)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let angle = i as f64 * step + rng.uniform(-0.25, 0.25);
            let variation = if rng.next_f64() >= 0.2 {
                rng.uniform(-0.4, 0.4)
            } else {
                rng.uniform(-0.6, 0.6)
            };
            let r = radius * (1.0 + variation);
            (r * angle.cos(), r * angle.sin())
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct AsteroidManager {
    pub asteroids: Vec<Asteroid>,
}

impl AsteroidManager {
    pub fn spawn(
        rng: &mut SeededRng,
        size: AsteroidSize,
        x: f64,
        y: f64,
        parent_vel: (f64, f64),
    ) -> Asteroid {
        let vel_x = parent_vel.0 + rng.uniform(-ASTEROID_DRIFT, ASTEROID_DRIFT);
        let vel_y = parent_vel.1 + rng.uniform(-ASTEROID_DRIFT, ASTEROID_DRIFT);
        let shape = random_shape(rng, size.radius());
        let boost = if rng.chance(0.2) {
            f64::from(*rng.pick(&[2, 3]))
        } else {
            1.0
        };
        let spin = rng.uniform(-0.6, 0.6) * boost;
        let bounding_radius = shape
            .iter()
            .map(|&(px, py)| px.hypot(py))
            .fold(0.0, f64::max);

        Asteroid {
            x,
            y,
            vel_x,
            vel_y,
            size,
            shape,
            angle: 0.0,
            spin,
            bounding_radius,
        }
    }

    /// Spawn at a random spot at least [`SAFE_SPAWN_DISTANCE`] away from `(sx, sy)`.
    pub fn spawn_safe(rng: &mut SeededRng, size: AsteroidSize, sx: f64, sy: f64) -> Asteroid {
        #[allow(clippy::cast_possible_truncation)]
        let (w, h) = (WIDTH as i32, HEIGHT as i32);
        loop {
            let ax = f64::from(rng.range_inclusive(0, w));
            let ay = f64::from(rng.range_inclusive(0, h));
            if distance(ax, ay, sx, sy) > SAFE_SPAWN_DISTANCE {
                return Self::spawn(rng, size, ax, ay, (0.0, 0.0));
            }
        }
    }

    pub fn start_wave(&mut self, rng: &mut SeededRng, wave: u32, ship_x: f64, ship_y: f64) {
        for _ in 0..wave_size(wave) {
            let rock = Self::spawn_safe(rng, AsteroidSize::Large, ship_x, ship_y);
            self.asteroids.push(rock);
        }
    }

    pub fn update(&mut self, frames: f64) {
        for a in &mut self.asteroids {
            (a.x, a.y) = wrap_position(a.x + a.vel_x * frames, a.y + a.vel_y * frames);
            a.angle += a.spin * frames;
        }
    }

    /// Resolve bullet hits. Each bullet destroys at most one rock and each
    /// destroyed rock splits into two fragments of the next size down.
    pub fn handle_bullet_collisions(
        &mut self,
        rng: &mut SeededRng,
        bullets: &mut BulletManager,
    ) -> Vec<AsteroidHit> {
        let mut hits = Vec::new();

        bullets.bullets.retain(|b| {
            let hit = self.asteroids.iter().position(|a| {
                distance(b.x, b.y, a.x, a.y) < a.bounding_radius
                    && point_in_polygon(b.x, b.y, &a.polygon())
            });
            let Some(idx) = hit else {
                return true;
            };

            let rock = self.asteroids.remove(idx);
            if let Some(fragment) = rock.size.fragment() {
                for _ in 0..2 {
                    let child = Self::spawn(rng, fragment, rock.x, rock.y, (rock.vel_x, rock.vel_y));
                    self.asteroids.push(child);
                }
            }
            hits.push(AsteroidHit {
                x: rock.x,
                y: rock.y,
                size: rock.size,
            });
            false
        });

        hits
    }

    #[must_use]
    pub fn collides_with_ship(&self, ship: &Ship) -> bool {
        if !ship.is_vulnerable() {
            return false;
        }
        let ship_poly = ship.polygon();
        self.asteroids.iter().any(|a| {
            distance(ship.x, ship.y, a.x, a.y) < SHIP_RADIUS + a.bounding_radius
                && polygons_collide(&ship_poly, &a.polygon())
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }

    pub fn clear(&mut self) {
        self.asteroids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::bullets::Bullet;

    /// A perfectly round rock so hit tests do not depend on the jitter.
    fn round_rock(size: AsteroidSize, x: f64, y: f64) -> Asteroid {
        let r = size.radius();
        let shape: Vec<Point> = (0..12_i32)
            .map(|i| {
                let a = f64::from(i) * TAU / 12.0;
                (r * a.cos(), r * a.sin())
            })
            .collect();
        Asteroid {
            x,
            y,
            vel_x: 0.0,
            vel_y: 0.0,
            size,
            shape,
            angle: 0.0,
            spin: 0.0,
            bounding_radius: r,
        }
    }

    fn bullet_at(x: f64, y: f64) -> Bullet {
        Bullet {
            x,
            y,
            vel_x: 0.0,
            vel_y: 0.0,
        }
    }

    #[test]
    fn test_wave_sizes() {
        assert_eq!(wave_size(1), 5);
        assert_eq!(wave_size(2), 6);
        assert_eq!(wave_size(3), 7);
        assert_eq!(wave_size(4), 9);
    }

    #[test]
    fn test_shape_has_twelve_vertices_within_bounds() {
        let mut rng = SeededRng::new(11);
        let rock = AsteroidManager::spawn(&mut rng, AsteroidSize::Large, 0.0, 0.0, (0.0, 0.0));
        assert_eq!(rock.shape.len(), ASTEROID_VERTICES);
        assert!(rock.bounding_radius <= LARGE_SIZE * 1.6 + 1e-9);
        assert!(rock.bounding_radius >= LARGE_SIZE * 0.4);
    }

    #[test]
    fn test_fragments_inherit_parent_velocity() {
        let mut rng = SeededRng::new(5);
        let rock = AsteroidManager::spawn(&mut rng, AsteroidSize::Medium, 0.0, 0.0, (10.0, -10.0));
        assert!((rock.vel_x - 10.0).abs() <= ASTEROID_DRIFT);
        assert!((rock.vel_y + 10.0).abs() <= ASTEROID_DRIFT);
    }

    #[test]
    fn test_safe_spawn_keeps_distance() {
        let mut rng = SeededRng::new(1234);
        for _ in 0..200 {
            let rock = AsteroidManager::spawn_safe(&mut rng, AsteroidSize::Large, 960.0, 540.0);
            assert!(distance(rock.x, rock.y, 960.0, 540.0) > SAFE_SPAWN_DISTANCE);
        }
    }

    #[test]
    fn test_start_wave_spawns_large_rocks() {
        let mut rng = SeededRng::new(9);
        let mut field = AsteroidManager::default();
        field.start_wave(&mut rng, 1, 960.0, 540.0);
        assert_eq!(field.asteroids.len(), 5);
        assert!(field
            .asteroids
            .iter()
            .all(|a| a.size == AsteroidSize::Large));
    }

    #[test]
    fn test_large_rock_splits_into_two_medium() {
        let mut rng = SeededRng::new(2);
        let mut field = AsteroidManager {
            asteroids: vec![round_rock(AsteroidSize::Large, 500.0, 500.0)],
        };
        let mut bullets = BulletManager {
            bullets: vec![bullet_at(505.0, 500.0), bullet_at(100.0, 100.0)],
            ..BulletManager::default()
        };

        let hits = field.handle_bullet_collisions(&mut rng, &mut bullets);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].size.reward(), LARGE_REWARD);
        assert_eq!(bullets.bullets.len(), 1);
        assert_eq!(field.asteroids.len(), 2);
        assert!(field
            .asteroids
            .iter()
            .all(|a| a.size == AsteroidSize::Medium));
    }

    #[test]
    fn test_small_rock_leaves_nothing() {
        let mut rng = SeededRng::new(2);
        let mut field = AsteroidManager {
            asteroids: vec![round_rock(AsteroidSize::Small, 500.0, 500.0)],
        };
        let mut bullets = BulletManager {
            bullets: vec![bullet_at(500.0, 500.0)],
            ..BulletManager::default()
        };
        let hits = field.handle_bullet_collisions(&mut rng, &mut bullets);
        assert_eq!(hits[0].size, AsteroidSize::Small);
        assert!(field.is_empty());
    }

    #[test]
    fn test_one_bullet_one_rock() {
        let mut rng = SeededRng::new(2);
        let mut field = AsteroidManager {
            asteroids: vec![
                round_rock(AsteroidSize::Small, 500.0, 500.0),
                round_rock(AsteroidSize::Small, 502.0, 500.0),
            ],
        };
        let mut bullets = BulletManager {
            bullets: vec![bullet_at(501.0, 500.0)],
            ..BulletManager::default()
        };
        let hits = field.handle_bullet_collisions(&mut rng, &mut bullets);
        assert_eq!(hits.len(), 1);
        assert_eq!(field.asteroids.len(), 1);
    }

    #[test]
    fn test_ship_collision_respects_invulnerability() {
        let mut ship = Ship {
            spawned: true,
            ..Ship::default()
        };
        let field = AsteroidManager {
            asteroids: vec![round_rock(AsteroidSize::Large, ship.x + 40.0, ship.y)],
        };
        assert!(field.collides_with_ship(&ship));

        ship.invulnerable = Some(crate::game::ship::Timed {
            started_at: 0,
            duration_ms: 1000,
        });
        assert!(!field.collides_with_ship(&ship));
    }

    #[test]
    fn test_update_wraps_and_spins() {
        let mut rock = round_rock(AsteroidSize::Small, WIDTH - 1.0, 10.0);
        rock.vel_x = 2.0;
        rock.spin = 0.5;
        let mut field = AsteroidManager {
            asteroids: vec![rock],
        };
        field.update(1.0);
        assert!((field.asteroids[0].x - 1.0).abs() < 1e-9);
        assert!((field.asteroids[0].angle - 0.5).abs() < 1e-12);
    }
}
