//! Game simulation.
//!
//! The [`World`] owns every entity, the score and the state machine. It is
//! driven by [`World::update`] with a frame delta and the player's
//! [`Controls`], keeps its own clock (frozen while paused) and draws all
//! randomness from a seeded generator, so a run is reproducible from its
//! seed and input.

pub mod asteroids;
pub mod black_hole;
pub mod bullets;
pub mod explosions;
pub mod geometry;
pub mod missiles;
pub mod rng;
pub mod ship;
pub mod ufo;

use crate::constants::{
    BLACK_HOLE_REWARD_MS, BLACK_HOLE_SPAWN_CHANCE, HEIGHT, MISSILE_REWARD, RESPAWN_DELAY_MS,
    RESPAWN_INVULN_MS, SHIP_RADIUS, SHOOT_GRACE_FRAMES, STAR_COUNT, UFO_MISSILE_CHANCE,
    UFO_RADIUS, UFO_REWARD, UFO_SPAWN_CHANCE, WAVE_CLEARED_BANNER_MS, WIDTH,
};
use asteroids::{AsteroidManager, AsteroidSize};
use black_hole::BlackHole;
use bullets::BulletManager;
use explosions::ExplosionManager;
use geometry::{distance, point_in_polygon, polygons_collide, Point};
use missiles::MissileManager;
use rng::SeededRng;
use ship::Ship;
use ufo::Ufo;

/// Top-level game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Menu => write!(f, "menu"),
            Self::Playing => write!(f, "playing"),
            Self::Paused => write!(f, "paused"),
            Self::GameOver => write!(f, "game over"),
        }
    }
}

/// Entries of the pause menu, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PauseOption {
    Resume,
    Restart,
    QuitToMenu,
}

impl PauseOption {
    pub const ALL: [Self; 3] = [Self::Resume, Self::Restart, Self::QuitToMenu];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Resume => "Resume",
            Self::Restart => "Restart",
            Self::QuitToMenu => "Quit to Menu",
        }
    }
}

/// Player intent for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub thrust: bool,
    pub fire: bool,
}

/// Notable things that happened during an update, for logging and effects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    ShotFired,
    AsteroidDestroyed { size: AsteroidSize },
    MissileLaunched,
    MissileDestroyed,
    MissileExpired,
    UfoArrived,
    UfoHit { health: u32 },
    UfoDestroyed,
    /// The saucer was removed without being shot down.
    UfoDeparted,
    /// Live missiles were removed without being shot down.
    MissilesCleared { count: usize },
    BlackHoleOpened,
    BlackHoleClosed,
    ShipCaptured,
    ShipDestroyed { lives_left: u32 },
    WaveCleared { wave: u32 },
    GameOver { score: u32, new_high_score: bool },
}

fn create_star_field(rng: &mut SeededRng) -> Vec<Point> {
    #[allow(clippy::cast_possible_truncation)]
    let (w, h) = (WIDTH as i32, HEIGHT as i32);
    (0..STAR_COUNT)
        .map(|_| {
            (
                f64::from(rng.range_inclusive(0, w)),
                f64::from(rng.range_inclusive(0, h)),
            )
        })
        .collect()
}

pub struct World {
    pub state: GameState,
    pub ship: Ship,
    pub bullets: BulletManager,
    pub asteroids: AsteroidManager,
    pub explosions: ExplosionManager,
    pub missiles: MissileManager,
    pub ufo: Option<Ufo>,
    pub black_hole: Option<BlackHole>,
    pub score: u32,
    pub lives: u32,
    pub wave: u32,
    pub high_score: u32,
    pub stars: Vec<Point>,
    /// Index into [`PauseOption::ALL`].
    pub pause_selection: usize,
    wave_cleared_at: Option<u64>,
    starting_lives: u32,
    clock_ms: f64,
    rng: SeededRng,
    events: Vec<GameEvent>,
}

impl World {
    #[must_use]
    pub fn new(seed: u32, starting_lives: u32, high_score: u32) -> Self {
        let mut rng = SeededRng::new(seed);
        let stars = create_star_field(&mut rng);
        Self {
            state: GameState::Menu,
            ship: Ship::default(),
            bullets: BulletManager::default(),
            asteroids: AsteroidManager::default(),
            explosions: ExplosionManager::default(),
            missiles: MissileManager::default(),
            ufo: None,
            black_hole: None,
            score: 0,
            lives: starting_lives,
            wave: 1,
            high_score,
            stars,
            pause_selection: 0,
            wave_cleared_at: None,
            starting_lives,
            clock_ms: 0.0,
            rng,
            events: Vec::new(),
        }
    }

    /// Milliseconds of play time elapsed on the world clock.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn now(&self) -> u64 {
        self.clock_ms as u64
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Wave number to announce as cleared, while the banner is up.
    #[must_use]
    pub fn wave_banner(&self) -> Option<u32> {
        self.wave_cleared_at.map(|_| self.wave.saturating_sub(1))
    }

    #[must_use]
    pub fn selected_pause_option(&self) -> PauseOption {
        PauseOption::ALL[self.pause_selection % PauseOption::ALL.len()]
    }

    // ── State transitions ───────────────────────────────────────────────────

    /// Fresh game from wave 1 with the ship at the center.
    pub fn start_game(&mut self) {
        self.reset_game();
        self.state = GameState::Playing;
        self.bullets.grace = SHOOT_GRACE_FRAMES;
        self.asteroids
            .start_wave(&mut self.rng, self.wave, WIDTH / 2.0, HEIGHT / 2.0);
    }

    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            GameState::Playing => GameState::Paused,
            GameState::Paused => GameState::Playing,
            other => other,
        };
        self.pause_selection = 0;
    }

    /// Move the pause menu cursor, wrapping at both ends.
    pub fn move_pause_selection(&mut self, delta: isize) {
        let len = PauseOption::ALL.len();
        #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
        let next = (self.pause_selection as isize + delta).rem_euclid(len as isize) as usize;
        self.pause_selection = next;
    }

    pub fn confirm_pause_selection(&mut self) {
        match self.selected_pause_option() {
            PauseOption::Resume => self.state = GameState::Playing,
            PauseOption::Restart => self.start_game(),
            PauseOption::QuitToMenu => {
                self.reset_game();
                self.state = GameState::Menu;
            }
        }
    }

    fn reset_game(&mut self) {
        let now = self.now();
        self.ship.trigger_respawn(now, 0, RESPAWN_INVULN_MS);
        self.ship.rapid_fire = None;
        self.bullets.clear();
        self.asteroids.clear();
        self.explosions.clear();
        self.clear_hostiles();
        self.wave_cleared_at = None;
        self.score = 0;
        self.lives = self.starting_lives;
        self.wave = 1;
    }

    // ── Simulation ──────────────────────────────────────────────────────────

    /// Advance the world by `dt` seconds. Does nothing outside of play.
    pub fn update(&mut self, dt: f64, controls: Controls) {
        if self.state != GameState::Playing {
            return;
        }

        let frames = dt * 60.0;
        self.clock_ms += dt * 1000.0;
        let now = self.now();

        self.ship.apply_controls(controls, frames);
        if controls.fire && self.bullets.shoot(&self.ship) {
            self.events.push(GameEvent::ShotFired);
        }

        self.ship.update(now, frames);
        self.bullets.update(frames);
        self.asteroids.update(frames);
        let expired = self.missiles.update((self.ship.x, self.ship.y), now, frames);
        self.events
            .extend(std::iter::repeat(GameEvent::MissileExpired).take(expired));
        self.explosions.update(frames);

        self.update_ufo(frames, now);
        self.update_black_hole(frames, now);

        self.handle_collisions(frames);

        if self.asteroids.is_empty() {
            self.start_next_wave();
        }

        if self
            .wave_cleared_at
            .is_some_and(|at| now.saturating_sub(at) >= WAVE_CLEARED_BANNER_MS)
        {
            self.wave_cleared_at = None;
        }

        if self.lives == 0 && self.ship.pending_respawn.is_none() {
            self.finish_game();
        }
    }

    fn update_ufo(&mut self, frames: f64, now: u64) {
        if self.ufo.is_none() && self.rng.chance(UFO_SPAWN_CHANCE * frames) {
            self.ufo = Some(Ufo::spawn_on_edge(&mut self.rng));
            self.events.push(GameEvent::UfoArrived);
        }

        if let Some(ufo) = self.ufo.as_mut() {
            ufo.update((self.ship.x, self.ship.y), frames);
            if !self.missiles.has_active() && self.rng.chance(UFO_MISSILE_CHANCE * frames) {
                self.missiles.launch(ufo.x, ufo.y, now);
                self.events.push(GameEvent::MissileLaunched);
            }
        }
    }

    fn update_black_hole(&mut self, frames: f64, now: u64) {
        if self.black_hole.is_none() && self.rng.chance(BLACK_HOLE_SPAWN_CHANCE * frames) {
            self.black_hole = Some(BlackHole::spawn(&mut self.rng, now));
            self.events.push(GameEvent::BlackHoleOpened);
        }

        if let Some(hole) = self.black_hole.as_mut() {
            hole.update(now, frames);
            if hole.finished(now) {
                self.black_hole = None;
                self.events.push(GameEvent::BlackHoleClosed);
            }
        }
    }

    fn handle_collisions(&mut self, frames: f64) {
        for hit in self
            .asteroids
            .handle_bullet_collisions(&mut self.rng, &mut self.bullets)
        {
            self.explosions.spawn(&mut self.rng, hit.x, hit.y, 8);
            self.score += hit.size.reward();
            self.events
                .push(GameEvent::AsteroidDestroyed { size: hit.size });
        }

        for kill in self.missiles.handle_bullet_collisions(&mut self.bullets) {
            self.explosions.spawn(&mut self.rng, kill.x, kill.y, 10);
            self.score += MISSILE_REWARD;
            self.events.push(GameEvent::MissileDestroyed);
        }

        if self.asteroids.collides_with_ship(&self.ship) {
            self.destroy_ship();
        }

        if self.missiles.take_ship_hit(&self.ship) {
            self.events.push(GameEvent::MissileDestroyed);
            self.explosions
                .spawn(&mut self.rng, self.ship.x, self.ship.y, 30);
            self.lose_life();
        }

        self.handle_ufo_collisions(frames);
        self.handle_black_hole_capture();
    }

    fn handle_ufo_collisions(&mut self, frames: f64) {
        let Some(ufo) = self.ufo.as_mut() else {
            return;
        };

        let hit = self.bullets.bullets.iter().position(|b| {
            ufo.within_hit_radius(b.x, b.y) && point_in_polygon(b.x, b.y, &ufo.polygon())
        });
        if let Some(idx) = hit {
            self.bullets.bullets.remove(idx);
            self.explosions.spawn(&mut self.rng, ufo.x, ufo.y, 3);
            if ufo.take_hit() {
                self.explosions.spawn(&mut self.rng, ufo.x, ufo.y, 20);
                self.score += UFO_REWARD;
                self.ufo = None;
                self.events.push(GameEvent::UfoDestroyed);
                return;
            }
            self.events.push(GameEvent::UfoHit { health: ufo.health });
        }

        if self.ship.is_vulnerable()
            && distance(self.ship.x, self.ship.y, ufo.x, ufo.y) < UFO_RADIUS + SHIP_RADIUS
            && polygons_collide(&self.ship.polygon(), &ufo.polygon())
        {
            self.destroy_ship();
            return;
        }

        ufo.apply_tractor(&mut self.ship, frames);
    }

    fn handle_black_hole_capture(&mut self) {
        let now = self.now();
        let captured = self.black_hole.as_ref().is_some_and(|hole| {
            self.ship.spawned && hole.is_dangerous(now) && hole.touches_ship(self.ship.x, self.ship.y)
        });
        if !captured {
            return;
        }

        self.ship.trigger_respawn(now, 0, BLACK_HOLE_REWARD_MS);
        self.ship.grant_rapid_fire(now, BLACK_HOLE_REWARD_MS);
        self.events.push(GameEvent::ShipCaptured);
        self.clear_hostiles();
    }

    /// Ship hit by a rock or the saucer hull: clears the enemies too.
    fn destroy_ship(&mut self) {
        self.explosions
            .spawn(&mut self.rng, self.ship.x, self.ship.y, 30);
        self.lose_life();
        self.clear_hostiles();
    }

    /// Remove the saucer, its missiles and any black hole, reporting each.
    fn clear_hostiles(&mut self) {
        let count = self.missiles.missiles.len();
        if count > 0 {
            self.missiles.clear();
            self.events.push(GameEvent::MissilesCleared { count });
        }
        if self.ufo.take().is_some() {
            self.events.push(GameEvent::UfoDeparted);
        }
        if self.black_hole.take().is_some() {
            self.events.push(GameEvent::BlackHoleClosed);
        }
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.ship
            .trigger_respawn(self.now(), RESPAWN_DELAY_MS, RESPAWN_INVULN_MS);
        self.events.push(GameEvent::ShipDestroyed {
            lives_left: self.lives,
        });
    }

    fn start_next_wave(&mut self) {
        let now = self.now();
        self.events.push(GameEvent::WaveCleared { wave: self.wave });
        self.wave += 1;
        self.ship
            .trigger_respawn(now, RESPAWN_DELAY_MS, RESPAWN_INVULN_MS);
        self.ship.rapid_fire = None;
        self.bullets.clear();
        self.explosions.clear();
        self.clear_hostiles();
        // The ship reappears at the center.
        self.asteroids
            .start_wave(&mut self.rng, self.wave, WIDTH / 2.0, HEIGHT / 2.0);
        self.wave_cleared_at = Some(now);
    }

    fn finish_game(&mut self) {
        self.state = GameState::GameOver;
        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }
        self.events.push(GameEvent::GameOver {
            score: self.score,
            new_high_score,
        });
    }
}
