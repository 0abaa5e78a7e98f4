//! Application-wide constants and gameplay tuning values.
//!
//! Speeds and rates are expressed per 60 Hz frame; the simulation scales
//! them by `dt * 60` so the game plays the same at any tick rate.

use std::time::Duration;

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Title shown on the main menu.
pub const GAME_TITLE: &str = "Asteroids: Apocalypse";

// === Timing Configuration ===

/// Default simulation/render rate.
pub const DEFAULT_FPS: u32 = 60;
/// Upper bound on a single simulation step, in seconds.
pub const MAX_FRAME_DT: f64 = 0.1;
/// How long a key counts as held after its last press when the terminal
/// cannot report key releases.
pub const KEY_HOLD_WINDOW: Duration = Duration::from_millis(180);

// === Path Configuration ===

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Name of the high score file inside the config directory.
pub const HIGH_SCORE_FILE_NAME: &str = "highscore.json";
/// Name of the logs subdirectory.
pub const LOGS_DIR_NAME: &str = "logs";
/// Name of the log file inside the logs directory.
pub const LOG_FILE_NAME: &str = "apocalypse.log";
/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "APOCALYPSE_CONFIG_DIR";

// === Playfield ===

pub const WIDTH: f64 = 1920.0;
pub const HEIGHT: f64 = 1080.0;
pub const STAR_COUNT: usize = 180;

// === Ship ===

pub const SHIP_RADIUS: f64 = 36.0;
pub const SHIP_LENGTH: f64 = 36.0;
pub const SHIP_WING_LENGTH: f64 = 18.0;
pub const SHIP_TURN_DEG: f64 = 3.0;
pub const SHIP_THRUST: f64 = 0.18;
pub const SHIP_FRICTION: f64 = 0.99;
pub const SHIP_MAX_SPEED: f64 = 9.9;
pub const STARTING_LIVES: u32 = 3;

/// Respawn delay after losing a life or clearing a wave.
pub const RESPAWN_DELAY_MS: u64 = 2000;
/// Invulnerability granted on a regular respawn.
pub const RESPAWN_INVULN_MS: u64 = 5000;
/// Invulnerability and rapid fire granted by a black hole.
pub const BLACK_HOLE_REWARD_MS: u64 = 10_000;
/// Blink period of an invulnerable ship.
pub const INVULN_BLINK_MS: u64 = 100;

// === Bullets ===

pub const BULLET_SPEED: f64 = 10.8;
pub const BULLET_COOLDOWN_FRAMES: f64 = 15.0;
pub const RAPID_FIRE_COOLDOWN_FRAMES: f64 = 5.0;
pub const SHOOT_GRACE_FRAMES: f64 = 15.0;

// === Asteroids ===

pub const LARGE_SIZE: f64 = 54.0;
pub const MEDIUM_SIZE: f64 = 36.0;
pub const SMALL_SIZE: f64 = 18.0;
pub const ASTEROID_VERTICES: usize = 12;
pub const ASTEROID_DRIFT: f64 = 1.17;
pub const SAFE_SPAWN_DISTANCE: f64 = 180.0;
pub const LARGE_REWARD: u32 = 20;
pub const MEDIUM_REWARD: u32 = 50;
pub const SMALL_REWARD: u32 = 100;

// === Missiles ===

pub const MISSILE_LIFETIME_MS: u64 = 15_000;
pub const MISSILE_INITIAL_SPEED: f64 = 1.08;
pub const MISSILE_ACCEL: f64 = 0.005;
pub const MISSILE_MAX_SPEED: f64 = 4.0;
pub const MISSILE_TURN_RATE: f64 = 0.5;
pub const MISSILE_REWARD: u32 = 500;
pub const MISSILE_LENGTH: f64 = 21.6;
pub const MISSILE_WIDTH: f64 = 7.2;
pub const MISSILE_HIT_RADIUS: f64 = 18.0;
pub const MISSILE_SHIP_RADIUS: f64 = 14.4;

// === UFO ===

pub const UFO_SPAWN_CHANCE: f64 = 0.001;
pub const UFO_WIDTH: f64 = 108.0;
pub const UFO_HEIGHT: f64 = 36.0;
pub const UFO_HEALTH: u32 = 5;
pub const UFO_RIB_COUNT: usize = 5;
pub const UFO_SPEED: f64 = 1.0;
pub const UFO_TURN_RATE: f64 = 0.02;
pub const UFO_RADIUS: f64 = 45.0;
pub const UFO_REWARD: u32 = 200;
pub const UFO_MISSILE_CHANCE: f64 = 0.0006;
pub const UFO_DETECTION_RADIUS: f64 = 225.0;
pub const TRACTOR_PULL_SPEED: f64 = 0.09;
pub const TRACTOR_WAVES: usize = 5;

// === Black Hole ===

pub const BLACK_HOLE_SPAWN_CHANCE: f64 = 0.0005;
pub const BLACK_HOLE_RADIUS: f64 = 90.0;
pub const BLACK_HOLE_SPEED: f64 = 0.09;
pub const BLACK_HOLE_SPIN_DEG: f64 = -2.0;
pub const BLACK_HOLE_FADE_IN_MS: u64 = 2000;
pub const BLACK_HOLE_ACTIVE_MS: u64 = 11_000;
pub const BLACK_HOLE_FADE_OUT_MS: u64 = 2000;
/// Offset applied to both ends of the window in which a black hole captures the ship.
pub const BLACK_HOLE_DANGER_OFFSET_MS: u64 = 1000;
pub const BLACK_HOLE_SPIRAL_TURNS: f64 = 5.0;

// === Waves ===

pub const WAVE_CLEARED_BANNER_MS: u64 = 1500;

// === UI Messages ===

pub const MSG_PRESS_START: &str = "Press Space to Start";
pub const MSG_GAME_OVER: &str = "GAME OVER!";
pub const MSG_PRESS_RESTART: &str = "Press R to Restart";
pub const MSG_PAUSED: &str = "PAUSED";
pub const MSG_NEW_HIGH_SCORE: &str = "New high score!";

/// Control reference shown on the main menu.
pub const CONTROLS: [(&str, &str); 6] = [
    ("Left/Right", "Rotate Ship"),
    ("Up", "Thrust"),
    ("Space", "Shoot"),
    ("P", "Pause"),
    ("R", "Restart after game over"),
    ("Esc/Q", "Quit"),
];
