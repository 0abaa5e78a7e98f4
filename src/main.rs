//! Asteroids: Apocalypse
//!
//! A terminal arcade shooter: rotate, thrust and shoot through waves of
//! splitting asteroids while dodging a saucer's tractor beam and homing
//! missiles, or dive into a black hole for a shield and rapid fire.

mod app;
mod cli;
mod config;
mod constants;
mod event;
mod game;
mod input;
mod logging;
mod storage;
mod theme;
mod tui;
mod ui;

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use color_eyre::Result;

use app::App;
use cli::args::{Args, Commands};
use config::AppConfig;
use event::EventHandler;
use game::World;
use storage::HighScoreStore;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let (config_dir, source) = config::resolve_config_dir(args.config_dir.clone());
    let config = AppConfig::load(&config_dir)?;
    let log_path = logging::init(&config_dir, &config.logging.level)?;
    tracing::info!(
        version = constants::APP_VERSION,
        config_dir = %config_dir.display(),
        source,
        log = %log_path.display(),
        "starting"
    );

    let store = HighScoreStore::new(config.high_score_path(&config_dir));

    match args.command {
        Some(Commands::Scores { action }) => {
            cli::commands::handle_scores(&store, action, &mut io::stdout().lock())
        }
        None => run_game(&args, &config, store),
    }
}

/// Seed from the clock when neither the command line nor the config fixes one.
#[allow(clippy::cast_possible_truncation)]
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |d| d.subsec_nanos() ^ d.as_secs() as u32)
}

fn run_game(args: &Args, config: &AppConfig, store: HighScoreStore) -> Result<()> {
    let seed = args.seed.or(config.game.seed).unwrap_or_else(clock_seed);
    let fps = args.fps.unwrap_or(config.game.fps);
    let high_score = store.load_or_default();
    tracing::info!(seed, fps, high_score, "launching game");

    let world = World::new(seed, config.game.starting_lives, high_score);

    tui::install_panic_hook();
    let (mut terminal, key_releases) = match tui::init() {
        Ok(setup) => setup,
        Err(e) => {
            let _ = tui::restore();
            return Err(e);
        }
    };
    let events = EventHandler::new(fps);
    let mut app = App::new(world, store, key_releases);

    let result = app.run(&mut terminal, &events);
    tui::restore()?;

    tracing::info!(score = app.world.score, "exiting");
    result
}
