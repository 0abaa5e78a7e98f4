//! Application state and the main loop.
//!
//! [`App`] glues the terminal to the [`World`]: it routes key events to menu
//! commands or the held-key tracker, steps the simulation on every tick and
//! persists new high scores.

use std::time::Instant;

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::constants::MAX_FRAME_DT;
use crate::event::{Event, EventHandler};
use crate::game::{GameEvent, GameState, World};
use crate::input::InputTracker;
use crate::storage::HighScoreStore;
use crate::tui::Tui;
use crate::ui;

pub struct App {
    pub world: World,
    pub input: InputTracker,
    /// The finished game beat the previous high score.
    pub new_high_score: bool,
    /// Set when the high score file could not be written this session.
    pub save_failed: bool,
    pub running: bool,
    store: HighScoreStore,
    last_tick: Option<Instant>,
}

impl App {
    #[must_use]
    pub fn new(world: World, store: HighScoreStore, reports_releases: bool) -> Self {
        Self {
            world,
            input: InputTracker::new(reports_releases),
            new_high_score: false,
            save_failed: false,
            running: true,
            store,
            last_tick: None,
        }
    }

    /// Run until the player quits.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails or the event channel closes.
    pub fn run(&mut self, terminal: &mut Tui, events: &EventHandler) -> Result<()> {
        terminal.draw(|frame| ui::render(frame, self))?;
        while self.running {
            match events.next()? {
                Event::Tick => {
                    self.on_tick(Instant::now());
                    terminal.draw(|frame| ui::render(frame, self))?;
                }
                Event::Key(key) => self.handle_key(key, Instant::now()),
                Event::Resize => {
                    terminal.draw(|frame| ui::render(frame, self))?;
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind == KeyEventKind::Release {
            self.input.handle_key(key, now);
            return;
        }

        let ctrl_c =
            key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if ctrl_c || matches!(key.code, KeyCode::Esc | KeyCode::Char('q' | 'Q')) {
            tracing::info!(state = %self.world.state, "quit requested");
            self.running = false;
            return;
        }

        let repeat = key.kind == KeyEventKind::Repeat;
        match self.world.state {
            GameState::Menu => {
                if key.code == KeyCode::Char(' ') && !repeat {
                    self.start_game();
                }
            }
            GameState::Playing => match key.code {
                KeyCode::Char('p' | 'P') if !repeat => {
                    self.world.toggle_pause();
                    self.input.release_all();
                    tracing::debug!("paused");
                }
                _ => self.input.handle_key(key, now),
            },
            GameState::Paused => match key.code {
                KeyCode::Char('p' | 'P') if !repeat => {
                    self.world.toggle_pause();
                    tracing::debug!("resumed");
                }
                KeyCode::Up | KeyCode::Char('k') => self.world.move_pause_selection(-1),
                KeyCode::Down | KeyCode::Char('j') => self.world.move_pause_selection(1),
                KeyCode::Enter | KeyCode::Char(' ') if !repeat => {
                    let choice = self.world.selected_pause_option();
                    tracing::info!(choice = choice.label(), "pause menu");
                    self.world.confirm_pause_selection();
                    self.input.release_all();
                }
                _ => {}
            },
            GameState::GameOver => {
                if matches!(key.code, KeyCode::Char('r' | 'R')) && !repeat {
                    self.start_game();
                }
            }
        }
    }

    fn start_game(&mut self) {
        self.world.start_game();
        self.input.release_all();
        self.new_high_score = false;
        tracing::info!(lives = self.world.lives, "game started");
    }

    /// Advance the simulation by the wall time since the previous tick.
    pub fn on_tick(&mut self, now: Instant) {
        let dt = self
            .last_tick
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f64())
            .min(MAX_FRAME_DT);
        self.last_tick = Some(now);

        let controls = self.input.controls(now);
        self.world.update(dt, controls);
        self.process_events();
    }

    fn process_events(&mut self) {
        for event in self.world.drain_events() {
            match event {
                GameEvent::ShotFired => {}
                GameEvent::AsteroidDestroyed { size } => {
                    tracing::debug!(%size, score = self.world.score, "asteroid destroyed");
                }
                GameEvent::MissileLaunched => tracing::debug!("missile launched"),
                GameEvent::MissileDestroyed => tracing::debug!("missile destroyed"),
                GameEvent::MissilesCleared { count } => tracing::debug!(count, "missiles cleared"),
                GameEvent::MissileExpired => tracing::debug!("missile burned out"),
                GameEvent::UfoArrived => tracing::info!("ufo arrived"),
                GameEvent::UfoHit { health } => tracing::debug!(health, "ufo hit"),
                GameEvent::UfoDestroyed => tracing::info!("ufo destroyed"),
                GameEvent::UfoDeparted => tracing::debug!("ufo departed"),
                GameEvent::BlackHoleOpened => tracing::info!("black hole opened"),
                GameEvent::BlackHoleClosed => tracing::debug!("black hole closed"),
                GameEvent::ShipCaptured => tracing::info!("ship warped by black hole"),
                GameEvent::ShipDestroyed { lives_left } => {
                    tracing::info!(lives_left, "ship destroyed");
                }
                GameEvent::WaveCleared { wave } => {
                    tracing::info!(wave, score = self.world.score, "wave cleared");
                }
                GameEvent::GameOver {
                    score,
                    new_high_score,
                } => {
                    tracing::info!(score, new_high_score, "game over");
                    self.new_high_score = new_high_score;
                    if new_high_score {
                        self.save_high_score(score);
                    }
                }
            }
        }
    }

    fn save_high_score(&mut self, score: u32) {
        match self.store.save(score) {
            Ok(()) => {
                self.save_failed = false;
                tracing::info!(score, path = %self.store.path().display(), "high score saved");
            }
            Err(e) => {
                self.save_failed = true;
                tracing::error!("{e}");
            }
        }
    }
}
