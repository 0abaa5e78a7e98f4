//! UI rendering module

mod overlays;
mod playfield;
mod widgets;

use crate::app::App;
use crate::game::GameState;
use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

/// Main render function - draws the playfield then the overlay for the current state
pub fn render(frame: &mut Frame, app: &App) {
    let [hud_area, field_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    widgets::hud::render(frame, app, hud_area);
    playfield::render(frame, app, field_area);
    widgets::footer::render(frame, app, footer_area);

    match app.world.state {
        GameState::Menu => overlays::menu::render(frame, field_area),
        GameState::Paused => overlays::pause::render(frame, &app.world, field_area),
        GameState::GameOver => overlays::game_over::render(frame, app, field_area),
        GameState::Playing => {
            if let Some(wave) = app.world.wave_banner() {
                overlays::banner::render(frame, &format!("Level {wave} Cleared!"), field_area);
            }
        }
    }
}
