//! Score, wave and lives line above the playfield.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::game::GameState;
use crate::theme;

const LIFE_GLYPH: &str = "▲";

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let world = &app.world;
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(24)]).areas(area);

    let label = Style::default().fg(theme::TEXT_SECONDARY);
    let value = Style::default()
        .fg(theme::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::raw(" "),
        Span::styled("Score ", label),
        Span::styled(world.score.to_string(), value),
        Span::styled("  High ", label),
        Span::styled(world.high_score.to_string(), value),
    ];
    if matches!(world.state, GameState::Playing | GameState::Paused) {
        spans.push(Span::styled("  Wave ", label));
        spans.push(Span::styled(world.wave.to_string(), value));
        if world.ship.has_rapid_fire() {
            spans.push(Span::styled(
                "  RAPID FIRE",
                Style::default()
                    .fg(theme::SHIP_RAPID_FIRE)
                    .add_modifier(Modifier::BOLD),
            ));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), left);

    if matches!(world.state, GameState::Playing | GameState::Paused) {
        let lives = LIFE_GLYPH.repeat(world.lives as usize);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{lives} "),
                Style::default().fg(theme::SHIP),
            )))
            .alignment(Alignment::Right),
            right,
        );
    }
}
