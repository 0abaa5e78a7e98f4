//! Footer widget with state-aware keybinding hints

use crate::app::App;
use crate::game::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Hints for the keys that do something in the current state
fn hints_for(state: GameState) -> &'static [(&'static str, &'static str)] {
    match state {
        GameState::Menu => &[("Space", "Start"), ("q", "Quit")],
        GameState::Playing => &[
            ("←→", "Rotate"),
            ("↑", "Thrust"),
            ("Space", "Shoot"),
            ("p", "Pause"),
            ("q", "Quit"),
        ],
        GameState::Paused => &[
            ("↑↓", "Select"),
            ("Enter", "Confirm"),
            ("p", "Resume"),
            ("q", "Quit"),
        ],
        GameState::GameOver => &[("r", "Restart"), ("q", "Quit")],
    }
}

/// Render footer with the hints for the current state
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    render_hints(frame, area, hints_for(app.world.state));
}

fn render_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let [hints_area, branding_area] = Layout::horizontal([
        Constraint::Min(0),     // Hints (left)
        Constraint::Length(20), // Branding (right)
    ])
    .areas(area);

    // 1. Render hints on the left
    let mut hint_spans = Vec::new();
    let mut current_width = 0;
    let max_width = hints_area.width as usize;

    hint_spans.push(Span::raw(" "));
    current_width += 1;

    for (i, (key, action)) in hints.iter().enumerate() {
        // "key" + " " + "action", plus " │ " before every item but the first
        let sep_width = if i > 0 { 3 } else { 0 };
        let item_width = key.chars().count() + 1 + action.len() + sep_width;

        if current_width + item_width > max_width {
            break;
        }

        if i > 0 {
            hint_spans.push(Span::styled(
                " │ ",
                Style::default().fg(Color::Rgb(50, 50, 50)),
            ));
        }
        hint_spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        hint_spans.push(Span::raw(" "));
        hint_spans.push(Span::styled(*action, Style::default().fg(Color::DarkGray)));

        current_width += item_width;
    }
    frame.render_widget(Paragraph::new(Line::from(hint_spans)), hints_area);

    // 2. Render branding on the right
    let branding = Line::from(vec![Span::styled(
        format!(
            "{} v{} ",
            crate::constants::APP_NAME,
            crate::constants::APP_VERSION
        ),
        Style::default().fg(crate::theme::NORD_POLAR_NIGHT_4),
    )]);
    frame.render_widget(
        Paragraph::new(branding).alignment(Alignment::Right),
        branding_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_state_can_quit() {
        for state in [
            GameState::Menu,
            GameState::Playing,
            GameState::Paused,
            GameState::GameOver,
        ] {
            assert!(hints_for(state).iter().any(|(_, action)| *action == "Quit"));
        }
    }
}
