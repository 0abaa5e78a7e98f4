//! Final score card.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::app::App;
use crate::constants::{MSG_GAME_OVER, MSG_NEW_HIGH_SCORE, MSG_PRESS_RESTART};
use crate::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let world = &app.world;
    let mut lines = vec![
        Line::from(Span::styled(
            MSG_GAME_OVER,
            Style::default()
                .fg(theme::ERROR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Your Score: ", Style::default().fg(theme::TEXT_SECONDARY)),
            Span::styled(
                world.score.to_string(),
                Style::default().fg(theme::TEXT_PRIMARY),
            ),
        ]),
        Line::from(vec![
            Span::styled("High Score: ", Style::default().fg(theme::TEXT_SECONDARY)),
            Span::styled(
                world.high_score.to_string(),
                Style::default().fg(theme::TEXT_PRIMARY),
            ),
        ]),
    ];
    if app.new_high_score {
        lines.push(Line::from(Span::styled(
            MSG_NEW_HIGH_SCORE,
            Style::default().fg(theme::NORD_GREEN),
        )));
    }
    if app.save_failed {
        lines.push(Line::from(Span::styled(
            "(could not save, see log)",
            Style::default().fg(theme::WARNING),
        )));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        MSG_PRESS_RESTART,
        Style::default()
            .fg(theme::ACCENT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )));

    #[allow(clippy::cast_possible_truncation)]
    let height = (lines.len() as u16 + 2).min(area.height);
    let card = centered_rect(32.min(area.width), height, area);

    frame.render_widget(Clear, card);
    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::BORDER_FOCUSED)),
            )
            .alignment(Alignment::Center),
        card,
    );
}
