//! Title screen with the control reference.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::constants::{CONTROLS, GAME_TITLE, MSG_PRESS_START};
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let key_width = CONTROLS.iter().map(|(k, _)| k.len()).max().unwrap_or(0);

    let mut lines = vec![
        Line::from(Span::styled(
            GAME_TITLE,
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Controls",
            Style::default().fg(theme::TEXT_SECONDARY),
        )),
    ];
    lines.extend(CONTROLS.iter().map(|(key, action)| {
        Line::from(vec![
            Span::styled(
                format!("{key:>key_width$}"),
                Style::default()
                    .fg(theme::ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!("{action:<24}"), Style::default().fg(theme::TEXT_PRIMARY)),
        ])
    }));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        MSG_PRESS_START,
        Style::default()
            .fg(theme::WARNING)
            .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
    )));

    #[allow(clippy::cast_possible_truncation)]
    let height = (lines.len() as u16 + 2).min(area.height);
    let width = 48.min(area.width);
    let menu_area = centered_rect(width, height, area);

    frame.render_widget(Clear, menu_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_FOCUSED));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        menu_area,
    );
}
