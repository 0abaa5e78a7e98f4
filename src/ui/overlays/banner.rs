//! Wave-cleared banner

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;
use crate::theme;

/// Render a short announcement in the middle of `area`
pub fn render(frame: &mut Frame, message: &str, area: Rect) {
    let width = (area.width / 3).clamp(24, 48).min(area.width);

    let inner_width = width.saturating_sub(4) as usize;
    let text_len = message.chars().count();
    let text_lines = if inner_width > 0 {
        u16::try_from(text_len.div_ceil(inner_width)).unwrap_or(1)
    } else {
        1
    };
    let height = (text_lines + 4).max(5).min(area.height);

    let banner_area = centered_rect(width, height, area);
    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::NORD_GREEN))
        .title(Span::styled(
            " WAVE ",
            Style::default()
                .fg(Color::Black)
                .bg(theme::NORD_GREEN)
                .add_modifier(Modifier::BOLD),
        ));

    let inner_area = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let [_, text_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(text_lines),
        Constraint::Fill(1),
    ])
    .areas(inner_area);

    let paragraph = Paragraph::new(message)
        .style(
            Style::default()
                .fg(theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, text_area);
}
