//! Pause menu overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use super::centered_rect;
use crate::constants::MSG_PAUSED;
use crate::game::{PauseOption, World};
use crate::theme;

pub fn render(frame: &mut Frame, world: &World, area: Rect) {
    let max_label_len = PauseOption::ALL
        .iter()
        .map(|o| o.label().len())
        .max()
        .unwrap_or(12);
    #[allow(clippy::cast_possible_truncation)]
    let width = ((max_label_len + 8) as u16).min(area.width);
    #[allow(clippy::cast_possible_truncation)]
    let height = ((PauseOption::ALL.len() + 2) as u16).min(area.height);
    let menu_area = centered_rect(width, height, area);

    frame.render_widget(Clear, menu_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_FOCUSED))
        .title(format!(" {MSG_PAUSED} "));
    let inner = block.inner(menu_area);
    frame.render_widget(block, menu_area);

    let items: Vec<ListItem> = PauseOption::ALL
        .iter()
        .map(|option| {
            ListItem::new(Line::from(Span::styled(
                option.label(),
                Style::default().fg(theme::TEXT_PRIMARY),
            )))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(theme::ROW_SELECTED_BG)
                .fg(theme::ROW_SELECTED_FG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(world.pause_selection));
    frame.render_stateful_widget(list, inner, &mut state);
}
