//! Popups drawn over the playfield.

pub mod banner;
pub mod game_over;
pub mod menu;
pub mod pause;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Create a centered rectangle with fixed dimensions
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
