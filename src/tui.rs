//! Terminal setup and teardown.

use std::io::{self, Stdout};

use color_eyre::Result;
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen. Returns the terminal and whether
/// key release events were enabled.
///
/// # Errors
///
/// Returns an error if the terminal cannot be switched into raw mode.
pub fn init() -> Result<(Tui, bool)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let releases = supports_keyboard_enhancement().unwrap_or(false);
    if releases {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    tracing::debug!(key_releases = releases, "terminal initialised");

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok((terminal, releases))
}

/// Leave the alternate screen and raw mode.
///
/// Safe to call more than once, and from a panic hook.
///
/// # Errors
///
/// Returns an error if the terminal cannot be restored.
pub fn restore() -> Result<()> {
    let mut stdout = io::stdout();
    // Popping with nothing pushed is a no-op for the terminal.
    let _ = execute!(stdout, PopKeyboardEnhancementFlags);
    execute!(stdout, LeaveAlternateScreen, crossterm::cursor::Show)?;
    disable_raw_mode()?;
    Ok(())
}

/// Restore the terminal before the existing panic hook prints its report.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore();
        tracing::error!(%info, "panic");
        previous(info);
    }));
}
