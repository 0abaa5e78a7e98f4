//! Non-interactive subcommands.

use std::io::Write;

use color_eyre::Result;

use crate::cli::args::ScoresAction;
use crate::storage::HighScoreStore;

/// Run `scores [show|reset]`, writing the outcome to `out`.
///
/// # Errors
///
/// Returns an error if the high score file cannot be read or removed.
pub fn handle_scores(
    store: &HighScoreStore,
    action: Option<ScoresAction>,
    out: &mut impl Write,
) -> Result<()> {
    match action.unwrap_or(ScoresAction::Show) {
        ScoresAction::Show => {
            let score = store.load()?;
            writeln!(out, "High score: {score}")?;
        }
        ScoresAction::Reset => {
            store.reset()?;
            tracing::info!(path = %store.path().display(), "high score reset");
            writeln!(out, "High score reset.")?;
        }
    }
    Ok(())
}
