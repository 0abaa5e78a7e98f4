//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::constants::CONFIG_DIR_ENV;

/// Asteroids: Apocalypse - terminal arcade shooter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Seed for the game's random generator (random if omitted)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Simulation and redraw rate in frames per second
    #[arg(long, value_parser = clap::value_parser!(u32).range(10..=240))]
    pub fps: Option<u32>,

    /// Directory holding config.toml, the high score and logs
    #[arg(long, env = CONFIG_DIR_ENV)]
    pub config_dir: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show or reset the stored high score
    Scores {
        #[command(subcommand)]
        action: Option<ScoresAction>,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoresAction {
    /// Print the high score (default)
    Show,
    /// Delete the stored high score
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_flags() {
        let args = Args::try_parse_from(["apocalypse", "--seed", "7", "--fps", "30"]).unwrap();
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.fps, Some(30));
        assert!(args.command.is_none());
    }

    #[test]
    fn test_fps_out_of_range() {
        assert!(Args::try_parse_from(["apocalypse", "--fps", "5"]).is_err());
    }

    #[test]
    fn test_parse_scores_reset() {
        let args = Args::try_parse_from(["apocalypse", "scores", "reset"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Commands::Scores {
                action: Some(ScoresAction::Reset)
            })
        ));
    }

    #[test]
    fn test_scores_action_is_optional() {
        let args = Args::try_parse_from(["apocalypse", "scores"]).unwrap();
        assert!(matches!(args.command, Some(Commands::Scores { action: None })));
    }
}
