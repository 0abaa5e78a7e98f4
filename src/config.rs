//! User configuration loaded from `config.toml`.
//!
//! Every key is optional. A missing file yields the defaults, and command-line
//! flags override whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::constants;

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Simulation and redraw rate.
    pub fps: u32,
    pub starting_lives: u32,
    /// Fixed RNG seed; a fresh one is drawn per launch when unset.
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps: constants::DEFAULT_FPS,
            starting_lives: constants::STARTING_LIVES,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    pub high_score_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `apocalypse=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub game: GameConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load `config.toml` from `config_dir`, or defaults when it is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_dir.join(constants::CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::parse(&raw).map_err(|source| ConfigError::Parse { path, source })
    }

    fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(raw)?;
        config.game.fps = config.game.fps.clamp(10, 240);
        config.game.starting_lives = config.game.starting_lives.max(1);
        Ok(config)
    }

    /// Where the high score lives: the configured file, else next to the config.
    #[must_use]
    pub fn high_score_path(&self, config_dir: &Path) -> PathBuf {
        self.storage
            .high_score_file
            .clone()
            .unwrap_or_else(|| config_dir.join(constants::HIGH_SCORE_FILE_NAME))
    }
}

/// Resolve the configuration directory: an explicit override, else the
/// platform config dir, else the working directory.
#[must_use]
pub fn resolve_config_dir(override_dir: Option<PathBuf>) -> (PathBuf, &'static str) {
    if let Some(dir) = override_dir {
        return (dir, "override");
    }
    match dirs::config_dir() {
        Some(dir) => (dir.join(constants::APP_NAME), "default"),
        None => (PathBuf::from("."), "fallback"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.game.fps, constants::DEFAULT_FPS);
        assert_eq!(config.game.starting_lives, 3);
        assert_eq!(config.game.seed, None);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_partial_file() {
        let config = AppConfig::parse("[game]\nseed = 42\n").unwrap();
        assert_eq!(config.game.seed, Some(42));
        assert_eq!(config.game.fps, constants::DEFAULT_FPS);
        assert_eq!(config.storage.high_score_file, None);
    }

    #[test]
    fn test_parse_clamps_out_of_range_values() {
        let config = AppConfig::parse("[game]\nfps = 1000\nstarting_lives = 0\n").unwrap();
        assert_eq!(config.game.fps, 240);
        assert_eq!(config.game.starting_lives, 1);
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(AppConfig::parse("[game]\nlives = 9\n").is_err());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(AppConfig::load(dir.path()).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(constants::CONFIG_FILE_NAME),
            "[game]\nstarting_lives = 5\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();
        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.game.starting_lives, 5);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_reports_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(constants::CONFIG_FILE_NAME), "[game\n").unwrap();
        let err = AppConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_high_score_path() {
        let dir = Path::new("/tmp/apocalypse");
        let mut config = AppConfig::default();
        assert_eq!(
            config.high_score_path(dir),
            dir.join(constants::HIGH_SCORE_FILE_NAME)
        );
        config.storage.high_score_file = Some(PathBuf::from("/data/hs.json"));
        assert_eq!(config.high_score_path(dir), PathBuf::from("/data/hs.json"));
    }

    #[test]
    fn test_resolve_override() {
        let (dir, source) = resolve_config_dir(Some(PathBuf::from("/custom")));
        assert_eq!(dir, PathBuf::from("/custom"));
        assert_eq!(source, "override");
    }
}
