//! High score persistence.
//!
//! The score lives in a small JSON document, `{"high_score": 1234}`. A missing
//! file or a missing key both read as zero.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading or writing the high score file.
#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("failed to access high score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("high score file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
struct HighScoreFile {
    #[serde(default)]
    high_score: u32,
}

/// File-backed high score store.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored high score.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<u32, HighScoreError> {
        if !self.path.exists() {
            return Ok(0);
        }
        let raw = fs::read_to_string(&self.path).map_err(|source| HighScoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let file: HighScoreFile =
            serde_json::from_str(&raw).map_err(|source| HighScoreError::Json {
                path: self.path.clone(),
                source,
            })?;
        Ok(file.high_score)
    }

    /// Like [`load`](Self::load), but logs failures and falls back to zero.
    #[must_use]
    pub fn load_or_default(&self) -> u32 {
        match self.load() {
            Ok(score) => score,
            Err(e) => {
                tracing::warn!("{e}; starting from a high score of 0");
                0
            }
        }
    }

    /// Persist `high_score`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, high_score: u32) -> Result<(), HighScoreError> {
        let io_err = |source| HighScoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let body = serde_json::to_string(&HighScoreFile { high_score }).map_err(|source| {
            HighScoreError::Json {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, body).map_err(io_err)
    }

    /// Remove the stored score. Removing a file that does not exist is fine.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn reset(&self) -> Result<(), HighScoreError> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(HighScoreError::Io {
                path: self.path.clone(),
                source: e,
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> HighScoreStore {
        HighScoreStore::new(dir.path().join("highscore.json"))
    }

    #[test]
    fn test_missing_file_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).load().unwrap(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(4210).unwrap();
        assert_eq!(store.load().unwrap(), 4210);

        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, r#"{"high_score":4210}"#);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path().join("nested/deeper/highscore.json"));
        store.save(7).unwrap();
        assert_eq!(store.load().unwrap(), 7);
    }

    #[test]
    fn test_missing_key_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{}").unwrap();
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json").unwrap();
        let err = store.load().unwrap_err();
        assert!(matches!(err, HighScoreError::Json { .. }));
        assert_eq!(store.load_or_default(), 0);
    }

    #[test]
    fn test_reset_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.reset().unwrap();
        store.save(10).unwrap();
        store.reset().unwrap();
        assert!(!store.path().exists());
        assert_eq!(store.load().unwrap(), 0);
    }
}
