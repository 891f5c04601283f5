//! JSON file store

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::HighScoreStore;

/// Current envelope version
pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed save: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported save version {0}")]
    Version(u32),
}

/// On-disk layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveEnvelope {
    pub version: u32,
    pub high_score: u64,
}

/// Best score kept in a small JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored score; `Ok(None)` if there is no file yet
    pub fn read(&self) -> Result<Option<u64>, PersistError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let envelope: SaveEnvelope = serde_json::from_str(&json)?;
        if envelope.version != SAVE_VERSION {
            return Err(PersistError::Version(envelope.version));
        }
        Ok(Some(envelope.high_score))
    }

    /// Write via a temp file and rename, so a crash never leaves half a save
    pub fn write(&self, high_score: u64) -> Result<(), PersistError> {
        let envelope = SaveEnvelope {
            version: SAVE_VERSION,
            high_score,
        };
        let json = serde_json::to_string(&envelope)?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl HighScoreStore for JsonFileStore {
    fn load_high_score(&self) -> Option<u64> {
        match self.read() {
            Ok(Some(score)) => {
                log::info!("Loaded high score {} from {}", score, self.path.display());
                Some(score)
            }
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                None
            }
            Err(e) => {
                log::warn!("Ignoring unreadable save {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save_high_score(&mut self, score: u64) {
        match self.write(score) {
            Ok(()) => log::info!("High score {} saved", score),
            Err(e) => log::warn!("Failed to save high score to {}: {}", self.path.display(), e),
        }
    }
}
