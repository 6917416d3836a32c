//! Persistent best-score storage
//!
//! The score is kept as a plain decimal integer in `highscore.txt`. A
//! missing or corrupt file reads as zero; loading is never an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Key-value capability for the single persisted highscore.
pub trait HighscoreStore {
    /// Best score on record, 0 when absent or unreadable.
    fn load(&self) -> u64;
    /// Persist a new best score.
    fn save(&mut self, score: u64) -> io::Result<()>;
}

/// Plain-text file store, `highscore.txt` in the working directory by
/// default.
pub struct FileHighscoreStore {
    path: PathBuf,
}

impl FileHighscoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The conventional location in the process working directory.
    pub fn default_path() -> Self {
        Self::new("highscore.txt")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighscoreStore for FileHighscoreStore {
    fn load(&self) -> u64 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match contents.trim().parse() {
                Ok(score) => {
                    log::info!("loaded highscore {score}");
                    score
                }
                Err(_) => {
                    log::warn!(
                        "{} holds non-numeric data, starting from 0",
                        self.path.display()
                    );
                    0
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no highscore file yet, starting from 0");
                0
            }
            Err(err) => {
                log::warn!("could not read {}: {err}", self.path.display());
                0
            }
        }
    }

    fn save(&mut self, score: u64) -> io::Result<()> {
        fs::write(&self.path, score.to_string())?;
        log::info!("highscore {score} saved");
        Ok(())
    }
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryHighscoreStore {
    pub best: u64,
}

impl HighscoreStore for MemoryHighscoreStore {
    fn load(&self) -> u64 {
        self.best
    }

    fn save(&mut self, score: u64) -> io::Result<()> {
        self.best = score;
        Ok(())
    }
}
