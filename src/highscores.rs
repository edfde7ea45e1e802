//! High score persistence
//!
//! A single integer stored as a small JSON file. Both failure modes are
//! non-fatal: a missing or unreadable file reads as zero, and write errors
//! are logged and swallowed.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk format: `{"high": N}`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct HighScoreFile {
    high: u32,
}

/// Handle to the persisted high score.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Store at the default location under the user's home directory.
    pub fn new() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        Self {
            path: PathBuf::from(home).join(".neon_runner_score.json"),
        }
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the persisted high score, defaulting to zero on any failure.
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str::<HighScoreFile>(&json) {
                Ok(file) => {
                    log::info!("Loaded high score {} from {}", file.high, self.path.display());
                    file.high
                }
                Err(err) => {
                    log::warn!("Unreadable high score file, starting from 0: {err}");
                    0
                }
            },
            Err(_) => {
                log::info!("No high score file at {}, starting fresh", self.path.display());
                0
            }
        }
    }

    /// Persist a new high score. Best-effort: failures are logged, never
    /// surfaced.
    pub fn save(&self, value: u32) {
        let file = HighScoreFile { high: value };
        match serde_json::to_string(&file) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.path, json) {
                    log::warn!("Failed to save high score: {err}");
                } else {
                    log::info!("High score {value} saved");
                }
            }
            Err(err) => log::warn!("Failed to encode high score: {err}"),
        }
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> HighScoreStore {
        let path = std::env::temp_dir().join(format!("neon_runner_test_{}_{}", name, std::process::id()));
        let _ = fs::remove_file(&path);
        HighScoreStore::at(path)
    }

    #[test]
    fn test_missing_file_reads_zero() {
        let store = temp_store("missing");
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = temp_store("roundtrip");
        store.save(450);
        assert_eq!(store.load(), 450);
    }

    #[test]
    fn test_corrupt_file_reads_zero() {
        let store = temp_store("corrupt");
        fs::write(&store.path, "not json at all").unwrap();
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_wire_format_matches_legacy() {
        let store = temp_store("format");
        store.save(120);
        let json = fs::read_to_string(&store.path).unwrap();
        assert_eq!(json, r#"{"high":120}"#);
    }
}
