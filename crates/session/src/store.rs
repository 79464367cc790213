//! Score persistence collaborators.
//!
//! The session only needs load-on-start and save-on-record semantics; the
//! storage medium is the collaborator's concern. Failures here must never
//! reach the game tick: the session treats an unreadable store as an empty
//! board and ignores save errors.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use voxtris_types::HighScoreEntry;

/// Durable storage for high-score entries.
pub trait ScoreStore {
    fn load(&self) -> Result<Vec<HighScoreEntry>>;
    fn save(&self, entries: &[HighScoreEntry]) -> Result<()>;
}

/// Discards everything: headless runs and tests.
#[derive(Debug, Default)]
pub struct NullScoreStore;

impl ScoreStore for NullScoreStore {
    fn load(&self) -> Result<Vec<HighScoreEntry>> {
        Ok(Vec::new())
    }

    fn save(&self, _entries: &[HighScoreEntry]) -> Result<()> {
        Ok(())
    }
}

/// On-disk wire format. Kept separate from the in-memory entry so the file
/// schema can evolve independently.
#[derive(Debug, Serialize, Deserialize)]
struct StoredEntry {
    score: u32,
    timestamp: u64,
}

/// JSON-file-backed store.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonScoreStore {
    fn load(&self) -> Result<Vec<HighScoreEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let stored: Vec<StoredEntry> =
            serde_json::from_str(&data).with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(stored
            .into_iter()
            .map(|e| HighScoreEntry {
                score: e.score,
                timestamp: e.timestamp,
            })
            .collect())
    }

    fn save(&self, entries: &[HighScoreEntry]) -> Result<()> {
        let stored: Vec<StoredEntry> = entries
            .iter()
            .map(|e| StoredEntry {
                score: e.score,
                timestamp: e.timestamp,
            })
            .collect();
        let data = serde_json::to_string_pretty(&stored)?;
        fs::write(&self.path, data).with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

/// Seconds since the Unix epoch, saturating at zero on clock skew.
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("voxtris-{}-{}.json", name, std::process::id()));
        path
    }

    #[test]
    fn test_json_store_roundtrip() {
        let path = temp_path("roundtrip");
        let store = JsonScoreStore::new(&path);

        let entries = vec![
            HighScoreEntry {
                score: 840,
                timestamp: 1_700_000_000,
            },
            HighScoreEntry {
                score: 140,
                timestamp: 1_700_000_100,
            },
        ];
        store.save(&entries).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, entries);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_json_store_missing_file_is_empty() {
        let store = JsonScoreStore::new(temp_path("missing-never-created"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_json_store_corrupt_file_errors() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json at all").unwrap();
        let store = JsonScoreStore::new(&path);
        assert!(store.load().is_err());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_null_store() {
        let store = NullScoreStore;
        assert!(store.load().unwrap().is_empty());
        assert!(store.save(&[]).is_ok());
    }
}
