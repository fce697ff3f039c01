//! Flat-blob persistence for the mastery record.
//!
//! The store is deliberately forgiving: a missing or corrupt blob loads
//! as a fresh default record, and a failed save is logged and swallowed
//! because the in-memory record stays authoritative for the session.
//! Practice telemetry is low-value state, not source of truth.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::stats::Stats;

/// Loads, saves, and clears the serialized [`Stats`] blob.
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing blob.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted record, substituting defaults when the blob
    /// is absent or unparsable. Never returns an error.
    pub fn load(&self) -> Stats {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Stats::default();
            }
            Err(e) => {
                tracing::warn!("failed to read stats blob {}: {e}", self.path.display());
                return Stats::default();
            }
        };

        match serde_json::from_str::<Stats>(&content) {
            Ok(mut stats) => {
                stats.sanitize();
                stats
            }
            Err(e) => {
                tracing::warn!(
                    "corrupt stats blob {}, starting fresh: {e}",
                    self.path.display()
                );
                Stats::default()
            }
        }
    }

    /// Persist the record. Failures are logged and swallowed; the
    /// caller's in-memory record remains authoritative.
    pub fn save(&self, stats: &Stats) {
        if let Err(e) = self.try_save(stats) {
            tracing::warn!("failed to save stats to {}: {e}", self.path.display());
        }
    }

    fn try_save(&self, stats: &Stats) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(stats)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        // Write-then-rename so a crash mid-write never leaves a
        // half-written blob behind.
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Delete the persisted record. Idempotent: clearing an already
    /// absent blob is a no-op, not an error.
    pub fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!("failed to clear stats at {}: {e}", self.path.display());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConceptTag;
    use crate::stats::RecentResult;

    fn store_in(dir: &tempfile::TempDir) -> StatsStore {
        StatsStore::new(dir.path().join("stats.json"))
    }

    #[test]
    fn load_missing_blob_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let stats = store.load();
        assert_eq!(stats.total_reps, 0);
        assert!(stats.concept_accuracy.is_empty());
    }

    #[test]
    fn load_corrupt_blob_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();
        let stats = store.load();
        assert_eq!(stats.total_reps, 0);
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut stats = Stats::default();
        stats.streak = 4;
        stats.total_reps = 12;
        stats.concept_accuracy.insert(ConceptTag::Weather, 0.75);
        stats.recent_results.push(RecentResult { correct: true });
        store.save(&stats);

        let loaded = store.load();
        assert_eq!(loaded.streak, 4);
        assert_eq!(loaded.total_reps, 12);
        assert_eq!(loaded.concept_accuracy(ConceptTag::Weather), Some(0.75));
        assert_eq!(loaded.recent_results.len(), 1);
    }

    #[test]
    fn roundtrip_preserves_unrecognized_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{"streak": 2, "future_feature": [1, 2, 3]}"#,
        )
        .unwrap();

        let stats = store.load();
        store.save(&stats);

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["streak"], serde_json::json!(2));
        assert_eq!(raw["future_feature"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&Stats::default());
        assert!(store.path().exists());
        store.clear();
        assert!(!store.path().exists());
        // Second clear must be a no-op, not an error.
        store.clear();
    }
}
