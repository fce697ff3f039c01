//! Usage history and difficulty preference persistence.
//!
//! History tracks which words have gone out, the moving difficulty
//! preference, and every adjustment made to it. Writes go through a
//! temp-file-and-rename so a crash never corrupts the record.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{WordKind, MAX_DIFFICULTY, MIN_DIFFICULTY};

/// Default difficulty preference for a fresh history.
pub const DEFAULT_DIFFICULTY: f64 = 2.0;

/// One delivered word pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentRecord {
    pub date: NaiveDate,
    pub verb_id: u32,
    pub adjective_id: u32,
    pub difficulty_level: f64,
}

/// One difficulty adjustment, kept for auditability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentRecord {
    pub date: NaiveDate,
    pub feedback: String,
    pub old_level: f64,
    pub new_level: f64,
}

/// The persisted vocabulary history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    #[serde(default)]
    pub sent: Vec<SentRecord>,
    #[serde(default)]
    pub used_verbs: Vec<u32>,
    #[serde(default)]
    pub used_adjectives: Vec<u32>,
    #[serde(default)]
    pub total_sent: u32,
    #[serde(default = "default_level")]
    pub difficulty_level: f64,
    #[serde(default)]
    pub adjustments: Vec<AdjustmentRecord>,
    #[serde(default)]
    pub last_feedback_check: Option<DateTime<Utc>>,
}

fn default_level() -> f64 {
    DEFAULT_DIFFICULTY
}

impl Default for History {
    fn default() -> Self {
        Self {
            sent: Vec::new(),
            used_verbs: Vec::new(),
            used_adjectives: Vec::new(),
            total_sent: 0,
            difficulty_level: DEFAULT_DIFFICULTY,
            adjustments: Vec::new(),
            last_feedback_check: None,
        }
    }
}

impl History {
    /// Record a delivered pair, marking the words used.
    pub fn record_sent(&mut self, verb_id: u32, adjective_id: u32, date: NaiveDate) {
        self.sent.push(SentRecord {
            date,
            verb_id,
            adjective_id,
            difficulty_level: self.difficulty_level,
        });
        if !self.used_verbs.contains(&verb_id) {
            self.used_verbs.push(verb_id);
        }
        if !self.used_adjectives.contains(&adjective_id) {
            self.used_adjectives.push(adjective_id);
        }
        self.total_sent += 1;
    }

    /// Used-id list for a word kind.
    pub fn used(&self, kind: WordKind) -> &[u32] {
        match kind {
            WordKind::Verbs => &self.used_verbs,
            WordKind::Adjectives => &self.used_adjectives,
        }
    }

    /// Forget which words of a kind have been used. Called when a list
    /// is exhausted so selection can start over.
    pub fn reset_used(&mut self, kind: WordKind) {
        match kind {
            WordKind::Verbs => self.used_verbs.clear(),
            WordKind::Adjectives => self.used_adjectives.clear(),
        }
    }

    /// Move the difficulty preference and record the adjustment.
    /// The level is clamped to [1, 5]; returns the new level.
    pub fn adjust_difficulty(&mut self, feedback: &str, delta: f64, now: DateTime<Utc>) -> f64 {
        let old_level = self.difficulty_level;
        let new_level = (old_level + delta).clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);
        self.adjustments.push(AdjustmentRecord {
            date: now.date_naive(),
            feedback: feedback.to_string(),
            old_level,
            new_level,
        });
        self.difficulty_level = new_level;
        self.last_feedback_check = Some(now);
        new_level
    }
}

/// Loads and saves the history blob.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the history; a missing file yields defaults, a corrupt one
    /// is an error (the history is the difficulty source of truth, so
    /// silently discarding it would reset the user's level).
    pub fn load(&self) -> Result<History> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(History::default());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("failed to read history: {}", self.path.display())
                });
            }
        };
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse history: {}", self.path.display()))
    }

    /// Persist the history atomically.
    pub fn save(&self, history: &History) -> Result<()> {
        let json = serde_json::to_string_pretty(history).context("failed to serialize history")?;
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .context("failed to create temp file for history")?;
        tmp.write_all(json.as_bytes())
            .context("failed to write history")?;
        tmp.persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn record_sent_marks_words_used_once() {
        let mut history = History::default();
        history.record_sent(1, 10, date("2026-08-29"));
        history.record_sent(1, 11, date("2026-08-30"));

        assert_eq!(history.used_verbs, vec![1]);
        assert_eq!(history.used_adjectives, vec![10, 11]);
        assert_eq!(history.total_sent, 2);
        assert_eq!(history.sent.len(), 2);
        assert_eq!(history.sent[0].difficulty_level, DEFAULT_DIFFICULTY);
    }

    #[test]
    fn adjust_difficulty_clamps_and_records() {
        let mut history = History::default();
        let now = Utc::now();

        assert_eq!(history.adjust_difficulty("easy", 0.5, now), 2.5);
        assert_eq!(history.adjust_difficulty("hard", -0.5, now), 2.0);

        history.difficulty_level = 4.8;
        assert_eq!(history.adjust_difficulty("easy", 0.5, now), 5.0);
        history.difficulty_level = 1.2;
        assert_eq!(history.adjust_difficulty("hard", -0.5, now), 1.0);

        assert_eq!(history.adjustments.len(), 4);
        assert_eq!(history.adjustments[0].old_level, 2.0);
        assert_eq!(history.adjustments[0].new_level, 2.5);
        assert!(history.last_feedback_check.is_some());
    }

    #[test]
    fn reset_used_clears_one_kind() {
        let mut history = History::default();
        history.record_sent(1, 10, date("2026-08-29"));
        history.reset_used(WordKind::Verbs);
        assert!(history.used_verbs.is_empty());
        assert_eq!(history.used_adjectives, vec![10]);
    }

    #[test]
    fn store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"));

        assert_eq!(store.load().unwrap().difficulty_level, DEFAULT_DIFFICULTY);

        let mut history = History::default();
        history.adjust_difficulty("easy", 0.5, Utc::now());
        history.record_sent(3, 7, date("2026-08-29"));
        store.save(&history).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.difficulty_level, 2.5);
        assert_eq!(loaded.used_verbs, vec![3]);
        assert_eq!(loaded.adjustments.len(), 1);
    }

    #[test]
    fn corrupt_history_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"));
        fs::write(store.path(), "{broken").unwrap();
        assert!(store.load().is_err());
    }
}
