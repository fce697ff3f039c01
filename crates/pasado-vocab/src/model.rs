//! Word-list data model and loading.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Lowest difficulty level.
pub const MIN_DIFFICULTY: f64 = 1.0;
/// Highest difficulty level.
pub const MAX_DIFFICULTY: f64 = 5.0;

/// A vocabulary word with a difficulty rating in [1, 5].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    /// Unique identifier within its list.
    pub id: u32,
    /// Spanish form.
    pub spanish: String,
    /// English gloss.
    pub english: String,
    /// Difficulty rating, 1.0 (beginner) to 5.0 (expert).
    #[serde(default = "default_difficulty")]
    pub difficulty: f64,
    /// Example sentence.
    #[serde(default)]
    pub example: Option<String>,
}

fn default_difficulty() -> f64 {
    2.0
}

/// Which word list a word came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordKind {
    Verbs,
    Adjectives,
}

impl fmt::Display for WordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordKind::Verbs => write!(f, "verbs"),
            WordKind::Adjectives => write!(f, "adjectives"),
        }
    }
}

/// Word files carry their list under a `verbs` or `adjectives` key.
#[derive(Debug, Deserialize)]
struct WordFile {
    #[serde(default)]
    verbs: Option<Vec<Word>>,
    #[serde(default)]
    adjectives: Option<Vec<Word>>,
}

/// Load a word list from a JSON file, accepting either list key.
pub fn load_words(path: &Path) -> Result<Vec<Word>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read word file: {}", path.display()))?;
    parse_words(&content, path)
}

/// Parse word-file contents (useful for testing).
pub fn parse_words(content: &str, source_path: &Path) -> Result<Vec<Word>> {
    let file: WordFile = serde_json::from_str(content)
        .with_context(|| format!("failed to parse word file: {}", source_path.display()))?;

    file.verbs.or(file.adjectives).ok_or_else(|| {
        anyhow::anyhow!(
            "invalid word file {} - missing 'verbs' or 'adjectives' key",
            source_path.display()
        )
    })
}
