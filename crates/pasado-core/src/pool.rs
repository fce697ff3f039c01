//! Exercise pool loading and validation.
//!
//! Pools are TOML or JSON files with `practice` and `contrast` arrays.
//! A directory of pool files is merged into one pool, skipping
//! unreadable files with a warning.

use std::path::Path;

use crate::error::PoolError;
use crate::model::{ContrastExercise, Exercise, ExercisePool};

/// Parse a single pool file. The format is picked by extension:
/// `.json` parses as JSON, anything else as TOML.
pub fn load_pool(path: &Path) -> Result<ExercisePool, PoolError> {
    let content = std::fs::read_to_string(path).map_err(|source| PoolError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_pool_str(&content, path)
}

/// Parse pool file contents (useful for testing).
pub fn parse_pool_str(content: &str, source_path: &Path) -> Result<ExercisePool, PoolError> {
    if source_path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(content).map_err(|source| PoolError::Json {
            path: source_path.to_path_buf(),
            source,
        })
    } else {
        toml::from_str(content).map_err(|source| PoolError::Toml {
            path: source_path.to_path_buf(),
            source: Box::new(source),
        })
    }
}

/// Recursively load and merge all pool files from a directory.
pub fn load_pool_directory(dir: &Path) -> Result<ExercisePool, PoolError> {
    let mut pool = ExercisePool::default();

    if !dir.is_dir() {
        return Err(PoolError::NotADirectory(dir.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(dir).map_err(|source| PoolError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in read_dir {
        let entry = entry.map_err(|source| PoolError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_dir() {
            let sub = load_pool_directory(&path)?;
            pool.practice.extend(sub.practice);
            pool.contrast.extend(sub.contrast);
        } else if path
            .extension()
            .is_some_and(|ext| ext == "toml" || ext == "json")
        {
            match load_pool(&path) {
                Ok(p) => {
                    pool.practice.extend(p.practice);
                    pool.contrast.extend(p.contrast);
                }
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(pool)
}

/// A warning from pool validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The exercise ID (if applicable).
    pub exercise_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a pool for common authoring mistakes.
pub fn validate_pool(pool: &ExercisePool) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_ids = std::collections::HashSet::new();
    let all_ids = pool
        .practice
        .iter()
        .map(|e| &e.id)
        .chain(pool.contrast.iter().map(|e| &e.id));
    for id in all_ids {
        if !seen_ids.insert(id) {
            warnings.push(ValidationWarning {
                exercise_id: Some(id.clone()),
                message: format!("duplicate exercise ID: {id}"),
            });
        }
    }

    for ex in &pool.practice {
        check_practice(ex, &mut warnings);
    }
    for ex in &pool.contrast {
        check_contrast(ex, &mut warnings);
    }

    warnings
}

fn check_practice(ex: &Exercise, warnings: &mut Vec<ValidationWarning>) {
    if ex.correct_form.trim().is_empty() {
        warnings.push(ValidationWarning {
            exercise_id: Some(ex.id.clone()),
            message: "correct_form is empty".into(),
        });
    }
    if ex.concept_tags.is_empty() {
        warnings.push(ValidationWarning {
            exercise_id: Some(ex.id.clone()),
            message: "no concept tags; exercise cannot feed concept accuracy".into(),
        });
    }
    if !ex.context_text.contains("___") {
        warnings.push(ValidationWarning {
            exercise_id: Some(ex.id.clone()),
            message: "context_text has no ___ blank".into(),
        });
    }
}

fn check_contrast(ex: &ContrastExercise, warnings: &mut Vec<ValidationWarning>) {
    for (side, prompt) in [("prompt_a", &ex.prompt_a), ("prompt_b", &ex.prompt_b)] {
        if !prompt.contains("___") {
            warnings.push(ValidationWarning {
                exercise_id: Some(ex.id.clone()),
                message: format!("{side} has no ___ blank"),
            });
        }
    }
    if ex.sentence_a.trim().is_empty() || ex.sentence_b.trim().is_empty() {
        warnings.push(ValidationWarning {
            exercise_id: Some(ex.id.clone()),
            message: "contrast pair has an empty sentence".into(),
        });
    }
}
