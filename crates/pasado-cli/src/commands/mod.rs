pub mod contrast;
pub mod daily;
pub mod drill;
pub mod feedback;
pub mod reset;
pub mod stats;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;
use pasado_core::model::ExercisePool;
use pasado_core::pool;

/// File name of the drill stats blob inside the data dir.
pub const STATS_FILE: &str = "stats.json";
/// File name of the vocabulary history blob inside the data dir.
pub const HISTORY_FILE: &str = "history.json";

/// Resolve the data directory: explicit flag, else the platform-local
/// app data dir, else the working directory.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    dirs::data_local_dir()
        .map(|d| d.join("pasado"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load a pool from a file or merge a directory of pool files.
pub fn load_pool_arg(path: &Path) -> Result<ExercisePool> {
    let pool = if path.is_dir() {
        pool::load_pool_directory(path)?
    } else {
        pool::load_pool(path)?
    };
    Ok(pool)
}
