//! The `pasado validate` command.

use std::path::PathBuf;

use anyhow::Result;

use pasado_core::pool::validate_pool;

use super::load_pool_arg;

pub fn execute(pool_path: PathBuf) -> Result<()> {
    let pool = load_pool_arg(&pool_path)?;

    println!(
        "Pool: {} practice, {} contrast exercises",
        pool.practice.len(),
        pool.contrast.len()
    );

    let warnings = validate_pool(&pool);
    for w in &warnings {
        let prefix = w
            .exercise_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Pool is valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
