//! The `pasado reset` command.

use std::path::PathBuf;

use anyhow::Result;

use pasado_core::store::StatsStore;

use super::STATS_FILE;

pub fn execute(data_dir: PathBuf) -> Result<()> {
    let store = StatsStore::new(data_dir.join(STATS_FILE));
    store.clear();
    println!("Mastery statistics cleared.");
    Ok(())
}
