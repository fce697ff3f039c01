//! The `pasado feedback` command: adjust the difficulty preference.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;

use pasado_vocab::feedback::{apply_feedback, difficulty_name, parse_feedback};
use pasado_vocab::history::HistoryStore;

use super::HISTORY_FILE;

pub fn execute(text: String, data_dir: PathBuf) -> Result<()> {
    let Some(feedback) = parse_feedback(&text) else {
        println!("No feedback keyword recognized in: {text:?}");
        println!("Try phrases like \"too easy\", \"hard\", or \"perfect\".");
        return Ok(());
    };

    let store = HistoryStore::new(data_dir.join(HISTORY_FILE));
    let mut history = store.load()?;
    let new_level = apply_feedback(&mut history, &feedback, Utc::now());
    store.save(&history)?;

    println!(
        "Feedback '{}' ({:+.1}): difficulty is now {:.1} ({})",
        feedback.keyword,
        feedback.delta,
        new_level,
        difficulty_name(new_level)
    );

    Ok(())
}
