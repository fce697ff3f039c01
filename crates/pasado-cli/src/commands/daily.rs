//! The `pasado daily` command: pick today's vocabulary pair.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;

use pasado_core::rng::ThreadRngSource;
use pasado_vocab::feedback::difficulty_name;
use pasado_vocab::history::HistoryStore;
use pasado_vocab::model::load_words;
use pasado_vocab::selector::select_daily;

use super::HISTORY_FILE;

pub fn execute(
    verbs_path: PathBuf,
    adjectives_path: PathBuf,
    dry_run: bool,
    data_dir: PathBuf,
) -> Result<()> {
    let verbs = load_words(&verbs_path)?;
    let adjectives = load_words(&adjectives_path)?;

    let store = HistoryStore::new(data_dir.join(HISTORY_FILE));
    let mut history = store.load()?;
    let level = history.difficulty_level;

    let mut rng = ThreadRngSource;
    let selection = select_daily(&verbs, &adjectives, &mut history, &mut rng)
        .ok_or_else(|| anyhow::anyhow!("word lists are empty"))?;

    println!(
        "Difficulty: {:.1} ({})",
        level,
        difficulty_name(level)
    );
    println!(
        "Verb:      {} ({}), difficulty {:.1}",
        selection.verb.spanish, selection.verb.english, selection.verb.difficulty
    );
    if let Some(example) = &selection.verb.example {
        println!("           e.g. {example}");
    }
    println!(
        "Adjective: {} ({}), difficulty {:.1}",
        selection.adjective.spanish, selection.adjective.english, selection.adjective.difficulty
    );
    if let Some(example) = &selection.adjective.example {
        println!("           e.g. {example}");
    }

    if selection.verbs_reset {
        println!("Note: all verbs had been used; the verb list was reset.");
    }
    if selection.adjectives_reset {
        println!("Note: all adjectives had been used; the adjective list was reset.");
    }

    if dry_run {
        println!("(dry run: selection not recorded)");
        return Ok(());
    }

    history.record_sent(
        selection.verb.id,
        selection.adjective.id,
        Utc::now().date_naive(),
    );
    store.save(&history)?;

    Ok(())
}
