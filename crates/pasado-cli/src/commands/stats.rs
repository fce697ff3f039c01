//! The `pasado stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use pasado_core::accuracy::{recent_accuracy, weakest_concepts};
use pasado_core::model::{Tense, VerbFamily};
use pasado_core::store::StatsStore;

use super::STATS_FILE;

pub fn execute(data_dir: PathBuf) -> Result<()> {
    let store = StatsStore::new(data_dir.join(STATS_FILE));
    let stats = store.load();

    if stats.total_reps == 0 {
        println!("No drills recorded yet.");
        return Ok(());
    }

    println!("Total responses: {}", stats.total_reps);
    println!("Current streak:  {}", stats.streak);
    match recent_accuracy(&stats) {
        Some(pct) => println!(
            "Recent accuracy: {pct}% (last {} responses)",
            stats.recent_results.len()
        ),
        None => println!("Recent accuracy: n/a"),
    }

    let weakest = weakest_concepts(&stats, 5);
    if !weakest.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Weakest concept", "Accuracy", "Errors"]);
        for (tag, pct) in &weakest {
            table.add_row(vec![
                tag.label().to_string(),
                format!("{pct}%"),
                stats.session_errors(*tag).to_string(),
            ]);
        }
        println!("\n{table}");
    }

    let mut table = Table::new();
    table.set_header(vec!["Bucket", "Accuracy"]);
    for tense in [Tense::Preterite, Tense::Imperfect] {
        table.add_row(vec![tense.to_string(), fmt_accuracy(stats.tense_accuracy(tense))]);
    }
    for family in VerbFamily::ALL {
        table.add_row(vec![
            family.to_string(),
            fmt_accuracy(stats.verb_family_accuracy(family)),
        ]);
    }
    println!("\n{table}");

    Ok(())
}

fn fmt_accuracy(acc: Option<f64>) -> String {
    match acc {
        Some(a) => format!("{:.0}%", a * 100.0),
        None => "n/a".to_string(),
    }
}
