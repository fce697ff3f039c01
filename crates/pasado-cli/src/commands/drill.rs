//! The `pasado drill` command: the interactive practice loop.
//!
//! One cycle per exercise: the user classifies the tense, types the
//! conjugation, sees the judgement plus explanation, and the mastery
//! record is updated and saved before the next pick.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use pasado_core::engine::{DrillEngine, DrillEngineConfig};
use pasado_core::model::Tense;
use pasado_core::store::StatsStore;

use super::{load_pool_arg, STATS_FILE};

pub fn execute(pool_path: PathBuf, exercises: usize, lenient: bool, data_dir: PathBuf) -> Result<()> {
    let pool = load_pool_arg(&pool_path)?;
    anyhow::ensure!(
        !pool.practice.is_empty(),
        "pool has no practice exercises: {}",
        pool_path.display()
    );

    let config = DrillEngineConfig {
        lenient,
        ..Default::default()
    };
    let mut engine = DrillEngine::new(StatsStore::new(data_dir.join(STATS_FILE)), config);
    let mut stats = engine.load_stats();
    let mut last_id: Option<String> = None;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut correct_count = 0usize;
    let mut answered = 0usize;

    for round in 1..=exercises {
        let Some(exercise) = engine
            .select_next(&pool.practice, &stats, last_id.as_deref())
            .cloned()
        else {
            break;
        };

        println!("\n[{round}/{exercises}] {}", exercise.context_text);
        println!("  verb: {} · subject: {}", exercise.verb, exercise.subject);

        let Some(selected) = ask_tense(&mut input)? else {
            break; // EOF
        };
        let classification = engine.check_classification(selected, exercise.expected_tense);

        print!("  conjugate: ");
        io::stdout().flush()?;
        let Some(answer) = read_line(&mut input)? else {
            break;
        };
        let conjugation = engine.check_conjugation(&answer, &exercise.correct_form);

        let overall = classification && conjugation;
        answered += 1;
        if overall {
            correct_count += 1;
            println!("  ✓ correct: {}", exercise.correct_form);
        } else {
            if !classification {
                println!("  ✗ tense is {}", exercise.expected_tense);
            }
            if !conjugation {
                println!("  ✗ form is {}", exercise.correct_form);
            }
        }
        if !exercise.why.is_empty() {
            println!("  why: {}", exercise.why);
        }
        if let Some(timeline) = &exercise.timeline {
            println!("  timeline: {timeline}");
        }

        stats = engine.record_result(&stats, &exercise, classification, conjugation);
        last_id = Some(exercise.id.clone());
    }

    if answered > 0 {
        println!("\nSession: {correct_count}/{answered} correct");
        if let Some(pct) = engine.recent_accuracy(&stats) {
            println!("Recent accuracy: {pct}% · streak: {}", stats.streak);
        }
    }

    Ok(())
}

/// Prompt for a tense until the input parses; `None` on EOF.
fn ask_tense(input: &mut impl BufRead) -> Result<Option<Tense>> {
    loop {
        print!("  tense [p]reterite / [i]mperfect: ");
        io::stdout().flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if let Some(tense) = parse_tense_input(&line) {
            return Ok(Some(tense));
        }
        println!("  please answer p or i");
    }
}

/// One trimmed line of input; `None` on EOF.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Accept single-letter or full-word tense answers.
fn parse_tense_input(line: &str) -> Option<Tense> {
    match line.trim().to_lowercase().as_str() {
        "p" => Some(Tense::Preterite),
        "i" => Some(Tense::Imperfect),
        other => other.parse().ok(),
    }
}
