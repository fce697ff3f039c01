//! The `pasado contrast` command: paired-sentence drills.
//!
//! Each round shows one completed sentence as reference and asks for
//! the conjugation in the paired context. The target side is fixed
//! when the drill mounts.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use rand::Rng;

use pasado_core::engine::{DrillEngine, DrillEngineConfig};
use pasado_core::store::StatsStore;

use super::{load_pool_arg, STATS_FILE};

pub fn execute(pool_path: PathBuf, exercises: usize, lenient: bool, data_dir: PathBuf) -> Result<()> {
    let pool = load_pool_arg(&pool_path)?;
    anyhow::ensure!(
        !pool.contrast.is_empty(),
        "pool has no contrast exercises: {}",
        pool_path.display()
    );

    let config = DrillEngineConfig {
        lenient,
        ..Default::default()
    };
    let mut engine = DrillEngine::new(StatsStore::new(data_dir.join(STATS_FILE)), config);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut correct_count = 0usize;
    let mut answered = 0usize;

    for round in 1..=exercises {
        let index = rand::rng().random_range(0..pool.contrast.len());
        let drill = engine.start_contrast(pool.contrast[index].clone());
        let exercise = drill.exercise();

        println!("\n[{round}/{exercises}] verb: {}", exercise.verb);
        println!("  reference: {}", drill.reference_sentence());
        println!("  complete ({}): {}", drill.target_tense(), drill.target_prompt());

        print!("  answer: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        // The expected form is the word the prompt blanks out of the
        // completed sentence.
        let expected = blanked_word(
            match drill.target_side() {
                pasado_core::contrast::TargetSide::A => &exercise.sentence_a,
                pasado_core::contrast::TargetSide::B => &exercise.sentence_b,
            },
            drill.target_prompt(),
        );

        answered += 1;
        let correct = pasado_core::checker::check_conjugation(&line, &expected, lenient);
        if correct {
            correct_count += 1;
            println!("  ✓ correct: {expected}");
        } else {
            println!("  ✗ form is {expected}");
        }
        if !exercise.why.is_empty() {
            println!("  why: {}", exercise.why);
        }
    }

    if answered > 0 {
        println!("\nSession: {correct_count}/{answered} correct");
    }

    Ok(())
}

/// Recover the word the prompt replaces with "___" by diffing the
/// prompt against the completed sentence.
fn blanked_word(sentence: &str, prompt: &str) -> String {
    let Some(blank_at) = prompt.find("___") else {
        return String::new();
    };
    let prefix = &prompt[..blank_at];
    let suffix = &prompt[blank_at + 3..];
    sentence
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_suffix(suffix))
        .unwrap_or("")
        .to_string()
}
