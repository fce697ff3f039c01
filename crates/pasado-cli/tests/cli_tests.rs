//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pasado() -> Command {
    Command::cargo_bin("pasado").unwrap()
}

const POOL_TOML: &str = r#"
[[practice]]
id = "p1"
verb = "caminar"
subject = "yo"
context_text = "Ayer ___ al parque."
expected_tense = "preterite"
correct_form = "caminé"
concept_tags = ["completed_action"]
why = "A single finished trip."

[[contrast]]
id = "c1"
verb = "jugar"
sentence_a = "Ayer jugué al fútbol."
sentence_b = "De niño jugaba al fútbol."
prompt_a = "Ayer ___ al fútbol."
prompt_b = "De niño ___ al fútbol."
tense_a = "preterite"
concept_tags = ["habit", "completed_action"]
"#;

const VERBS_JSON: &str = r#"{"verbs": [
    {"id": 1, "spanish": "correr", "english": "to run", "difficulty": 2.0},
    {"id": 2, "spanish": "saltar", "english": "to jump", "difficulty": 2.0}
]}"#;

const ADJECTIVES_JSON: &str = r#"{"adjectives": [
    {"id": 10, "spanish": "rojo", "english": "red", "difficulty": 2.0}
]}"#;

fn write_pool(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("pool.toml");
    std::fs::write(&path, POOL_TOML).unwrap();
    path
}

#[test]
fn validate_valid_pool() {
    let dir = TempDir::new().unwrap();
    let pool = write_pool(&dir);

    pasado()
        .arg("validate")
        .arg("--pool")
        .arg(&pool)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 practice, 1 contrast"))
        .stdout(predicate::str::contains("Pool is valid"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pool.toml");
    std::fs::write(
        &path,
        r#"
[[practice]]
id = "p1"
verb = "hablar"
subject = "yo"
context_text = "no blank"
expected_tense = "preterite"
correct_form = ""
"#,
    )
    .unwrap();

    pasado()
        .arg("validate")
        .arg("--pool")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn validate_missing_file_fails() {
    pasado()
        .arg("validate")
        .arg("--pool")
        .arg("/nonexistent/pool.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn stats_with_no_history() {
    let dir = TempDir::new().unwrap();
    pasado()
        .arg("--data-dir")
        .arg(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("No drills recorded yet"));
}

#[test]
fn reset_is_idempotent() {
    let dir = TempDir::new().unwrap();
    for _ in 0..2 {
        pasado()
            .arg("--data-dir")
            .arg(dir.path())
            .arg("reset")
            .assert()
            .success()
            .stdout(predicate::str::contains("cleared"));
    }
}

#[test]
fn drill_round_trip_records_stats() {
    let dir = TempDir::new().unwrap();
    let pool = write_pool(&dir);

    // Classify preterite, then type the exact form.
    pasado()
        .arg("--data-dir")
        .arg(dir.path())
        .arg("drill")
        .arg("--pool")
        .arg(&pool)
        .arg("--exercises")
        .arg("1")
        .write_stdin("p\ncaminé\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("correct: caminé"))
        .stdout(predicate::str::contains("Session: 1/1 correct"));

    pasado()
        .arg("--data-dir")
        .arg(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total responses: 1"))
        .stdout(predicate::str::contains("Recent accuracy: 100%"));
}

#[test]
fn drill_lenient_accepts_missing_accent() {
    let dir = TempDir::new().unwrap();
    let pool = write_pool(&dir);

    pasado()
        .arg("--data-dir")
        .arg(dir.path())
        .arg("drill")
        .arg("--pool")
        .arg(&pool)
        .arg("--exercises")
        .arg("1")
        .arg("--lenient")
        .write_stdin("p\ncamine\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session: 1/1 correct"));
}

#[test]
fn daily_dry_run_keeps_history_untouched() {
    let dir = TempDir::new().unwrap();
    let verbs = dir.path().join("verbs.json");
    let adjectives = dir.path().join("adjectives.json");
    std::fs::write(&verbs, VERBS_JSON).unwrap();
    std::fs::write(&adjectives, ADJECTIVES_JSON).unwrap();

    pasado()
        .arg("--data-dir")
        .arg(dir.path())
        .arg("daily")
        .arg("--verbs")
        .arg(&verbs)
        .arg("--adjectives")
        .arg(&adjectives)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Verb:"))
        .stdout(predicate::str::contains("dry run"));

    assert!(!dir.path().join("history.json").exists());
}

#[test]
fn daily_records_history() {
    let dir = TempDir::new().unwrap();
    let verbs = dir.path().join("verbs.json");
    let adjectives = dir.path().join("adjectives.json");
    std::fs::write(&verbs, VERBS_JSON).unwrap();
    std::fs::write(&adjectives, ADJECTIVES_JSON).unwrap();

    pasado()
        .arg("--data-dir")
        .arg(dir.path())
        .arg("daily")
        .arg("--verbs")
        .arg(&verbs)
        .arg("--adjectives")
        .arg(&adjectives)
        .assert()
        .success();

    let history = std::fs::read_to_string(dir.path().join("history.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&history).unwrap();
    assert_eq!(parsed["total_sent"], serde_json::json!(1));
}

#[test]
fn feedback_adjusts_difficulty() {
    let dir = TempDir::new().unwrap();

    pasado()
        .arg("--data-dir")
        .arg(dir.path())
        .arg("feedback")
        .arg("way too easy")
        .assert()
        .success()
        .stdout(predicate::str::contains("difficulty is now 2.5"));

    pasado()
        .arg("--data-dir")
        .arg(dir.path())
        .arg("feedback")
        .arg("that was hard")
        .assert()
        .success()
        .stdout(predicate::str::contains("difficulty is now 2.0"));
}

#[test]
fn feedback_without_keyword_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    pasado()
        .arg("--data-dir")
        .arg(dir.path())
        .arg("feedback")
        .arg("muchas gracias")
        .assert()
        .success()
        .stdout(predicate::str::contains("No feedback keyword recognized"));
}
