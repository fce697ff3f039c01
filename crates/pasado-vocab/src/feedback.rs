//! Feedback parsing and difficulty adjustment.
//!
//! Feedback arrives as free text (originally an email reply). A fixed
//! keyword table maps it to a difficulty delta: easier words were too
//! easy, so the level goes up; harder words push it down; "perfect"
//! holds it steady.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::history::History;

/// Keyword table, checked in order. Multi-word phrases come first so
/// "too easy" wins over a bare "easy" inside it.
const FEEDBACK_KEYWORDS: [(&str, f64); 11] = [
    ("too easy", 0.5),
    ("too hard", -0.5),
    ("just right", 0.0),
    ("easier", 0.5),
    ("harder", -0.5),
    ("easy", 0.5),
    ("simple", 0.5),
    ("hard", -0.5),
    ("difficult", -0.5),
    ("perfect", 0.0),
    ("good", 0.0),
];

/// Keyword regexes, compiled once on first use.
static COMPILED_KEYWORDS: LazyLock<Vec<(&'static str, Regex, f64)>> = LazyLock::new(|| {
    FEEDBACK_KEYWORDS
        .iter()
        .map(|&(keyword, delta)| {
            let pattern = format!(r"\b{}\b", regex::escape(keyword));
            let re = Regex::new(&pattern).expect("keyword pattern is valid");
            (keyword, re, delta)
        })
        .collect()
});

/// A recognized piece of feedback.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    /// The matched keyword.
    pub keyword: String,
    /// The difficulty delta it carries.
    pub delta: f64,
}

/// Scan free text for the first recognized feedback keyword, matching
/// on word boundaries so "search" doesn't count as "hard".
pub fn parse_feedback(text: &str) -> Option<Feedback> {
    let lower = text.to_lowercase();
    for (keyword, re, delta) in COMPILED_KEYWORDS.iter() {
        if re.is_match(&lower) {
            return Some(Feedback {
                keyword: keyword.to_string(),
                delta: *delta,
            });
        }
    }
    None
}

/// Apply feedback to the history's difficulty preference.
/// Returns the new level.
pub fn apply_feedback(history: &mut History, feedback: &Feedback, now: DateTime<Utc>) -> f64 {
    let new_level = history.adjust_difficulty(&feedback.keyword, feedback.delta, now);
    tracing::info!(
        "feedback '{}' ({:+.1}) moved difficulty to {:.1}",
        feedback.keyword,
        feedback.delta,
        new_level
    );
    new_level
}

/// Human-readable name for a difficulty level.
pub fn difficulty_name(level: f64) -> &'static str {
    if level < 1.5 {
        "Beginner"
    } else if level < 2.5 {
        "Elementary"
    } else if level < 3.5 {
        "Intermediate"
    } else if level < 4.5 {
        "Advanced"
    } else {
        "Expert"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_table_covers_every_keyword() {
        assert_eq!(COMPILED_KEYWORDS.len(), FEEDBACK_KEYWORDS.len());
        for (keyword, delta) in FEEDBACK_KEYWORDS {
            let fb = parse_feedback(keyword).unwrap();
            assert_eq!(fb.keyword, keyword);
            assert_eq!(fb.delta, delta);
        }
    }

    #[test]
    fn parse_simple_keywords() {
        let fb = parse_feedback("That was EASY today").unwrap();
        assert_eq!(fb.keyword, "easy");
        assert_eq!(fb.delta, 0.5);

        let fb = parse_feedback("these are difficult words").unwrap();
        assert_eq!(fb.delta, -0.5);

        let fb = parse_feedback("perfect, thanks!").unwrap();
        assert_eq!(fb.delta, 0.0);
    }

    #[test]
    fn phrases_win_over_contained_words() {
        let fb = parse_feedback("honestly too easy for me").unwrap();
        assert_eq!(fb.keyword, "too easy");
    }

    #[test]
    fn word_boundaries_respected() {
        // "search" contains "ar" patterns but no keyword on a boundary.
        assert!(parse_feedback("I will search for more").is_none());
        // "hardly" must not match "hard".
        assert!(parse_feedback("hardly worth mentioning").is_none());
    }

    #[test]
    fn no_keyword_means_no_feedback() {
        assert!(parse_feedback("gracias por las palabras").is_none());
        assert!(parse_feedback("").is_none());
    }

    #[test]
    fn apply_moves_level_and_logs_adjustment() {
        let mut history = History::default();
        let fb = parse_feedback("way too hard").unwrap();
        let level = apply_feedback(&mut history, &fb, Utc::now());
        assert_eq!(level, 1.5);
        assert_eq!(history.adjustments.len(), 1);
        assert_eq!(history.adjustments[0].feedback, "too hard");
    }

    #[test]
    fn difficulty_names() {
        assert_eq!(difficulty_name(1.0), "Beginner");
        assert_eq!(difficulty_name(2.0), "Elementary");
        assert_eq!(difficulty_name(3.0), "Intermediate");
        assert_eq!(difficulty_name(4.0), "Advanced");
        assert_eq!(difficulty_name(5.0), "Expert");
    }
}
