//! Free-text conjugation answer checking.
//!
//! Comparison is always case- and whitespace-insensitive. Lenient mode
//! additionally ignores diacritics by decomposing to NFD and dropping
//! combining marks, so "camine" matches "caminé". Tense classification
//! is a plain equality check and never subject to the lenient toggle.

use unicode_normalization::UnicodeNormalization;

use crate::model::Tense;

/// Trim surrounding whitespace and lowercase.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Strip diacritical marks via canonical decomposition.
fn strip_accents(text: &str) -> String {
    text.nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect()
}

/// Compare a typed conjugation against the expected form.
pub fn check_conjugation(input: &str, correct: &str, lenient: bool) -> bool {
    let input = normalize(input);
    let correct = normalize(correct);
    if input == correct {
        return true;
    }
    lenient && strip_accents(&input) == strip_accents(&correct)
}

/// Judge a tense classification. Always strict.
pub fn check_classification(selected: Tense, expected: Tense) -> bool {
    selected == expected
}
