//! Adaptive word selection by difficulty distribution.
//!
//! Picks mostly from the current level with a challenge/review mix:
//! 70% current level, 20% one level up, 10% one level down. Already
//! used words are skipped until the list runs out, at which point the
//! used list resets and selection starts over.

use pasado_core::rng::RandomSource;

use crate::history::History;
use crate::model::{Word, WordKind, MAX_DIFFICULTY, MIN_DIFFICULTY};

/// Share of picks taken from the current difficulty band.
const CURRENT_SHARE: f64 = 0.70;
/// Share of picks taken from one level higher (challenge).
const HIGHER_SHARE: f64 = 0.20;
/// Band half-width around a target level.
const BAND_TOLERANCE: f64 = 0.5;

/// Words whose difficulty falls within `tolerance` of `target`,
/// with the range clipped to the valid [1, 5] scale.
pub fn filter_by_difficulty(words: &[Word], target: f64, tolerance: f64) -> Vec<&Word> {
    let min = (target - tolerance).max(MIN_DIFFICULTY);
    let max = (target + tolerance).min(MAX_DIFFICULTY);
    words
        .iter()
        .filter(|w| (min..=max).contains(&w.difficulty))
        .collect()
}

/// Words not yet marked used.
pub fn unused<'a>(words: &'a [Word], used_ids: &[u32]) -> Vec<&'a Word> {
    words.iter().filter(|w| !used_ids.contains(&w.id)).collect()
}

/// Select one word using the 70/20/10 difficulty distribution.
/// Falls back to any available word when the drawn band is empty.
/// Returns `None` only for an empty slice.
pub fn select_by_distribution<'a>(
    words: &'a [Word],
    level: f64,
    rng: &mut dyn RandomSource,
) -> Option<&'a Word> {
    if words.is_empty() {
        return None;
    }

    let current = filter_by_difficulty(words, level, BAND_TOLERANCE);
    let higher = filter_by_difficulty(words, (level + 1.0).min(MAX_DIFFICULTY), BAND_TOLERANCE);
    let lower = filter_by_difficulty(words, (level - 1.0).max(MIN_DIFFICULTY), BAND_TOLERANCE);

    let draw = rng.next_f64();
    let band = if draw < CURRENT_SHARE && !current.is_empty() {
        current
    } else if draw < CURRENT_SHARE + HIGHER_SHARE && !higher.is_empty() {
        higher
    } else if !lower.is_empty() {
        lower
    } else {
        words.iter().collect()
    };

    let index = (rng.next_f64() * band.len() as f64) as usize;
    Some(band[index.min(band.len() - 1)])
}

/// The outcome of a daily selection.
#[derive(Debug, Clone)]
pub struct DailySelection {
    pub verb: Word,
    pub adjective: Word,
    /// The verb used-list was exhausted and reset.
    pub verbs_reset: bool,
    /// The adjective used-list was exhausted and reset.
    pub adjectives_reset: bool,
}

/// Pick one verb and one adjective for the day.
///
/// Mutates `history` only to reset an exhausted used-list; recording
/// the selection as sent is the caller's decision (a dry run doesn't).
pub fn select_daily(
    verbs: &[Word],
    adjectives: &[Word],
    history: &mut History,
    rng: &mut dyn RandomSource,
) -> Option<DailySelection> {
    let level = history.difficulty_level;

    let mut verbs_reset = false;
    let mut verb_pool = unused(verbs, history.used(WordKind::Verbs));
    if verb_pool.is_empty() && !verbs.is_empty() {
        tracing::info!("all verbs used, resetting verb history");
        history.reset_used(WordKind::Verbs);
        verb_pool = verbs.iter().collect();
        verbs_reset = true;
    }

    let mut adjectives_reset = false;
    let mut adjective_pool = unused(adjectives, history.used(WordKind::Adjectives));
    if adjective_pool.is_empty() && !adjectives.is_empty() {
        tracing::info!("all adjectives used, resetting adjective history");
        history.reset_used(WordKind::Adjectives);
        adjective_pool = adjectives.iter().collect();
        adjectives_reset = true;
    }

    let verb_pool: Vec<Word> = verb_pool.into_iter().cloned().collect();
    let adjective_pool: Vec<Word> = adjective_pool.into_iter().cloned().collect();

    let verb = select_by_distribution(&verb_pool, level, rng)?.clone();
    let adjective = select_by_distribution(&adjective_pool, level, rng)?.clone();

    Some(DailySelection {
        verb,
        adjective,
        verbs_reset,
        adjectives_reset,
    })
}
