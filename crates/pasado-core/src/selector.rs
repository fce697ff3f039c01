//! Scored weighted-random exercise selection.
//!
//! Deliberately not greedy top-1: the pick randomizes among the three
//! most-needed exercises so the drill order stays unpredictable while
//! still biasing strongly toward weak areas.

use chrono::{DateTime, Utc};

use crate::model::Exercise;
use crate::rng::RandomSource;
use crate::scorer::ExerciseScorer;
use crate::stats::Stats;

/// Fixed shortlist weights, best candidate first.
pub const SHORTLIST_WEIGHTS: [f64; 3] = [0.6, 0.3, 0.1];

/// Picks the next exercise from a pool.
#[derive(Debug, Clone, Default)]
pub struct ExerciseSelector {
    scorer: ExerciseScorer,
}

impl ExerciseSelector {
    pub fn new(scorer: ExerciseScorer) -> Self {
        Self { scorer }
    }

    /// Select the next exercise.
    ///
    /// `exclude_id` (the exercise just answered) is filtered out to
    /// avoid an immediate repeat; if that empties the pool the first
    /// pool element is returned instead, so the exclusion is
    /// best-effort rather than absolute. Returns `None` only for an
    /// empty pool.
    pub fn select_next<'a>(
        &self,
        pool: &'a [Exercise],
        stats: &Stats,
        exclude_id: Option<&str>,
        now: DateTime<Utc>,
        rng: &mut dyn RandomSource,
    ) -> Option<&'a Exercise> {
        if pool.is_empty() {
            return None;
        }

        let candidates: Vec<&Exercise> = pool
            .iter()
            .filter(|ex| exclude_id != Some(ex.id.as_str()))
            .collect();
        if candidates.is_empty() {
            return pool.first();
        }

        let mut scored: Vec<(&Exercise, f64)> = candidates
            .into_iter()
            .map(|ex| (ex, self.scorer.score(ex, stats, now, rng)))
            .collect();
        // Stable sort keeps pool order among exact ties.
        scored.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        let shortlist: Vec<&Exercise> = scored
            .iter()
            .take(SHORTLIST_WEIGHTS.len())
            .map(|(ex, _)| *ex)
            .collect();

        Some(weighted_pick(&shortlist, &SHORTLIST_WEIGHTS[..shortlist.len()], rng))
    }
}

/// Weighted random pick, drawn against the total of the truncated
/// weight slice. A single-element shortlist always wins its own draw.
fn weighted_pick<'a>(
    shortlist: &[&'a Exercise],
    weights: &[f64],
    rng: &mut dyn RandomSource,
) -> &'a Exercise {
    debug_assert_eq!(shortlist.len(), weights.len());
    let total: f64 = weights.iter().sum();
    let mut draw = rng.next_f64() * total;
    for (ex, &w) in shortlist.iter().zip(weights) {
        if draw < w {
            return ex;
        }
        draw -= w;
    }
    shortlist[shortlist.len() - 1]
}
