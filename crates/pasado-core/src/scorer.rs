//! Priority scoring for candidate exercises.
//!
//! Lower score = more urgently needed. Weaknesses and error history
//! pull the score down, recent exposure pushes it up, and a small
//! jitter breaks ties between otherwise-equal candidates. The term
//! weights encode that conceptual weakness matters more than raw tense
//! or conjugation-family weakness.

use chrono::{DateTime, Utc};

use crate::model::Exercise;
use crate::rng::RandomSource;
use crate::stats::Stats;

/// Scoring weights. Additive terms, order-insensitive.
#[derive(Debug, Clone)]
pub struct ScorerConfig {
    /// Upper bound of the uniform tie-breaking jitter.
    pub jitter: f64,
    /// Penalty for exercises seen within `recency_short`.
    pub short_recency_penalty: f64,
    /// Penalty for exercises seen within `recency_long`.
    pub long_recency_penalty: f64,
    /// Window for the strong recency penalty, in seconds.
    pub recency_short_secs: i64,
    /// Window for the moderate recency penalty, in seconds.
    pub recency_long_secs: i64,
    /// Boost per unit of concept weakness.
    pub concept_weight: f64,
    /// Boost per recorded session error on a tag.
    pub session_error_weight: f64,
    /// Boost per unit of tense-classification weakness.
    pub tense_weight: f64,
    /// Boost per unit of verb-family weakness.
    pub family_weight: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            jitter: 0.3,
            short_recency_penalty: 2.0,
            long_recency_penalty: 0.5,
            recency_short_secs: 120,
            recency_long_secs: 300,
            concept_weight: 0.8,
            session_error_weight: 0.3,
            tense_weight: 0.4,
            family_weight: 0.3,
        }
    }
}

/// Assigns a selection-priority score to a candidate exercise.
#[derive(Debug, Clone, Default)]
pub struct ExerciseScorer {
    config: ScorerConfig,
}

impl ExerciseScorer {
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Score a candidate against the current mastery record.
    pub fn score(
        &self,
        exercise: &Exercise,
        stats: &Stats,
        now: DateTime<Utc>,
        rng: &mut dyn RandomSource,
    ) -> f64 {
        let cfg = &self.config;
        let mut score = rng.next_f64() * cfg.jitter;

        if let Some(seen) = stats.last_seen.get(&exercise.id) {
            let elapsed = (now - *seen).num_seconds();
            if elapsed < cfg.recency_short_secs {
                score += cfg.short_recency_penalty;
            } else if elapsed < cfg.recency_long_secs {
                score += cfg.long_recency_penalty;
            }
        }

        for &tag in &exercise.concept_tags {
            if let Some(acc) = stats.concept_accuracy(tag) {
                score -= (1.0 - acc) * cfg.concept_weight;
            }
            // Error history counts even before an accuracy exists.
            score -= stats.session_errors(tag) as f64 * cfg.session_error_weight;
        }

        if let Some(acc) = stats.tense_accuracy(exercise.expected_tense) {
            score -= (1.0 - acc) * cfg.tense_weight;
        }

        if let Some(acc) = stats.verb_family_accuracy(exercise.family()) {
            score -= (1.0 - acc) * cfg.family_weight;
        }

        score
    }
}
