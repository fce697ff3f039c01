//! Exponential-moving-average mastery model.
//!
//! Per-concept, per-tense, and per-verb-family accuracies are updated
//! with a fixed-weight EMA that biases toward recent performance. The
//! first observation bootstraps the value directly; there is no prior
//! to blend with.

use chrono::{DateTime, Utc};

use crate::model::{ConceptTag, Exercise};
use crate::stats::{RecentResult, Stats, RECENT_WINDOW};

/// Default EMA weight given to the newest observation.
pub const DEFAULT_EMA_WEIGHT: f64 = 0.15;

/// The accuracy updater.
#[derive(Debug, Clone, Copy)]
pub struct AccuracyModel {
    weight: f64,
}

impl Default for AccuracyModel {
    fn default() -> Self {
        Self::new(DEFAULT_EMA_WEIGHT)
    }
}

impl AccuracyModel {
    /// The weight is clamped to (0, 1]; the tuned default is
    /// [`DEFAULT_EMA_WEIGHT`].
    pub fn new(weight: f64) -> Self {
        Self {
            weight: weight.clamp(f64::EPSILON, 1.0),
        }
    }

    /// Blend one observation into an accuracy value.
    ///
    /// `None` (no data yet) bootstraps to 1.0 or 0.0 from the first
    /// observation. The result always lies in [0, 1].
    pub fn update(&self, current: Option<f64>, correct: bool) -> f64 {
        let observation = if correct { 1.0 } else { 0.0 };
        match current {
            None => observation,
            Some(acc) => acc * (1.0 - self.weight) + observation * self.weight,
        }
    }

    /// Fold one judged response into the mastery record.
    ///
    /// Returns a new record; the input is not mutated. The concept maps
    /// track overall correctness, the tense map tracks classification
    /// only, and the verb-family map tracks conjugation only.
    pub fn record_result(
        &self,
        stats: &Stats,
        exercise: &Exercise,
        classification_correct: bool,
        conjugation_correct: bool,
        now: DateTime<Utc>,
    ) -> Stats {
        let overall = classification_correct && conjugation_correct;
        let mut next = stats.clone();

        next.streak = if overall { next.streak + 1 } else { 0 };
        next.total_reps += 1;

        next.recent_results.insert(0, RecentResult { correct: overall });
        next.recent_results.truncate(RECENT_WINDOW);

        for &tag in &exercise.concept_tags {
            let updated = self.update(next.concept_accuracy(tag), overall);
            next.concept_accuracy.insert(tag, updated);
            if !overall {
                *next.session_errors.entry(tag).or_insert(0) += 1;
            }
        }

        let tense = exercise.expected_tense;
        let updated = self.update(next.tense_accuracy(tense), classification_correct);
        next.tense_accuracy.insert(tense, updated);

        let family = exercise.family();
        let updated = self.update(next.verb_family_accuracy(family), conjugation_correct);
        next.verb_family_accuracy.insert(family, updated);

        next.last_seen.insert(exercise.id.clone(), now);

        next
    }
}

/// Rounded percentage over the recent-results window, `None` when no
/// results have been recorded yet.
pub fn recent_accuracy(stats: &Stats) -> Option<u32> {
    if stats.recent_results.is_empty() {
        return None;
    }
    let correct = stats.recent_results.iter().filter(|r| r.correct).count();
    let pct = 100.0 * correct as f64 / stats.recent_results.len() as f64;
    Some(pct.round() as u32)
}

/// The `top_n` weakest concepts as (tag, rounded percent), worst first.
///
/// Tags without a defined accuracy are excluded even when they carry
/// session-error counts. Iterates tags in the fixed declaration order
/// and sorts stably, so ties keep that order.
pub fn weakest_concepts(stats: &Stats, top_n: usize) -> Vec<(ConceptTag, u32)> {
    let mut defined: Vec<(ConceptTag, f64)> = ConceptTag::ALL
        .iter()
        .filter_map(|&tag| stats.concept_accuracy(tag).map(|acc| (tag, acc)))
        .collect();
    defined.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    defined
        .into_iter()
        .take(top_n)
        .map(|(tag, acc)| (tag, (acc * 100.0).round() as u32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Tense, VerbFamily};

    fn exercise(tags: Vec<ConceptTag>) -> Exercise {
        Exercise {
            id: "p1".into(),
            verb: "caminar".into(),
            subject: "yo".into(),
            context_text: "Ayer ___ al parque.".into(),
            expected_tense: Tense::Preterite,
            correct_form: "caminé".into(),
            concept_tags: tags,
            why: String::new(),
            timeline: None,
        }
    }

    #[test]
    fn update_bootstraps_from_unknown() {
        let model = AccuracyModel::default();
        assert_eq!(model.update(None, true), 1.0);
        assert_eq!(model.update(None, false), 0.0);
    }

    #[test]
    fn update_exact_ema_values() {
        let model = AccuracyModel::default();
        assert!((model.update(Some(0.5), true) - 0.575).abs() < 1e-12);
        assert!((model.update(Some(0.5), false) - 0.425).abs() < 1e-12);
    }

    #[test]
    fn update_stays_in_unit_interval() {
        let model = AccuracyModel::default();
        for &acc in &[0.0, 0.3, 0.5, 0.99, 1.0] {
            for &correct in &[true, false] {
                let v = model.update(Some(acc), correct);
                assert!((0.0..=1.0).contains(&v), "update({acc}, {correct}) = {v}");
            }
        }
    }

    #[test]
    fn record_result_does_not_mutate_input() {
        let model = AccuracyModel::default();
        let stats = Stats::default();
        let _ = model.record_result(&stats, &exercise(vec![ConceptTag::CompletedAction]), true, true, Utc::now());
        assert_eq!(stats.total_reps, 0);
        assert!(stats.concept_accuracy.is_empty());
    }

    #[test]
    fn record_result_updates_counters_and_maps() {
        let model = AccuracyModel::default();
        let ex = exercise(vec![ConceptTag::CompletedAction, ConceptTag::EventSequence]);
        let now = Utc::now();

        let stats = model.record_result(&Stats::default(), &ex, true, true, now);
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.total_reps, 1);
        assert_eq!(stats.recent_results.len(), 1);
        assert!(stats.recent_results[0].correct);
        assert_eq!(stats.concept_accuracy(ConceptTag::CompletedAction), Some(1.0));
        assert_eq!(stats.concept_accuracy(ConceptTag::EventSequence), Some(1.0));
        assert_eq!(stats.tense_accuracy(Tense::Preterite), Some(1.0));
        assert_eq!(
            stats.verb_family_accuracy(VerbFamily::ArPreterite),
            Some(1.0)
        );
        assert_eq!(stats.last_seen.get("p1"), Some(&now));
        assert_eq!(stats.session_errors(ConceptTag::CompletedAction), 0);
    }

    #[test]
    fn tense_tracks_classification_not_overall() {
        let model = AccuracyModel::default();
        let ex = exercise(vec![ConceptTag::CompletedAction]);

        // Right tense picked, wrong conjugation typed.
        let stats = model.record_result(&Stats::default(), &ex, true, false, Utc::now());
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.tense_accuracy(Tense::Preterite), Some(1.0));
        assert_eq!(
            stats.verb_family_accuracy(VerbFamily::ArPreterite),
            Some(0.0)
        );
        // Overall miss still counts against the concept.
        assert_eq!(stats.concept_accuracy(ConceptTag::CompletedAction), Some(0.0));
        assert_eq!(stats.session_errors(ConceptTag::CompletedAction), 1);
    }

    #[test]
    fn miss_increments_session_errors_per_tag() {
        let model = AccuracyModel::default();
        let ex = exercise(vec![ConceptTag::Habit, ConceptTag::RepeatedPast]);
        let stats = model.record_result(&Stats::default(), &ex, false, true, Utc::now());
        assert_eq!(stats.session_errors(ConceptTag::Habit), 1);
        assert_eq!(stats.session_errors(ConceptTag::RepeatedPast), 1);
    }

    #[test]
    fn recent_results_capped_at_window() {
        let model = AccuracyModel::default();
        let ex = exercise(vec![ConceptTag::CompletedAction]);
        let mut stats = Stats::default();
        for _ in 0..50 {
            stats = model.record_result(&stats, &ex, true, true, Utc::now());
        }
        assert_eq!(stats.recent_results.len(), RECENT_WINDOW);
        assert_eq!(stats.total_reps, 50);
    }

    #[test]
    fn recent_accuracy_rounds() {
        let mut stats = Stats::default();
        assert_eq!(recent_accuracy(&stats), None);

        stats.recent_results = vec![
            RecentResult { correct: true },
            RecentResult { correct: true },
            RecentResult { correct: false },
        ];
        assert_eq!(recent_accuracy(&stats), Some(67));
    }

    #[test]
    fn weakest_concepts_sorted_ascending() {
        let mut stats = Stats::default();
        stats.concept_accuracy.insert(ConceptTag::Age, 0.9);
        stats.concept_accuracy.insert(ConceptTag::Weather, 0.2);
        stats.concept_accuracy.insert(ConceptTag::Habit, 0.5);
        // Error counts alone don't make a concept eligible.
        stats.session_errors.insert(ConceptTag::Time, 7);

        let weakest = weakest_concepts(&stats, 2);
        assert_eq!(
            weakest,
            vec![(ConceptTag::Weather, 20), (ConceptTag::Habit, 50)]
        );
        assert!(!weakest_concepts(&stats, 10)
            .iter()
            .any(|(tag, _)| *tag == ConceptTag::Time));
    }
}
