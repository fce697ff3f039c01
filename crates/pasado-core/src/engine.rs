//! The drill engine facade.
//!
//! This is the entire contract a host UI needs: stats lifecycle,
//! result recording, next-exercise selection, and answer checking.
//! The engine runs synchronously inside each user-interaction cycle;
//! nothing here blocks or suspends.

use chrono::Utc;

use crate::accuracy::{self, AccuracyModel, DEFAULT_EMA_WEIGHT};
use crate::checker;
use crate::contrast::ContrastDrill;
use crate::model::{ConceptTag, ContrastExercise, Exercise, Tense};
use crate::rng::{RandomSource, ThreadRngSource};
use crate::scorer::{ExerciseScorer, ScorerConfig};
use crate::selector::ExerciseSelector;
use crate::stats::Stats;
use crate::store::StatsStore;

/// Tunables for the drill engine.
#[derive(Debug, Clone)]
pub struct DrillEngineConfig {
    /// EMA weight for the accuracy model.
    pub ema_weight: f64,
    /// Scoring weights for the selector.
    pub scorer: ScorerConfig,
    /// Accept accent-less conjugation answers.
    pub lenient: bool,
}

impl Default for DrillEngineConfig {
    fn default() -> Self {
        Self {
            ema_weight: DEFAULT_EMA_WEIGHT,
            scorer: ScorerConfig::default(),
            lenient: false,
        }
    }
}

/// The engine a host drives once per user response.
pub struct DrillEngine {
    store: StatsStore,
    model: AccuracyModel,
    selector: ExerciseSelector,
    config: DrillEngineConfig,
    rng: Box<dyn RandomSource>,
}

impl DrillEngine {
    pub fn new(store: StatsStore, config: DrillEngineConfig) -> Self {
        Self::with_rng(store, config, Box::new(ThreadRngSource))
    }

    /// Build with an explicit random source (deterministic in tests).
    pub fn with_rng(
        store: StatsStore,
        config: DrillEngineConfig,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let model = AccuracyModel::new(config.ema_weight);
        let selector = ExerciseSelector::new(ExerciseScorer::new(config.scorer.clone()));
        Self {
            store,
            model,
            selector,
            config,
            rng,
        }
    }

    /// Load the persisted mastery record, or defaults.
    pub fn load_stats(&self) -> Stats {
        self.store.load()
    }

    /// Persist the record; failures are swallowed by the store.
    pub fn save_stats(&self, stats: &Stats) {
        self.store.save(stats);
    }

    /// Delete the persisted record. Idempotent.
    pub fn clear_stats(&self) {
        self.store.clear();
    }

    /// Fold one judged response into a new record and persist it.
    pub fn record_result(
        &mut self,
        stats: &Stats,
        exercise: &Exercise,
        classification_correct: bool,
        conjugation_correct: bool,
    ) -> Stats {
        let next = self.model.record_result(
            stats,
            exercise,
            classification_correct,
            conjugation_correct,
            Utc::now(),
        );
        self.store.save(&next);
        next
    }

    /// Pick the next practice exercise, avoiding an immediate repeat of
    /// `exclude_id` when possible. `None` only for an empty pool.
    pub fn select_next<'a>(
        &mut self,
        pool: &'a [Exercise],
        stats: &Stats,
        exclude_id: Option<&str>,
    ) -> Option<&'a Exercise> {
        self.selector
            .select_next(pool, stats, exclude_id, Utc::now(), self.rng.as_mut())
    }

    /// Mount a contrast drill, fixing its target side.
    pub fn start_contrast(&mut self, exercise: ContrastExercise) -> ContrastDrill {
        ContrastDrill::new(exercise, self.rng.as_mut())
    }

    /// Judge a typed conjugation using the configured leniency.
    pub fn check_conjugation(&self, input: &str, correct: &str) -> bool {
        checker::check_conjugation(input, correct, self.config.lenient)
    }

    /// Judge a tense classification. Always strict.
    pub fn check_classification(&self, selected: Tense, expected: Tense) -> bool {
        checker::check_classification(selected, expected)
    }

    /// Rounded recent-accuracy percent, `None` with no history.
    pub fn recent_accuracy(&self, stats: &Stats) -> Option<u32> {
        accuracy::recent_accuracy(stats)
    }

    /// The weakest concepts on record, worst first.
    pub fn weakest_concepts(&self, stats: &Stats, top_n: usize) -> Vec<(ConceptTag, u32)> {
        accuracy::weakest_concepts(stats, top_n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;

    fn engine(dir: &tempfile::TempDir) -> DrillEngine {
        DrillEngine::with_rng(
            StatsStore::new(dir.path().join("stats.json")),
            DrillEngineConfig::default(),
            Box::new(ScriptedSource::new(vec![0.0])),
        )
    }

    fn exercise(id: &str) -> Exercise {
        Exercise {
            id: id.into(),
            verb: "caminar".into(),
            subject: "yo".into(),
            context_text: "Ayer ___ al parque.".into(),
            expected_tense: Tense::Preterite,
            correct_form: "caminé".into(),
            concept_tags: vec![ConceptTag::CompletedAction],
            why: String::new(),
            timeline: None,
        }
    }

    #[test]
    fn record_result_persists_new_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut eng = engine(&dir);

        let stats = eng.load_stats();
        let next = eng.record_result(&stats, &exercise("e1"), true, true);
        assert_eq!(next.total_reps, 1);

        // A fresh load sees the persisted update.
        let reloaded = eng.load_stats();
        assert_eq!(reloaded.total_reps, 1);
        assert_eq!(reloaded.streak, 1);
    }

    #[test]
    fn clear_resets_everything() {
        let dir = tempfile::tempdir().unwrap();
        let mut eng = engine(&dir);
        let stats = eng.load_stats();
        let _ = eng.record_result(&stats, &exercise("e1"), false, true);

        eng.clear_stats();
        let fresh = eng.load_stats();
        assert_eq!(fresh.total_reps, 0);
        assert_eq!(fresh.session_errors(ConceptTag::CompletedAction), 0);
    }

    #[test]
    fn select_next_against_empty_and_single_pool() {
        let dir = tempfile::tempdir().unwrap();
        let mut eng = engine(&dir);
        let stats = Stats::default();

        assert!(eng.select_next(&[], &stats, None).is_none());

        let pool = vec![exercise("only")];
        let picked = eng.select_next(&pool, &stats, Some("only")).unwrap();
        assert_eq!(picked.id, "only");
    }

    #[test]
    fn lenient_toggle_flows_through() {
        let dir = tempfile::tempdir().unwrap();
        let strict = engine(&dir);
        assert!(!strict.check_conjugation("camine", "caminé"));

        let lenient = DrillEngine::with_rng(
            StatsStore::new(dir.path().join("stats2.json")),
            DrillEngineConfig {
                lenient: true,
                ..Default::default()
            },
            Box::new(ScriptedSource::new(vec![0.0])),
        );
        assert!(lenient.check_conjugation("camine", "caminé"));
    }
}
