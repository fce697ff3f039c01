//! The persisted mastery-statistics record.
//!
//! `Stats` is an explicit value passed into and returned from every
//! mutating operation; the host owns one instance with load/save calls
//! at session boundaries. Accuracy maps use absence to mean "no data
//! yet", so a freshly introduced concept tag or verb family simply has
//! no entry until the first observation.

use std::collections::HashMap;
use std::hash::Hash;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::{Deserialize, Deserializer};
use serde::Serialize;

use crate::model::{ConceptTag, Tense, VerbFamily};

/// Cap on the rolling window of recent results.
pub const RECENT_WINDOW: usize = 20;

/// One entry in the rolling recent-results window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct RecentResult {
    pub correct: bool,
}

/// The full mastery record.
///
/// Unrecognized top-level keys in a stored blob are captured in `extra`
/// and written back untouched, so the format is round-trip-safe for
/// keys this version doesn't know about. Unknown keys *inside* the
/// accuracy maps (a tag this build no longer recognizes) are dropped
/// during deserialization rather than failing the load.
#[derive(Debug, Clone, Default, Serialize, serde::Deserialize)]
pub struct Stats {
    /// Accuracy per concept tag, in [0, 1]. Absent = unknown.
    #[serde(default, deserialize_with = "lenient_map")]
    pub concept_accuracy: HashMap<ConceptTag, f64>,
    /// Classification accuracy per tense. Absent = unknown.
    #[serde(default, deserialize_with = "lenient_map")]
    pub tense_accuracy: HashMap<Tense, f64>,
    /// Conjugation accuracy per verb family. Absent = unknown.
    #[serde(default, deserialize_with = "lenient_map")]
    pub verb_family_accuracy: HashMap<VerbFamily, f64>,
    /// Consecutive fully-correct responses.
    #[serde(default)]
    pub streak: u32,
    /// All-time response count.
    #[serde(default)]
    pub total_reps: u64,
    /// Most-recent-first correctness window, capped at [`RECENT_WINDOW`].
    #[serde(default)]
    pub recent_results: Vec<RecentResult>,
    /// When each exercise was last presented, keyed by exercise id.
    #[serde(default)]
    pub last_seen: HashMap<String, DateTime<Utc>>,
    /// Misses per concept tag. Accumulates until an explicit full reset.
    #[serde(default, deserialize_with = "lenient_map")]
    pub session_errors: HashMap<ConceptTag, u32>,
    /// Unrecognized top-level keys, preserved across a round trip.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Stats {
    /// Accuracy for a concept tag, `None` until first observed.
    pub fn concept_accuracy(&self, tag: ConceptTag) -> Option<f64> {
        self.concept_accuracy.get(&tag).copied()
    }

    /// Classification accuracy for a tense, `None` until first observed.
    pub fn tense_accuracy(&self, tense: Tense) -> Option<f64> {
        self.tense_accuracy.get(&tense).copied()
    }

    /// Conjugation accuracy for a verb family, `None` until first observed.
    pub fn verb_family_accuracy(&self, family: VerbFamily) -> Option<f64> {
        self.verb_family_accuracy.get(&family).copied()
    }

    /// Error count recorded against a tag since the last full reset.
    pub fn session_errors(&self, tag: ConceptTag) -> u32 {
        self.session_errors.get(&tag).copied().unwrap_or(0)
    }

    /// Restore invariants on a freshly loaded record.
    ///
    /// A blob written by a different build may carry an oversized
    /// window or out-of-range accuracies; both are clipped rather than
    /// rejected.
    pub fn sanitize(&mut self) {
        self.recent_results.truncate(RECENT_WINDOW);
        for acc in self
            .concept_accuracy
            .values_mut()
            .chain(self.tense_accuracy.values_mut())
            .chain(self.verb_family_accuracy.values_mut())
        {
            *acc = acc.clamp(0.0, 1.0);
        }
    }
}

/// Deserialize a map with enum keys, silently dropping entries whose
/// key doesn't parse or whose value is null.
///
/// This is the forward/backward-compatible merge: a stored blob from an
/// older or newer schema never fails the load over a map entry.
fn lenient_map<'de, D, K, V>(deserializer: D) -> Result<HashMap<K, V>, D::Error>
where
    D: Deserializer<'de>,
    K: FromStr + Eq + Hash,
    V: Deserialize<'de>,
{
    let raw: HashMap<String, Option<V>> = HashMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(k, v)| Some((k.parse().ok()?, v?)))
        .collect())
}
