//! Core data model types for pasado.
//!
//! These are the fundamental types the drill engine uses to represent
//! exercises, pedagogical concept tags, and conjugation families.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two Spanish past tenses the drill distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Preterite,
    Imperfect,
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tense::Preterite => write!(f, "preterite"),
            Tense::Imperfect => write!(f, "imperfect"),
        }
    }
}

impl FromStr for Tense {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "preterite" | "pret" => Ok(Tense::Preterite),
            "imperfect" | "imp" => Ok(Tense::Imperfect),
            other => Err(format!("unknown tense: {other}")),
        }
    }
}

/// Pedagogical category explaining why a given tense applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptTag {
    Interruption,
    Habit,
    RepeatedPast,
    Description,
    State,
    Age,
    Weather,
    Time,
    EventSequence,
    CompletedAction,
    CountedRepetition,
    MeaningChange,
    OngoingBackground,
}

impl ConceptTag {
    /// All tags, in a fixed order used for stable iteration.
    pub const ALL: [ConceptTag; 13] = [
        ConceptTag::Interruption,
        ConceptTag::Habit,
        ConceptTag::RepeatedPast,
        ConceptTag::Description,
        ConceptTag::State,
        ConceptTag::Age,
        ConceptTag::Weather,
        ConceptTag::Time,
        ConceptTag::EventSequence,
        ConceptTag::CompletedAction,
        ConceptTag::CountedRepetition,
        ConceptTag::MeaningChange,
        ConceptTag::OngoingBackground,
    ];

    /// Human-readable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            ConceptTag::Interruption => "interrupted action",
            ConceptTag::Habit => "habitual action",
            ConceptTag::RepeatedPast => "repeated past action",
            ConceptTag::Description => "description",
            ConceptTag::State => "state or condition",
            ConceptTag::Age => "age",
            ConceptTag::Weather => "weather",
            ConceptTag::Time => "telling time",
            ConceptTag::EventSequence => "sequence of events",
            ConceptTag::CompletedAction => "completed action",
            ConceptTag::CountedRepetition => "counted repetition",
            ConceptTag::MeaningChange => "meaning-changing verb",
            ConceptTag::OngoingBackground => "ongoing background",
        }
    }
}

impl fmt::Display for ConceptTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConceptTag::Interruption => "interruption",
            ConceptTag::Habit => "habit",
            ConceptTag::RepeatedPast => "repeated_past",
            ConceptTag::Description => "description",
            ConceptTag::State => "state",
            ConceptTag::Age => "age",
            ConceptTag::Weather => "weather",
            ConceptTag::Time => "time",
            ConceptTag::EventSequence => "event_sequence",
            ConceptTag::CompletedAction => "completed_action",
            ConceptTag::CountedRepetition => "counted_repetition",
            ConceptTag::MeaningChange => "meaning_change",
            ConceptTag::OngoingBackground => "ongoing_background",
        };
        write!(f, "{s}")
    }
}

impl FromStr for ConceptTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "interruption" => Ok(ConceptTag::Interruption),
            "habit" => Ok(ConceptTag::Habit),
            "repeated_past" => Ok(ConceptTag::RepeatedPast),
            "description" => Ok(ConceptTag::Description),
            "state" => Ok(ConceptTag::State),
            "age" => Ok(ConceptTag::Age),
            "weather" => Ok(ConceptTag::Weather),
            "time" => Ok(ConceptTag::Time),
            "event_sequence" => Ok(ConceptTag::EventSequence),
            "completed_action" => Ok(ConceptTag::CompletedAction),
            "counted_repetition" => Ok(ConceptTag::CountedRepetition),
            "meaning_change" => Ok(ConceptTag::MeaningChange),
            "ongoing_background" => Ok(ConceptTag::OngoingBackground),
            other => Err(format!("unknown concept tag: {other}")),
        }
    }
}

/// Known -ar verbs whose surface form does not end in "ar"
/// (reflexive infinitives and similar orthographic exceptions).
const AR_VERBS: [&str; 8] = [
    "levantarse",
    "acostarse",
    "despertarse",
    "ducharse",
    "bañarse",
    "quedarse",
    "casarse",
    "enojarse",
];

/// Conjugation class crossed with tense, used for targeted accuracy
/// tracking and selection scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbFamily {
    ArPreterite,
    ErIrPreterite,
    ArImperfect,
    ErIrImperfect,
}

impl VerbFamily {
    /// Derive the family for a verb in a given tense.
    ///
    /// A verb counts as -ar if it ends in "ar" or appears in the fixed
    /// allow-list of known -ar verbs; everything else is -er/-ir. Pure
    /// function of its inputs, no hidden state.
    pub fn of(verb: &str, tense: Tense) -> Self {
        let v = verb.trim().to_lowercase();
        let is_ar = v.ends_with("ar") || AR_VERBS.contains(&v.as_str());
        match (is_ar, tense) {
            (true, Tense::Preterite) => VerbFamily::ArPreterite,
            (false, Tense::Preterite) => VerbFamily::ErIrPreterite,
            (true, Tense::Imperfect) => VerbFamily::ArImperfect,
            (false, Tense::Imperfect) => VerbFamily::ErIrImperfect,
        }
    }

    pub const ALL: [VerbFamily; 4] = [
        VerbFamily::ArPreterite,
        VerbFamily::ErIrPreterite,
        VerbFamily::ArImperfect,
        VerbFamily::ErIrImperfect,
    ];
}

impl fmt::Display for VerbFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VerbFamily::ArPreterite => "ar_preterite",
            VerbFamily::ErIrPreterite => "er_ir_preterite",
            VerbFamily::ArImperfect => "ar_imperfect",
            VerbFamily::ErIrImperfect => "er_ir_imperfect",
        };
        write!(f, "{s}")
    }
}

impl FromStr for VerbFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ar_preterite" => Ok(VerbFamily::ArPreterite),
            "er_ir_preterite" => Ok(VerbFamily::ErIrPreterite),
            "ar_imperfect" => Ok(VerbFamily::ArImperfect),
            "er_ir_imperfect" => Ok(VerbFamily::ErIrImperfect),
            other => Err(format!("unknown verb family: {other}")),
        }
    }
}

/// A single-sentence drill exercise.
///
/// Immutable, externally supplied. The engine never mutates exercises.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier within the pool.
    pub id: String,
    /// Infinitive of the verb to conjugate.
    pub verb: String,
    /// Grammatical subject (e.g. "yo", "ellos").
    pub subject: String,
    /// Sentence with a blank where the conjugated verb goes.
    pub context_text: String,
    /// The tense the context calls for.
    pub expected_tense: Tense,
    /// The correct conjugated form.
    pub correct_form: String,
    /// Why this tense applies.
    #[serde(default)]
    pub concept_tags: Vec<ConceptTag>,
    /// Explanation shown after answering.
    #[serde(default)]
    pub why: String,
    /// Optional timeline illustration text.
    #[serde(default)]
    pub timeline: Option<String>,
}

impl Exercise {
    /// The conjugation family this exercise drills.
    pub fn family(&self) -> VerbFamily {
        VerbFamily::of(&self.verb, self.expected_tense)
    }
}

/// A paired-sentence contrast exercise: the same verb in two contexts,
/// one preterite and one imperfect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContrastExercise {
    /// Unique identifier within the pool.
    pub id: String,
    /// Infinitive of the verb both sentences use.
    pub verb: String,
    /// Completed sentence for side A.
    pub sentence_a: String,
    /// Completed sentence for side B.
    pub sentence_b: String,
    /// Fill-in prompt for side A.
    pub prompt_a: String,
    /// Fill-in prompt for side B.
    pub prompt_b: String,
    /// Tense of side A; side B carries the other tense.
    pub tense_a: Tense,
    /// Concepts the pair contrasts.
    #[serde(default)]
    pub concept_tags: Vec<ConceptTag>,
    /// Explanation of the contrast.
    #[serde(default)]
    pub why: String,
}

impl ContrastExercise {
    /// Tense of side B.
    pub fn tense_b(&self) -> Tense {
        match self.tense_a {
            Tense::Preterite => Tense::Imperfect,
            Tense::Imperfect => Tense::Preterite,
        }
    }
}

/// The full exercise pool supplied by an external data source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExercisePool {
    /// Single-sentence drills.
    #[serde(default)]
    pub practice: Vec<Exercise>,
    /// Paired-sentence contrast drills.
    #[serde(default)]
    pub contrast: Vec<ContrastExercise>,
}
