//! Contrast-mode drill state.
//!
//! A contrast exercise shows the same verb in two paired contexts. One
//! side is chosen as the fill-in target when the drill is created and
//! held fixed for the drill's lifetime; advancing to another exercise
//! means creating a new drill.

use crate::model::{ContrastExercise, Tense};
use crate::rng::RandomSource;

/// Which side of the pair is the fill-in target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSide {
    A,
    B,
}

/// A mounted contrast drill with a fixed target side.
#[derive(Debug, Clone)]
pub struct ContrastDrill {
    exercise: ContrastExercise,
    target: TargetSide,
}

impl ContrastDrill {
    /// Mount a drill, choosing the target side once via the injected
    /// random source.
    pub fn new(exercise: ContrastExercise, rng: &mut dyn RandomSource) -> Self {
        let target = if rng.next_f64() < 0.5 {
            TargetSide::A
        } else {
            TargetSide::B
        };
        Self { exercise, target }
    }

    pub fn exercise(&self) -> &ContrastExercise {
        &self.exercise
    }

    pub fn target_side(&self) -> TargetSide {
        self.target
    }

    /// The tense the target sentence calls for.
    pub fn target_tense(&self) -> Tense {
        match self.target {
            TargetSide::A => self.exercise.tense_a,
            TargetSide::B => self.exercise.tense_b(),
        }
    }

    /// The fill-in prompt for the target side.
    pub fn target_prompt(&self) -> &str {
        match self.target {
            TargetSide::A => &self.exercise.prompt_a,
            TargetSide::B => &self.exercise.prompt_b,
        }
    }

    /// The completed sentence shown as the non-target reference.
    pub fn reference_sentence(&self) -> &str {
        match self.target {
            TargetSide::A => &self.exercise.sentence_b,
            TargetSide::B => &self.exercise.sentence_a,
        }
    }
}
