//! pasado-core — Adaptive exercise selection and scoring engine.
//!
//! This crate defines the data model, mastery statistics, and the
//! scored weighted-random exercise picker that the pasado drill
//! frontends build on.

pub mod accuracy;
pub mod checker;
pub mod contrast;
pub mod engine;
pub mod error;
pub mod model;
pub mod pool;
pub mod rng;
pub mod scorer;
pub mod selector;
pub mod stats;
pub mod store;
