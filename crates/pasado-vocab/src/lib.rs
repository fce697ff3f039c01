//! pasado-vocab — Daily vocabulary selection engine.
//!
//! Picks one verb and one adjective per day from word lists, matching a
//! difficulty preference that moves with user feedback, and tracks
//! usage history so words don't repeat until the list is exhausted.

pub mod feedback;
pub mod history;
pub mod model;
pub mod selector;
