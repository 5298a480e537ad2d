//! # buzzwin-level
//!
//! Converts cumulative karma into a level and progress toward the next one.
//!
//! Levels 1–10 take 100 karma each. From level 11 (1000 karma) every
//! threshold is the previous one times 1.2, floored.

pub mod engine;
pub mod formula;
pub mod table;

pub use engine::LevelEngine;
pub use formula::{
    karma_for_level, karma_remaining_for_next_level, level_for_karma, progress_to_next_level,
};
pub use table::LevelTable;
