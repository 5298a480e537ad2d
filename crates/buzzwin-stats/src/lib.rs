//! # buzzwin-stats
//!
//! Derives ritual statistics from a user's completion history: current and
//! longest streak, weekly and monthly counts, tag frequency, shared/quiet
//! split, trend, and best day. Also filters and sorts the ritual catalog.
//!
//! Everything here is pure and synchronous over in-memory slices.

pub mod calendar;
pub mod catalog;
pub mod context;
pub mod engine;
pub mod streak;
pub mod tags;
pub mod trend;

pub use catalog::{filter_and_sort, RitualFilter, RitualSort};
pub use context::StatsContext;
pub use engine::{compute_stats, StatsEngine};
pub use streak::{current_streak, longest_streak, milestone_crossed, runs_around, streak_milestone};
