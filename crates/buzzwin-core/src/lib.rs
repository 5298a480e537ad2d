//! # buzzwin-core
//!
//! Foundation crate for Buzzwin engagement scoring.
//! Defines the domain types, storage traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod cache;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use cache::TtlCache;
pub use config::BuzzwinConfig;
pub use errors::{BuzzwinError, BuzzwinResult};
pub use models::{
    KarmaAction, KarmaBreakdown, KarmaBucket, LevelInfo, RitualCompletion, RitualDefinition,
    RitualStats, UserKarmaState,
};
