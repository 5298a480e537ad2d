//! # buzzwin-karma
//!
//! Karma accumulator. Maps each [`KarmaAction`](buzzwin_core::KarmaAction)
//! to its point value and bucket, and applies awards through an
//! [`IKarmaStorage`](buzzwin_core::traits::IKarmaStorage) backend.

pub mod actions;
pub mod engine;

pub use actions::{action_table, bucket_for, points_for, rule_for, ActionRule};
pub use engine::KarmaEngine;
