//! Domain models shared by the calculators, storage, and HTTP layer.

pub mod karma;
pub mod level;
pub mod moment;
pub mod ritual;
pub mod stats;
pub mod user;

pub use karma::{KarmaAction, KarmaBreakdown, KarmaBucket, KarmaEvent, UserKarmaState};
pub use level::LevelInfo;
pub use moment::{Comment, ImpactMoment, NewComment, NewImpactMoment};
pub use ritual::{
    day_key, NewRitualCompletion, NewRitualDefinition, RecordedCompletion, RitualCompletion,
    RitualDefinition,
};
pub use stats::{RitualStats, TagCount, Trend};
pub use user::User;
