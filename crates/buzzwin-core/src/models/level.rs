use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Level derived from a karma total, as served to clients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LevelInfo {
    pub level: u32,
    pub karma_points: i64,
    /// Percent progress toward the next level, in [0, 100].
    pub progress: f64,
    pub karma_remaining: i64,
    pub karma_for_current_level: i64,
    pub karma_for_next_level: i64,
}
