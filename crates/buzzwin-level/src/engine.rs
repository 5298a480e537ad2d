use buzzwin_core::models::LevelInfo;

use crate::formula;
use crate::table::LevelTable;

/// Level engine backed by a precomputed threshold table.
pub struct LevelEngine {
    table: LevelTable,
}

impl LevelEngine {
    /// Create an engine with the default table size.
    pub fn new() -> Self {
        Self {
            table: LevelTable::default(),
        }
    }

    /// Create an engine precomputing `max_level` thresholds.
    pub fn with_table_size(max_level: u32) -> Self {
        Self {
            table: LevelTable::new(max_level),
        }
    }

    pub fn level_for_karma(&self, karma: i64) -> u32 {
        self.table.level_for_karma(karma)
    }

    pub fn karma_for_level(&self, level: u32) -> i64 {
        self.table.karma_for_level(level)
    }

    /// Everything the level endpoint reports for a karma total.
    pub fn level_info(&self, karma: i64) -> LevelInfo {
        let level = self.level_for_karma(karma);
        let current = self.karma_for_level(level);
        let next = self.karma_for_level(level + 1);
        let clamped = karma.max(0);

        LevelInfo {
            level,
            karma_points: karma,
            progress: formula::progress_between(clamped, current, next),
            karma_remaining: (next - clamped).max(0),
            karma_for_current_level: current,
            karma_for_next_level: next,
        }
    }
}

impl Default for LevelEngine {
    fn default() -> Self {
        Self::new()
    }
}
