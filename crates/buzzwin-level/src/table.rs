use crate::formula::{self, KARMA_PER_LINEAR_LEVEL, LINEAR_MAX_LEVEL};

/// Precomputed level thresholds.
///
/// `thresholds[i]` is the karma required for level `i + 1`. Built with the
/// same floor-multiply sequence as [`formula::karma_for_level`], so lookups
/// agree exactly with the iterative functions for every covered level.
#[derive(Debug, Clone)]
pub struct LevelTable {
    thresholds: Vec<i64>,
}

impl LevelTable {
    /// Default number of levels precomputed.
    pub const DEFAULT_LEVELS: u32 = 100;

    /// Build a table covering levels `1..=max_level`.
    pub fn new(max_level: u32) -> Self {
        let max_level = max_level.max(LINEAR_MAX_LEVEL + 1);
        let mut thresholds = Vec::with_capacity(max_level as usize);
        for level in 1..=LINEAR_MAX_LEVEL {
            thresholds.push((level as i64 - 1) * KARMA_PER_LINEAR_LEVEL);
        }
        let mut threshold = formula::GEOMETRIC_BASE_KARMA;
        for _ in (LINEAR_MAX_LEVEL + 1)..=max_level {
            thresholds.push(threshold);
            threshold = formula::next_threshold(threshold);
        }
        Self { thresholds }
    }

    /// Highest level the table covers.
    pub fn max_level(&self) -> u32 {
        self.thresholds.len() as u32
    }

    /// Karma required for `level`, falling back to iteration past the table.
    pub fn karma_for_level(&self, level: u32) -> i64 {
        if level <= 1 {
            return 0;
        }
        match self.thresholds.get(level as usize - 1) {
            Some(k) => *k,
            None => formula::karma_for_level(level),
        }
    }

    /// Level for a karma total, by binary search over the table.
    pub fn level_for_karma(&self, karma: i64) -> u32 {
        if karma < 0 {
            return 1;
        }
        let top = self.thresholds[self.thresholds.len() - 1];
        if karma >= formula::next_threshold(top) {
            return formula::level_for_karma(karma);
        }
        // Number of thresholds <= karma; thresholds[0] == 0 so this is >= 1.
        self.thresholds.partition_point(|t| *t <= karma) as u32
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEVELS)
    }
}
