use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::defaults;

/// First day of the calendar week used for weekly counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }
}

/// Streak & stats configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub week_starts_on: WeekStart,
    /// Offset from UTC, in minutes, used to decide which day is "today".
    pub utc_offset_minutes: i32,
    /// Number of tags reported in `mostActiveTags`.
    pub top_tags: usize,
    /// How many days before today a completion may be dated.
    pub max_backfill_days: u32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            week_starts_on: WeekStart::default(),
            utc_offset_minutes: 0,
            top_tags: defaults::DEFAULT_TOP_TAGS,
            max_backfill_days: defaults::DEFAULT_MAX_BACKFILL_DAYS,
        }
    }
}
