use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::DAY_KEY_FORMAT;

/// A recurring habit that users complete on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RitualDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category: Option<String>,
    /// `None` for system rituals.
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Number of completions recorded across all users.
    pub completion_count: u64,
}

/// Input for defining a ritual.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRitualDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
}

/// One completion of a ritual by one user on one calendar day.
///
/// `date` is the stored day key (`YYYY-MM-DD`); it is never normalized
/// across timezones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RitualCompletion {
    pub id: String,
    pub user_id: String,
    pub ritual_id: String,
    pub date: String,
    pub completed_quietly: bool,
    pub shared_moment_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RitualCompletion {
    /// Parse the stored day key. `None` when the key is malformed.
    pub fn day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DAY_KEY_FORMAT).ok()
    }
}

/// Input for recording a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRitualCompletion {
    pub user_id: String,
    pub ritual_id: String,
    pub date: NaiveDate,
    pub completed_quietly: bool,
    pub shared_moment_id: Option<String>,
}

/// A stored completion plus what the write observed about its day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCompletion {
    pub completion: RitualCompletion,
    /// No other completion existed for this user on this day when the row
    /// was inserted. Decided inside the write transaction.
    pub first_of_day: bool,
}

/// Format a date as a completion day key.
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}
