use chrono::Weekday;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Direction of recent activity compared with the week before.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Steady,
}

/// Occurrences of one tag across a user's completions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TagCount {
    pub tag: String,
    pub count: u32,
}

/// Ritual statistics derived from a user's completion history.
///
/// `Default` is the degraded all-zero value served when computation fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RitualStats {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_completed: u32,
    pub completed_this_week: u32,
    pub completed_this_month: u32,
    pub completed_days: u32,
    pub most_active_tags: Vec<TagCount>,
    pub shared_count: u32,
    pub quiet_count: u32,
    pub trend: Trend,
    /// Weekday with the most completions, e.g. `"Mon"`.
    #[ts(type = "string | null")]
    #[serde(with = "weekday_opt")]
    pub best_day: Option<Weekday>,
}

mod weekday_opt {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Option<Weekday>, s: S) -> Result<S::Ok, S::Error> {
        match day {
            Some(d) => s.serialize_str(&d.to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Weekday>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        raw.map(|s| s.parse::<Weekday>().map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        let stats = RitualStats::default();
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.longest_streak, 0);
        assert_eq!(stats.total_completed, 0);
        assert!(stats.most_active_tags.is_empty());
        assert_eq!(stats.trend, Trend::Steady);
        assert_eq!(stats.best_day, None);
    }

    #[test]
    fn best_day_serializes_as_short_name() {
        let stats = RitualStats {
            best_day: Some(Weekday::Wed),
            ..Default::default()
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["bestDay"], "Wed");
        assert_eq!(value["currentStreak"], 0);

        let back: RitualStats = serde_json::from_value(value).unwrap();
        assert_eq!(back.best_day, Some(Weekday::Wed));
    }
}
