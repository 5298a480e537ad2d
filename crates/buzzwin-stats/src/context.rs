use chrono::{DateTime, Duration, NaiveDate, Utc, Weekday};

use buzzwin_core::config::StatsConfig;

/// Inputs that are not part of the completion history.
#[derive(Debug, Clone)]
pub struct StatsContext {
    /// The day considered "today" for streaks and period counts.
    pub today: NaiveDate,
    /// First day of the calendar week.
    pub week_start: Weekday,
    /// Number of tags reported in `most_active_tags`.
    pub top_tags: usize,
}

impl StatsContext {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            week_start: Weekday::Sun,
            top_tags: 5,
        }
    }

    /// Build a context from config, deriving today from `now` shifted by the
    /// configured UTC offset.
    pub fn from_config(config: &StatsConfig, now: DateTime<Utc>) -> Self {
        Self {
            today: local_today(now, config.utc_offset_minutes),
            week_start: config.week_starts_on.weekday(),
            top_tags: config.top_tags,
        }
    }
}

/// Calendar day at `now` for a fixed offset from UTC.
pub fn local_today(now: DateTime<Utc>, utc_offset_minutes: i32) -> NaiveDate {
    (now + Duration::minutes(utc_offset_minutes as i64)).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn offset_moves_day_boundary() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 23, 30, 0).unwrap();
        assert_eq!(local_today(now, 0), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(local_today(now, 60), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!(local_today(now, -24 * 60), NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    }
}
