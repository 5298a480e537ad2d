//! Trend detection and best-day lookup.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use buzzwin_core::models::Trend;

/// Length of the trend comparison window in days.
pub const TREND_WINDOW_DAYS: i64 = 7;

/// Compare completions in the window ending today with the window before it.
pub fn trend(days: &[NaiveDate], today: NaiveDate) -> Trend {
    let recent_start = today - Duration::days(TREND_WINDOW_DAYS - 1);
    let prior_start = recent_start - Duration::days(TREND_WINDOW_DAYS);

    let mut recent = 0u32;
    let mut prior = 0u32;
    for day in days {
        if *day >= recent_start && *day <= today {
            recent += 1;
        } else if *day >= prior_start && *day < recent_start {
            prior += 1;
        }
    }

    match recent.cmp(&prior) {
        std::cmp::Ordering::Greater => Trend::Up,
        std::cmp::Ordering::Less => Trend::Down,
        std::cmp::Ordering::Equal => Trend::Steady,
    }
}

/// Weekday with the most completions. Ties go to the earlier day, Monday first.
pub fn best_day(days: &[NaiveDate]) -> Option<Weekday> {
    let mut counts = [0u32; 7];
    for day in days {
        counts[day.weekday().num_days_from_monday() as usize] += 1;
    }

    let mut best: Option<(usize, u32)> = None;
    for (idx, count) in counts.iter().enumerate() {
        if *count == 0 {
            continue;
        }
        match best {
            Some((_, c)) if c >= *count => {}
            _ => best = Some((idx, *count)),
        }
    }
    best.map(|(idx, _)| weekday_from_monday(idx))
}

fn weekday_from_monday(idx: usize) -> Weekday {
    match idx {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn more_recent_activity_is_up() {
        let days = vec![d("2024-01-10"), d("2024-01-11"), d("2024-01-02")];
        assert_eq!(trend(&days, d("2024-01-14")), Trend::Up);
    }

    #[test]
    fn less_recent_activity_is_down() {
        let days = vec![d("2024-01-01"), d("2024-01-02"), d("2024-01-14")];
        assert_eq!(trend(&days, d("2024-01-14")), Trend::Down);
    }

    #[test]
    fn window_edges() {
        // Recent window is 01-08..=01-14, prior is 01-01..=01-07.
        let days = vec![d("2024-01-08"), d("2024-01-07"), d("2023-12-31")];
        assert_eq!(trend(&days, d("2024-01-14")), Trend::Steady);
    }

    #[test]
    fn best_day_ties_prefer_monday_first() {
        // 2024-01-01 Monday, 2024-01-03 Wednesday.
        let days = vec![d("2024-01-03"), d("2024-01-01")];
        assert_eq!(best_day(&days), Some(Weekday::Mon));
        let days = vec![d("2024-01-03"), d("2024-01-10"), d("2024-01-01")];
        assert_eq!(best_day(&days), Some(Weekday::Wed));
        assert_eq!(best_day(&[]), None);
    }
}
