//! Calendar period helpers.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// First and last day of the week containing `day`.
pub fn week_bounds(day: NaiveDate, week_start: Weekday) -> (NaiveDate, NaiveDate) {
    let offset = (7 + day.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    let start = day - Duration::days(offset as i64);
    (start, start + Duration::days(6))
}

/// Whether `day` falls in the same calendar week as `today`.
pub fn in_same_week(day: NaiveDate, today: NaiveDate, week_start: Weekday) -> bool {
    let (start, end) = week_bounds(today, week_start);
    day >= start && day <= end
}

/// Whether `day` falls in the same calendar month as `today`.
pub fn in_same_month(day: NaiveDate, today: NaiveDate) -> bool {
    day.year() == today.year() && day.month() == today.month()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn sunday_start_week() {
        // 2024-01-03 is a Wednesday.
        let (start, end) = week_bounds(d(2024, 1, 3), Weekday::Sun);
        assert_eq!(start, d(2023, 12, 31));
        assert_eq!(end, d(2024, 1, 6));
    }

    #[test]
    fn monday_start_week() {
        let (start, end) = week_bounds(d(2024, 1, 3), Weekday::Mon);
        assert_eq!(start, d(2024, 1, 1));
        assert_eq!(end, d(2024, 1, 7));
    }

    #[test]
    fn week_start_day_is_its_own_start() {
        let (start, _) = week_bounds(d(2024, 1, 7), Weekday::Sun);
        assert_eq!(start, d(2024, 1, 7));
    }

    #[test]
    fn month_membership() {
        assert!(in_same_month(d(2024, 2, 1), d(2024, 2, 29)));
        assert!(!in_same_month(d(2023, 2, 1), d(2024, 2, 29)));
        assert!(!in_same_month(d(2024, 1, 31), d(2024, 2, 1)));
    }
}
