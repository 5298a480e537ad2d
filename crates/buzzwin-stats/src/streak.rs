//! Consecutive-day streaks over a set of completion days.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

use buzzwin_core::constants::STREAK_MILESTONES;

/// Consecutive days with a completion, ending today, or ending yesterday
/// when today has no completion yet.
pub fn current_streak(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let yesterday = today - Duration::days(1);
    let mut cursor = if days.contains(&today) {
        today
    } else if days.contains(&yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 0;
    while days.contains(&cursor) {
        streak += 1;
        cursor -= Duration::days(1);
    }
    streak
}

/// Longest run of consecutive days anywhere in the history.
pub fn longest_streak(days: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for day in days {
        run = match prev {
            Some(p) if *day - p == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(*day);
    }
    longest
}

/// The milestone a streak length lands on exactly, if any.
pub fn streak_milestone(streak: u32) -> Option<u32> {
    STREAK_MILESTONES.iter().copied().find(|m| *m == streak)
}

/// Consecutive completed days immediately before and immediately after `day`.
/// `day` itself is not counted.
pub fn runs_around(days: &BTreeSet<NaiveDate>, day: NaiveDate) -> (u32, u32) {
    let mut before = 0;
    let mut cursor = day - Duration::days(1);
    while days.contains(&cursor) {
        before += 1;
        cursor -= Duration::days(1);
    }

    let mut after = 0;
    let mut cursor = day + Duration::days(1);
    while days.contains(&cursor) {
        after += 1;
        cursor += Duration::days(1);
    }
    (before, after)
}

/// Highest milestone reached by joining a run of `before` days, one new day,
/// and a run of `after` days, that neither side had reached on its own.
pub fn milestone_crossed(before: u32, after: u32) -> Option<u32> {
    let joined = before + 1 + after;
    let previous = before.max(after);
    STREAK_MILESTONES
        .iter()
        .copied()
        .filter(|m| *m > previous && *m <= joined)
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(list: &[&str]) -> BTreeSet<NaiveDate> {
        list.iter()
            .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap())
            .collect()
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn three_consecutive_days_ending_today() {
        let set = days(&["2024-01-01", "2024-01-02", "2024-01-03"]);
        assert_eq!(current_streak(&set, d("2024-01-03")), 3);
        assert_eq!(longest_streak(&set), 3);
    }

    #[test]
    fn gap_breaks_streak() {
        let set = days(&["2024-01-01", "2024-01-03"]);
        assert_eq!(current_streak(&set, d("2024-01-03")), 1);
        assert_eq!(longest_streak(&set), 1);
    }

    #[test]
    fn yesterday_keeps_streak_alive() {
        let set = days(&["2024-01-01", "2024-01-02"]);
        assert_eq!(current_streak(&set, d("2024-01-03")), 2);
    }

    #[test]
    fn two_days_ago_is_broken() {
        let set = days(&["2024-01-01"]);
        assert_eq!(current_streak(&set, d("2024-01-03")), 0);
    }

    #[test]
    fn empty_history() {
        let set = BTreeSet::new();
        assert_eq!(current_streak(&set, d("2024-01-03")), 0);
        assert_eq!(longest_streak(&set), 0);
    }

    #[test]
    fn longest_ignores_trailing_gap() {
        let set = days(&[
            "2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04", "2024-01-05", "2024-01-16",
        ]);
        assert_eq!(longest_streak(&set), 5);
        assert_eq!(current_streak(&set, d("2024-01-16")), 1);
    }

    #[test]
    fn streak_crosses_month_and_year() {
        let set = days(&["2023-12-30", "2023-12-31", "2024-01-01"]);
        assert_eq!(current_streak(&set, d("2024-01-01")), 3);
    }

    #[test]
    fn milestones() {
        assert_eq!(streak_milestone(7), Some(7));
        assert_eq!(streak_milestone(30), Some(30));
        assert_eq!(streak_milestone(8), None);
        assert_eq!(streak_milestone(0), None);
    }

    #[test]
    fn runs_around_skips_the_day_itself() {
        let d = days(&["2024-01-01", "2024-01-02", "2024-01-04"]);
        let day = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(runs_around(&d, day), (2, 1));
    }

    #[test]
    fn crossing_requires_a_new_milestone() {
        assert_eq!(milestone_crossed(6, 0), Some(7));
        assert_eq!(milestone_crossed(3, 3), Some(7));
        assert_eq!(milestone_crossed(7, 0), None);
        assert_eq!(milestone_crossed(7, 7), None);
        assert_eq!(milestone_crossed(20, 9), Some(30));
        assert_eq!(milestone_crossed(0, 0), None);
    }
}
