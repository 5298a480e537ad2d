use buzzwin_core::config::{StatsConfig, WeekStart};
use buzzwin_core::models::{RitualCompletion, RitualDefinition, Trend};
use buzzwin_stats::{compute_stats, StatsContext, StatsEngine};
use chrono::{NaiveDate, TimeZone, Utc, Weekday};

fn completion(ritual: &str, date: &str, quiet: bool) -> RitualCompletion {
    RitualCompletion {
        id: format!("{ritual}-{date}"),
        user_id: "u1".to_string(),
        ritual_id: ritual.to_string(),
        date: date.to_string(),
        completed_quietly: quiet,
        shared_moment_id: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn definition(id: &str, tags: &[&str]) -> RitualDefinition {
    RitualDefinition {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        category: None,
        created_by: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        completion_count: 0,
    }
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn two_rituals_same_day_count_once_for_streak() {
    let completions = vec![
        completion("a", "2024-01-02", true),
        completion("b", "2024-01-02", false),
        completion("a", "2024-01-03", true),
    ];
    let stats = compute_stats(&completions, &[], &StatsContext::new(day("2024-01-03")));

    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.completed_days, 2);
    assert_eq!(stats.total_completed, 3);
    assert_eq!(stats.shared_count, 1);
    assert_eq!(stats.quiet_count, 2);
}

#[test]
fn no_completion_today_or_yesterday_means_zero_streak() {
    let completions = vec![completion("a", "2024-01-01", true)];
    let stats = compute_stats(&completions, &[], &StatsContext::new(day("2024-01-05")));
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.longest_streak, 1);
}

#[test]
fn previous_month_is_excluded_from_month_count() {
    let completions = vec![
        completion("a", "2024-01-31", true),
        completion("a", "2024-02-01", true),
    ];
    let stats = compute_stats(&completions, &[], &StatsContext::new(day("2024-02-01")));
    assert_eq!(stats.completed_this_month, 1);
    // Wed Jan 31 and Thu Feb 1 share a Sunday-start week.
    assert_eq!(stats.completed_this_week, 2);
    assert_eq!(stats.current_streak, 2);
}

#[test]
fn week_start_changes_week_count() {
    // Sunday 2024-01-07 and Monday 2024-01-08.
    let completions = vec![
        completion("a", "2024-01-07", true),
        completion("a", "2024-01-08", true),
    ];
    let mut ctx = StatsContext::new(day("2024-01-08"));
    assert_eq!(compute_stats(&completions, &[], &ctx).completed_this_week, 2);

    ctx.week_start = Weekday::Mon;
    assert_eq!(compute_stats(&completions, &[], &ctx).completed_this_week, 1);
}

#[test]
fn missing_definition_contributes_no_tags() {
    let completions = vec![
        completion("known", "2024-01-01", true),
        completion("unknown", "2024-01-01", true),
    ];
    let defs = vec![definition("known", &["calm"])];
    let stats = compute_stats(&completions, &defs, &StatsContext::new(day("2024-01-01")));
    assert_eq!(stats.most_active_tags.len(), 1);
    assert_eq!(stats.most_active_tags[0].tag, "calm");
    assert_eq!(stats.most_active_tags[0].count, 1);
}

#[test]
fn repeated_tag_on_one_definition_counts_once_per_completion() {
    let completions = vec![
        completion("a", "2024-01-01", true),
        completion("a", "2024-01-02", false),
    ];
    let defs = vec![definition("a", &["health", "health", "calm"])];
    let stats = compute_stats(&completions, &defs, &StatsContext::new(day("2024-01-02")));
    assert_eq!(stats.most_active_tags.len(), 2);
    assert_eq!(stats.most_active_tags[0].tag, "calm");
    assert_eq!(stats.most_active_tags[0].count, 2);
    assert_eq!(stats.most_active_tags[1].tag, "health");
    assert_eq!(stats.most_active_tags[1].count, 2);
}

#[test]
fn top_tags_truncates() {
    let completions = vec![completion("a", "2024-01-01", true)];
    let defs = vec![definition("a", &["x", "y", "z"])];
    let mut ctx = StatsContext::new(day("2024-01-01"));
    ctx.top_tags = 2;
    let tags: Vec<_> = compute_stats(&completions, &defs, &ctx)
        .most_active_tags
        .into_iter()
        .map(|t| t.tag)
        .collect();
    assert_eq!(tags, vec!["x", "y"]);
}

#[test]
fn trend_down_when_activity_drops() {
    let completions = vec![
        completion("a", "2024-01-01", true),
        completion("a", "2024-01-02", true),
        completion("a", "2024-01-09", true),
    ];
    let stats = compute_stats(&completions, &[], &StatsContext::new(day("2024-01-10")));
    assert_eq!(stats.trend, Trend::Down);
}

#[test]
fn engine_uses_configured_offset_for_today() {
    let engine = StatsEngine::new(StatsConfig {
        week_starts_on: WeekStart::Monday,
        utc_offset_minutes: 120,
        top_tags: 5,
        ..StatsConfig::default()
    });
    // 23:00 UTC on Jan 2 is already Jan 3 at UTC+2.
    let now = Utc.with_ymd_and_hms(2024, 1, 2, 23, 0, 0).unwrap();
    let completions = vec![
        completion("a", "2024-01-02", true),
        completion("a", "2024-01-03", true),
    ];
    let stats = engine.compute_at(&completions, &[], now);
    assert_eq!(stats.current_streak, 2);
    assert_eq!(engine.context_at(now).today, day("2024-01-03"));
}

#[test]
fn milestone_detected_on_seventh_day() {
    let engine = StatsEngine::default();
    let completions: Vec<_> = (1..=7)
        .map(|d| completion("a", &format!("2024-01-{d:02}"), true))
        .collect();
    assert_eq!(engine.milestone_on(&completions, day("2024-01-07")), Some(7));
    assert_eq!(engine.milestone_on(&completions[..6], day("2024-01-06")), None);
}

#[test]
fn backfilled_gap_that_joins_runs_reaches_milestone() {
    let engine = StatsEngine::default();
    let completions: Vec<_> = [1, 2, 3, 5, 6, 7]
        .iter()
        .map(|d| completion("a", &format!("2024-01-{d:02}"), true))
        .collect();
    assert_eq!(engine.milestone_on(&completions, day("2024-01-04")), Some(7));
}

#[test]
fn extending_past_a_milestone_awards_nothing() {
    let engine = StatsEngine::default();
    let completions: Vec<_> = (1..=8)
        .map(|d| completion("a", &format!("2024-01-{d:02}"), true))
        .collect();
    assert_eq!(engine.milestone_on(&completions, day("2024-01-08")), None);

    // Two runs that each already passed 7 joined into 15.
    let joined: Vec<_> = (1..=15)
        .filter(|d| *d != 8)
        .map(|d| completion("a", &format!("2024-01-{d:02}"), true))
        .collect();
    assert_eq!(engine.milestone_on(&joined, day("2024-01-08")), None);
}
