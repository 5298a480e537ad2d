//! Golden scenarios for ritual statistics.

use buzzwin_core::config::WeekStart;
use buzzwin_core::models::{RitualCompletion, RitualDefinition, RitualStats};
use buzzwin_stats::{compute_stats, StatsContext};
use chrono::{NaiveDate, TimeZone, Utc};
use serde::Deserialize;
use test_fixtures::{list_fixture_names, load_fixture};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatsScenario {
    description: String,
    today: NaiveDate,
    week_starts_on: WeekStart,
    top_tags: usize,
    rituals: Vec<FixtureRitual>,
    completions: Vec<FixtureCompletion>,
    expected: RitualStats,
}

#[derive(Deserialize)]
struct FixtureRitual {
    id: String,
    tags: Vec<String>,
    category: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixtureCompletion {
    ritual_id: String,
    date: String,
    completed_quietly: bool,
}

impl StatsScenario {
    fn definitions(&self) -> Vec<RitualDefinition> {
        self.rituals
            .iter()
            .map(|r| RitualDefinition {
                id: r.id.clone(),
                name: r.id.clone(),
                description: String::new(),
                tags: r.tags.clone(),
                category: r.category.clone(),
                created_by: None,
                created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                completion_count: 0,
            })
            .collect()
    }

    fn completions(&self) -> Vec<RitualCompletion> {
        self.completions
            .iter()
            .enumerate()
            .map(|(i, c)| RitualCompletion {
                id: format!("c{i}"),
                user_id: "golden-user".to_string(),
                ritual_id: c.ritual_id.clone(),
                date: c.date.clone(),
                completed_quietly: c.completed_quietly,
                shared_moment_id: None,
                created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            })
            .collect()
    }

    fn context(&self) -> StatsContext {
        StatsContext {
            today: self.today,
            week_start: self.week_starts_on.weekday(),
            top_tags: self.top_tags,
        }
    }
}

fn run(name: &str) {
    let scenario: StatsScenario = load_fixture(name);
    let stats = compute_stats(
        &scenario.completions(),
        &scenario.definitions(),
        &scenario.context(),
    );
    assert_eq!(
        stats, scenario.expected,
        "golden mismatch in {name}: {}",
        scenario.description
    );
}

#[test]
fn golden_three_day_streak() {
    run("stats/three_day_streak.json");
}

#[test]
fn golden_gap_resets_streak() {
    run("stats/gap_resets_streak.json");
}

#[test]
fn golden_long_gap_keeps_longest() {
    run("stats/long_gap_keeps_longest.json");
}

#[test]
fn golden_yesterday_keeps_streak() {
    run("stats/yesterday_keeps_streak.json");
}

#[test]
fn golden_tags_and_split() {
    run("stats/tags_and_split.json");
}

#[test]
fn golden_empty_history() {
    run("stats/empty_history.json");
}

#[test]
fn every_stats_fixture_matches() {
    let names = list_fixture_names("stats");
    assert!(names.len() >= 6);
    for name in names {
        run(&name);
    }
}
