use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, NaiveDate, Utc};

use buzzwin_core::config::StatsConfig;
use buzzwin_core::models::{RitualCompletion, RitualDefinition, RitualStats};

use crate::calendar;
use crate::context::StatsContext;
use crate::streak;
use crate::tags;
use crate::trend;

/// Compute ritual statistics from a completion history.
///
/// Completions whose day key does not parse are counted in `total_completed`
/// and the shared/quiet split but are excluded from every date-based metric.
pub fn compute_stats(
    completions: &[RitualCompletion],
    definitions: &[RitualDefinition],
    ctx: &StatsContext,
) -> RitualStats {
    let mut days: Vec<NaiveDate> = Vec::with_capacity(completions.len());
    let mut shared_count = 0u32;
    let mut quiet_count = 0u32;

    for completion in completions {
        if completion.completed_quietly {
            quiet_count += 1;
        } else {
            shared_count += 1;
        }
        match completion.day() {
            Some(day) => days.push(day),
            None => tracing::debug!(
                completion_id = %completion.id,
                date = %completion.date,
                "unparseable completion day key; excluded from date metrics"
            ),
        }
    }

    let unique: BTreeSet<NaiveDate> = days.iter().copied().collect();
    let current_streak = streak::current_streak(&unique, ctx.today);
    let longest_streak = streak::longest_streak(&unique).max(current_streak);

    let completed_this_week = days
        .iter()
        .filter(|d| calendar::in_same_week(**d, ctx.today, ctx.week_start))
        .count() as u32;
    let completed_this_month = days
        .iter()
        .filter(|d| calendar::in_same_month(**d, ctx.today))
        .count() as u32;

    let by_id: HashMap<&str, &RitualDefinition> =
        definitions.iter().map(|d| (d.id.as_str(), d)).collect();

    RitualStats {
        current_streak,
        longest_streak,
        total_completed: completions.len() as u32,
        completed_this_week,
        completed_this_month,
        completed_days: unique.len() as u32,
        most_active_tags: tags::most_active_tags(completions, &by_id, ctx.top_tags),
        shared_count,
        quiet_count,
        trend: trend::trend(&days, ctx.today),
        best_day: trend::best_day(&days),
    }
}

/// Stats engine holding the configured calendar conventions.
pub struct StatsEngine {
    config: StatsConfig,
}

impl StatsEngine {
    pub fn new(config: StatsConfig) -> Self {
        Self { config }
    }

    /// Context for a computation at `now`.
    pub fn context_at(&self, now: DateTime<Utc>) -> StatsContext {
        StatsContext::from_config(&self.config, now)
    }

    /// Compute stats as of `now`.
    pub fn compute_at(
        &self,
        completions: &[RitualCompletion],
        definitions: &[RitualDefinition],
        now: DateTime<Utc>,
    ) -> RitualStats {
        compute_stats(completions, definitions, &self.context_at(now))
    }

    /// The milestone newly reached when `day` becomes a completed day.
    ///
    /// Looks at the whole run containing `day`, so filling a gap that joins
    /// two runs counts. A completion already recorded on `day` is ignored.
    pub fn milestone_on(&self, completions: &[RitualCompletion], day: NaiveDate) -> Option<u32> {
        let days: BTreeSet<NaiveDate> = completions.iter().filter_map(|c| c.day()).collect();
        let (before, after) = streak::runs_around(&days, day);
        streak::milestone_crossed(before, after)
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }
}

impl Default for StatsEngine {
    fn default() -> Self {
        Self::new(StatsConfig::default())
    }
}
