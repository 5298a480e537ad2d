use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, NaiveDate, Utc};

use buzzwin_core::constants::DAY_KEY_FORMAT;
use buzzwin_core::models::{KarmaAction, NewRitualCompletion};
use buzzwin_core::traits::IRitualStorage;

use super::required_text;
use crate::context::{run_blocking, AppContext};
use crate::error::ApiError;
use crate::types::{RecordCompletionRequest, RecordCompletionResponse};

/// Record a ritual completion.
///
/// The date may not be after today or more than `stats.max_backfill_days`
/// before it. Awards `ritual_completed_quietly` or `ritual_completed_shared`.
/// The first completion of a day whose run newly reaches a milestone also
/// awards `streak_milestone_reached`. Both awards are best-effort.
pub async fn record(
    State(ctx): State<Arc<AppContext>>,
    Path(user_id): Path<String>,
    Json(request): Json<RecordCompletionRequest>,
) -> Result<(StatusCode, Json<RecordCompletionResponse>), ApiError> {
    let user_id = required_text("userId", &user_id)?;
    let ritual_id = required_text("ritualId", &request.ritual_id)?;
    let today = ctx.today(Utc::now());
    let date = match request.date.as_deref().map(str::trim) {
        None | Some("") => today,
        Some(raw) => NaiveDate::parse_from_str(raw, DAY_KEY_FORMAT).map_err(|_| {
            ApiError::bad_request(format!("date must be YYYY-MM-DD, got {raw}"))
        })?,
    };
    check_date_window(date, today, ctx.config.stats.max_backfill_days)?;
    let completion = NewRitualCompletion {
        user_id,
        ritual_id,
        date,
        completed_quietly: request.completed_quietly,
        shared_moment_id: request.shared_moment_id.filter(|s| !s.trim().is_empty()),
    };

    let response = run_blocking(&ctx, move |ctx| {
        let user_id = completion.user_id.as_str();
        let recorded = ctx.storage.record_completion(&completion)?;
        let stored = recorded.completion;

        let action = if stored.completed_quietly {
            KarmaAction::RitualCompletedQuietly
        } else {
            KarmaAction::RitualCompletedShared
        };
        let mut karma = ctx.karma.award_best_effort(user_id, action);

        let mut milestone = None;
        if recorded.first_of_day {
            match ctx.storage.completions_for_user(user_id) {
                Ok(history) => milestone = ctx.stats.milestone_on(&history, date),
                Err(e) => tracing::warn!(user_id, error = %e, "milestone check skipped"),
            }
            if let Some(days) = milestone {
                tracing::info!(user_id, days, "streak milestone reached");
                if let Some(state) =
                    ctx.karma.award_best_effort(user_id, KarmaAction::StreakMilestoneReached)
                {
                    karma = Some(state);
                }
            }
        }

        Ok(RecordCompletionResponse {
            completion: stored,
            karma,
            milestone,
        })
    })
    .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

fn check_date_window(
    date: NaiveDate,
    today: NaiveDate,
    max_backfill_days: u32,
) -> Result<(), ApiError> {
    if date > today {
        return Err(ApiError::bad_request(format!("date {date} is after today ({today})")));
    }
    let earliest = today - Duration::days(i64::from(max_backfill_days));
    if date < earliest {
        return Err(ApiError::bad_request(format!(
            "date {date} is more than {max_backfill_days} days before today"
        )));
    }
    Ok(())
}
