use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;

use buzzwin_core::models::{KarmaEvent, UserKarmaState};

use crate::context::{run_blocking, AppContext};
use crate::error::ApiResult;
use crate::types::{AwardRequest, HistoryQuery};

/// Award a named action to a user.
pub async fn award(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<AwardRequest>,
) -> ApiResult<UserKarmaState> {
    let state = run_blocking(&ctx, move |ctx| {
        ctx.karma.award_named(&request.user_id, &request.action)
    })
    .await?;
    Ok(Json(state))
}

pub async fn get(
    State(ctx): State<Arc<AppContext>>,
    Path(user_id): Path<String>,
) -> ApiResult<UserKarmaState> {
    let state = run_blocking(&ctx, move |ctx| ctx.karma.karma(&user_id)).await?;
    Ok(Json(state))
}

/// Recent ledger events, newest first.
pub async fn history(
    State(ctx): State<Arc<AppContext>>,
    Path(user_id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> ApiResult<Vec<KarmaEvent>> {
    let events = run_blocking(&ctx, move |ctx| ctx.karma.history(&user_id, query.limit)).await?;
    Ok(Json(events))
}
