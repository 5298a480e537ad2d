use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use buzzwin_core::level_span;
use buzzwin_core::models::LevelInfo;

use crate::context::{run_blocking, AppContext};
use crate::error::ApiResult;

/// Level and progress for a user's current karma.
pub async fn get(
    State(ctx): State<Arc<AppContext>>,
    Path(user_id): Path<String>,
) -> ApiResult<LevelInfo> {
    let info = run_blocking(&ctx, move |ctx| {
        let _span = level_span!(user_id).entered();
        let state = ctx.karma.karma(&user_id)?;
        Ok(ctx.levels.level_info(state.karma_points))
    })
    .await?;
    Ok(Json(info))
}
