use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;

use buzzwin_core::models::RitualStats;
use buzzwin_core::stats_span;
use buzzwin_core::traits::IRitualStorage;

use crate::context::{run_blocking, AppContext};

/// Ritual stats for a user. Never fails: any error degrades to all-zero stats.
pub async fn get(
    State(ctx): State<Arc<AppContext>>,
    Path(user_id): Path<String>,
) -> Json<RitualStats> {
    let uid = user_id.clone();
    let result = run_blocking(&ctx, move |ctx| {
        let completions = ctx.storage.completions_for_user(&uid)?;
        let _span = stats_span!(uid, completions.len()).entered();
        let definitions = ctx.catalog()?;
        Ok(ctx.stats.compute_at(&completions, &definitions, Utc::now()))
    })
    .await;

    match result {
        Ok(stats) => Json(stats),
        Err(e) => {
            tracing::warn!(
                user_id = %user_id,
                error = %e.message,
                "stats computation failed; serving defaults"
            );
            Json(RitualStats::default())
        }
    }
}
