use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use buzzwin_core::constants::VERSION;

use crate::context::{run_blocking, AppContext};
use crate::error::ApiResult;
use crate::types::HealthResponse;

/// Liveness plus schema version.
pub async fn health(State(ctx): State<Arc<AppContext>>) -> ApiResult<HealthResponse> {
    let schema_version = run_blocking(&ctx, |ctx| ctx.storage.schema_version()).await?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: VERSION.to_string(),
        schema_version,
    }))
}
