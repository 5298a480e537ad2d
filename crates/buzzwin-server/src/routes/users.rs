use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use buzzwin_core::models::User;
use buzzwin_core::traits::IUserStorage;
use buzzwin_core::BuzzwinError;

use super::required_text;
use crate::context::{run_blocking, AppContext};
use crate::error::{ApiError, ApiResult};
use crate::types::CreateUserRequest;

/// Create a user with zero karma.
pub async fn create(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let id = required_text("id", &request.id)?;
    let display_name = required_text("displayName", &request.display_name)?;

    let user = run_blocking(&ctx, move |ctx| ctx.storage.create_user(&id, &display_name)).await?;
    tracing::info!(user_id = %user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get(
    State(ctx): State<Arc<AppContext>>,
    Path(user_id): Path<String>,
) -> ApiResult<User> {
    let user = run_blocking(&ctx, move |ctx| {
        ctx.storage
            .get_user(&user_id)?
            .ok_or(BuzzwinError::UserNotFound { id: user_id })
    })
    .await?;
    Ok(Json(user))
}
