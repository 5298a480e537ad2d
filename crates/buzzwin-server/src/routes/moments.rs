use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use buzzwin_core::models::{KarmaAction, NewComment, NewImpactMoment};
use buzzwin_core::traits::IMomentStorage;

use super::{optional_text, required_text};
use crate::context::{run_blocking, AppContext};
use crate::error::ApiError;
use crate::types::{
    CreateCommentRequest, CreateCommentResponse, CreateMomentRequest, CreateMomentResponse,
};

/// Post an impact moment.
///
/// The author earns `impact_moment_created`. Joining a chain (a parent is
/// given) also earns the author `impact_moment_joined` and the parent's
/// author `chain_extended`. All awards are best-effort.
pub async fn create(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<CreateMomentRequest>,
) -> Result<(StatusCode, Json<CreateMomentResponse>), ApiError> {
    let moment = NewImpactMoment {
        user_id: required_text("userId", &request.user_id)?,
        title: required_text("title", &request.title)?,
        description: optional_text("description", &request.description)?,
        parent_moment_id: request
            .parent_moment_id
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty()),
    };

    let response = run_blocking(&ctx, move |ctx| {
        let parent = match &moment.parent_moment_id {
            Some(id) => ctx.storage.get_moment(id)?,
            None => None,
        };
        let stored = ctx.storage.create_moment(&moment)?;
        let author = stored.user_id.as_str();

        let mut karma = ctx
            .karma
            .award_best_effort(author, KarmaAction::ImpactMomentCreated);
        if let Some(parent) = parent {
            if let Some(state) = ctx
                .karma
                .award_best_effort(author, KarmaAction::ImpactMomentJoined)
            {
                karma = Some(state);
            }
            if parent.user_id != author {
                ctx.karma
                    .award_best_effort(&parent.user_id, KarmaAction::ChainExtended);
            }
        }

        Ok(CreateMomentResponse {
            moment: stored,
            karma,
        })
    })
    .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Comment on a moment. The commenter earns `comment_posted` and the
/// moment's author `comment_received`, both best-effort.
pub async fn comment(
    State(ctx): State<Arc<AppContext>>,
    Path(moment_id): Path<String>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CreateCommentResponse>), ApiError> {
    let comment = NewComment {
        user_id: required_text("userId", &request.user_id)?,
        body: required_text("body", &request.body)?,
    };

    let response = run_blocking(&ctx, move |ctx| {
        let stored = ctx.storage.add_comment(&moment_id, &comment)?;
        let karma = ctx
            .karma
            .award_best_effort(&stored.user_id, KarmaAction::CommentPosted);

        match ctx.storage.get_moment(&moment_id) {
            Ok(Some(moment)) if moment.user_id != stored.user_id => {
                ctx.karma
                    .award_best_effort(&moment.user_id, KarmaAction::CommentReceived);
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(moment_id = %moment_id, error = %e, "comment_received skipped"),
        }

        Ok(CreateCommentResponse {
            comment: stored,
            karma,
        })
    })
    .await?;

    Ok((StatusCode::CREATED, Json(response)))
}
