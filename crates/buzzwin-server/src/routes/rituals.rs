use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use buzzwin_core::models::{KarmaAction, NewRitualDefinition, RitualDefinition};
use buzzwin_core::traits::IRitualStorage;
use buzzwin_stats::{filter_and_sort, RitualFilter, RitualSort};

use super::{optional_text, required_text};
use crate::context::{run_blocking, AppContext};
use crate::error::{ApiError, ApiResult};
use crate::types::{CreateRitualRequest, RitualQuery};

/// Define a ritual. A user-created ritual earns its creator `ritual_created`.
pub async fn create(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<CreateRitualRequest>,
) -> Result<(StatusCode, Json<RitualDefinition>), ApiError> {
    let id = match request.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => Uuid::new_v4().to_string(),
    };
    let definition = NewRitualDefinition {
        id,
        name: required_text("name", &request.name)?,
        description: optional_text("description", &request.description)?,
        tags: normalize_tags(&request.tags),
        category: request
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty()),
        created_by: request
            .created_by
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty()),
    };

    let ritual = run_blocking(&ctx, move |ctx| {
        let ritual = ctx.storage.create_ritual(&definition)?;
        ctx.invalidate_catalog();
        if let Some(creator) = &ritual.created_by {
            ctx.karma.award_best_effort(creator, KarmaAction::RitualCreated);
        }
        Ok(ritual)
    })
    .await?;

    tracing::info!(ritual_id = %ritual.id, "ritual created");
    Ok((StatusCode::CREATED, Json(ritual)))
}

/// Trimmed, non-empty tags with repeats removed, first occurrence kept.
fn normalize_tags(raw: &[String]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(raw.len());
    for tag in raw.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// The ritual catalog, filtered and sorted.
pub async fn list(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<RitualQuery>,
) -> ApiResult<Vec<RitualDefinition>> {
    let sort = match query.sort.as_deref().map(str::trim) {
        None | Some("") => RitualSort::default(),
        Some(raw) => raw.parse::<RitualSort>().map_err(ApiError::from)?,
    };
    let filter = RitualFilter {
        tag: query.tag,
        category: query.category,
        search: query.search,
    };

    let catalog = run_blocking(&ctx, |ctx| ctx.catalog()).await?;
    Ok(Json(filter_and_sort(&catalog, &filter, sort)))
}
