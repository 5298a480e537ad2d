//! # buzzwin-server
//!
//! axum HTTP service over the karma, level, and stats engines.

pub mod context;
pub mod error;
pub mod routes;
pub mod types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub use context::AppContext;
pub use error::{ApiError, ApiResult};

/// Build the API router.
pub fn router(ctx: Arc<AppContext>) -> Router {
    let max_body = ctx.config.server.max_body_bytes;
    Router::new()
        .route("/health", get(routes::health::health))
        // Users
        .route("/api/users", post(routes::users::create))
        .route("/api/users/{user_id}", get(routes::users::get))
        // Karma
        .route("/api/karma/award", post(routes::karma::award))
        .route("/api/karma/{user_id}", get(routes::karma::get))
        .route("/api/karma/{user_id}/history", get(routes::karma::history))
        // Level & stats
        .route("/api/level/{user_id}", get(routes::level::get))
        .route("/api/stats/{user_id}", get(routes::stats::get))
        // Rituals
        .route(
            "/api/rituals",
            get(routes::rituals::list).post(routes::rituals::create),
        )
        .route(
            "/api/users/{user_id}/completions",
            post(routes::completions::record),
        )
        // Impact moments
        .route("/api/moments", post(routes::moments::create))
        .route(
            "/api/moments/{moment_id}/comments",
            post(routes::moments::comment),
        )
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(max_body))
        .with_state(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_builds() {
        let ctx = Arc::new(AppContext::in_memory().unwrap());
        let _router = router(ctx);
    }
}
