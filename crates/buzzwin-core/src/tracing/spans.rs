//! Span definitions per operation: award, level, stats, catalog.

/// Create a karma award span.
#[macro_export]
macro_rules! award_span {
    ($user_id:expr, $action:expr) => {
        tracing::info_span!("buzzwin.award", user_id = %$user_id, action = %$action)
    };
}

/// Create a level computation span.
#[macro_export]
macro_rules! level_span {
    ($user_id:expr) => {
        tracing::debug_span!("buzzwin.level", user_id = %$user_id)
    };
}

/// Create a stats computation span.
#[macro_export]
macro_rules! stats_span {
    ($user_id:expr, $completion_count:expr) => {
        tracing::info_span!(
            "buzzwin.stats",
            user_id = %$user_id,
            completion_count = $completion_count
        )
    };
}

/// Create a catalog fetch span.
#[macro_export]
macro_rules! catalog_span {
    ($cached:expr) => {
        tracing::debug_span!("buzzwin.catalog", cached = $cached)
    };
}
