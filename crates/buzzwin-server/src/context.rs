//! Shared application state handed to every handler.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use chrono::{DateTime, NaiveDate, Utc};

use buzzwin_core::catalog_span;
use buzzwin_core::config::BuzzwinConfig;
use buzzwin_core::errors::{BuzzwinResult, StorageError};
use buzzwin_core::models::RitualDefinition;
use buzzwin_core::traits::IRitualStorage;
use buzzwin_core::TtlCache;
use buzzwin_karma::KarmaEngine;
use buzzwin_level::LevelEngine;
use buzzwin_stats::StatsEngine;
use buzzwin_storage::StorageEngine;

use crate::error::ApiError;

pub struct AppContext {
    pub config: BuzzwinConfig,
    pub storage: Arc<StorageEngine>,
    pub karma: KarmaEngine,
    pub levels: LevelEngine,
    pub stats: StatsEngine,
    catalog: Mutex<TtlCache<Vec<RitualDefinition>>>,
}

impl AppContext {
    /// Open storage per `config` and build the engines over it.
    pub fn new(config: BuzzwinConfig) -> BuzzwinResult<Self> {
        let storage = Arc::new(StorageEngine::from_config(&config.storage)?);
        Ok(Self::with_storage(config, storage))
    }

    pub fn with_storage(config: BuzzwinConfig, storage: Arc<StorageEngine>) -> Self {
        let ttl = Duration::from_secs(config.catalog.cache_ttl_secs);
        Self {
            karma: KarmaEngine::new(storage.clone()),
            levels: LevelEngine::new(),
            stats: StatsEngine::new(config.stats.clone()),
            catalog: Mutex::new(TtlCache::new(ttl)),
            storage,
            config,
        }
    }

    /// In-memory context with default config.
    pub fn in_memory() -> BuzzwinResult<Self> {
        Self::new(BuzzwinConfig::default())
    }

    /// The ritual catalog, served from cache while fresh.
    pub fn catalog(&self) -> BuzzwinResult<Vec<RitualDefinition>> {
        let mut cache = self.catalog.lock().map_err(|_| StorageError::SqliteError {
            message: "catalog cache lock poisoned".to_string(),
        })?;
        let now = Instant::now();
        let _span = catalog_span!(cache.is_fresh(now)).entered();
        cache.get_or_try_fetch(now, || self.storage.list_rituals())
    }

    /// Drop the cached catalog so the next read refetches.
    pub fn invalidate_catalog(&self) {
        if let Ok(mut cache) = self.catalog.lock() {
            cache.invalidate();
        }
    }

    /// The configured local calendar day at `now`.
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        self.stats.context_at(now).today
    }
}

/// Run a blocking storage operation off the async runtime.
pub async fn run_blocking<F, T>(ctx: &Arc<AppContext>, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&AppContext) -> BuzzwinResult<T> + Send + 'static,
    T: Send + 'static,
{
    let ctx = Arc::clone(ctx);
    tokio::task::spawn_blocking(move || f(&ctx))
        .await
        .map_err(|e| ApiError::internal(format!("blocking task failed: {e}")))?
        .map_err(ApiError::from)
}
