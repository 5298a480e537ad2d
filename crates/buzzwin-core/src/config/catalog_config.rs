use serde::{Deserialize, Serialize};

use super::defaults;

/// Ritual catalog configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// How long a fetched ritual catalog is served before refetching.
    pub cache_ttl_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: defaults::DEFAULT_CATALOG_CACHE_TTL_SECS,
        }
    }
}
