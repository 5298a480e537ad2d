//! Configuration system for Buzzwin.
//! TOML-based, layered resolution: CLI > env > config file > defaults.

pub mod buzzwin_config;
pub mod catalog_config;
pub mod server_config;
pub mod stats_config;
pub mod storage_config;

pub use buzzwin_config::{BuzzwinConfig, CliOverrides};
pub use catalog_config::CatalogConfig;
pub use server_config::ServerConfig;
pub use stats_config::{StatsConfig, WeekStart};
pub use storage_config::StorageConfig;

pub(crate) mod defaults {
    pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";
    pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
    pub const DEFAULT_READ_POOL_SIZE: usize = 4;
    pub const DEFAULT_TOP_TAGS: usize = 5;
    pub const DEFAULT_MAX_BACKFILL_DAYS: u32 = 7;
    pub const DEFAULT_CATALOG_CACHE_TTL_SECS: u64 = 300;
}
