//! Top-level Buzzwin configuration with layered resolution.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CatalogConfig, ServerConfig, StatsConfig, StorageConfig, WeekStart};
use crate::errors::ConfigError;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "buzzwin.toml";

/// Largest accepted UTC offset (14 hours, in minutes).
const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`BUZZWIN_*`)
/// 3. Config file (`--config` path, or `buzzwin.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BuzzwinConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub stats: StatsConfig,
    pub catalog: CatalogConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_addr: Option<String>,
    pub db_path: Option<PathBuf>,
    pub in_memory: bool,
}

impl BuzzwinConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `config_path` must exist; the implicit `buzzwin.toml`
    /// is optional.
    pub fn load(
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let implicit = Path::new(DEFAULT_CONFIG_FILE);
                if implicit.exists() {
                    Self::from_file(implicit)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides()?;

        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `BUZZWIN_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(addr) = env_var("BUZZWIN_BIND_ADDR") {
            self.server.bind_addr = addr;
        }
        if let Some(bytes) = env_parse::<usize>("BUZZWIN_MAX_BODY_BYTES")? {
            self.server.max_body_bytes = bytes;
        }
        if let Some(path) = env_var("BUZZWIN_DB_PATH") {
            self.storage.db_path = Some(PathBuf::from(path));
        }
        if let Some(size) = env_parse::<usize>("BUZZWIN_READ_POOL_SIZE")? {
            self.storage.read_pool_size = size;
        }
        if let Some(start) = env_var("BUZZWIN_WEEK_STARTS_ON") {
            self.stats.week_starts_on = match start.to_ascii_lowercase().as_str() {
                "sunday" => WeekStart::Sunday,
                "monday" => WeekStart::Monday,
                other => {
                    return Err(ConfigError::BadEnvValue {
                        field: "BUZZWIN_WEEK_STARTS_ON".to_string(),
                        message: format!("expected sunday or monday, got {other}"),
                    })
                }
            };
        }
        if let Some(offset) = env_parse::<i32>("BUZZWIN_UTC_OFFSET_MINUTES")? {
            self.stats.utc_offset_minutes = offset;
        }
        if let Some(top) = env_parse::<usize>("BUZZWIN_TOP_TAGS")? {
            self.stats.top_tags = top;
        }
        if let Some(days) = env_parse::<u32>("BUZZWIN_MAX_BACKFILL_DAYS")? {
            self.stats.max_backfill_days = days;
        }
        if let Some(ttl) = env_parse::<u64>("BUZZWIN_CATALOG_CACHE_TTL_SECS")? {
            self.catalog.cache_ttl_secs = ttl;
        }
        Ok(())
    }

    /// Apply CLI flags. `in_memory` wins over any configured database path.
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(addr) = &cli.bind_addr {
            self.server.bind_addr = addr.clone();
        }
        if let Some(path) = &cli.db_path {
            self.storage.db_path = Some(path.clone());
        }
        if cli.in_memory {
            self.storage.db_path = None;
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &BuzzwinConfig) -> Result<(), ConfigError> {
        if config.server.bind_addr.trim().is_empty() {
            return Err(ConfigError::OutOfRange {
                field: "server.bind_addr".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if config.server.max_body_bytes == 0 {
            return Err(ConfigError::OutOfRange {
                field: "server.max_body_bytes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !(1..=8).contains(&config.storage.read_pool_size) {
            return Err(ConfigError::OutOfRange {
                field: "storage.read_pool_size".to_string(),
                message: "must be between 1 and 8".to_string(),
            });
        }
        if config.stats.top_tags == 0 {
            return Err(ConfigError::OutOfRange {
                field: "stats.top_tags".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.stats.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(ConfigError::OutOfRange {
                field: "stats.utc_offset_minutes".to_string(),
                message: "must be within +/- 14 hours".to_string(),
            });
        }
        Ok(())
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env_var(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::BadEnvValue {
                field: key.to_string(),
                message: e.to_string(),
            }),
    }
}
