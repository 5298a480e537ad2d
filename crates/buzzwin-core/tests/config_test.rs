//! Tests for the Buzzwin configuration system.

use std::path::PathBuf;
use std::sync::Mutex;

use buzzwin_core::config::{BuzzwinConfig, CliOverrides, WeekStart};
use buzzwin_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ENV_KEYS: [&str; 8] = [
    "BUZZWIN_BIND_ADDR",
    "BUZZWIN_MAX_BODY_BYTES",
    "BUZZWIN_DB_PATH",
    "BUZZWIN_READ_POOL_SIZE",
    "BUZZWIN_WEEK_STARTS_ON",
    "BUZZWIN_UTC_OFFSET_MINUTES",
    "BUZZWIN_TOP_TAGS",
    "BUZZWIN_CATALOG_CACHE_TTL_SECS",
];

fn clear_env() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}

#[test]
fn defaults_are_valid() {
    let config = BuzzwinConfig::default();
    BuzzwinConfig::validate(&config).unwrap();
    assert_eq!(config.server.bind_addr, "127.0.0.1:8787");
    assert_eq!(config.storage.db_path, None);
    assert_eq!(config.stats.week_starts_on, WeekStart::Sunday);
    assert_eq!(config.stats.top_tags, 5);
    assert_eq!(config.stats.max_backfill_days, 7);
    assert_eq!(config.catalog.cache_ttl_secs, 300);
}

#[test]
fn partial_toml_keeps_defaults_for_missing_keys() {
    let config = BuzzwinConfig::from_toml(
        r#"
[stats]
week_starts_on = "monday"
top_tags = 3
"#,
    )
    .unwrap();
    assert_eq!(config.stats.week_starts_on, WeekStart::Monday);
    assert_eq!(config.stats.top_tags, 3);
    assert_eq!(config.stats.utc_offset_minutes, 0);
    assert_eq!(config.storage.read_pool_size, 4);
}

#[test]
fn invalid_toml_is_parse_error() {
    let err = BuzzwinConfig::from_toml("[stats\ntop_tags = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn layered_resolution_cli_over_env_over_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("buzzwin.toml");
    std::fs::write(
        &path,
        r#"
[server]
bind_addr = "0.0.0.0:9000"

[storage]
db_path = "/var/lib/buzzwin/file.db"
read_pool_size = 2

[stats]
top_tags = 7
"#,
    )
    .unwrap();

    std::env::set_var("BUZZWIN_BIND_ADDR", "0.0.0.0:9100");
    std::env::set_var("BUZZWIN_TOP_TAGS", "9");

    let cli = CliOverrides {
        bind_addr: Some("127.0.0.1:9200".to_string()),
        ..Default::default()
    };
    let config = BuzzwinConfig::load(Some(&path), Some(&cli)).unwrap();
    clear_env();

    assert_eq!(config.server.bind_addr, "127.0.0.1:9200");
    assert_eq!(config.stats.top_tags, 9);
    assert_eq!(config.storage.read_pool_size, 2);
    assert_eq!(
        config.storage.db_path,
        Some(PathBuf::from("/var/lib/buzzwin/file.db"))
    );
}

#[test]
fn cli_in_memory_clears_db_path() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    std::env::set_var("BUZZWIN_DB_PATH", "/tmp/buzzwin.db");

    let cli = CliOverrides {
        in_memory: true,
        ..Default::default()
    };
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("empty.toml");
    std::fs::write(&path, "").unwrap();

    let config = BuzzwinConfig::load(Some(&path), Some(&cli)).unwrap();
    clear_env();
    assert_eq!(config.storage.db_path, None);
}

#[test]
fn explicit_missing_file_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let err = BuzzwinConfig::load(Some(std::path::Path::new("/nonexistent/buzzwin.toml")), None)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Unreadable { .. }));
}

#[test]
fn malformed_env_value_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    std::env::set_var("BUZZWIN_READ_POOL_SIZE", "many");
    let mut config = BuzzwinConfig::default();
    let err = config.apply_env_overrides().unwrap_err();
    clear_env();
    assert!(matches!(err, ConfigError::BadEnvValue { ref field, .. } if field == "BUZZWIN_READ_POOL_SIZE"));
}

#[test]
fn validation_rejects_out_of_range_values() {
    let mut config = BuzzwinConfig::default();
    config.storage.read_pool_size = 9;
    assert!(matches!(
        BuzzwinConfig::validate(&config),
        Err(ConfigError::OutOfRange { ref field, .. }) if field == "storage.read_pool_size"
    ));

    let mut config = BuzzwinConfig::default();
    config.stats.top_tags = 0;
    assert!(BuzzwinConfig::validate(&config).is_err());

    let mut config = BuzzwinConfig::default();
    config.stats.utc_offset_minutes = 15 * 60;
    assert!(BuzzwinConfig::validate(&config).is_err());
}
