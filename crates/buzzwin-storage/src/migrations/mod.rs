//! Schema migrations keyed on `PRAGMA user_version`.

pub mod v001_users;
pub mod v002_rituals;
pub mod v003_moments_and_ledger;

use rusqlite::Connection;

use buzzwin_core::errors::{BuzzwinResult, StorageError};

/// Highest schema version this build knows about.
pub const LATEST_VERSION: u32 = 3;

const MIGRATIONS: &[(&str, u32)] = &[
    (v001_users::MIGRATION_SQL, 1),
    (v002_rituals::MIGRATION_SQL, 2),
    (v003_moments_and_ledger::MIGRATION_SQL, 3),
];

/// Apply every migration newer than the database's current version.
pub fn run_migrations(conn: &Connection) -> BuzzwinResult<()> {
    let current = current_version(conn)?;

    for (sql, version) in MIGRATIONS {
        if current >= *version {
            continue;
        }
        conn.execute_batch(sql)
            .map_err(|e| StorageError::MigrationFailed {
                version: *version,
                message: e.to_string(),
            })?;
        conn.pragma_update(None, "user_version", version)
            .map_err(|e| StorageError::MigrationFailed {
                version: *version,
                message: e.to_string(),
            })?;
        tracing::info!(version, "applied migration");
    }
    Ok(())
}

/// Current schema version.
pub fn current_version(conn: &Connection) -> BuzzwinResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| {
            StorageError::MigrationFailed {
                version: 0,
                message: e.to_string(),
            }
            .into()
        })
}
