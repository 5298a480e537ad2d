//! v001: users with karma total and per-bucket columns.

pub const MIGRATION_SQL: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id                    TEXT PRIMARY KEY,
        display_name          TEXT NOT NULL,
        created_at            INTEGER NOT NULL,
        karma_points          INTEGER NOT NULL DEFAULT 0,
        karma_impact_moments  INTEGER NOT NULL DEFAULT 0,
        karma_rituals         INTEGER NOT NULL DEFAULT 0,
        karma_engagement      INTEGER NOT NULL DEFAULT 0,
        karma_chains          INTEGER NOT NULL DEFAULT 0,
        karma_milestones      INTEGER NOT NULL DEFAULT 0
    );
";
