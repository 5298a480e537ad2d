//! v002: ritual definitions and completions.

pub const MIGRATION_SQL: &str = "
    CREATE TABLE IF NOT EXISTS rituals (
        id                TEXT PRIMARY KEY,
        name              TEXT NOT NULL,
        description       TEXT NOT NULL DEFAULT '',
        tags              TEXT NOT NULL DEFAULT '[]',
        category          TEXT,
        created_by        TEXT REFERENCES users(id) ON DELETE SET NULL,
        created_at        INTEGER NOT NULL,
        completion_count  INTEGER NOT NULL DEFAULT 0
    );

    CREATE INDEX IF NOT EXISTS idx_rituals_category ON rituals(category);

    CREATE TABLE IF NOT EXISTS ritual_completions (
        id                 TEXT PRIMARY KEY,
        user_id            TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        ritual_id          TEXT NOT NULL REFERENCES rituals(id) ON DELETE CASCADE,
        date               TEXT NOT NULL,
        completed_quietly  INTEGER NOT NULL,
        shared_moment_id   TEXT,
        created_at         INTEGER NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_completions_user_date
        ON ritual_completions(user_id, date);
";
