//! v003: impact moments, comments, and the karma ledger.

pub const MIGRATION_SQL: &str = "
    CREATE TABLE IF NOT EXISTS impact_moments (
        id                TEXT PRIMARY KEY,
        user_id           TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        title             TEXT NOT NULL,
        description       TEXT NOT NULL DEFAULT '',
        parent_moment_id  TEXT REFERENCES impact_moments(id) ON DELETE SET NULL,
        created_at        INTEGER NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_moments_parent ON impact_moments(parent_moment_id);

    CREATE TABLE IF NOT EXISTS comments (
        id          TEXT PRIMARY KEY,
        moment_id   TEXT NOT NULL REFERENCES impact_moments(id) ON DELETE CASCADE,
        user_id     TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        body        TEXT NOT NULL,
        created_at  INTEGER NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_comments_moment ON comments(moment_id);

    CREATE TABLE IF NOT EXISTS karma_events (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id     TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        action      TEXT NOT NULL,
        bucket      TEXT NOT NULL,
        points      INTEGER NOT NULL,
        awarded_at  INTEGER NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_karma_events_user ON karma_events(user_id, id);
";
