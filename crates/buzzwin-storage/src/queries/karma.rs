//! Karma totals on the users table and the karma_events ledger.

use rusqlite::{params, Connection, OptionalExtension};

use buzzwin_core::errors::BuzzwinResult;
use buzzwin_core::models::{KarmaAction, KarmaBreakdown, KarmaBucket, KarmaEvent, UserKarmaState};

use super::{conversion_err, timestamp_at};
use crate::to_storage_err;

/// Column holding one bucket on the users table.
pub fn bucket_column(bucket: KarmaBucket) -> &'static str {
    match bucket {
        KarmaBucket::ImpactMoments => "karma_impact_moments",
        KarmaBucket::Rituals => "karma_rituals",
        KarmaBucket::Engagement => "karma_engagement",
        KarmaBucket::Chains => "karma_chains",
        KarmaBucket::Milestones => "karma_milestones",
    }
}

/// Add `points` to the total and to one bucket in a single statement.
/// Returns the number of rows touched (0 when the user is absent).
pub fn increment_karma(
    conn: &Connection,
    user_id: &str,
    bucket: KarmaBucket,
    points: i64,
) -> BuzzwinResult<usize> {
    let column = bucket_column(bucket);
    let sql = format!(
        "UPDATE users SET karma_points = karma_points + ?1, {column} = {column} + ?1 WHERE id = ?2"
    );
    let mut stmt = conn
        .prepare_cached(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    stmt.execute(params![points, user_id])
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Append one ledger row. Returns its id.
pub fn insert_event(
    conn: &Connection,
    user_id: &str,
    action: KarmaAction,
    bucket: KarmaBucket,
    points: i64,
    awarded_at_ms: i64,
) -> BuzzwinResult<i64> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO karma_events (user_id, action, bucket, points, awarded_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    stmt.execute(params![
        user_id,
        action.as_str(),
        bucket.as_str(),
        points,
        awarded_at_ms
    ])
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

pub fn get_karma(conn: &Connection, user_id: &str) -> BuzzwinResult<Option<UserKarmaState>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT karma_points, karma_impact_moments, karma_rituals, karma_engagement,
                    karma_chains, karma_milestones
             FROM users WHERE id = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    stmt.query_row(params![user_id], |row| karma_from_row(row, 0))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Most recent ledger events for a user, newest first.
pub fn recent_events(
    conn: &Connection,
    user_id: &str,
    limit: usize,
) -> BuzzwinResult<Vec<KarmaEvent>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, user_id, action, bucket, points, awarded_at
             FROM karma_events WHERE user_id = ?1
             ORDER BY id DESC LIMIT ?2",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![user_id, limit as i64], |row| {
            let action: String = row.get(2)?;
            let bucket: String = row.get(3)?;
            Ok(KarmaEvent {
                id: row.get(0)?,
                user_id: row.get(1)?,
                action: action
                    .parse::<KarmaAction>()
                    .map_err(|e| conversion_err(2, e))?,
                bucket: bucket
                    .parse::<KarmaBucket>()
                    .map_err(|e| conversion_err(3, e))?,
                points: row.get(4)?,
                awarded_at: timestamp_at(row, 5)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Read a karma state from six consecutive columns starting at `offset`:
/// total, then the buckets in `KarmaBucket::ALL` order.
pub(crate) fn karma_from_row(
    row: &rusqlite::Row<'_>,
    offset: usize,
) -> rusqlite::Result<UserKarmaState> {
    Ok(UserKarmaState {
        karma_points: row.get(offset)?,
        karma_breakdown: KarmaBreakdown {
            impact_moments: row.get(offset + 1)?,
            rituals: row.get(offset + 2)?,
            engagement: row.get(offset + 3)?,
            chains: row.get(offset + 4)?,
            milestones: row.get(offset + 5)?,
        },
    })
}
