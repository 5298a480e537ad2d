//! Queries for the ritual_completions table.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

use buzzwin_core::errors::BuzzwinResult;
use buzzwin_core::models::{day_key, NewRitualCompletion, RitualCompletion};

use super::timestamp_at;
use crate::to_storage_err;

pub fn insert_completion(
    conn: &Connection,
    id: &str,
    completion: &NewRitualCompletion,
    created_at: DateTime<Utc>,
) -> BuzzwinResult<RitualCompletion> {
    let date = day_key(completion.date);
    conn.execute(
        "INSERT INTO ritual_completions
            (id, user_id, ritual_id, date, completed_quietly, shared_moment_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            id,
            completion.user_id,
            completion.ritual_id,
            date,
            completion.completed_quietly,
            completion.shared_moment_id,
            created_at.timestamp_millis(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(RitualCompletion {
        id: id.to_string(),
        user_id: completion.user_id.clone(),
        ritual_id: completion.ritual_id.clone(),
        date,
        completed_quietly: completion.completed_quietly,
        shared_moment_id: completion.shared_moment_id.clone(),
        created_at,
    })
}

/// All completions of one user, oldest day first.
pub fn completions_for_user(conn: &Connection, user_id: &str) -> BuzzwinResult<Vec<RitualCompletion>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, user_id, ritual_id, date, completed_quietly, shared_moment_id, created_at
             FROM ritual_completions WHERE user_id = ?1
             ORDER BY date ASC, created_at ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![user_id], row_to_completion)
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn count_on_day(conn: &Connection, user_id: &str, day_key: &str) -> BuzzwinResult<u32> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT COUNT(*) FROM ritual_completions WHERE user_id = ?1 AND date = ?2",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    stmt.query_row(params![user_id, day_key], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

fn row_to_completion(row: &Row<'_>) -> rusqlite::Result<RitualCompletion> {
    Ok(RitualCompletion {
        id: row.get(0)?,
        user_id: row.get(1)?,
        ritual_id: row.get(2)?,
        date: row.get(3)?,
        completed_quietly: row.get(4)?,
        shared_moment_id: row.get(5)?,
        created_at: timestamp_at(row, 6)?,
    })
}
