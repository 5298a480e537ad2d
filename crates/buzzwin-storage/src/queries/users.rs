//! Queries for the users table.

use rusqlite::{params, Connection, OptionalExtension};

use buzzwin_core::errors::BuzzwinResult;
use buzzwin_core::models::User;

use super::karma::karma_from_row;
use super::timestamp_at;
use crate::to_storage_err;

const USER_COLUMNS: &str = "id, display_name, created_at, karma_points, karma_impact_moments, \
     karma_rituals, karma_engagement, karma_chains, karma_milestones";

pub fn insert_user(
    conn: &Connection,
    id: &str,
    display_name: &str,
    created_at_ms: i64,
) -> BuzzwinResult<()> {
    conn.execute(
        "INSERT INTO users (id, display_name, created_at) VALUES (?1, ?2, ?3)",
        params![id, display_name, created_at_ms],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_user(conn: &Connection, id: &str) -> BuzzwinResult<Option<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1");
    let mut stmt = conn
        .prepare_cached(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    stmt.query_row(params![id], |row| {
        Ok(User {
            id: row.get(0)?,
            display_name: row.get(1)?,
            created_at: timestamp_at(row, 2)?,
            karma: karma_from_row(row, 3)?,
        })
    })
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn user_exists(conn: &Connection, id: &str) -> BuzzwinResult<bool> {
    let mut stmt = conn
        .prepare_cached("SELECT 1 FROM users WHERE id = ?1")
        .map_err(|e| to_storage_err(e.to_string()))?;
    stmt.exists(params![id])
        .map_err(|e| to_storage_err(e.to_string()))
}
