//! Queries for the rituals table.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use buzzwin_core::errors::BuzzwinResult;
use buzzwin_core::models::{NewRitualDefinition, RitualDefinition};

use super::{conversion_err, timestamp_at};
use crate::to_storage_err;

const RITUAL_COLUMNS: &str =
    "id, name, description, tags, category, created_by, created_at, completion_count";

pub fn insert_ritual(
    conn: &Connection,
    ritual: &NewRitualDefinition,
    created_at: DateTime<Utc>,
) -> BuzzwinResult<RitualDefinition> {
    let tags = serde_json::to_string(&ritual.tags)?;
    conn.execute(
        "INSERT INTO rituals (id, name, description, tags, category, created_by, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            ritual.id,
            ritual.name,
            ritual.description,
            tags,
            ritual.category,
            ritual.created_by,
            created_at.timestamp_millis(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(RitualDefinition {
        id: ritual.id.clone(),
        name: ritual.name.clone(),
        description: ritual.description.clone(),
        tags: ritual.tags.clone(),
        category: ritual.category.clone(),
        created_by: ritual.created_by.clone(),
        created_at,
        completion_count: 0,
    })
}

pub fn get_ritual(conn: &Connection, id: &str) -> BuzzwinResult<Option<RitualDefinition>> {
    let sql = format!("SELECT {RITUAL_COLUMNS} FROM rituals WHERE id = ?1");
    let mut stmt = conn
        .prepare_cached(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    stmt.query_row(params![id], row_to_ritual)
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn ritual_exists(conn: &Connection, id: &str) -> BuzzwinResult<bool> {
    let mut stmt = conn
        .prepare_cached("SELECT 1 FROM rituals WHERE id = ?1")
        .map_err(|e| to_storage_err(e.to_string()))?;
    stmt.exists(params![id])
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Every ritual, in insertion order.
pub fn list_rituals(conn: &Connection) -> BuzzwinResult<Vec<RitualDefinition>> {
    let sql = format!("SELECT {RITUAL_COLUMNS} FROM rituals ORDER BY rowid");
    let mut stmt = conn
        .prepare_cached(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], row_to_ritual)
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn increment_completion_count(conn: &Connection, id: &str) -> BuzzwinResult<()> {
    let mut stmt = conn
        .prepare_cached("UPDATE rituals SET completion_count = completion_count + 1 WHERE id = ?1")
        .map_err(|e| to_storage_err(e.to_string()))?;
    stmt.execute(params![id])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

fn row_to_ritual(row: &Row<'_>) -> rusqlite::Result<RitualDefinition> {
    let tags: String = row.get(3)?;
    let completion_count: i64 = row.get(7)?;
    Ok(RitualDefinition {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        tags: serde_json::from_str(&tags).map_err(|e| conversion_err(3, e))?,
        category: row.get(4)?,
        created_by: row.get(5)?,
        created_at: timestamp_at(row, 6)?,
        completion_count: completion_count.max(0) as u64,
    })
}
