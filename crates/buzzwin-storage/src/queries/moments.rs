//! Queries for impact_moments and comments.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use buzzwin_core::errors::BuzzwinResult;
use buzzwin_core::models::{Comment, ImpactMoment, NewComment, NewImpactMoment};

use super::timestamp_at;
use crate::to_storage_err;

pub fn insert_moment(
    conn: &Connection,
    id: &str,
    moment: &NewImpactMoment,
    created_at: DateTime<Utc>,
) -> BuzzwinResult<ImpactMoment> {
    conn.execute(
        "INSERT INTO impact_moments (id, user_id, title, description, parent_moment_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            id,
            moment.user_id,
            moment.title,
            moment.description,
            moment.parent_moment_id,
            created_at.timestamp_millis(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(ImpactMoment {
        id: id.to_string(),
        user_id: moment.user_id.clone(),
        title: moment.title.clone(),
        description: moment.description.clone(),
        parent_moment_id: moment.parent_moment_id.clone(),
        created_at,
    })
}

pub fn get_moment(conn: &Connection, id: &str) -> BuzzwinResult<Option<ImpactMoment>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, user_id, title, description, parent_moment_id, created_at
             FROM impact_moments WHERE id = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    stmt.query_row(params![id], |row| {
        Ok(ImpactMoment {
            id: row.get(0)?,
            user_id: row.get(1)?,
            title: row.get(2)?,
            description: row.get(3)?,
            parent_moment_id: row.get(4)?,
            created_at: timestamp_at(row, 5)?,
        })
    })
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn insert_comment(
    conn: &Connection,
    id: &str,
    moment_id: &str,
    comment: &NewComment,
    created_at: DateTime<Utc>,
) -> BuzzwinResult<Comment> {
    conn.execute(
        "INSERT INTO comments (id, moment_id, user_id, body, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            id,
            moment_id,
            comment.user_id,
            comment.body,
            created_at.timestamp_millis(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(Comment {
        id: id.to_string(),
        moment_id: moment_id.to_string(),
        user_id: comment.user_id.clone(),
        body: comment.body.clone(),
        created_at,
    })
}

pub fn count_comments(conn: &Connection, moment_id: &str) -> BuzzwinResult<u32> {
    conn.query_row(
        "SELECT COUNT(*) FROM comments WHERE moment_id = ?1",
        params![moment_id],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
