//! SQL for each table. Every function takes a borrowed connection so it can
//! run on the writer, inside a transaction, or on a pooled reader.

pub mod completions;
pub mod karma;
pub mod moments;
pub mod rituals;
pub mod users;

use chrono::{DateTime, Utc};
use rusqlite::types::Type;

/// Current time truncated to the millisecond precision stored on disk.
pub(crate) fn now_millis() -> (DateTime<Utc>, i64) {
    let ms = Utc::now().timestamp_millis();
    let at = DateTime::from_timestamp_millis(ms).unwrap_or_default();
    (at, ms)
}

/// Decode a stored epoch-millisecond timestamp.
pub(crate) fn timestamp_at(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let ms: i64 = row.get(idx)?;
    DateTime::from_timestamp_millis(ms).ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, ms))
}

/// Wrap a decode failure of column `idx`.
pub(crate) fn conversion_err<E>(idx: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}
