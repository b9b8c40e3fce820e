//! Column decoding helpers shared by the repositories.

use hbnb_domain::time::{self, Timestamp};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

pub(crate) fn decode_error<E>(err: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::Decode(Box::new(err))
}

/// Timestamps are stored as RFC 3339 text.
pub(crate) fn timestamp(row: &SqliteRow, column: &str) -> Result<Timestamp, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    time::from_text(&raw).map_err(decode_error)
}

pub(crate) fn count(value: i64) -> u64 {
    value.unsigned_abs()
}
