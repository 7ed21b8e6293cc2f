//! report_versions table queries.

use chrono::Utc;
use citemap_core::errors::StorageError;
use rusqlite::{params, Connection};

/// Append one serialized report for a map and return its version id.
pub fn insert_report_version(
    conn: &Connection,
    map_id: i64,
    json_data: &str,
) -> Result<i64, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO report_versions (map_id, date_created, json_data)
             VALUES (?1, ?2, ?3)",
        )
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    stmt.execute(params![map_id, Utc::now().to_rfc3339(), json_data])
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;
    Ok(conn.last_insert_rowid())
}

/// The most recently archived report for a map, if any.
pub fn latest_report_version(
    conn: &Connection,
    map_id: i64,
) -> Result<Option<String>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT json_data FROM report_versions
             WHERE map_id = ?1 ORDER BY id DESC LIMIT 1",
        )
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    let mut rows = stmt
        .query_map(params![map_id], |row| row.get::<_, String>(0))
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    match rows.next() {
        Some(row) => Ok(Some(
            row.map_err(|e| StorageError::QueryFailed { message: e.to_string() })?,
        )),
        None => Ok(None),
    }
}

/// How many report versions a map has archived.
pub fn count_report_versions(conn: &Connection, map_id: i64) -> Result<i64, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM report_versions WHERE map_id = ?1",
        params![map_id],
        |row| row.get(0),
    )
    .map_err(|e| StorageError::QueryFailed { message: e.to_string() })
}
