//! citations table queries.

use chrono::NaiveDate;
use citemap_core::errors::StorageError;
use citemap_core::types::Citation;
use rusqlite::{params, Connection};

/// Insert one citation edge. Duplicate pairs are ignored.
pub fn insert_citation(conn: &Connection, citation: &Citation) -> Result<(), StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT OR IGNORE INTO citations (citing_id, cited_id) VALUES (?1, ?2)",
        )
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    stmt.execute(params![citation.citing_id, citation.cited_id])
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;
    Ok(())
}

/// Outgoing citations of `citing_id` whose targets sit in `court` and were
/// filed on or after `min_date`.
///
/// Ordered by target filing date then target id, both ascending. The
/// traversal depends on this order being stable so repeated runs visit
/// nodes identically.
pub fn authorities_of(
    conn: &Connection,
    citing_id: i64,
    court: &str,
    min_date: NaiveDate,
) -> Result<Vec<Citation>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT c.citing_id, c.cited_id
             FROM citations c
             JOIN clusters t ON t.id = c.cited_id
             WHERE c.citing_id = ?1
               AND t.court = ?2
               AND t.date_filed IS NOT NULL
               AND t.date_filed >= ?3
             ORDER BY t.date_filed ASC, t.id ASC",
        )
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    let rows = stmt
        .query_map(params![citing_id, court, min_date.to_string()], |row| {
            Ok(Citation {
                citing_id: row.get(0)?,
                cited_id: row.get(1)?,
            })
        })
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(|e| StorageError::QueryFailed { message: e.to_string() })?);
    }
    Ok(result)
}
