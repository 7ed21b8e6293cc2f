//! maps and map_clusters table queries.

use chrono::{DateTime, Utc};
use citemap_core::errors::StorageError;
use citemap_core::types::{CitationMap, OpinionCluster};
use rusqlite::{params, Connection, Row};

use super::clusters::{cluster_from_row, CLUSTER_COLUMNS};

fn map_from_row(row: &Row<'_>) -> rusqlite::Result<CitationMap> {
    Ok(CitationMap {
        id: row.get(0)?,
        cluster_start_id: row.get(1)?,
        cluster_end_id: row.get(2)?,
        title: row.get(3)?,
        subtitle: row.get(4)?,
        slug: row.get(5)?,
        notes: row.get(6)?,
        published: row.get(7)?,
        deleted: row.get(8)?,
        view_count: row.get(9)?,
        generation_time: row.get(10)?,
        date_created: parse_timestamp(11, &row.get::<_, String>(11)?)?,
        date_modified: parse_timestamp(12, &row.get::<_, String>(12)?)?,
    })
}

fn parse_timestamp(column: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}

/// Insert a new map and return it with its assigned id.
pub fn insert_map(conn: &Connection, map: &CitationMap) -> Result<CitationMap, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO maps
             (cluster_start_id, cluster_end_id, title, subtitle, slug, notes,
              published, deleted, view_count, generation_time,
              date_created, date_modified)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        )
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    stmt.execute(params![
        map.cluster_start_id,
        map.cluster_end_id,
        map.title,
        map.subtitle,
        map.slug,
        map.notes,
        map.published,
        map.deleted,
        map.view_count,
        map.generation_time,
        map.date_created.to_rfc3339(),
        map.date_modified.to_rfc3339(),
    ])
    .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    let mut saved = map.clone();
    saved.id = conn.last_insert_rowid();
    Ok(saved)
}

/// Fetch one map by id.
pub fn get_map(conn: &Connection, id: i64) -> Result<Option<CitationMap>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, cluster_start_id, cluster_end_id, title, subtitle, slug,
                    notes, published, deleted, view_count, generation_time,
                    date_created, date_modified
             FROM maps WHERE id = ?1",
        )
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    let mut rows = stmt
        .query_map(params![id], map_from_row)
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    match rows.next() {
        Some(row) => Ok(Some(
            row.map_err(|e| StorageError::QueryFailed { message: e.to_string() })?,
        )),
        None => Ok(None),
    }
}

/// Update every mutable field of an existing map.
pub fn update_map(conn: &Connection, map: &CitationMap) -> Result<(), StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "UPDATE maps SET
                 cluster_start_id = ?2, cluster_end_id = ?3, title = ?4,
                 subtitle = ?5, slug = ?6, notes = ?7, published = ?8,
                 deleted = ?9, view_count = ?10, generation_time = ?11,
                 date_modified = ?12
             WHERE id = ?1",
        )
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    let changed = stmt
        .execute(params![
            map.id,
            map.cluster_start_id,
            map.cluster_end_id,
            map.title,
            map.subtitle,
            map.slug,
            map.notes,
            map.published,
            map.deleted,
            map.view_count,
            map.generation_time,
            map.date_modified.to_rfc3339(),
        ])
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    if changed == 0 {
        return Err(StorageError::MapNotFound { id: map.id });
    }
    Ok(())
}

/// Associate clusters with a map, returning how many rows were new.
/// Already-present pairs are skipped by the composite primary key.
pub fn add_map_clusters(
    conn: &Connection,
    map_id: i64,
    cluster_ids: &[i64],
) -> Result<usize, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT OR IGNORE INTO map_clusters (map_id, cluster_id) VALUES (?1, ?2)",
        )
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    let mut inserted = 0;
    for &cluster_id in cluster_ids {
        inserted += stmt
            .execute(params![map_id, cluster_id])
            .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;
    }
    Ok(inserted)
}

/// All clusters associated with a map, ordered by filing date then id,
/// both ascending. Missing dates sort first.
pub fn map_clusters(
    conn: &Connection,
    map_id: i64,
) -> Result<Vec<OpinionCluster>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {CLUSTER_COLUMNS} FROM clusters
             WHERE id IN (SELECT cluster_id FROM map_clusters WHERE map_id = ?1)
             ORDER BY date_filed ASC, id ASC"
        ))
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    let rows = stmt
        .query_map(params![map_id], cluster_from_row)
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(|e| StorageError::QueryFailed { message: e.to_string() })?);
    }
    Ok(result)
}
