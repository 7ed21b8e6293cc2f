//! clusters table queries.

use chrono::NaiveDate;
use citemap_core::errors::StorageError;
use citemap_core::types::OpinionCluster;
use rusqlite::{params, Connection, Row};

/// Columns selected by every cluster read, in `cluster_from_row` order.
pub(crate) const CLUSTER_COLUMNS: &str = "id, court, date_filed, case_name_short, \
     case_name, case_name_full, slug, decision_direction, votes_majority, votes_minority";

/// Map one `CLUSTER_COLUMNS` row to an [`OpinionCluster`].
pub(crate) fn cluster_from_row(row: &Row<'_>) -> rusqlite::Result<OpinionCluster> {
    let date_filed = match row.get::<_, Option<String>>(2)? {
        Some(raw) => Some(parse_date(2, &raw)?),
        None => None,
    };
    Ok(OpinionCluster {
        id: row.get(0)?,
        court: row.get(1)?,
        date_filed,
        case_name_short: row.get(3)?,
        case_name: row.get(4)?,
        case_name_full: row.get(5)?,
        slug: row.get(6)?,
        decision_direction: row.get(7)?,
        votes_majority: row.get(8)?,
        votes_minority: row.get(9)?,
    })
}

fn parse_date(column: usize, raw: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            rusqlite::types::Type::Text,
            Box::new(e),
        )
    })
}

/// Insert or replace one cluster.
pub fn upsert_cluster(conn: &Connection, cluster: &OpinionCluster) -> Result<(), StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT OR REPLACE INTO clusters
             (id, court, date_filed, case_name_short, case_name, case_name_full,
              slug, decision_direction, votes_majority, votes_minority)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    stmt.execute(params![
        cluster.id,
        cluster.court,
        cluster.date_filed.map(|d| d.to_string()),
        cluster.case_name_short,
        cluster.case_name,
        cluster.case_name_full,
        cluster.slug,
        cluster.decision_direction,
        cluster.votes_majority,
        cluster.votes_minority,
    ])
    .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;
    Ok(())
}

/// Fetch one cluster by id.
pub fn get_cluster(conn: &Connection, id: i64) -> Result<Option<OpinionCluster>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {CLUSTER_COLUMNS} FROM clusters WHERE id = ?1"
        ))
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    let mut rows = stmt
        .query_map(params![id], cluster_from_row)
        .map_err(|e| StorageError::QueryFailed { message: e.to_string() })?;

    match rows.next() {
        Some(row) => Ok(Some(
            row.map_err(|e| StorageError::QueryFailed { message: e.to_string() })?,
        )),
        None => Ok(None),
    }
}
