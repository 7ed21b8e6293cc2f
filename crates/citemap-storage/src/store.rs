//! SqliteStore: owns the [`Database`] and implements the core storage
//! traits consumed by the graph engine.

use std::path::Path;

use chrono::NaiveDate;

use citemap_core::errors::CitemapResult;
use citemap_core::traits::{IClusterStore, IMapStore};
use citemap_core::types::{Citation, CitationMap, OpinionCluster};

use crate::connection::Database;
use crate::queries;

/// SQLite-backed store for clusters, citations, maps, and report versions.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Open a store backed by a file on disk.
    pub fn open(path: &Path) -> CitemapResult<Self> {
        Ok(Self {
            db: Database::open(path)?,
        })
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> CitemapResult<Self> {
        Ok(Self {
            db: Database::open_in_memory()?,
        })
    }

    /// Access the underlying database (for maintenance operations).
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Insert or replace one cluster. Ingest-side helper; the traversal
    /// itself never writes clusters.
    pub fn upsert_cluster(&self, cluster: &OpinionCluster) -> CitemapResult<()> {
        self.db
            .with_conn(|conn| queries::clusters::upsert_cluster(conn, cluster))?;
        Ok(())
    }

    /// Insert one citation edge. Duplicate pairs are ignored.
    pub fn insert_citation(&self, citation: &Citation) -> CitemapResult<()> {
        self.db
            .with_conn(|conn| queries::citations::insert_citation(conn, citation))?;
        Ok(())
    }

    /// How many report versions a map has archived.
    pub fn count_report_versions(&self, map_id: i64) -> CitemapResult<i64> {
        Ok(self
            .db
            .with_conn(|conn| queries::reports::count_report_versions(conn, map_id))?)
    }
}

impl IClusterStore for SqliteStore {
    fn get_cluster(&self, id: i64) -> CitemapResult<Option<OpinionCluster>> {
        Ok(self
            .db
            .with_conn(|conn| queries::clusters::get_cluster(conn, id))?)
    }

    fn authorities_of(
        &self,
        citing_id: i64,
        court: &str,
        min_date: NaiveDate,
    ) -> CitemapResult<Vec<Citation>> {
        Ok(self.db.with_conn(|conn| {
            queries::citations::authorities_of(conn, citing_id, court, min_date)
        })?)
    }
}

impl IMapStore for SqliteStore {
    fn insert_map(&self, map: &CitationMap) -> CitemapResult<CitationMap> {
        Ok(self
            .db
            .with_conn(|conn| queries::maps::insert_map(conn, map))?)
    }

    fn get_map(&self, id: i64) -> CitemapResult<Option<CitationMap>> {
        Ok(self.db.with_conn(|conn| queries::maps::get_map(conn, id))?)
    }

    fn update_map(&self, map: &CitationMap) -> CitemapResult<()> {
        self.db
            .with_conn(|conn| queries::maps::update_map(conn, map))?;
        Ok(())
    }

    fn add_map_clusters(&self, map_id: i64, cluster_ids: &[i64]) -> CitemapResult<usize> {
        Ok(self.db.with_conn(|conn| {
            queries::maps::add_map_clusters(conn, map_id, cluster_ids)
        })?)
    }

    fn map_clusters(&self, map_id: i64) -> CitemapResult<Vec<OpinionCluster>> {
        Ok(self
            .db
            .with_conn(|conn| queries::maps::map_clusters(conn, map_id))?)
    }

    fn add_report_version(&self, map_id: i64, json_data: &str) -> CitemapResult<i64> {
        Ok(self.db.with_conn(|conn| {
            queries::reports::insert_report_version(conn, map_id, json_data)
        })?)
    }

    fn latest_report_version(&self, map_id: i64) -> CitemapResult<Option<String>> {
        Ok(self.db.with_conn(|conn| {
            queries::reports::latest_report_version(conn, map_id)
        })?)
    }
}
