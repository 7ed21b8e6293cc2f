use chrono::NaiveDate;

use crate::errors::CitemapResult;
use crate::types::{Citation, CitationMap, OpinionCluster};

/// Read access to opinion clusters and their citation edges.
///
/// The traversal engine treats the store as an immutable snapshot for the
/// duration of one call; nothing here mutates.
pub trait IClusterStore: Send + Sync {
    /// Fetch one cluster by id.
    fn get_cluster(&self, id: i64) -> CitemapResult<Option<OpinionCluster>>;

    /// Outgoing citations of `citing_id` whose targets sit in `court` and
    /// were filed on or after `min_date`, ordered by target filing date
    /// then target id, both ascending.
    fn authorities_of(
        &self,
        citing_id: i64,
        court: &str,
        min_date: NaiveDate,
    ) -> CitemapResult<Vec<Citation>>;
}

/// Persistence for citation maps, their cluster association sets, and
/// archived report versions.
pub trait IMapStore: Send + Sync {
    /// Insert a new map and return it with its assigned id.
    fn insert_map(&self, map: &CitationMap) -> CitemapResult<CitationMap>;

    fn get_map(&self, id: i64) -> CitemapResult<Option<CitationMap>>;

    fn update_map(&self, map: &CitationMap) -> CitemapResult<()>;

    /// Associate `cluster_ids` with the map, returning how many rows were
    /// actually new. Already-associated ids are skipped, so re-running a
    /// generation is a no-op here.
    fn add_map_clusters(&self, map_id: i64, cluster_ids: &[i64]) -> CitemapResult<usize>;

    /// All clusters associated with the map, ordered by filing date then
    /// id, both ascending (missing dates first).
    fn map_clusters(&self, map_id: i64) -> CitemapResult<Vec<OpinionCluster>>;

    /// Append one serialized report for the map and return its version id.
    fn add_report_version(&self, map_id: i64, json_data: &str) -> CitemapResult<i64>;

    /// The most recently archived report for the map, if any.
    fn latest_report_version(&self, map_id: i64) -> CitemapResult<Option<String>>;
}
