//! End-to-end map generation and report archival.

use std::time::Instant;

use chrono::Utc;
use citemap_core::config::CitemapConfig;
use citemap_core::errors::{CitemapResult, ReportError, StorageError};
use citemap_core::traits::{IClusterStore, IMapStore};
use citemap_core::types::CitationMap;
use tracing::{debug, info};

use crate::report::{build_report, MapReport};
use crate::traversal::build_citation_graph;

/// Everything one [`generate_map`] run produced.
#[derive(Debug, Clone)]
pub struct MapOutcome {
    /// Cluster ids persisted as the map's association set, ascending.
    pub node_ids: Vec<i64>,
    pub report: MapReport,
    /// Wall-clock seconds spent traversing and writing associations.
    pub generation_time: f64,
}

/// Generate `map`: run the traversal between its endpoints, persist the
/// association set, record the generation time on the map, and build the
/// report from the stored clusters.
///
/// The association set is the traversal's node set plus both endpoints,
/// so the start boundary is retrievable with the map even though it never
/// enters the graph. Re-running on the same map only adds associations
/// that are missing.
pub fn generate_map<S>(
    store: &S,
    map: &mut CitationMap,
    config: &CitemapConfig,
) -> CitemapResult<MapOutcome>
where
    S: IClusterStore + IMapStore,
{
    let end = store.get_cluster(map.cluster_end_id)?.ok_or(
        StorageError::ClusterNotFound {
            id: map.cluster_end_id,
        },
    )?;
    let start = store.get_cluster(map.cluster_start_id)?.ok_or(
        StorageError::ClusterNotFound {
            id: map.cluster_start_id,
        },
    )?;

    let started = Instant::now();
    let graph = build_citation_graph(store, &end, &start, &config.traversal)?;

    let mut node_ids = graph.node_ids();
    for boundary in [map.cluster_start_id, map.cluster_end_id] {
        if !node_ids.contains(&boundary) {
            node_ids.push(boundary);
        }
    }
    node_ids.sort_unstable();
    store.add_map_clusters(map.id, &node_ids)?;
    let generation_time = started.elapsed().as_secs_f64();

    map.generation_time = Some(generation_time);
    map.date_modified = Utc::now();
    store.update_map(map)?;

    let clusters = store.map_clusters(map.id)?;
    let report = build_report(&clusters, &graph, &config.report)?;

    info!(
        map_id = map.id,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        seconds = generation_time,
        "citation map generated"
    );

    Ok(MapOutcome {
        node_ids,
        report,
        generation_time,
    })
}

/// Serialize `report` and append it to the map's archived versions,
/// returning the new version id. Earlier versions stay retrievable.
pub fn archive_report<S: IMapStore>(
    store: &S,
    map_id: i64,
    report: &MapReport,
) -> CitemapResult<i64> {
    let json = serde_json::to_string(report).map_err(|e| ReportError::Serialization {
        message: e.to_string(),
    })?;
    let version_id = store.add_report_version(map_id, &json)?;
    debug!(map_id, version_id, "report version archived");
    Ok(version_id)
}
