//! JSON report assembly for a generated citation map.

use citemap_core::config::ReportConfig;
use citemap_core::errors::{CitemapResult, ReportError};
use citemap_core::types::OpinionCluster;
use serde::{Deserialize, Serialize};

use crate::digraph::CitationGraph;

/// Report header block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub donate: String,
    pub version: f64,
}

/// One opinion grouping inside a cluster record. The engine works at
/// cluster granularity, so every record carries a single `"combined"`
/// grouping holding the cited neighbor ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubOpinion {
    #[serde(rename = "type")]
    pub kind: String,
    pub opinions_cited: Vec<i64>,
}

/// One cluster entry in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterRecord {
    pub id: i64,
    pub absolute_url: String,
    pub case_name: String,
    pub case_name_short: String,
    pub citation_count: usize,
    pub date_filed: String,
    pub decision_direction: Option<i64>,
    pub votes_majority: Option<i64>,
    pub votes_minority: Option<i64>,
    pub sub_opinions: Vec<SubOpinion>,
}

/// The complete report document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapReport {
    pub meta: ReportMeta,
    pub opinion_clusters: Vec<ClusterRecord>,
}

/// Assemble the report for `clusters` against the traversal `graph`.
///
/// `clusters` is the map's association set in stable store order. Entries
/// outside the graph (the start boundary in particular) serialize with a
/// zero citation count and no cited neighbors. Every cluster must carry a
/// filing date; a missing one aborts the report rather than emitting a
/// partial document.
pub fn build_report(
    clusters: &[OpinionCluster],
    graph: &CitationGraph,
    config: &ReportConfig,
) -> CitemapResult<MapReport> {
    let mut records = Vec::with_capacity(clusters.len());
    for cluster in clusters {
        let date_filed = cluster
            .date_filed
            .ok_or(ReportError::MissingFilingDate { id: cluster.id })?;
        records.push(ClusterRecord {
            id: cluster.id,
            absolute_url: cluster.absolute_url(),
            case_name: cluster.case_name.clone(),
            case_name_short: cluster.case_name_short.clone(),
            citation_count: graph.in_degree(cluster.id),
            date_filed: date_filed.to_string(),
            decision_direction: cluster.decision_direction,
            votes_majority: cluster.votes_majority,
            votes_minority: cluster.votes_minority,
            sub_opinions: vec![SubOpinion {
                kind: "combined".to_owned(),
                opinions_cited: graph.cited_ids(cluster.id),
            }],
        });
    }

    Ok(MapReport {
        meta: ReportMeta {
            donate: config.donate.clone(),
            version: config.version,
        },
        opinion_clusters: records,
    })
}
