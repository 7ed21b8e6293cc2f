//! Report assembly: document shape, counts, and failure modes.

mod common;

use citemap_core::config::ReportConfig;
use citemap_core::errors::{CitemapError, ReportError};
use citemap_core::types::OpinionCluster;
use citemap_graph::{build_report, CitationGraph};
use common::{date, scotus_cluster};
use serde_json::Value;

/// Graph from the two-branch network with the start already excluded:
/// 5 cites 3 and 4, 4 cites 2.
fn sample_graph() -> CitationGraph {
    let mut graph = CitationGraph::new();
    graph.add_citation(5, 3);
    graph.add_citation(5, 4);
    graph.add_citation(4, 2);
    graph
}

/// Association set for [`sample_graph`] in store order, including the
/// start boundary (id 1) that the graph itself excludes.
fn sample_clusters() -> Vec<OpinionCluster> {
    vec![
        scotus_cluster(1, date(1954, 5, 17)),
        scotus_cluster(2, date(1980, 6, 1)),
        scotus_cluster(3, date(1990, 6, 1)),
        scotus_cluster(4, date(1995, 6, 1)),
        scotus_cluster(5, date(2010, 6, 1)),
    ]
}

#[test]
fn test_report_shape() {
    let graph = sample_graph();
    let report = build_report(&sample_clusters(), &graph, &ReportConfig::default()).unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert!(value["meta"]["donate"]
        .as_str()
        .unwrap()
        .contains("Free Law Project"));
    assert_eq!(value["meta"]["version"], Value::from(1.0));

    let entries = value["opinion_clusters"].as_array().unwrap();
    assert_eq!(entries.len(), 5);

    // Last entry is the end node.
    let end = &entries[4];
    assert_eq!(end["id"], Value::from(5));
    assert_eq!(end["absolute_url"], Value::from("/opinion/5/case-5/"));
    assert_eq!(end["citation_count"], Value::from(0));
    assert_eq!(end["date_filed"], Value::from("2010-06-01"));
    assert!(end["decision_direction"].is_null());

    let subs = end["sub_opinions"].as_array().unwrap();
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0]["type"], Value::from("combined"));
    let cited: Vec<i64> = subs[0]["opinions_cited"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect();
    assert_eq!(cited, vec![3, 4]);
}

#[test]
fn test_citation_counts_match_in_degrees() {
    let graph = sample_graph();
    let report = build_report(&sample_clusters(), &graph, &ReportConfig::default()).unwrap();

    for record in &report.opinion_clusters {
        assert_eq!(record.citation_count, graph.in_degree(record.id));
    }

    let by_id = |id: i64| {
        report
            .opinion_clusters
            .iter()
            .find(|r| r.id == id)
            .unwrap()
    };
    assert_eq!(by_id(3).citation_count, 1);
    assert_eq!(by_id(4).citation_count, 1);
    assert_eq!(by_id(2).citation_count, 1);
}

#[test]
fn test_boundary_record_outside_graph_is_zeroed() {
    let graph = sample_graph();
    let report = build_report(&sample_clusters(), &graph, &ReportConfig::default()).unwrap();

    let start = report
        .opinion_clusters
        .iter()
        .find(|r| r.id == 1)
        .unwrap();
    assert_eq!(start.citation_count, 0);
    assert!(start.sub_opinions[0].opinions_cited.is_empty());
}

#[test]
fn test_names_serialize_verbatim() {
    // The best-name fallback is for titles; reports carry the raw fields.
    let mut cluster = scotus_cluster(5, date(2010, 6, 1));
    cluster.case_name_short = String::new();

    let report = build_report(&[cluster], &sample_graph(), &ReportConfig::default()).unwrap();
    let record = &report.opinion_clusters[0];
    assert_eq!(record.case_name_short, "");
    assert_eq!(record.case_name, "Case 5 v. United States");
}

#[test]
fn test_missing_filing_date_fails_loudly() {
    let mut cluster = scotus_cluster(3, date(1990, 6, 1));
    cluster.date_filed = None;

    let err = build_report(&[cluster], &sample_graph(), &ReportConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        CitemapError::Report(ReportError::MissingFilingDate { id: 3 })
    ));
}

#[test]
fn test_custom_meta_flows_through() {
    let config = ReportConfig {
        donate: "Support the archive".to_string(),
        version: 2.5,
    };
    let report = build_report(&[], &sample_graph(), &config).unwrap();
    assert_eq!(report.meta.donate, "Support the archive");
    assert_eq!(report.meta.version, 2.5);
    assert!(report.opinion_clusters.is_empty());
}
