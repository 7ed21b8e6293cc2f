//! # citemap-graph
//!
//! The citation-network engine: bounded backward traversal over citation
//! edges, the id-indexed graph container, report serialization, and the
//! aggregator that generates a persisted citation map.

pub mod digraph;
pub mod mapper;
pub mod report;
pub mod traversal;

pub use digraph::CitationGraph;
pub use mapper::{archive_report, generate_map, MapOutcome};
pub use report::{build_report, ClusterRecord, MapReport, ReportMeta, SubOpinion};
pub use traversal::build_citation_graph;
