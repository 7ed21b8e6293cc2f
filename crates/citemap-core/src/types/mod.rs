//! Domain types shared across the workspace.

pub mod citation;
pub mod cluster;
pub mod map;

pub use citation::Citation;
pub use cluster::OpinionCluster;
pub use map::CitationMap;
