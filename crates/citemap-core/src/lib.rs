//! # citemap-core
//!
//! Foundation crate for the citemap citation-network engine.
//! Defines the domain types, storage traits, errors, and configuration.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod text;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::CitemapConfig;
pub use errors::{CitemapError, CitemapResult};
pub use traits::{IClusterStore, IMapStore};
pub use types::{Citation, CitationMap, OpinionCluster};
