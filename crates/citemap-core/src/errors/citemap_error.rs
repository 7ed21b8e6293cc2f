//! Workspace-level error aggregation.

use super::{ConfigError, GraphError, ReportError, StorageError};

/// Errors from any citemap subsystem.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum CitemapError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias used across the workspace.
pub type CitemapResult<T> = Result<T, CitemapError>;
