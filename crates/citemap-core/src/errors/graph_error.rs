//! Traversal-engine errors.

/// Errors raised while building a citation graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("cluster {id} has no filing date; cannot anchor the date filter")]
    MissingFilingDate { id: i64 },
}
