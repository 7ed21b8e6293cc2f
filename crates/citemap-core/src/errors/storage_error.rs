//! Storage-layer errors for SQLite operations.

/// Errors raised by the SQLite persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to open database at {path}: {message}")]
    OpenFailed { path: String, message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("query failed: {message}")]
    QueryFailed { message: String },

    #[error("opinion cluster {id} not found")]
    ClusterNotFound { id: i64 },

    #[error("citation map {id} not found")]
    MapNotFound { id: i64 },
}
