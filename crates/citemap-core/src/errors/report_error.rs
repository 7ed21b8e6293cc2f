//! Report serialization errors.

/// Errors raised while building or archiving a map report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("cluster {id} has no filing date; refusing to serialize a malformed record")]
    MissingFilingDate { id: i64 },

    #[error("report serialization failed: {message}")]
    Serialization { message: String },
}
