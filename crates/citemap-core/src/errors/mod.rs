//! Error handling for citemap.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod citemap_error;
pub mod config_error;
pub mod graph_error;
pub mod report_error;
pub mod storage_error;

pub use citemap_error::{CitemapError, CitemapResult};
pub use config_error::ConfigError;
pub use graph_error::GraphError;
pub use report_error::ReportError;
pub use storage_error::StorageError;
