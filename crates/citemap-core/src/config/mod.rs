//! Configuration: compiled defaults, project TOML, environment overrides.

pub mod citemap_config;
pub mod defaults;
pub mod report_config;
pub mod traversal_config;

pub use citemap_config::CitemapConfig;
pub use report_config::ReportConfig;
pub use traversal_config::TraversalConfig;
