use serde::{Deserialize, Serialize};

use super::defaults;

/// Report subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Donation appeal embedded in the report metadata block.
    pub donate: String,
    /// Report format version.
    pub version: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            donate: defaults::DEFAULT_DONATE.to_string(),
            version: defaults::DEFAULT_REPORT_VERSION,
        }
    }
}
