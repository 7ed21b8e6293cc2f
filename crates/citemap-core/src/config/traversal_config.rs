use serde::{Deserialize, Serialize};

use super::defaults;

/// Traversal subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Maximum citation hops explored backward from the end node.
    pub max_depth: u32,
    /// Court whose opinions qualify as citation targets.
    pub apex_court: String,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: defaults::DEFAULT_MAX_DEPTH,
            apex_court: defaults::DEFAULT_APEX_COURT.to_string(),
        }
    }
}
