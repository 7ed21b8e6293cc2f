//! Compiled configuration defaults.

/// Maximum citation hops explored backward from the end node.
pub const DEFAULT_MAX_DEPTH: u32 = 6;

/// Court identifier a citation target must match to qualify.
pub const DEFAULT_APEX_COURT: &str = "scotus";

/// Donation appeal embedded in every report's metadata block.
pub const DEFAULT_DONATE: &str =
    "Please consider donating to support more projects from Free Law Project";

/// Report format version.
pub const DEFAULT_REPORT_VERSION: f64 = 1.0;
