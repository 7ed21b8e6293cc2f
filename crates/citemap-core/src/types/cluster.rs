//! Opinion cluster records consumed by the traversal engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display name used when every name field on a cluster is empty.
const UNKNOWN_CASE_NAME: &str = "Unknown";

/// One opinion cluster from the case-law store.
///
/// Read-only to the engine: clusters are fetched, filtered, and linked,
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpinionCluster {
    pub id: i64,
    /// Court identifier, e.g. `"scotus"`.
    pub court: String,
    /// Filing date. Nullable in the store; required for traversal anchors
    /// and report serialization.
    pub date_filed: Option<NaiveDate>,
    pub case_name_short: String,
    pub case_name: String,
    pub case_name_full: String,
    /// URL slug for `absolute_url`.
    pub slug: String,
    /// Supreme Court Database decision direction, when coded.
    pub decision_direction: Option<i64>,
    pub votes_majority: Option<i64>,
    pub votes_minority: Option<i64>,
}

impl OpinionCluster {
    /// Best available display name: the first non-empty of the short,
    /// standard, and full case names, else `"Unknown"`.
    pub fn best_case_name(&self) -> &str {
        [&self.case_name_short, &self.case_name, &self.case_name_full]
            .into_iter()
            .find(|name| !name.is_empty())
            .map(String::as_str)
            .unwrap_or(UNKNOWN_CASE_NAME)
    }

    /// Site-relative URL of the cluster's opinion page.
    pub fn absolute_url(&self) -> String {
        format!("/opinion/{}/{}/", self.id, self.slug)
    }
}
