//! Citation map records: the owning object of one visualization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::OpinionCluster;
use crate::text::{slugify, trunc};

const TITLE_MAX_CHARS: usize = 200;
const SLUG_MAX_CHARS: usize = 75;
const TITLE_ELLIPSIS: &str = "…";

/// One persisted citation map: a start/end cluster pair plus its derived
/// presentation fields and generation metadata. The associated cluster set
/// lives in its own table and is managed through [`crate::IMapStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationMap {
    pub id: i64,
    pub cluster_start_id: i64,
    pub cluster_end_id: i64,
    /// Derived from the endpoint case names unless set by hand.
    pub title: String,
    pub subtitle: String,
    /// Slugified title, recomputed whenever derived fields are refreshed.
    pub slug: String,
    pub notes: String,
    pub published: bool,
    pub deleted: bool,
    pub view_count: i64,
    /// Wall-clock seconds the last traversal took, set by the aggregator.
    pub generation_time: Option<f64>,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
}

impl CitationMap {
    /// A fresh, unsaved map between two clusters. The id is assigned by
    /// the store on insert.
    pub fn new(cluster_start_id: i64, cluster_end_id: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            cluster_start_id,
            cluster_end_id,
            title: String::new(),
            subtitle: String::new(),
            slug: String::new(),
            notes: String::new(),
            published: false,
            deleted: false,
            view_count: 0,
            generation_time: None,
            date_created: now,
            date_modified: now,
        }
    }

    /// Title for the visualization, built from the shortest usable case
    /// name of each endpoint: `"{start} to {end}"`.
    pub fn make_title(start: &OpinionCluster, end: &OpinionCluster) -> String {
        format!("{} to {}", start.best_case_name(), end.best_case_name())
    }

    /// Fill in the derived presentation fields before a save.
    ///
    /// The title is only generated when empty (a hand-edited title is kept);
    /// the slug is always recomputed from the current title.
    pub fn refresh_derived_fields(&mut self, start: &OpinionCluster, end: &OpinionCluster) {
        if self.title.is_empty() {
            self.title = trunc(
                &Self::make_title(start, end),
                TITLE_MAX_CHARS,
                Some(TITLE_ELLIPSIS),
            );
        }
        self.slug = trunc(&slugify(&self.title), SLUG_MAX_CHARS, None);
        self.date_modified = Utc::now();
    }
}
