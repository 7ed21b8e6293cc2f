//! Shared fixtures for citemap-graph integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use chrono::NaiveDate;
use citemap_core::errors::CitemapResult;
use citemap_core::traits::IClusterStore;
use citemap_core::types::{Citation, OpinionCluster};

/// In-memory cluster store honoring the `authorities_of` contract: target
/// court and minimum-date filters, undated targets skipped, results
/// ordered by target filing date then id.
pub struct FakeClusterStore {
    clusters: HashMap<i64, OpinionCluster>,
    citations: Vec<Citation>,
}

impl FakeClusterStore {
    pub fn new() -> Self {
        Self {
            clusters: HashMap::new(),
            citations: Vec::new(),
        }
    }

    pub fn add_cluster(&mut self, cluster: OpinionCluster) {
        self.clusters.insert(cluster.id, cluster);
    }

    pub fn add_citation(&mut self, citing_id: i64, cited_id: i64) {
        self.citations.push(Citation::new(citing_id, cited_id));
    }

    /// Clone of a seeded cluster, panicking on unknown ids.
    pub fn cluster(&self, id: i64) -> OpinionCluster {
        self.clusters[&id].clone()
    }

    pub fn has_citation(&self, citing_id: i64, cited_id: i64) -> bool {
        self.citations
            .iter()
            .any(|c| c.citing_id == citing_id && c.cited_id == cited_id)
    }
}

impl IClusterStore for FakeClusterStore {
    fn get_cluster(&self, id: i64) -> CitemapResult<Option<OpinionCluster>> {
        Ok(self.clusters.get(&id).cloned())
    }

    fn authorities_of(
        &self,
        citing_id: i64,
        court: &str,
        min_date: NaiveDate,
    ) -> CitemapResult<Vec<Citation>> {
        let mut hits: Vec<(NaiveDate, Citation)> = self
            .citations
            .iter()
            .filter(|c| c.citing_id == citing_id)
            .filter_map(|c| {
                let target = self.clusters.get(&c.cited_id)?;
                if target.court != court {
                    return None;
                }
                let filed = target.date_filed?;
                (filed >= min_date).then_some((filed, *c))
            })
            .collect();
        hits.sort_by_key(|(filed, c)| (*filed, c.cited_id));
        Ok(hits.into_iter().map(|(_, c)| c).collect())
    }
}

/// An apex-court cluster with plausible name fields.
pub fn scotus_cluster(id: i64, filed: NaiveDate) -> OpinionCluster {
    OpinionCluster {
        id,
        court: "scotus".to_string(),
        date_filed: Some(filed),
        case_name_short: format!("Case {id}"),
        case_name: format!("Case {id} v. United States"),
        case_name_full: String::new(),
        slug: format!("case-{id}"),
        decision_direction: None,
        votes_majority: None,
        votes_minority: None,
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
