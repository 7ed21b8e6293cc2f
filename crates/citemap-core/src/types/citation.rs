//! Directed citation relations between opinion clusters.

use serde::{Deserialize, Serialize};

/// One "A cites B" relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Citation {
    pub citing_id: i64,
    pub cited_id: i64,
}

impl Citation {
    pub fn new(citing_id: i64, cited_id: i64) -> Self {
        Self {
            citing_id,
            cited_id,
        }
    }
}
