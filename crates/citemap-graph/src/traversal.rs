//! Bounded backward traversal over citation edges.

use citemap_core::config::TraversalConfig;
use citemap_core::errors::{CitemapResult, GraphError};
use citemap_core::traits::IClusterStore;
use citemap_core::types::OpinionCluster;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::digraph::CitationGraph;

/// Build the directed graph of opinions cited between `end` and `start`.
///
/// Walks backward citation edges from `end`, depth-first, expanding each
/// node at most once with one shared visited set for the whole walk.
/// A node reachable along several paths keeps the edge from every
/// expanded parent that cites it, but only its first expansion.
///
/// `start` is the boundary: it is never expanded and never enters the
/// graph, so edges into it are dropped. Qualifying authorities are those
/// in `config.apex_court` filed on or after `start`'s filing date, in the
/// store's stable order, which makes repeated runs reproducible.
///
/// `end == start` yields an empty graph.
pub fn build_citation_graph(
    store: &dyn IClusterStore,
    end: &OpinionCluster,
    start: &OpinionCluster,
    config: &TraversalConfig,
) -> CitemapResult<CitationGraph> {
    let start_date = start
        .date_filed
        .ok_or(GraphError::MissingFilingDate { id: start.id })?;

    let mut graph = CitationGraph::new();
    let mut visited: FxHashSet<i64> = FxHashSet::default();
    // Explicit stack of (cluster id, remaining depth) pairs.
    let mut stack: Vec<(i64, u32)> = vec![(end.id, config.max_depth)];

    while let Some((node, depth)) = stack.pop() {
        if node == start.id || depth == 0 || visited.contains(&node) {
            continue;
        }
        visited.insert(node);
        graph.ensure_node(node);

        let authorities = store.authorities_of(node, &config.apex_court, start_date)?;
        // Push in reverse so pops follow query order, preserving the
        // preorder a recursive walk would produce.
        for citation in authorities.iter().rev() {
            if citation.cited_id == start.id {
                continue;
            }
            graph.add_citation(node, citation.cited_id);
            stack.push((citation.cited_id, depth - 1));
        }
    }

    debug!(
        end_id = end.id,
        start_id = start.id,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "citation graph built"
    );

    Ok(graph)
}
