//! petgraph::StableGraph wrapper keyed by cluster id.

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::{Directed, Direction};
use rustc_hash::FxHashMap;

/// The underlying directed graph type. Node weights are cluster ids;
/// edges carry no payload.
pub type CitationStableGraph = StableGraph<i64, (), Directed>;

/// One traversal's graph, with id-indexed access.
///
/// Built fresh per invocation and never persisted directly; the node set
/// goes to the association table and edge-derived metrics are read back
/// through `in_degree` and `cited_ids`.
#[derive(Debug)]
pub struct CitationGraph {
    /// The petgraph stable graph.
    pub graph: CitationStableGraph,
    /// Map from cluster id to NodeIndex for O(1) lookup.
    pub node_index: FxHashMap<i64, NodeIndex>,
}

impl CitationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: FxHashMap::default(),
        }
    }

    /// Get or create the node for a cluster id.
    pub fn ensure_node(&mut self, id: i64) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(id);
        self.node_index.insert(id, idx);
        idx
    }

    /// Look up a node index by cluster id.
    pub fn get_node(&self, id: i64) -> Option<NodeIndex> {
        self.node_index.get(&id).copied()
    }

    /// Whether the cluster is a node of this graph.
    pub fn contains(&self, id: i64) -> bool {
        self.node_index.contains_key(&id)
    }

    /// Record one citing edge, creating endpoints as needed.
    /// Re-recording an existing pair is a no-op.
    pub fn add_citation(&mut self, citing_id: i64, cited_id: i64) {
        let citing = self.ensure_node(citing_id);
        let cited = self.ensure_node(cited_id);
        if self.graph.find_edge(citing, cited).is_none() {
            self.graph.add_edge(citing, cited, ());
        }
    }

    /// Whether the graph holds the directed edge `citing -> cited`.
    pub fn has_citation(&self, citing_id: i64, cited_id: i64) -> bool {
        match (self.get_node(citing_id), self.get_node(cited_id)) {
            (Some(citing), Some(cited)) => self.graph.find_edge(citing, cited).is_some(),
            _ => false,
        }
    }

    /// Number of graph nodes citing `id`. Zero for ids outside the graph.
    pub fn in_degree(&self, id: i64) -> usize {
        match self.get_node(id) {
            Some(idx) => self
                .graph
                .neighbors_directed(idx, Direction::Incoming)
                .count(),
            None => 0,
        }
    }

    /// Ids cited by `id` within the graph, ascending. Empty for ids
    /// outside the graph.
    pub fn cited_ids(&self, id: i64) -> Vec<i64> {
        let Some(idx) = self.get_node(id) else {
            return Vec::new();
        };
        let mut cited: Vec<i64> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| self.graph[n])
            .collect();
        cited.sort_unstable();
        cited
    }

    /// All cluster ids in the graph, ascending.
    pub fn node_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.node_index.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for CitationGraph {
    fn default() -> Self {
        Self::new()
    }
}
