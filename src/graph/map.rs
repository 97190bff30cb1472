//! Main MapGraph interface: node arena and the edge insertion engine.

use super::types::{Edge, EdgeOutcome, HabitatType, MapNode, NodeId};
use super::validate::{validate_nodes, ValidationReport};
use log::{debug, trace};

/// The spatial map graph.
///
/// `MapGraph` owns the node arena and is the only place edges are created.
/// The graph is a single-writer structure: no interior locking, callers
/// needing concurrent construction must serialize externally.
///
/// Insertion maintains the dual adjacency representation: every accepted
/// edge is appended to `source.edges_out` and, in the same operation, an
/// equal-content copy to `target.edges_in`. There is no edge removal.
#[derive(Debug, Default)]
pub struct MapGraph {
    nodes: Vec<MapNode>,
}

impl MapGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create a node at the given position with the given classification.
    ///
    /// # Returns
    ///
    /// The id assigned to the node, stable for the graph's lifetime.
    pub fn create_node(&mut self, x: f32, y: f32, habitat: HabitatType) -> NodeId {
        let id = self.nodes.len();
        trace!("creating node {id} at ({x}, {y}), habitat {habitat}");
        self.nodes.push(MapNode::new(id, x, y, habitat));
        id
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&MapNode> {
        self.nodes.get(id)
    }

    /// Get a mutable reference to a node by id.
    ///
    /// Low-level access: writing to the adjacency lists directly bypasses
    /// the insertion engine and can violate the graph invariants. Intended
    /// for staging validator negative cases in tests.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut MapNode> {
        self.nodes.get_mut(id)
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> &[MapNode] {
        &self.nodes
    }

    /// Iterator over all node ids.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        0..self.nodes.len()
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of unique directed edges.
    ///
    /// `edges_out` is canonical: each accepted edge appears exactly once in
    /// exactly one node's outgoing list.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges_out.len()).sum()
    }

    /// Submit a raw candidate edge, treating the node pair as effectively
    /// undirected for deduplication.
    ///
    /// This is the bulk-ingest entry point used by the map loader, where the
    /// input describes physical channels and a reversed resubmission of an
    /// already-accepted connection is redundant. Filters applied, in order:
    ///
    /// - self-loop (`source == target`)
    /// - endpoint id not naming a node in this graph
    /// - exact duplicate (an edge `source -> target` already exists)
    /// - reverse duplicate (an edge `target -> source` already exists)
    ///
    /// `candidate.length > 0` is a documented precondition, not checked
    /// here; run [`MapGraph::validate`] to detect violations.
    pub fn check_and_add_edge(&mut self, candidate: Edge) -> EdgeOutcome {
        self.insert_edge(candidate, true)
    }

    /// Connect two nodes with a directed edge of the given length.
    ///
    /// The deliberate authoring entry point. Unlike
    /// [`check_and_add_edge`](MapGraph::check_and_add_edge), the reverse
    /// direction is not treated as a duplicate: calling
    /// `connect_nodes(a, b, len)` and then `connect_nodes(b, a, len)` is the
    /// documented way to model an undirected connection, yielding two
    /// independent directed edges.
    pub fn connect_nodes(&mut self, a: NodeId, b: NodeId, length: f32) -> EdgeOutcome {
        self.insert_edge(Edge::new(a, b, length), false)
    }

    /// Shared commit path for both entry points.
    ///
    /// Either both adjacency lists are appended or neither is.
    fn insert_edge(&mut self, edge: Edge, reject_reverse: bool) -> EdgeOutcome {
        if edge.source == edge.target {
            trace!("edge {} -> {} rejected: self-loop", edge.source, edge.target);
            return EdgeOutcome::RejectedSelfLoop;
        }

        if edge.source >= self.nodes.len() || edge.target >= self.nodes.len() {
            trace!(
                "edge {} -> {} rejected: unknown node (arena holds {})",
                edge.source,
                edge.target,
                self.nodes.len()
            );
            return EdgeOutcome::RejectedUnknownNode;
        }

        if self.nodes[edge.source]
            .edges_out
            .iter()
            .any(|e| e.target == edge.target)
        {
            trace!("edge {} -> {} rejected: duplicate", edge.source, edge.target);
            return EdgeOutcome::RejectedDuplicate;
        }

        if reject_reverse
            && self.nodes[edge.target]
                .edges_out
                .iter()
                .any(|e| e.target == edge.source)
        {
            trace!(
                "edge {} -> {} rejected: reverse duplicate",
                edge.source,
                edge.target
            );
            return EdgeOutcome::RejectedReverseDuplicate;
        }

        // Commit: both appends happen together, never one without the other.
        self.nodes[edge.source].edges_out.push(edge);
        self.nodes[edge.target].edges_in.push(edge);

        debug!(
            "edge added: {} -> {} (length {})",
            edge.source, edge.target, edge.length
        );

        EdgeOutcome::Added
    }

    /// Run the consistency validator over the full node set.
    ///
    /// A diagnostic, not a runtime guard: the insertion engine never calls
    /// this. Typical use is a health check after bulk-loading a map.
    pub fn validate(&self) -> ValidationReport {
        let ids: Vec<NodeId> = self.node_ids().collect();
        validate_nodes(self, &ids)
    }
}
