//! Core graph types: map nodes, directed edges, and insertion outcomes.

use serde::{Deserialize, Serialize};

/// Unique identifier for a map node.
///
/// Ids are arena indices assigned by [`MapGraph`](crate::MapGraph) at node
/// creation and stable for the node's lifetime.
pub type NodeId = usize;

/// Habitat classification carried by a node.
///
/// Opaque payload as far as the graph layer is concerned; the values exist
/// for the surrounding map pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HabitatType {
    /// Distributary channel
    Distributary,
    /// Blind (dead-end) channel
    BlindChannel,
    /// Impoundment or pond
    Impoundment,
    /// Harbor or open-water area
    Harbor,
}

impl std::fmt::Display for HabitatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HabitatType::Distributary => write!(f, "Distributary"),
            HabitatType::BlindChannel => write!(f, "BlindChannel"),
            HabitatType::Impoundment => write!(f, "Impoundment"),
            HabitatType::Harbor => write!(f, "Harbor"),
        }
    }
}

/// A directed, positively-weighted connection between two distinct nodes.
///
/// Accepted edges are stored by value in both `source.edges_out` and
/// `target.edges_in` — two independent copies carrying identical content.
/// `length > 0` is a caller precondition on the insertion engine; the
/// validator is where violations become visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Node the edge leaves from
    pub source: NodeId,
    /// Node the edge arrives at
    pub target: NodeId,
    /// Positive traversal length/weight
    pub length: f32,
}

impl Edge {
    /// Create a candidate edge for submission to the insertion engine.
    pub fn new(source: NodeId, target: NodeId, length: f32) -> Self {
        Self {
            source,
            target,
            length,
        }
    }
}

/// A node in the spatial map graph.
///
/// Adjacency lists are append-only for the lifetime of the graph.
/// `edges_out` is the canonical collection for counting unique directed
/// edges; `edges_in` is a derived mirror that must always agree with it.
/// The fields are public so tests can stage deliberately inconsistent
/// states for the validator; production code goes through the insertion
/// engine only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapNode {
    /// Unique identifier (assigned by the owning graph)
    pub id: NodeId,
    /// X coordinate (opaque to the graph layer)
    pub x: f32,
    /// Y coordinate (opaque to the graph layer)
    pub y: f32,
    /// Habitat classification (opaque to the graph layer)
    pub habitat: HabitatType,
    /// Outgoing edges; canonical for edge counting
    pub edges_out: Vec<Edge>,
    /// Incoming edges; mirror of the partners' `edges_out`
    pub edges_in: Vec<Edge>,
}

impl MapNode {
    /// Create a node with empty adjacency lists.
    pub fn new(id: NodeId, x: f32, y: f32, habitat: HabitatType) -> Self {
        Self {
            id,
            x,
            y,
            habitat,
            edges_out: Vec::new(),
            edges_in: Vec::new(),
        }
    }

    /// Number of outgoing edges.
    pub fn out_degree(&self) -> usize {
        self.edges_out.len()
    }

    /// Number of incoming edges.
    pub fn in_degree(&self) -> usize {
        self.edges_in.len()
    }

    /// Euclidean distance to another node's position.
    pub fn distance_to(&self, other: &MapNode) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Outcome of submitting a candidate edge to the insertion engine.
///
/// Rejection is a defined filtering outcome, not an error: the graph is
/// left untouched and no invariant is at risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeOutcome {
    /// The edge was committed to both endpoints' adjacency lists.
    Added,
    /// Rejected: source and target are the same node.
    RejectedSelfLoop,
    /// Rejected: an edge with this source and target already exists.
    RejectedDuplicate,
    /// Rejected: the opposite direction already exists and the entry point
    /// treats the pair as effectively undirected.
    RejectedReverseDuplicate,
    /// Rejected: an endpoint id does not name a node in this graph.
    RejectedUnknownNode,
}

impl EdgeOutcome {
    /// True if the candidate was committed.
    pub fn is_added(&self) -> bool {
        matches!(self, EdgeOutcome::Added)
    }
}

impl std::fmt::Display for EdgeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeOutcome::Added => write!(f, "added"),
            EdgeOutcome::RejectedSelfLoop => write!(f, "rejected: self-loop"),
            EdgeOutcome::RejectedDuplicate => write!(f, "rejected: duplicate"),
            EdgeOutcome::RejectedReverseDuplicate => write!(f, "rejected: reverse duplicate"),
            EdgeOutcome::RejectedUnknownNode => write!(f, "rejected: unknown node"),
        }
    }
}
