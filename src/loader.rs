//! Map loading from JSON descriptions.
//!
//! The loader sits outside the graph core: it parses a map file, creates the
//! node set, feeds every raw edge request through the insertion engine (so
//! malformed requests are filtered, not trusted), and then runs the
//! consistency validator as a fail-fast health check before handing the
//! graph to callers.

use crate::error::{MapError, Result};
use crate::graph::{Edge, HabitatType, MapGraph};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A node record in a map file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
    /// Habitat classification
    pub habitat: HabitatType,
}

/// An edge record in a map file.
///
/// Endpoints are indices into the file's node list, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Index of the source node
    pub source: usize,
    /// Index of the target node
    pub target: usize,
    /// Traversal length; when omitted, the Euclidean distance between the
    /// endpoints' positions is used
    #[serde(default)]
    pub length: Option<f32>,
}

/// Top-level map file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapFile {
    /// Declared nodes, in id order
    pub nodes: Vec<NodeRecord>,
    /// Raw edge requests
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// Load and validate a map from a JSON file.
///
/// # Errors
///
/// - [`MapError::Io`] if the file cannot be read
/// - [`MapError::MalformedMap`] if the JSON does not parse
/// - [`MapError::EdgeEndpointOutOfRange`] if an edge record references a
///   node index the file never declared
/// - [`MapError::Validation`] if the constructed graph fails the
///   consistency check — the map is corrupt and must not be used
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<MapGraph> {
    let path = path.as_ref();
    info!("loading map from {}", path.display());

    let contents = std::fs::read_to_string(path)?;
    let file: MapFile = serde_json::from_str(&contents)
        .map_err(|e| MapError::malformed(format!("{}: invalid JSON", path.display()), Some(e)))?;

    build_map(&file)
}

/// Build and validate a graph from a parsed map description.
///
/// Edge requests rejected by the insertion engine (self-loops, duplicates,
/// reversed resubmissions) are logged and skipped; they are expected noise
/// in survey data, not errors. See [`load_map`] for the error contract.
pub fn build_map(file: &MapFile) -> Result<MapGraph> {
    let mut graph = MapGraph::new();

    for record in &file.nodes {
        graph.create_node(record.x, record.y, record.habitat);
    }

    for (index, record) in file.edges.iter().enumerate() {
        for endpoint in [record.source, record.target] {
            if endpoint >= file.nodes.len() {
                return Err(MapError::EdgeEndpointOutOfRange {
                    index,
                    node: endpoint,
                    declared: file.nodes.len(),
                });
            }
        }

        let length = match record.length {
            Some(length) => length,
            None => {
                // Endpoints are range-checked above; nodes mirror file.nodes 1:1.
                let nodes = graph.nodes();
                nodes[record.source].distance_to(&nodes[record.target])
            }
        };

        let outcome = graph.check_and_add_edge(Edge::new(record.source, record.target, length));
        if !outcome.is_added() {
            debug!(
                "edge record {index} ({} -> {}) skipped: {outcome}",
                record.source, record.target
            );
        }
    }

    let report = graph.validate();
    if !report.passed {
        return Err(MapError::Validation {
            errors: report.errors,
        });
    }

    info!(
        "map loaded: {} nodes, {} edges",
        report.total_nodes, report.total_unique_edges
    );

    Ok(graph)
}
