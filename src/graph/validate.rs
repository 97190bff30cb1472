//! Independent consistency validator for the dual adjacency representation.
//!
//! Re-derives every structural invariant from scratch, deliberately sharing
//! no bookkeeping with the insertion engine: the engine's local dedup logic
//! and this module's global closure/symmetry checks stay independent so each
//! can act as an oracle for the other.
//!
//! Checked invariants, per node `N` in the set under validation:
//!
//! 1. every `edges_in` entry has `target == N`
//! 2. every `edges_out` entry has `source == N`
//! 3. no entry is a self-loop
//! 4. every referenced endpoint is a member of the node set
//! 5. no two `edges_in` entries share a source; no two `edges_out` entries
//!    share a target
//! 6. every `edges_out` entry has a matching `edges_in` entry on its target
//! 7. every `edges_in` entry has a matching `edges_out` entry on its source
//! 8. every length is strictly positive

use super::map::MapGraph;
use super::types::NodeId;
use std::collections::HashSet;

/// Aggregate result of a consistency check.
///
/// `errors` holds one human-readable entry per violated invariant instance,
/// in check order, not deduplicated across nodes: a broken symmetric pair
/// reports from the perspective of each side it is visible from.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// True when no invariant was violated.
    pub passed: bool,
    /// Number of nodes in the validated set.
    pub total_nodes: usize,
    /// Sum of `edges_out` sizes — the canonical unique directed-edge count.
    pub total_unique_edges: usize,
    /// Failure descriptions, one per violated invariant instance.
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn new(total_nodes: usize) -> Self {
        Self {
            passed: true,
            total_nodes,
            total_unique_edges: 0,
            errors: Vec::new(),
        }
    }

    fn fail(&mut self, msg: String) {
        self.passed = false;
        self.errors.push(msg);
    }
}

/// Validate the adjacency lists of an arbitrary node collection.
///
/// `ids` is assumed to be the complete node set of the graph under
/// validation — there are no implicit external members, so an edge endpoint
/// outside `ids` is a referential-closure failure even when the arena holds
/// such a node.
///
/// Pure with respect to the graph: safe to call repeatedly, and safe on
/// partially-constructed or deliberately corrupted graphs.
pub fn validate_nodes(graph: &MapGraph, ids: &[NodeId]) -> ValidationReport {
    let mut report = ValidationReport::new(ids.len());

    let members: HashSet<NodeId> = ids.iter().copied().collect();

    for &id in ids {
        let node = match graph.node(id) {
            Some(node) => node,
            None => {
                report.fail(format!("Node {id}: not present in graph"));
                continue;
            }
        };

        // 1. Every edges_in entry must have target == this node
        for (i, e) in node.edges_in.iter().enumerate() {
            if e.target != id {
                report.fail(format!("Node {id}: edges_in[{i}].target != this node"));
            }
        }

        // 2. Every edges_out entry must have source == this node
        for (i, e) in node.edges_out.iter().enumerate() {
            if e.source != id {
                report.fail(format!("Node {id}: edges_out[{i}].source != this node"));
            }
        }

        // 3. No self-loops
        for e in &node.edges_in {
            if e.source == id {
                report.fail(format!("Node {id}: self-loop in edges_in"));
            }
        }
        for e in &node.edges_out {
            if e.target == id {
                report.fail(format!("Node {id}: self-loop in edges_out"));
            }
        }

        // 4. All edge endpoints must be members of the node set
        for e in &node.edges_in {
            if !members.contains(&e.source) {
                report.fail(format!("Node {id}: edges_in references source not in map"));
            }
        }
        for e in &node.edges_out {
            if !members.contains(&e.target) {
                report.fail(format!("Node {id}: edges_out references target not in map"));
            }
        }

        // 5. No duplicate entries within edges_in / edges_out
        for i in 0..node.edges_in.len() {
            for j in (i + 1)..node.edges_in.len() {
                if node.edges_in[i].source == node.edges_in[j].source {
                    report.fail(format!(
                        "Node {id}: duplicate edges_in from source {}",
                        node.edges_in[i].source
                    ));
                }
            }
        }
        for i in 0..node.edges_out.len() {
            for j in (i + 1)..node.edges_out.len() {
                if node.edges_out[i].target == node.edges_out[j].target {
                    report.fail(format!(
                        "Node {id}: duplicate edges_out to target {}",
                        node.edges_out[i].target
                    ));
                }
            }
        }

        // 6. Symmetry: every edges_out entry (this -> X) must have a matching
        //    edges_in entry on X
        for e in &node.edges_out {
            let found = graph
                .node(e.target)
                .map(|t| t.edges_in.iter().any(|ie| ie.source == id))
                .unwrap_or(false);
            if !found {
                report.fail(format!(
                    "Node {id}: edges_out to {} but target has no matching edges_in",
                    e.target
                ));
            }
        }

        // 7. Symmetry: every edges_in entry (X -> this) must have a matching
        //    edges_out entry on X
        for e in &node.edges_in {
            let found = graph
                .node(e.source)
                .map(|s| s.edges_out.iter().any(|oe| oe.target == id))
                .unwrap_or(false);
            if !found {
                report.fail(format!(
                    "Node {id}: edges_in from {} but source has no matching edges_out",
                    e.source
                ));
            }
        }

        // 8. Edge lengths must be strictly positive
        for e in &node.edges_in {
            if e.length <= 0.0 {
                report.fail(format!(
                    "Node {id}: edges_in has non-positive length {}",
                    e.length
                ));
            }
        }
        for e in &node.edges_out {
            if e.length <= 0.0 {
                report.fail(format!(
                    "Node {id}: edges_out has non-positive length {}",
                    e.length
                ));
            }
        }

        report.total_unique_edges += node.edges_out.len();
    }

    report
}
