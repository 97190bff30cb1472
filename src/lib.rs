//! # mapgraph
//!
//! A directed-graph construction and consistency layer for spatial maps.
//!
//! A map is a set of nodes (locations with an opaque spatial payload) joined
//! by directed edges with a strictly positive length. Every node carries two
//! adjacency lists — outgoing and incoming — and the crate's core job is to
//! keep that dual representation symmetric, duplicate-free, self-loop-free,
//! and referentially closed under incremental insertion.
//!
//! ## Core Principles
//!
//! - **Insertion filters, never corrupts**: structurally invalid candidates
//!   are rejected with an explicit [`EdgeOutcome`], leaving the graph untouched
//! - **Append-only**: there is no edge removal; adjacency lists only grow
//! - **Validator as oracle**: an independent routine re-derives every
//!   invariant without reusing the engine's bookkeeping
//! - **Single writer**: no locking; concurrent construction is the caller's
//!   problem to serialize
//!
//! ## Architecture
//!
//! ```text
//! Map loader (JSON files, fail-fast health check)
//!     ↓
//! Insertion engine (check_and_add_edge / connect_nodes)
//!     ↓
//! Node arena (MapGraph: nodes, dual adjacency lists)
//!     ⇵
//! Consistency validator (independent invariant re-derivation)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use mapgraph::{HabitatType, MapGraph};
//!
//! let mut graph = MapGraph::new();
//! let a = graph.create_node(0.0, 0.0, HabitatType::Distributary);
//! let b = graph.create_node(1.0, 0.0, HabitatType::BlindChannel);
//!
//! // Two connect_nodes calls model an undirected connection.
//! graph.connect_nodes(a, b, 3.0);
//! graph.connect_nodes(b, a, 3.0);
//!
//! let report = graph.validate();
//! assert!(report.passed);
//! assert_eq!(report.total_unique_edges, 2);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod graph;
pub mod loader;

// Re-export main types
pub use error::{MapError, Result};
pub use graph::{
    validate_nodes, Edge, EdgeOutcome, HabitatType, MapGraph, MapNode, NodeId, ValidationReport,
};
pub use loader::{build_map, load_map, EdgeRecord, MapFile, NodeRecord};
