//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`MapNode`]: Spatial map nodes with dual adjacency lists
//! - [`Edge`]: Directed, positively-weighted connections
//! - [`MapGraph`]: The node arena and edge insertion engine
//! - [`validate`]: Independent consistency validator

mod types;
mod map;
pub mod validate;

pub use types::{Edge, EdgeOutcome, HabitatType, MapNode, NodeId};
pub use map::MapGraph;
pub use validate::{validate_nodes, ValidationReport};
