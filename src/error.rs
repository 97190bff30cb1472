//! Error types for mapgraph operations.
//!
//! Only the map loader is fallible in the classic sense. Rejected edge
//! insertions are reported through [`EdgeOutcome`](crate::EdgeOutcome) and
//! validator findings through [`ValidationReport`](crate::ValidationReport);
//! neither is an error.

use thiserror::Error;

/// Result type alias for mapgraph operations.
pub type Result<T> = std::result::Result<T, MapError>;

/// Error type for map loading and post-load health checks.
#[derive(Error, Debug)]
pub enum MapError {
    /// I/O failure while reading a map file.
    #[error("I/O error reading map: {0}")]
    Io(#[from] std::io::Error),

    /// The map file could not be parsed.
    #[error("Malformed map file: {message}")]
    MalformedMap {
        /// Description of the parse failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An edge record references a node index the file never declared.
    #[error("Edge record {index} references node {node}, but map declares only {declared} nodes")]
    EdgeEndpointOutOfRange {
        /// Position of the offending edge record in the file
        index: usize,
        /// Node index the record referenced
        node: usize,
        /// Number of nodes the file declared
        declared: usize,
    },

    /// The loaded map failed the post-load consistency check.
    ///
    /// The graph is structurally corrupt and must not be used; `errors`
    /// carries one entry per violated invariant instance.
    #[error("Map failed consistency validation with {} error(s)", .errors.len())]
    Validation {
        /// Failure descriptions from the validator
        errors: Vec<String>,
    },
}

impl MapError {
    /// Create a malformed-map error from a message and optional source.
    pub fn malformed<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::MalformedMap {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
