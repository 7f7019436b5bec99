use thiserror::Error;

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by the graph engine and its renderer.
///
/// Unresolvable edge endpoints and disconnected vertex pairs are not errors:
/// `Graph::add_edge` reports the former through its return value and
/// `shortest_path` reports the latter as `Ok(None)`.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A traversal or path query named a label that no vertex carries.
    #[error("unknown vertex label '{label}'")]
    UnknownVertex { label: String },

    /// `add_vertex` was called with the graph already full.
    #[error("graph capacity of {capacity} vertices exceeded")]
    CapacityExceeded { capacity: usize },

    /// Writing rendered output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn unknown_vertex(label: &str) -> Self {
        Self::UnknownVertex {
            label: label.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_vertex_message() {
        let err = GraphError::unknown_vertex("Z");
        assert_eq!(err.to_string(), "unknown vertex label 'Z'");
    }

    #[test]
    fn test_capacity_message() {
        let err = GraphError::CapacityExceeded { capacity: 2 };
        assert_eq!(err.to_string(), "graph capacity of 2 vertices exceeded");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: GraphError = io.into();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
