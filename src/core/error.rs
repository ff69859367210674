//! Graph runner error types

use thiserror::Error;

/// Errors raised by the graph runner itself.
///
/// Node bodies report their own failures through `Node::Error`; these variants
/// are converted into that type so a run surfaces a single error type.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The run executed `limit` nodes without reaching an end transition
    #[error("Step limit exceeded: run did not end within {limit} steps")]
    StepLimitExceeded { limit: usize },

    /// A transition pointed at a node the graph does not register
    #[error("Node not registered in graph: {node}")]
    UnregisteredNode { node: String },

    /// `step` was called on a run that already ended
    #[error("Graph run already finished")]
    RunFinished,

    /// The blocking entry point could not build its runtime
    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

impl GraphError {
    /// Create an unregistered node error
    pub fn unregistered(node: impl Into<String>) -> Self {
        GraphError::UnregisteredNode { node: node.into() }
    }
}

/// Result type alias for runner operations
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphError::StepLimitExceeded { limit: 8 };
        assert_eq!(
            err.to_string(),
            "Step limit exceeded: run did not end within 8 steps"
        );

        let err = GraphError::unregistered("NodeZ");
        assert_eq!(err.to_string(), "Node not registered in graph: NodeZ");

        assert_eq!(GraphError::RunFinished.to_string(), "Graph run already finished");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "no reactor");
        let graph_err: GraphError = io_err.into();
        assert!(matches!(graph_err, GraphError::Runtime(_)));
    }

    #[test]
    fn test_error_into_anyhow() {
        let err: anyhow::Error = GraphError::StepLimitExceeded { limit: 3 }.into();
        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::StepLimitExceeded { limit: 3 })
        ));
    }
}
