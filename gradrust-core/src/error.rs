use thiserror::Error;

/// Custom error type for the GradRust engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing, Clone added
pub enum GradRustError {
    #[error("Node id {index} is out of bounds for a graph of {nodes} nodes")]
    InvalidNode { index: usize, nodes: usize },

    #[error("Checkpoint {checkpoint} is beyond the current graph length {nodes}")]
    InvalidCheckpoint { checkpoint: usize, nodes: usize },

    #[error("Input size mismatch: expected {expected}, got {actual} during operation {operation}")]
    InputSizeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Cannot build a network from an empty list of layer sizes")]
    EmptyNetwork,

    #[error("Operation {operation} received an empty input list")]
    EmptyInput { operation: String },

    #[error("Invalid distribution parameters: {0}")]
    InvalidDistribution(String),
    // Add more specific errors as needed
}
