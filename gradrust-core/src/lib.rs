// Core modules of the crate
pub mod autograd;
pub mod graph;
pub mod ops;

// Network, container and optimizer layers built on the engine
pub mod model;
pub mod nn;
pub mod optim;

// Re-export the central graph types so they are accessible directly via
// `gradrust_core::Graph` etc.
pub use graph::{Checkpoint, Graph, Node, NodeId, Op};

pub mod error;
pub use error::GradRustError;
