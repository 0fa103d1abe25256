use crate::error::GradRustError;
use crate::graph::{Graph, NodeId};

/// The base trait for all neural network modules (layers, containers, etc.).
///
/// A module holds parameter leaf nodes inside a [`Graph`] and builds its
/// output nodes by composing the graph operators over inputs and parameters.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module, extending `graph` with the
    /// nodes of the computation.
    ///
    /// # Arguments
    /// * `graph`: The graph holding this module's parameters.
    /// * `inputs`: Input nodes, one per input feature.
    ///
    /// # Returns
    /// The output nodes of the module, or a `GradRustError` if an input
    /// does not match the module's expected arity.
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId])
        -> Result<Vec<NodeId>, GradRustError>;

    /// Returns the parameter leaf nodes of the module, including those of
    /// sub-modules, in construction order.
    ///
    /// The training loop uses this list to zero gradients before each
    /// backward pass and to apply the update rule after it.
    fn parameters(&self) -> Vec<NodeId>;
}
