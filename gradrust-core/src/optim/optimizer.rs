use crate::error::GradRustError;
use crate::graph::Graph;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating parameter leaf values based on
/// their accumulated gradients.
pub trait Optimizer {
    /// Performs a single optimization step over the managed parameters,
    /// reading their gradients from `graph` and rewriting their values in
    /// place.
    ///
    /// # Returns
    /// `Ok(())` if the step was successful, or a `GradRustError` otherwise.
    fn step(&mut self, graph: &mut Graph) -> Result<(), GradRustError>;

    /// Clears the gradients of the managed parameters.
    ///
    /// This is typically called before the backward pass in a new training
    /// iteration to prevent gradients from accumulating across iterations
    /// (unless that is the desired behavior).
    fn zero_grad(&self, graph: &mut Graph);
}
