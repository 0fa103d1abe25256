use rand::Rng;

use crate::error::GradRustError;
use crate::graph::{Graph, NodeId};
use crate::nn::init;
use crate::nn::module::Module;

/// A single tanh neuron: `tanh(b + Σ wᵢ·xᵢ)`.
///
/// Weights and bias are parameter leaves initialized uniformly in `[-1, 1)`.
/// They persist in the graph across training iterations; the optimizer
/// mutates their values in place.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
    in_features: usize,
}

impl Neuron {
    /// Creates a neuron over `in_features` inputs, allocating its parameter
    /// leaves in `graph`.
    pub fn new<R: Rng + ?Sized>(graph: &mut Graph, rng: &mut R, in_features: usize) -> Self {
        let weights = (0..in_features)
            .map(|_| init::uniform(graph, rng, -1.0, 1.0))
            .collect();
        let bias = init::uniform(graph, rng, -1.0, 1.0);
        Neuron {
            weights,
            bias,
            in_features,
        }
    }

    /// The neuron's activation for one input vector.
    ///
    /// # Errors
    /// Returns `GradRustError::InputSizeMismatch` if `inputs` does not hold
    /// exactly `in_features` nodes.
    pub fn activate(
        &self,
        graph: &mut Graph,
        inputs: &[NodeId],
    ) -> Result<NodeId, GradRustError> {
        if inputs.len() != self.in_features {
            return Err(GradRustError::InputSizeMismatch {
                expected: self.in_features,
                actual: inputs.len(),
                operation: "Neuron forward".to_string(),
            });
        }

        let mut acc = self.bias;
        for (&w, &x) in self.weights.iter().zip(inputs) {
            let wx = graph.mul(w, x)?;
            acc = graph.add(acc, wx)?;
        }
        graph.tanh(acc)
    }

    /// Number of input features.
    pub fn in_features(&self) -> usize {
        self.in_features
    }
}

impl Module for Neuron {
    fn forward(
        &self,
        graph: &mut Graph,
        inputs: &[NodeId],
    ) -> Result<Vec<NodeId>, GradRustError> {
        Ok(vec![self.activate(graph, inputs)?])
    }

    /// Weights first, then the bias.
    fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
