use rand::Rng;

use crate::error::GradRustError;
use crate::graph::{Graph, NodeId};
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;

/// A fully-connected layer: `out_features` independent [`Neuron`]s over one
/// shared input vector.
#[derive(Debug)]
pub struct Dense {
    neurons: Vec<Neuron>,
    in_features: usize,
    out_features: usize,
}

impl Dense {
    /// Creates a new Dense layer.
    ///
    /// # Arguments
    /// * `graph` - Graph receiving the parameter leaves.
    /// * `rng` - Source of randomness for initialization.
    /// * `in_features` - Size of each input sample.
    /// * `out_features` - Size of each output sample.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        rng: &mut R,
        in_features: usize,
        out_features: usize,
    ) -> Self {
        let neurons = (0..out_features)
            .map(|_| Neuron::new(graph, rng, in_features))
            .collect();
        Dense {
            neurons,
            in_features,
            out_features,
        }
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }
}

impl Module for Dense {
    fn forward(
        &self,
        graph: &mut Graph,
        inputs: &[NodeId],
    ) -> Result<Vec<NodeId>, GradRustError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(graph, inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "dense_test.rs"]
mod tests;
