use rand::Rng;

use crate::error::GradRustError;
use crate::graph::{Graph, NodeId};
use crate::nn::layers::Dense;
use crate::nn::module::Module;

/// A multi-layer perceptron: a chain of [`Dense`] layers, the output of
/// each feeding the next.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Dense>,
}

impl Mlp {
    /// Builds an MLP mapping `in_features` inputs through the given layer
    /// sizes, e.g. `Mlp::new(graph, rng, 3, &[4, 4, 1])` for two hidden
    /// layers of 4 and a single output.
    ///
    /// # Errors
    /// Returns `GradRustError::EmptyNetwork` if `layer_sizes` is empty.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        rng: &mut R,
        in_features: usize,
        layer_sizes: &[usize],
    ) -> Result<Self, GradRustError> {
        if layer_sizes.is_empty() {
            return Err(GradRustError::EmptyNetwork);
        }

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut width = in_features;
        for &next_width in layer_sizes {
            layers.push(Dense::new(graph, rng, width, next_width));
            width = next_width;
        }

        let mlp = Mlp { layers };
        log::debug!(
            "built MLP {} -> {:?} with {} parameters",
            in_features,
            layer_sizes,
            mlp.parameters().len()
        );
        Ok(mlp)
    }

    pub fn layers(&self) -> &[Dense] {
        &self.layers
    }
}

impl Module for Mlp {
    fn forward(
        &self,
        graph: &mut Graph,
        inputs: &[NodeId],
    ) -> Result<Vec<NodeId>, GradRustError> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(graph, &activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
