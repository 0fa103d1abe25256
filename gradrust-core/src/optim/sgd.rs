use std::collections::HashMap;

use crate::error::GradRustError;
use crate::graph::{Graph, NodeId};
use crate::optim::optimizer::Optimizer;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports classical momentum; with momentum 0 the update is the plain
/// `value -= lr * grad`.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<NodeId>,
    lr: f64,
    momentum: f64,
    // Velocity buffers, allocated lazily per parameter.
    velocity: HashMap<NodeId, f64>,
}

impl Sgd {
    /// Creates a new `Sgd` without momentum.
    ///
    /// # Arguments
    /// * `params`: The parameter leaves to optimize (e.g. from
    ///   [`crate::nn::Module::parameters`]).
    /// * `lr`: The learning rate.
    pub fn new(params: Vec<NodeId>, lr: f64) -> Self {
        Self::with_momentum(params, lr, 0.0)
    }

    /// Creates a new `Sgd` with classical momentum.
    pub fn with_momentum(params: Vec<NodeId>, lr: f64, momentum: f64) -> Self {
        Sgd {
            params,
            lr,
            momentum,
            velocity: HashMap::new(),
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.lr
    }

    pub fn set_learning_rate(&mut self, lr: f64) {
        self.lr = lr;
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, graph: &mut Graph) -> Result<(), GradRustError> {
        log::trace!("sgd step over {} parameters", self.params.len());
        for &param in &self.params {
            let grad = graph.node(param)?.grad();
            let update = if self.momentum != 0.0 {
                let v = self.velocity.entry(param).or_insert(0.0);
                *v = self.momentum * *v + grad;
                *v
            } else {
                grad
            };
            let value = graph.value(param);
            graph.set_value(param, value - self.lr * update);
        }
        Ok(())
    }

    fn zero_grad(&self, graph: &mut Graph) {
        for &param in &self.params {
            graph.set_grad(param, 0.0);
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
