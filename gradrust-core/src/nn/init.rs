use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::GradRustError;
use crate::graph::{Graph, NodeId};

/// Creates a parameter leaf drawn uniformly from `[low, high)`.
pub fn uniform<R: Rng + ?Sized>(graph: &mut Graph, rng: &mut R, low: f64, high: f64) -> NodeId {
    graph.leaf(rng.gen_range(low..high))
}

/// Creates a parameter leaf drawn from a normal distribution.
///
/// # Errors
/// Returns `GradRustError::InvalidDistribution` if `std_dev` is not a valid
/// standard deviation (negative or non-finite).
pub fn normal<R: Rng + ?Sized>(
    graph: &mut Graph,
    rng: &mut R,
    mean: f64,
    std_dev: f64,
) -> Result<NodeId, GradRustError> {
    let dist = Normal::new(mean, std_dev)
        .map_err(|e| GradRustError::InvalidDistribution(e.to_string()))?;
    Ok(graph.leaf(dist.sample(rng)))
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
