use crate::error::GradRustError;
use crate::graph::{Graph, NodeId};

/// Specifies the reduction to apply to the per-sample squared errors:
/// `Sum` leaves the raw total, `Mean` divides by the sample count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduction {
    Mean,
    Sum,
}

/// Squared-error loss between predictions and targets.
///
/// Builds `Σ (targetᵢ - predictionᵢ)²` (optionally divided by `n`) out of
/// the primitive graph operators, so the loss node is differentiable like
/// any other node and `backward` on it fills the parameter gradients.
#[derive(Debug, Clone)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    /// Creates a new `MseLoss` with the given reduction.
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    /// Computes the loss node over parallel prediction/target slices.
    ///
    /// # Errors
    /// * `InputSizeMismatch` if the slices differ in length.
    /// * `EmptyInput` if there are no samples.
    pub fn calculate(
        &self,
        graph: &mut Graph,
        predictions: &[NodeId],
        targets: &[NodeId],
    ) -> Result<NodeId, GradRustError> {
        if predictions.len() != targets.len() {
            return Err(GradRustError::InputSizeMismatch {
                expected: targets.len(),
                actual: predictions.len(),
                operation: "MseLoss calculate".to_string(),
            });
        }

        let mut pairs = predictions.iter().zip(targets);
        let mut total = match pairs.next() {
            Some((&prediction, &target)) => {
                let diff = graph.sub(target, prediction)?;
                graph.pow(diff, 2)?
            }
            None => {
                return Err(GradRustError::EmptyInput {
                    operation: "MseLoss calculate".to_string(),
                })
            }
        };
        for (&prediction, &target) in pairs {
            let diff = graph.sub(target, prediction)?;
            let squared = graph.pow(diff, 2)?;
            total = graph.add(total, squared)?;
        }

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => graph.mul_scalar(total, 1.0 / predictions.len() as f64),
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
