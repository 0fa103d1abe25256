use approx::relative_eq;
use thiserror::Error;

use crate::error::GradRustError;
use crate::graph::{Graph, NodeId};

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical} != numerical grad {numerical}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Forward pass execution failed during gradient check: {0}")]
    ForwardPassError(GradRustError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(GradRustError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `build` receives a fresh graph together with one leaf id per entry of
/// `inputs` and must return the root of the expression under test. The
/// analytical gradients come from a single forward + backward pass; each
/// numerical gradient re-evaluates the expression at `x ± epsilon` on its
/// own graph, so no state leaks between evaluations.
pub fn check_grad<F>(
    build: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, GradRustError>,
{
    let eval = |values: &[f64]| -> Result<(Graph, Vec<NodeId>, NodeId), GradCheckError> {
        let mut graph = Graph::new();
        let leaves: Vec<NodeId> = values.iter().map(|&v| graph.leaf(v)).collect();
        let root = build(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
        Ok((graph, leaves, root))
    };

    // --- Analytical pass ---
    let (mut graph, leaves, root) = eval(inputs)?;
    graph
        .backward(root)
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<f64> = leaves.iter().map(|&id| graph.grad(id)).collect();

    // --- Numerical pass, one central difference per input ---
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let mut shifted = inputs.to_vec();
        shifted[i] = inputs[i] + epsilon;
        let (graph_plus, _, root_plus) = eval(&shifted)?;
        let loss_plus = graph_plus.value(root_plus);

        shifted[i] = inputs[i] - epsilon;
        let (graph_minus, _, root_minus) = eval(&shifted)?;
        let loss_minus = graph_minus.value(root_minus);

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical: analytical_grad,
                numerical: numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

// --- Tests ---
#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
