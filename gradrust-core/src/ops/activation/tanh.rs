use crate::error::GradRustError;
use crate::graph::{Graph, Node, NodeId, Op};

// --- Backward Operation ---

/// Derivative of tanh, expressed through the forward output `y`:
/// `grad[a] += (1 - y^2) * upstream`.
pub(crate) fn tanh_backward(nodes: &mut [Node], a: NodeId, y: f64, upstream: f64) {
    nodes[a.0].grad += (1.0 - y * y) * upstream;
}

// --- Forward Operation ---

/// Applies the hyperbolic tangent, recording `Op::Tanh` over the operand.
pub fn tanh_op(graph: &mut Graph, a: NodeId) -> Result<NodeId, GradRustError> {
    let y = graph.node(a)?.value().tanh();
    Ok(graph.push(y, Op::Tanh(a), None))
}

// --- Tests ---
#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
