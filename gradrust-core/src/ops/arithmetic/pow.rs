use crate::error::GradRustError;
use crate::graph::{Graph, Node, NodeId, Op};

// --- Backward Operation ---

/// Power rule for a fixed integer exponent:
/// `grad[a] += n * a^(n-1) * upstream`.
///
/// No guards for `n <= 0` with a zero base; IEEE specials (inf/NaN)
/// propagate as ordinary values.
pub(crate) fn pow_backward(nodes: &mut [Node], a: NodeId, n: i32, upstream: f64) {
    let base = nodes[a.0].value;
    nodes[a.0].grad += f64::from(n) * base.powi(n - 1) * upstream;
}

// --- Forward Operation ---

/// Raises a node to a fixed integer exponent, recording `Op::Pow`.
///
/// The exponent is a construction-time constant, not a graph node.
pub fn pow_op(graph: &mut Graph, a: NodeId, n: i32) -> Result<NodeId, GradRustError> {
    let value = graph.node(a)?.value().powi(n);
    Ok(graph.push(value, Op::Pow(a, n), None))
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
