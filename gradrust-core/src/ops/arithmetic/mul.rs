use crate::error::GradRustError;
use crate::graph::{Graph, Node, NodeId, Op};

// --- Backward Operation ---

/// Product rule: each operand receives the other operand's forward value
/// times the upstream gradient. Values are read before either grad is
/// touched; the operands may alias (`x * x`).
pub(crate) fn mul_backward(nodes: &mut [Node], a: NodeId, b: NodeId, upstream: f64) {
    let value_a = nodes[a.0].value;
    let value_b = nodes[b.0].value;
    nodes[a.0].grad += value_b * upstream;
    nodes[b.0].grad += value_a * upstream;
}

// --- Forward Operation ---

/// Multiplies two graph nodes, recording `Op::Mul` over the operands.
pub fn mul_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, GradRustError> {
    let value = graph.node(a)?.value() * graph.node(b)?.value();
    Ok(graph.push(value, Op::Mul(a, b), None))
}

/// Scalar overload: wraps `b` in a fresh leaf, then applies the normal rule.
pub fn mul_scalar_op(graph: &mut Graph, a: NodeId, b: f64) -> Result<NodeId, GradRustError> {
    let b = graph.leaf(b);
    mul_op(graph, a, b)
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
