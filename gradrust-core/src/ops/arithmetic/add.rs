use crate::error::GradRustError;
use crate::graph::{Graph, Node, NodeId, Op};

// --- Backward Operation ---

/// Distributes the upstream gradient to both operands of an addition.
/// The derivative of a sum with respect to each operand is 1.
pub(crate) fn add_backward(nodes: &mut [Node], a: NodeId, b: NodeId, upstream: f64) {
    nodes[a.0].grad += upstream;
    nodes[b.0].grad += upstream;
}

// --- Forward Operation ---

/// Adds two graph nodes, recording `Op::Add` over the operands.
pub fn add_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, GradRustError> {
    let value = graph.node(a)?.value() + graph.node(b)?.value();
    Ok(graph.push(value, Op::Add(a, b), None))
}

/// Scalar overload: wraps `b` in a fresh leaf, then applies the normal rule.
pub fn add_scalar_op(graph: &mut Graph, a: NodeId, b: f64) -> Result<NodeId, GradRustError> {
    let b = graph.leaf(b);
    add_op(graph, a, b)
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
