use crate::error::GradRustError;
use crate::graph::{Graph, NodeId};
use crate::ops::arithmetic::{add_op, mul_scalar_op};

// --- Forward Operation ---

/// Subtraction, composed as `a + b * (-1)`.
///
/// Not a primitive: it reuses the Add and Mul rules, so no backward rule of
/// its own is recorded. The resulting node's op tag is `Op::Add`.
pub fn sub_op(graph: &mut Graph, a: NodeId, b: NodeId) -> Result<NodeId, GradRustError> {
    let neg_b = mul_scalar_op(graph, b, -1.0)?;
    add_op(graph, a, neg_b)
}

/// Scalar overload: wraps `b` in a fresh leaf, then applies the normal rule.
pub fn sub_scalar_op(graph: &mut Graph, a: NodeId, b: f64) -> Result<NodeId, GradRustError> {
    let b = graph.leaf(b);
    sub_op(graph, a, b)
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
