use crate::autograd::topo::topo_sort;
use crate::error::GradRustError;
use crate::graph::{Graph, NodeId, Op};
use crate::ops::activation::tanh;
use crate::ops::arithmetic::{add, mul, pow};

/// Executes one reverse-mode differentiation pass rooted at `root`.
///
/// Computes the post-order ancestor sequence of `root`, reverses it, seeds
/// `grad[root] = 1.0` (the derivative of the root with respect to itself),
/// then replays each node's local gradient rule in that order, accumulating
/// into parent gradients with `+=`.
///
/// Gradients are never reset here: a node may legitimately accumulate
/// across multiple backward calls over roots sharing leaves. Callers
/// wanting a fresh pass zero the relevant gradients first, e.g. via
/// [`Graph::zero_grad`].
///
/// Postcondition: assuming all gradients started at 0, every node reachable
/// from `root` holds the partial derivative of `root`'s value with respect
/// to its own value.
pub fn backward(graph: &mut Graph, root: NodeId) -> Result<(), GradRustError> {
    let order = topo_sort(graph, root)?;
    log::trace!(
        "backward pass over {} nodes, root {:?}",
        order.len(),
        root
    );

    graph.nodes[root.0].grad = 1.0;
    for &id in order.iter().rev() {
        let upstream = graph.nodes[id.0].grad;
        match graph.nodes[id.0].op {
            Op::Leaf => {}
            Op::Add(a, b) => add::add_backward(&mut graph.nodes, a, b, upstream),
            Op::Mul(a, b) => mul::mul_backward(&mut graph.nodes, a, b, upstream),
            Op::Tanh(a) => {
                let y = graph.nodes[id.0].value;
                tanh::tanh_backward(&mut graph.nodes, a, y, upstream);
            }
            Op::Pow(a, n) => pow::pow_backward(&mut graph.nodes, a, n, upstream),
        }
    }
    Ok(())
}

// --- Tests ---
#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
