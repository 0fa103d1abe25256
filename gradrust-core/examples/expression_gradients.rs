//! # Gradients of a Hand-Built Expression
//!
//! Builds a single tanh neuron `o = tanh(x1*w1 + x2*w2 + b)` node by node,
//! runs one backward pass and dumps every node in reverse topological order
//! (root first), showing how the gradient flows toward the leaves.
//!
//! Run with: `cargo run --example expression_gradients`

use gradrust_core::autograd::topo_sort;
use gradrust_core::{GradRustError, Graph};

fn main() -> Result<(), GradRustError> {
    let mut graph = Graph::new();

    let x1 = graph.leaf_labeled(2.0, "x1");
    let x2 = graph.leaf_labeled(0.0, "x2");
    let w1 = graph.leaf_labeled(-3.0, "w1");
    let w2 = graph.leaf_labeled(1.0, "w2");
    let b = graph.leaf_labeled(6.881_373_587_019_543, "b");

    let x1w1 = graph.mul(x1, w1)?;
    graph.set_label(x1w1, "x1*w1");
    let x2w2 = graph.mul(x2, w2)?;
    graph.set_label(x2w2, "x2*w2");
    let sum = graph.add(x1w1, x2w2)?;
    graph.set_label(sum, "x1*w1 + x2*w2");
    let n = graph.add(sum, b)?;
    graph.set_label(n, "n");
    let o = graph.tanh(n)?;
    graph.set_label(o, "o");

    graph.backward(o)?;

    let order = topo_sort(&graph, o)?;
    println!("Topo(Count = {}) = {{", order.len());
    for &id in order.iter().rev() {
        println!("\t{}", graph.node(id)?);
    }
    println!("}}");

    Ok(())
}
