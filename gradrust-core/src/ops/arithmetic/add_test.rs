use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_add_forward() {
    let mut graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(3.0);
    let c = add_op(&mut graph, a, b).unwrap();
    assert_eq!(graph.value(c), 5.0);
    assert_eq!(*graph.node(c).unwrap().op(), Op::Add(a, b));
    // Operands untouched
    assert_eq!(graph.value(a), 2.0);
    assert_eq!(graph.value(b), 3.0);
}

#[test]
fn test_add_backward() -> Result<(), GradRustError> {
    let mut graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(-3.5);
    let c = add_op(&mut graph, a, b)?;
    graph.backward(c)?;
    assert_relative_eq!(graph.grad(a), 1.0);
    assert_relative_eq!(graph.grad(b), 1.0);
    assert_relative_eq!(graph.grad(c), 1.0);
    Ok(())
}

#[test]
fn test_add_same_operand_twice() -> Result<(), GradRustError> {
    // x + x: both contributions accumulate into the single operand.
    let mut graph = Graph::new();
    let x = graph.leaf(1.5);
    let y = add_op(&mut graph, x, x)?;
    assert_eq!(graph.value(y), 3.0);
    graph.backward(y)?;
    assert_relative_eq!(graph.grad(x), 2.0);
    Ok(())
}

#[test]
fn test_add_scalar_wraps_leaf() {
    let mut graph = Graph::new();
    let a = graph.leaf(2.0);
    let c = add_scalar_op(&mut graph, a, 4.0).unwrap();
    // The raw number became a leaf of its own: a, the wrapper, the result.
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.value(c), 6.0);
    match graph.node(c).unwrap().op() {
        Op::Add(_, b) => {
            assert_eq!(graph.value(*b), 4.0);
            assert_eq!(*graph.node(*b).unwrap().op(), Op::Leaf);
        }
        other => panic!("expected Op::Add, got {:?}", other),
    }
}

#[test]
fn test_add_invalid_operand() {
    let mut graph = Graph::new();
    let a = graph.leaf(1.0);
    let bogus = NodeId(7);
    let result = add_op(&mut graph, a, bogus);
    assert!(matches!(
        result,
        Err(GradRustError::InvalidNode { index: 7, nodes: 1 })
    ));
}

#[test]
fn test_add_grad_check() {
    check_grad(
        |graph, leaves| add_op(graph, leaves[0], leaves[1]),
        &[1.3, -2.7],
        1e-4,
        1e-4,
    )
    .unwrap();
}
