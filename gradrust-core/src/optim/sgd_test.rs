#[cfg(test)]
mod tests {
    use crate::error::GradRustError;
    use crate::graph::Graph;
    use crate::optim::{Optimizer, Sgd};
    use approx::assert_relative_eq;

    #[test]
    fn test_sgd_step_applies_update_rule() -> Result<(), GradRustError> {
        let mut graph = Graph::new();
        let p = graph.leaf(1.0);
        graph.set_grad(p, 2.0);

        let mut sgd = Sgd::new(vec![p], 0.1);
        sgd.step(&mut graph)?;
        // value -= lr * grad
        assert_relative_eq!(graph.value(p), 0.8);
        Ok(())
    }

    #[test]
    fn test_sgd_zero_grad_only_touches_params() {
        let mut graph = Graph::new();
        let p = graph.leaf(1.0);
        let other = graph.leaf(2.0);
        graph.set_grad(p, 5.0);
        graph.set_grad(other, 7.0);

        let sgd = Sgd::new(vec![p], 0.1);
        sgd.zero_grad(&mut graph);
        assert_eq!(graph.grad(p), 0.0);
        assert_eq!(graph.grad(other), 7.0);
    }

    #[test]
    fn test_sgd_momentum_accumulates_velocity() -> Result<(), GradRustError> {
        let mut graph = Graph::new();
        let p = graph.leaf(0.0);

        let mut sgd = Sgd::with_momentum(vec![p], 1.0, 0.5);
        graph.set_grad(p, 1.0);
        sgd.step(&mut graph)?;
        // v1 = 1, value = -1
        assert_relative_eq!(graph.value(p), -1.0);

        graph.set_grad(p, 1.0);
        sgd.step(&mut graph)?;
        // v2 = 0.5 * 1 + 1 = 1.5, value = -2.5
        assert_relative_eq!(graph.value(p), -2.5);
        Ok(())
    }

    #[test]
    fn test_sgd_step_with_stale_param_id_errors() {
        let mut graph = Graph::new();
        let p = graph.leaf(1.0);
        let checkpoint = graph.checkpoint();
        let stale = graph.leaf(2.0);
        graph.rewind(checkpoint).unwrap();

        let mut sgd = Sgd::new(vec![p, stale], 0.1);
        let result = sgd.step(&mut graph);
        assert!(matches!(result, Err(GradRustError::InvalidNode { .. })));
    }
}
