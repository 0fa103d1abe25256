#[cfg(test)]
mod tests {
    use crate::autograd::grad_check::{check_grad, GradCheckError};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_check_grad_composite_expression() {
        // tanh((a*b + c)^2) exercises every operator at once.
        check_grad(
            |graph, leaves| {
                let product = graph.mul(leaves[0], leaves[1])?;
                let sum = graph.add(product, leaves[2])?;
                let squared = graph.pow(sum, 2)?;
                graph.tanh(squared)
            },
            &[0.4, -0.8, 0.3],
            1e-4,
            1e-4,
        )
        .unwrap();
    }

    #[test]
    fn test_check_grad_randomized_inputs() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let inputs: Vec<f64> = (0..2).map(|_| rng.gen_range(-2.0..2.0)).collect();
            check_grad(
                |graph, leaves| {
                    let product = graph.mul(leaves[0], leaves[1])?;
                    let shifted = graph.add_scalar(product, 0.5)?;
                    graph.tanh(shifted)
                },
                &inputs,
                1e-4,
                1e-4,
            )
            .unwrap();
        }
    }

    #[test]
    fn test_check_grad_reports_non_finite_analytical_grad() {
        // x^-1 at x = 0: the derivative formula produces an infinity.
        let result = check_grad(
            |graph, leaves| graph.pow(leaves[0], -1),
            &[0.0],
            1e-4,
            1e-4,
        );
        assert!(matches!(
            result,
            Err(GradCheckError::AnalyticalGradNaNOrInfinite { input_index: 0, .. })
        ));
    }

    #[test]
    fn test_check_grad_wraps_forward_errors() {
        // Reference an id the fresh graph does not contain.
        let result = check_grad(
            |graph, leaves| {
                let outside = crate::graph::NodeId(99);
                graph.add(leaves[0], outside)
            },
            &[1.0],
            1e-4,
            1e-4,
        );
        assert!(matches!(result, Err(GradCheckError::ForwardPassError(_))));
    }
}
