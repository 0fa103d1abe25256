use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_dense_output_width() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(0);
    let layer = Dense::new(&mut graph, &mut rng, 3, 4);
    let inputs = [graph.leaf(1.0), graph.leaf(2.0), graph.leaf(3.0)];
    let outputs = layer.forward(&mut graph, &inputs).unwrap();
    assert_eq!(outputs.len(), 4);
}

#[test]
fn test_dense_parameter_count() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(1);
    let layer = Dense::new(&mut graph, &mut rng, 3, 4);
    // out_features * (in_features + 1)
    assert_eq!(layer.parameters().len(), 16);
    assert_eq!(layer.in_features(), 3);
    assert_eq!(layer.out_features(), 4);
}

#[test]
fn test_dense_propagates_arity_mismatch() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(2);
    let layer = Dense::new(&mut graph, &mut rng, 2, 3);
    let inputs = [graph.leaf(1.0)];
    let result = layer.forward(&mut graph, &inputs);
    assert!(matches!(
        result,
        Err(GradRustError::InputSizeMismatch { .. })
    ));
}
