//! # Training a Small MLP
//!
//! The end-to-end demo of the engine:
//! 1. Build an `Mlp(3, [4, 4, 1])` whose parameters live as leaves in one
//!    `Graph`.
//! 2. Each iteration: forward all four samples, sum-of-squares loss,
//!    `zero_grad`, `backward`, SGD step, then rewind the arena to the
//!    parameter checkpoint so the discarded loss graph is reclaimed.
//! 3. Render a carriage-return progress bar while training, then report the
//!    final loss and per-sample predictions.
//!
//! Run with: `cargo run --example train_mlp`

use std::io::Write;

use gradrust_core::model::Mlp;
use gradrust_core::nn::{Module, MseLoss, Reduction};
use gradrust_core::optim::{Optimizer, Sgd};
use gradrust_core::{GradRustError, Graph, NodeId};

const PROGRESS_TICKS: usize = 25;

fn render_progress(done: usize, total: usize) {
    let filled = done * PROGRESS_TICKS / total;
    let mut line = String::from("Progress ||");
    for _ in 0..filled {
        line.push('=');
    }
    for _ in filled..PROGRESS_TICKS {
        line.push('-');
    }
    line.push_str("||\r");
    print!("{}", line);
    let _ = std::io::stdout().flush();
}

fn main() -> Result<(), GradRustError> {
    let mut graph = Graph::new();
    let mut rng = rand::thread_rng();

    let mlp = Mlp::new(&mut graph, &mut rng, 3, &[4, 4, 1])?;
    let loss_fn = MseLoss::new(Reduction::Sum);
    let mut optimizer = Sgd::new(mlp.parameters(), 0.01);
    // Everything after this point is per-iteration scratch.
    let checkpoint = graph.checkpoint();

    let xs: [[f64; 3]; 4] = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys: [f64; 4] = [0.0, -1.0, -1.0, 1.0];

    let iterations = 20_000;
    let mut final_loss = 0.0;
    let mut final_predictions: Vec<f64> = Vec::new();

    for i in 0..iterations {
        let mut predictions = Vec::with_capacity(xs.len());
        let mut targets = Vec::with_capacity(ys.len());
        for (x, &y) in xs.iter().zip(&ys) {
            let inputs: Vec<NodeId> = x.iter().map(|&v| graph.leaf(v)).collect();
            let outputs = mlp.forward(&mut graph, &inputs)?;
            predictions.push(outputs[0]);
            targets.push(graph.leaf(y));
        }
        let loss = loss_fn.calculate(&mut graph, &predictions, &targets)?;

        optimizer.zero_grad(&mut graph);
        graph.backward(loss)?;
        optimizer.step(&mut graph)?;

        render_progress(i + 1, iterations);

        if i == iterations - 1 {
            final_loss = graph.value(loss);
            final_predictions = predictions.iter().map(|&p| graph.value(p)).collect();
        }

        // The loss graph of this iteration is dead now; reclaim it.
        graph.rewind(checkpoint)?;
    }

    println!();
    println!("Loss = {}", final_loss);
    for (j, prediction) in final_predictions.iter().enumerate() {
        println!("Y{} = {}", j, prediction);
    }

    Ok(())
}
