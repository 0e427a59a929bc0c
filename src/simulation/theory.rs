//! Exact success probabilities, for comparison with the Monte Carlo estimate.

use crate::simulation::strategy::Strategy;

pub fn theoretical_success_probability(
    strategy: Strategy,
    prisoners: usize,
    boxes_to_check: usize,
) -> f64 {
    match strategy {
        Strategy::Naive => naive_success_probability(prisoners, boxes_to_check),
        Strategy::Efficient => efficient_success_probability(prisoners, boxes_to_check),
    }
}

/// Every prisoner independently opens a uniform `min(K, P)`-subset of the `P` boxes.
pub fn naive_success_probability(prisoners: usize, boxes_to_check: usize) -> f64 {
    if prisoners == 0 {
        return 1.0;
    }
    let per_prisoner = boxes_to_check.min(prisoners) as f64 / prisoners as f64;
    per_prisoner.powi(prisoners as i32)
}

/// Probability that a uniform permutation of `prisoners` has no cycle longer than
/// `boxes_to_check`: q(0) = 1, q(n) = (1/n) * sum over l in 1..=min(n, K) of q(n - l).
pub fn efficient_success_probability(prisoners: usize, boxes_to_check: usize) -> f64 {
    let mut q = vec![0.0f64; prisoners + 1];
    q[0] = 1.0;
    for n in 1..=prisoners {
        let longest = n.min(boxes_to_check);
        let sum: f64 = (1..=longest).map(|length| q[n - length]).sum();
        q[n] = sum / n as f64;
    }
    q[prisoners]
}
