//! Common test utilities for grid-creator integration tests.
#![allow(dead_code)]

use grid_creator::*;
use rand::prelude::*;

/// Feature values from the Fibonacci-like scenario, with one duplicate.
pub const FIBONACCI: [f32; 10] = [1.0, 2.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0];

/// Exponentially distributed values: dense near zero, long right tail.
pub fn create_skewed_feature(num_samples: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_samples)
        .map(|_| {
            let u: f64 = rng.gen_range(1e-9..1.0);
            (-u.ln() * 10.0) as f32
        })
        .collect()
}

/// Uniformly distributed values rounded to one decimal, so duplicates occur.
pub fn create_rounded_feature(num_samples: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_samples)
        .map(|_| (rng.gen_range(-5.0f32..5.0) * 10.0).round() / 10.0)
        .collect()
}

/// Sorted copy of `values`.
pub fn sorted(values: &[f32]) -> Vec<f32> {
    let mut copy = values.to_vec();
    copy.sort_by(|a, b| a.total_cmp(b));
    copy
}

/// Assert the border-set invariant with a readable message.
pub fn assert_valid_borders(borders: &[f32], context: &str) {
    assert!(
        is_valid_border_set(borders),
        "{}: borders not strictly increasing: {:?}",
        context,
        borders
    );
}
