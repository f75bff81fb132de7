//! Seeded derivative generators for tests and benchmarks.

use rand::prelude::*;

use crate::data::DerivativeMatrix;

/// Generate random derivatives in sample-major order.
///
/// Values are uniform in `[min, max]`.
pub fn random_dense_f64(rows: usize, cols: usize, seed: u64, min: f64, max: f64) -> Vec<f64> {
    assert!(max >= min);
    let mut rng = StdRng::seed_from_u64(seed);
    let width = max - min;
    (0..rows * cols)
        .map(|_| min + rng.r#gen::<f64>() * width)
        .collect()
}

/// Create a [`DerivativeMatrix`] of uniform random derivatives.
///
/// # Panics
///
/// Panics if `n_samples` or `n_features` is zero.
pub fn random_derivatives(
    n_samples: usize,
    n_features: usize,
    seed: u64,
    min: f64,
    max: f64,
) -> DerivativeMatrix {
    let data = random_dense_f64(n_samples, n_features, seed, min, max);
    DerivativeMatrix::from_vec(data, n_samples, n_features)
        .expect("n_samples and n_features must be non-zero")
}

/// Derivatives whose per-feature magnitude follows `scales`.
///
/// Each entry is `scales[f] * u` with `u` uniform in `[-1, 1]`. Features with
/// larger scales are more influential, which gives ranking tests a known order.
///
/// # Panics
///
/// Panics if `n_samples` is zero or `scales` is empty.
pub fn scaled_derivatives(n_samples: usize, scales: &[f64], seed: u64) -> DerivativeMatrix {
    let n_features = scales.len();
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..n_samples)
        .flat_map(|_| {
            scales
                .iter()
                .map(|s| s * (rng.r#gen::<f64>() * 2.0 - 1.0))
                .collect::<Vec<_>>()
        })
        .collect();
    DerivativeMatrix::from_vec(data, n_samples, n_features)
        .expect("n_samples and scales must be non-empty")
}
