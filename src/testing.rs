//! Testing utilities for dershap.
//!
//! This module provides common assertion helpers and seeded data generators
//! that can be used in unit tests, integration tests, and benchmarks.
//!
//! # Usage
//!
//! ```ignore
//! use dershap::testing::{assert_scores_eq, DEFAULT_TOLERANCE};
//! use dershap::testing::data::random_derivatives;
//! ```

pub mod data;

use approx::AbsDiffEq;

use crate::explainability::DerShapValues;

// =============================================================================
// Constants
// =============================================================================

/// Default tolerance for comparing normalized scores (values are O(1)).
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

// =============================================================================
// Floating Point Assertions
// =============================================================================

/// Assert that two f64 values are approximately equal.
///
/// Uses absolute difference comparison with the given tolerance.
///
/// # Examples
///
/// ```
/// # use dershap::assert_approx_eq;
/// assert_approx_eq!(1.0f64, 1.0001f64, 0.001);
/// ```
///
/// # Panics
///
/// Panics if the absolute difference exceeds tolerance.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let left_val: f64 = $left;
        let right_val: f64 = $right;
        let tol: f64 = $tolerance;
        let diff = (left_val - right_val).abs();
        if !(diff <= tol) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`\n right: `{:?}`\n  diff: `{:?}` > tolerance `{:?}`",
                left_val, right_val, diff, tol
            );
        }
    }};
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {{
        let left_val: f64 = $left;
        let right_val: f64 = $right;
        let tol: f64 = $tolerance;
        let diff = (left_val - right_val).abs();
        if !(diff <= tol) {
            panic!(
                "assertion failed: `(left ≈ right)` - {}\n  left: `{:?}`\n right: `{:?}`\n  diff: `{:?}` > tolerance `{:?}`",
                format_args!($($arg)+), left_val, right_val, diff, tol
            );
        }
    }};
}

/// Assert that two score slices are approximately equal, element by element.
///
/// # Panics
///
/// Panics on length mismatch or if any pair differs by more than `tolerance`.
pub fn assert_scores_eq(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch - got {}, expected {}",
        actual.len(),
        expected.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            a.abs_diff_eq(e, tolerance),
            "feature {i}: {a} ≠ {e} (diff={}, tolerance={tolerance})",
            (a - e).abs()
        );
    }
}

/// Assert that DerSHAP values are non-negative and sum to one.
///
/// # Panics
///
/// Panics naming the first offending feature, or the sum.
pub fn assert_normalized(values: &DerShapValues, tolerance: f64) {
    for (i, &v) in values.values().iter().enumerate() {
        assert!(v >= 0.0, "feature {i}: score {v} is negative");
    }
    let sum: f64 = values.values().iter().sum();
    assert!(
        sum.abs_diff_eq(&1.0, tolerance),
        "scores sum to {sum}, expected 1 (tolerance={tolerance})"
    );
}
