//! dershap: derivative-based feature importance for Rust.
//!
//! Computes DerSHAP scores from sampled partial derivatives of a model's
//! output with respect to its inputs. Given `M` gradient samples over `d`
//! inputs, the result is one non-negative score per input, summing to one.
//!
//! # Key Types
//!
//! - [`DerivativeMatrix`] / [`DerivativesView`] - Gradient samples, `[n_samples, n_features]`
//! - [`DerShapAggregator`] / [`DerShapConfig`] - Computation and its configuration
//! - [`DerShapValues`] - Normalized scores with ranking helpers
//! - [`DerShapError`] - Shape, non-finite, and degenerate-input failures
//!
//! # Example
//!
//! ```
//! use dershap::{dershap, DerivativeMatrix};
//!
//! let derivatives = DerivativeMatrix::from_rows(&[
//!     [0.9, 0.1, -0.2],
//!     [1.1, -0.1, 0.3],
//!     [1.0, 0.0, 0.1],
//! ])?;
//! let scores = dershap(derivatives.view())?;
//!
//! assert_eq!(scores.n_features(), 3);
//! assert_eq!(scores.top_k(1)[0].0, 0);
//! # Ok::<(), dershap::DerShapError>(())
//! ```
//!
//! Estimating the derivatives themselves (finite differences, autodiff) is
//! left to the caller.

// Re-export approx traits for users who want to compare scores
pub use approx;

pub mod data;
pub mod explainability;
pub mod testing;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// Input data
pub use data::{DerivativeMatrix, DerivativesView, ShapeError};

// Computation and results
pub use explainability::{
    dershap, DerShapAggregator, DerShapConfig, DerShapError, DerShapValues, ScoreRule,
};

// Shared utilities
pub use utils::{run_with_threads, Parallelism};
