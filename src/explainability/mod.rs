//! Explainability module.
//!
//! Provides derivative-based feature importance (DerSHAP).
//!
//! # DerSHAP
//!
//! Given `M` sampled gradients of a model output with respect to its `d`
//! inputs, DerSHAP produces one normalized importance score per input:
//!
//! 1. **Gram**: `C = |Xᵗ·X|`, elementwise absolute value after the product
//! 2. **Reduce**: `score[i] = ½·C[i][i] + ½·cross(i)` where `cross` is chosen by
//!    the [`ScoreRule`]
//! 3. **Normalize**: divide by the total so scores sum to one
//!
//! # Example
//!
//! ```
//! use dershap::data::DerivativeMatrix;
//! use dershap::explainability::dershap;
//!
//! let matrix = DerivativeMatrix::from_rows(&[[1.0, 0.0], [0.0, 1.0]]).unwrap();
//! let scores = dershap(matrix.view()).unwrap();
//!
//! assert!((scores.get(0) - 1.0 / 3.0).abs() < 1e-12);
//! assert!((scores.get(1) - 2.0 / 3.0).abs() < 1e-12);
//! ```

mod shap;

pub use shap::{
    dershap, gram_matrix, normalize, raw_scores, DerShapAggregator, DerShapConfig,
    DerShapError, DerShapValues, ScoreRule,
};
