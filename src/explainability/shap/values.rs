//! DerSHAP values container.
//!
//! Stores normalized per-feature importance with ranking and verification
//! utilities.

use serde::{Deserialize, Serialize};

/// Normalized DerSHAP importance, one value per feature.
///
/// Values are in input column order, non-negative, and sum to one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerShapValues {
    /// Normalized scores, indexed by feature
    values: Vec<f64>,
    /// Sum of the unnormalized scores (the normalization denominator)
    total: f64,
    /// Derivatives were multiplied by `2^rescale_exponent` before the Gram product
    #[serde(default)]
    rescale_exponent: i32,
}

impl DerShapValues {
    pub(super) fn new(values: Vec<f64>, total: f64) -> Self {
        Self { values, total, rescale_exponent: 0 }
    }

    pub(super) fn with_rescale_exponent(mut self, rescale_exponent: i32) -> Self {
        self.rescale_exponent = rescale_exponent;
        self
    }

    /// Number of features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.values.len()
    }

    /// Normalized score of one feature.
    #[inline]
    pub fn get(&self, feature: usize) -> f64 {
        self.values[feature]
    }

    /// All normalized scores in feature order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sum of the scores before normalization.
    ///
    /// Multiply a normalized value by this to recover its raw score. When
    /// [`rescale_exponent`](Self::rescale_exponent) is non-zero the total is in
    /// rescaled units: the raw total is `total · 2^(-2·rescale_exponent)`, which
    /// may not be representable in f64.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Power of two the derivatives were scaled by to keep the Gram matrix
    /// in f64 range. Zero unless the input magnitudes were extreme.
    pub fn rescale_exponent(&self) -> i32 {
        self.rescale_exponent
    }

    /// Features sorted by descending score as `(feature, score)`.
    ///
    /// Ties keep the lower feature index first.
    pub fn ranked(&self) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = self.values.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }

    /// The `k` most important features. Returns all features if `k` exceeds the count.
    pub fn top_k(&self, k: usize) -> Vec<(usize, f64)> {
        let mut ranked = self.ranked();
        ranked.truncate(k);
        ranked
    }

    /// Check that values are non-negative and sum to one within `tolerance`.
    pub fn verify(&self, tolerance: f64) -> bool {
        let sum: f64 = self.values.iter().sum();
        self.values.iter().all(|&v| v >= 0.0) && (sum - 1.0).abs() <= tolerance
    }

    /// Unwrap into the normalized scores.
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}
