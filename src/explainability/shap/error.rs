//! Errors reported by DerSHAP computation.

use crate::data::ShapeError;

/// Error from a single DerSHAP computation.
///
/// Every failure is local to one call; no partial result is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DerShapError {
    /// Input is not a usable `M × d` matrix.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Input contains NaN or ±Inf.
    #[error("derivative at sample {sample}, feature {feature} is not finite: {value}")]
    NonFiniteInput {
        sample: usize,
        feature: usize,
        value: f64,
    },

    /// Scores cannot be normalized: their total is zero or not finite.
    ///
    /// Extreme but finite magnitudes are rescaled before the Gram product, so
    /// a zero total means every derivative sample is exactly zero. A NaN or
    /// infinite total only arises from non-finite input with `check_finite`
    /// disabled.
    #[error("total score must be positive and finite to normalize, got {total}")]
    DegenerateInput { total: f64 },
}
