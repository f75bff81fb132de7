//! Absolute Gram matrix of derivative samples.

use ndarray::Array2;

use crate::data::DerivativesView;

/// Compute `C = |Xᵗ·X|` for derivatives `X` of shape `[n_samples, n_features]`.
///
/// `C[i][j] = |Σ_m X[m][i]·X[m][j]|`. The absolute value is taken after the
/// sum, so opposite-signed products cancel inside each entry. The result is
/// symmetric with shape `[n_features, n_features]`.
pub fn gram_matrix(derivatives: DerivativesView<'_>) -> Array2<f64> {
    let x = derivatives.view();
    let mut gram = x.t().dot(&x);
    gram.mapv_inplace(f64::abs);
    gram
}

/// Largest `|x|` that is never rescaled. Squares and their sums stay well
/// inside the normal f64 range for any realistic sample count.
const RESCALE_MAX: f64 = 1.0e100;

/// Smallest non-zero `|x|` that is never rescaled.
const RESCALE_MIN: f64 = 1.0e-100;

/// Power-of-two exponent `e` such that `max_abs · 2^e` is close to one.
///
/// Returns 0 when `max_abs` is zero, not finite, or already inside
/// `[RESCALE_MIN, RESCALE_MAX]`, so normal-range inputs are left untouched.
pub(super) fn rescale_exponent(max_abs: f64) -> i32 {
    let usable = max_abs.is_finite() && max_abs > 0.0;
    if !usable || (RESCALE_MIN..=RESCALE_MAX).contains(&max_abs) {
        return 0;
    }
    -(max_abs.log2().round() as i32)
}

/// Compute `|Xᵗ·X|` after multiplying `X` by `2^e`, returning the matrix and `e`.
///
/// Scaling by a power of two is exact, and DerSHAP scores are invariant to a
/// uniform scale, so extreme-magnitude derivatives (that would underflow to a
/// zero Gram matrix or overflow to infinity) get the same normalized result
/// as their unit-scale counterparts. The returned Gram matrix is `2^(2e)`
/// times the one [`gram_matrix`] would give.
pub(super) fn scaled_gram_matrix(derivatives: DerivativesView<'_>) -> (Array2<f64>, i32) {
    let exponent = rescale_exponent(derivatives.max_abs());
    if exponent == 0 {
        return (gram_matrix(derivatives), 0);
    }

    // |e| can reach 1074 for subnormal inputs; 2^1074 is not representable, so
    // apply the factor in two halves that both are.
    let first = 2f64.powi(exponent / 2);
    let second = 2f64.powi(exponent - exponent / 2);
    let x = derivatives.view().mapv(|v| v * first * second);

    let mut gram = x.t().dot(&x);
    gram.mapv_inplace(f64::abs);
    (gram, exponent)
}
