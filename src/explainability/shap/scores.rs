//! Per-feature score reduction and normalization.

use ndarray::{Array1, ArrayView2};
use serde::{Deserialize, Serialize};

use super::error::DerShapError;
use super::values::DerShapValues;

/// How the cross-sensitivity half of each score is formed from a Gram row.
///
/// Every rule starts from half the self-sensitivity, `½·C[i][i]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRule {
    /// Add `½·C[i][d-1]`, the entry in the last feature's column.
    ///
    /// This is the published DerSHAP behavior and the default. The last feature
    /// is distinguished, so reordering columns can change the scores unless the
    /// last column stays in place.
    #[default]
    LastColumn,

    /// Add `½·mean_j C[i][j]`, the average co-sensitivity of the row.
    ///
    /// Invariant under any column permutation. Produces different numbers from
    /// [`LastColumn`](Self::LastColumn); opt in explicitly.
    RowMean,
}

/// Reduce an absolute Gram matrix to one unnormalized score per feature.
///
/// `gram` must be square `[d, d]`. An empty matrix yields an empty vector.
pub fn raw_scores(gram: ArrayView2<'_, f64>, rule: ScoreRule) -> Array1<f64> {
    debug_assert_eq!(gram.nrows(), gram.ncols(), "gram matrix must be square");
    let n_features = gram.nrows();
    let Some(last) = n_features.checked_sub(1) else {
        return Array1::zeros(0);
    };

    gram.rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let cross = match rule {
                ScoreRule::LastColumn => row[last],
                ScoreRule::RowMean => row.sum() / n_features as f64,
            };
            0.5 * row[i] + 0.5 * cross
        })
        .collect()
}

/// Divide each score by the total so the result sums to one.
///
/// # Errors
///
/// [`DerShapError::DegenerateInput`] if the total is zero, negative, or not
/// finite. Never returns NaN entries.
pub fn normalize(scores: Array1<f64>) -> Result<DerShapValues, DerShapError> {
    let total = scores.sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(DerShapError::DegenerateInput { total });
    }

    let values = scores.iter().map(|s| s / total).collect();
    Ok(DerShapValues::new(values, total))
}
