//! Owned derivative matrix.

use ndarray::Array2;

use super::error::{check_dims, ShapeError};
use super::views::DerivativesView;

/// Owned derivative samples with sample-major layout.
///
/// Shape: `[n_samples, n_features]`. Each row is one gradient (or Jacobian row)
/// evaluation; each column is one input feature.
///
/// # Example
///
/// ```
/// use dershap::data::DerivativeMatrix;
///
/// let rows = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
/// let matrix = DerivativeMatrix::from_rows(&rows).unwrap();
///
/// assert_eq!(matrix.n_samples(), 2);
/// assert_eq!(matrix.n_features(), 2);
/// assert_eq!(matrix.view().get(1, 1), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DerivativeMatrix(Array2<f64>);

impl DerivativeMatrix {
    /// Take ownership of an existing array.
    pub fn from_array(array: Array2<f64>) -> Result<Self, ShapeError> {
        check_dims(array.nrows(), array.ncols())?;
        Ok(Self(array))
    }

    /// Create from a flat Vec in sample-major (row-major) order.
    ///
    /// # Errors
    ///
    /// [`ShapeError::LengthMismatch`] if `data.len() != n_samples * n_features`.
    pub fn from_vec(
        data: Vec<f64>,
        n_samples: usize,
        n_features: usize,
    ) -> Result<Self, ShapeError> {
        let len = data.len();
        let mismatch = ShapeError::LengthMismatch { len, n_samples, n_features };
        if n_samples.checked_mul(n_features) != Some(len) {
            return Err(mismatch);
        }
        check_dims(n_samples, n_features)?;
        let array = Array2::from_shape_vec((n_samples, n_features), data).map_err(|_| mismatch)?;
        Ok(Self(array))
    }

    /// Create from per-sample rows.
    ///
    /// The first row fixes the feature count; every other row must match it.
    ///
    /// # Errors
    ///
    /// - [`ShapeError::Empty`] if `rows` is empty
    /// - [`ShapeError::NoFeatures`] if the first row is empty
    /// - [`ShapeError::Ragged`] for the first row with a different length
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let n_samples = rows.len();
        let n_features = rows.first().map_or(0, |r| r.as_ref().len());
        check_dims(n_samples, n_features)?;

        let mut data = Vec::with_capacity(n_samples * n_features);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != n_features {
                return Err(ShapeError::Ragged {
                    row,
                    expected: n_features,
                    found: values.len(),
                });
            }
            data.extend_from_slice(values);
        }

        Self::from_vec(data, n_samples, n_features)
    }

    /// Number of samples (rows).
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.0.nrows()
    }

    /// Number of features (columns).
    #[inline]
    pub fn n_features(&self) -> usize {
        self.0.ncols()
    }

    /// Borrow as a [`DerivativesView`].
    #[inline]
    pub fn view(&self) -> DerivativesView<'_> {
        DerivativesView::from_validated(self.0.view())
    }

    /// Borrow the underlying array.
    pub fn as_array(&self) -> &Array2<f64> {
        &self.0
    }

    /// Unwrap into the underlying array.
    pub fn into_array(self) -> Array2<f64> {
        self.0
    }
}

impl<'a> From<&'a DerivativeMatrix> for DerivativesView<'a> {
    fn from(matrix: &'a DerivativeMatrix) -> Self {
        matrix.view()
    }
}
