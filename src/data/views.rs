//! Read-only view over derivative samples.

use ndarray::{ArrayView1, ArrayView2};

use super::error::{check_dims, ShapeError};

/// Read-only view into derivative samples.
///
/// Shape: `[n_samples, n_features]`. Any memory layout is accepted (row-major,
/// column-major, or strided slices of a larger array); the algorithms only go
/// through `ndarray` indexing.
///
/// A view always holds at least one sample and one feature.
#[derive(Clone, Copy, Debug)]
pub struct DerivativesView<'a> {
    data: ArrayView2<'a, f64>,
}

impl<'a> DerivativesView<'a> {
    /// Wrap an existing array view.
    ///
    /// # Errors
    ///
    /// [`ShapeError::Empty`] or [`ShapeError::NoFeatures`] for degenerate shapes.
    pub fn new(data: ArrayView2<'a, f64>) -> Result<Self, ShapeError> {
        check_dims(data.nrows(), data.ncols())?;
        Ok(Self { data })
    }

    /// Create from a contiguous slice in sample-major order.
    ///
    /// This is zero-copy.
    ///
    /// Data layout: `[s0_f0, s0_f1, ..., s1_f0, s1_f1, ...]`
    ///
    /// # Errors
    ///
    /// [`ShapeError::LengthMismatch`] if `data.len() != n_samples * n_features`,
    /// plus the errors of [`new`](Self::new).
    pub fn from_slice(
        data: &'a [f64],
        n_samples: usize,
        n_features: usize,
    ) -> Result<Self, ShapeError> {
        let mismatch = ShapeError::LengthMismatch {
            len: data.len(),
            n_samples,
            n_features,
        };
        if n_samples.checked_mul(n_features) != Some(data.len()) {
            return Err(mismatch);
        }
        check_dims(n_samples, n_features)?;
        let view = ArrayView2::from_shape((n_samples, n_features), data).map_err(|_| mismatch)?;
        Ok(Self { data: view })
    }

    /// View a single gradient vector as a one-sample matrix.
    pub fn from_gradient(gradient: &'a [f64]) -> Result<Self, ShapeError> {
        Self::from_slice(gradient, 1, gradient.len())
    }

    /// Wrap a view whose shape is already known to be valid.
    #[inline]
    pub(super) fn from_validated(data: ArrayView2<'a, f64>) -> Self {
        debug_assert!(data.nrows() > 0 && data.ncols() > 0);
        Self { data }
    }

    /// Number of samples (rows).
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.data.nrows()
    }

    /// Number of features (columns).
    #[inline]
    pub fn n_features(&self) -> usize {
        self.data.ncols()
    }

    /// Derivative at (sample, feature).
    #[inline]
    pub fn get(&self, sample: usize, feature: usize) -> f64 {
        self.data[[sample, feature]]
    }

    /// All feature derivatives of one sample.
    #[inline]
    pub fn sample(&self, sample: usize) -> ArrayView1<'_, f64> {
        self.data.row(sample)
    }

    /// All sample derivatives of one feature.
    ///
    /// Strided for sample-major storage.
    #[inline]
    pub fn feature(&self, feature: usize) -> ArrayView1<'_, f64> {
        self.data.column(feature)
    }

    /// Get the underlying array view.
    pub fn view(&self) -> ArrayView2<'a, f64> {
        self.data
    }

    /// Largest absolute derivative, ignoring NaN. Zero if every entry is zero.
    pub fn max_abs(&self) -> f64 {
        self.data.fold(0.0_f64, |max, &v| max.max(v.abs()))
    }

    /// Locate the first NaN or infinite entry, scanning samples in order.
    ///
    /// Returns `(sample, feature, value)`.
    pub fn find_non_finite(&self) -> Option<(usize, usize, f64)> {
        self.data
            .indexed_iter()
            .find(|(_, v)| !v.is_finite())
            .map(|((sample, feature), &value)| (sample, feature, value))
    }
}
