//! Shape validation errors for derivative matrices.

/// Derivative data does not describe a non-empty rectangular matrix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// No samples were provided.
    #[error("derivative matrix has no samples")]
    Empty,

    /// Samples were provided but they have zero features.
    #[error("derivative matrix has no features")]
    NoFeatures,

    /// A row's length differs from the first row's.
    #[error("row {row} has {found} features, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Flat buffer length does not match the requested shape.
    #[error("buffer of length {len} cannot hold {n_samples} samples × {n_features} features")]
    LengthMismatch {
        len: usize,
        n_samples: usize,
        n_features: usize,
    },
}

/// Check that a `[n_samples, n_features]` shape is usable.
pub(super) fn check_dims(n_samples: usize, n_features: usize) -> Result<(), ShapeError> {
    if n_samples == 0 {
        return Err(ShapeError::Empty);
    }
    if n_features == 0 {
        return Err(ShapeError::NoFeatures);
    }
    Ok(())
}
