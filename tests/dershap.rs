//! Integration tests for DerSHAP computation.
//!
//! Covers the published arithmetic, error reporting, configuration, and
//! batch behavior through the public API only.

use dershap::data::{DerivativeMatrix, DerivativesView, ShapeError};
use dershap::explainability::{gram_matrix, raw_scores};
use dershap::testing::data::{random_derivatives, scaled_derivatives};
use dershap::testing::{assert_normalized, assert_scores_eq, DEFAULT_TOLERANCE};
use dershap::{dershap, DerShapAggregator, DerShapConfig, DerShapError, ScoreRule};
use ndarray::{array, ShapeBuilder};
use rstest::rstest;

// =============================================================================
// Reference Arithmetic
// =============================================================================

#[rstest]
#[case::identity(vec![vec![1.0, 0.0], vec![0.0, 1.0]], vec![1.0 / 3.0, 2.0 / 3.0])]
#[case::single_feature(vec![vec![2.0], vec![-3.0]], vec![1.0])]
#[case::single_sample(vec![vec![3.0, -4.0]], vec![10.5 / 26.5, 16.0 / 26.5])]
// C = [[1,2,0],[2,5,1],[0,1,1]] -> [0.5, 3.0, 1.0] / 4.5
#[case::three_features(
    vec![vec![1.0, 2.0, 0.0], vec![0.0, 1.0, 1.0]],
    vec![0.5 / 4.5, 3.0 / 4.5, 1.0 / 4.5]
)]
// C01 cancels to zero before the absolute value: C = [[2,0],[0,2]] -> [1, 2] / 3
#[case::cancellation(vec![vec![1.0, 1.0], vec![1.0, -1.0]], vec![1.0 / 3.0, 2.0 / 3.0])]
fn matches_reference(#[case] rows: Vec<Vec<f64>>, #[case] expected: Vec<f64>) {
    let matrix = DerivativeMatrix::from_rows(&rows).unwrap();
    let values = dershap(matrix.view()).unwrap();
    assert_normalized(&values, DEFAULT_TOLERANCE);
    assert_scores_eq(&values.into_vec(), &expected, DEFAULT_TOLERANCE);
}

#[test]
fn stages_compose_to_aggregator() {
    let matrix = random_derivatives(40, 5, 11, -3.0, 3.0);
    let gram = gram_matrix(matrix.view());
    let scores = raw_scores(gram.view(), ScoreRule::LastColumn);
    let total = scores.sum();

    let values = dershap(matrix.view()).unwrap();
    let expected: Vec<f64> = scores.iter().map(|s| s / total).collect();
    assert_scores_eq(values.values(), &expected, 1e-12);
    assert!((values.total() - total).abs() <= 1e-9 * total);
}

#[test]
fn last_column_differs_from_row_mean() {
    let matrix = DerivativeMatrix::from_rows(&[[1.0, 2.0, 0.0], [0.0, 1.0, 1.0]]).unwrap();
    let last = dershap(matrix.view()).unwrap();
    let mean = DerShapAggregator::new(DerShapConfig::builder().rule(ScoreRule::RowMean).build())
        .compute(matrix.view())
        .unwrap();
    assert_ne!(last.values(), mean.values());
    assert_normalized(&mean, DEFAULT_TOLERANCE);
}

#[test]
fn dominant_feature_ranks_first() {
    let matrix = scaled_derivatives(200, &[0.1, 5.0, 1.0], 17);
    let values = DerShapAggregator::new(DerShapConfig::builder().rule(ScoreRule::RowMean).build())
        .compute(matrix.view())
        .unwrap();
    let ranked: Vec<usize> = values.ranked().into_iter().map(|(f, _)| f).collect();
    assert_eq!(ranked, vec![1, 2, 0]);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn all_zero_matrix_is_degenerate() {
    let matrix = DerivativeMatrix::from_array(ndarray::Array2::zeros((3, 2))).unwrap();
    assert_eq!(
        dershap(matrix.view()).unwrap_err(),
        DerShapError::DegenerateInput { total: 0.0 }
    );
}

#[rstest]
#[case::nan(f64::NAN)]
#[case::pos_inf(f64::INFINITY)]
#[case::neg_inf(f64::NEG_INFINITY)]
fn non_finite_input_is_rejected(#[case] bad: f64) {
    let data = [1.0, 2.0, 3.0, 4.0, bad, 6.0];
    let view = DerivativesView::from_slice(&data, 3, 2).unwrap();
    match dershap(view).unwrap_err() {
        DerShapError::NonFiniteInput { sample, feature, .. } => {
            assert_eq!((sample, feature), (2, 0));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn ragged_rows_are_rejected() {
    let rows = vec![vec![1.0, 2.0], vec![3.0]];
    let err: DerShapError = DerivativeMatrix::from_rows(&rows).unwrap_err().into();
    assert_eq!(
        err,
        DerShapError::Shape(ShapeError::Ragged { row: 1, expected: 2, found: 1 })
    );
}

#[test]
fn empty_input_is_rejected() {
    let rows: Vec<Vec<f64>> = vec![];
    assert_eq!(DerivativeMatrix::from_rows(&rows).unwrap_err(), ShapeError::Empty);
    assert_eq!(
        DerivativesView::new(ndarray::Array2::<f64>::zeros((2, 0)).view()).unwrap_err(),
        ShapeError::NoFeatures
    );
}

#[rstest]
#[case::underflows_when_squared(1e-170)]
#[case::near_min_normal(1e-300)]
#[case::subnormal(1e-315)]
#[case::overflows_when_squared(1e160)]
#[case::near_max(1e300)]
#[case::negative_huge(-1e250)]
fn extreme_magnitudes_keep_unit_scale_scores(#[case] scale: f64) {
    let unit = random_derivatives(12, 3, 5, -1.0, 1.0);
    let expected = dershap(unit.view()).unwrap();

    let scaled = DerivativeMatrix::from_array(unit.clone().into_array() * scale).unwrap();
    let values = dershap(scaled.view()).unwrap();

    assert_ne!(values.rescale_exponent(), 0);
    assert_normalized(&values, DEFAULT_TOLERANCE);
    assert_scores_eq(values.values(), expected.values(), 1e-6);
}

// =============================================================================
// Layouts
// =============================================================================

#[test]
fn column_major_view_matches_row_major() {
    let row_major = array![[0.5, -1.0, 2.0], [1.5, 0.25, -0.75], [-2.0, 1.0, 0.0]];
    let mut col_major = ndarray::Array2::<f64>::zeros((3, 3).f());
    col_major.assign(&row_major);

    let row_view = DerivativesView::new(row_major.view()).unwrap();
    let col_view = DerivativesView::new(col_major.view()).unwrap();
    for s in 0..3 {
        assert_eq!(row_view.sample(s), col_view.sample(s));
    }

    let a = dershap(row_view).unwrap();
    let b = dershap(col_view).unwrap();
    assert_scores_eq(a.values(), b.values(), 1e-12);
}

// =============================================================================
// Batch
// =============================================================================

#[rstest]
#[case::sequential(1)]
#[case::parallel(4)]
#[case::auto(0)]
fn batch_matches_individual_calls(#[case] n_threads: usize) {
    let matrices: Vec<DerivativeMatrix> = (0..16)
        .map(|seed| random_derivatives(20 + seed as usize, 4, seed, -1.0, 1.0))
        .collect();
    let views: Vec<DerivativesView<'_>> = matrices.iter().map(DerivativeMatrix::view).collect();

    let config = DerShapConfig::builder().n_threads(n_threads).build();
    let aggregator = DerShapAggregator::new(config);
    let batch = aggregator.compute_batch(&views);

    assert_eq!(batch.len(), views.len());
    for (result, view) in batch.iter().zip(&views) {
        assert_eq!(result.as_ref().unwrap(), &aggregator.compute(*view).unwrap());
    }
}
