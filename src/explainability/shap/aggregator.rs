//! DerSHAP aggregator.
//!
//! Turns sampled derivatives into normalized per-feature importance:
//! `score[i] = ½·C[i][i] + ½·cross(i)` with `C = |Xᵗ·X|`, then divided by the
//! total. See [`ScoreRule`](super::ScoreRule) for `cross`.

use tracing::{debug, debug_span, trace};

use super::config::DerShapConfig;
use super::error::DerShapError;
use super::gram::scaled_gram_matrix;
use super::scores::{normalize, raw_scores};
use super::values::DerShapValues;
use crate::data::DerivativesView;
use crate::utils::run_with_threads;

/// Computes DerSHAP importance from derivative samples.
///
/// Stateless apart from its configuration; one aggregator can serve any
/// number of calls, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct DerShapAggregator {
    config: DerShapConfig,
}

impl DerShapAggregator {
    /// Create an aggregator with the given configuration.
    pub fn new(config: DerShapConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &DerShapConfig {
        &self.config
    }

    /// Compute normalized importance for one derivative matrix.
    ///
    /// # Arguments
    /// * `derivatives` - Samples with shape `[n_samples, n_features]`
    ///
    /// # Returns
    /// One value per feature, in column order, summing to one.
    ///
    /// # Errors
    /// - [`DerShapError::NonFiniteInput`] if a derivative is NaN/Inf and
    ///   `check_finite` is enabled
    /// - [`DerShapError::DegenerateInput`] if every derivative is zero, or if
    ///   a NaN/Inf reaches the scores with `check_finite` disabled
    ///
    /// Derivatives of extreme magnitude are rescaled by a power of two before
    /// the Gram product, so tiny or huge but finite inputs still normalize.
    pub fn compute(
        &self,
        derivatives: DerivativesView<'_>,
    ) -> Result<DerShapValues, DerShapError> {
        let _span = debug_span!(
            "dershap",
            n_samples = derivatives.n_samples(),
            n_features = derivatives.n_features(),
        )
        .entered();

        if self.config.check_finite {
            if let Some((sample, feature, value)) = derivatives.find_non_finite() {
                debug!(sample, feature, value, "rejecting non-finite derivative");
                return Err(DerShapError::NonFiniteInput { sample, feature, value });
            }
        }

        let (gram, rescale_exponent) = scaled_gram_matrix(derivatives);
        if rescale_exponent != 0 {
            debug!(rescale_exponent, "rescaled extreme-magnitude derivatives");
        }
        let scores = raw_scores(gram.view(), self.config.rule);
        trace!(?scores, rule = ?self.config.rule, "raw scores");

        let values = normalize(scores)
            .inspect_err(|err| debug!(%err, "normalization failed"))?
            .with_rescale_exponent(rescale_exponent);
        debug!(total = values.total(), "computed dershap values");
        Ok(values)
    }

    /// Compute importance for many independent derivative matrices.
    ///
    /// Results are in input order. Matrices are processed in parallel
    /// according to `n_threads`; a failure in one does not affect the others.
    pub fn compute_batch(
        &self,
        batch: &[DerivativesView<'_>],
    ) -> Vec<Result<DerShapValues, DerShapError>> {
        debug!(n_matrices = batch.len(), n_threads = self.config.n_threads, "dershap batch");
        run_with_threads(self.config.n_threads, |parallelism| {
            parallelism.maybe_par_map(batch, |derivatives| self.compute(*derivatives))
        })
    }
}

/// Compute DerSHAP importance with the default configuration.
///
/// Shorthand for `DerShapAggregator::default().compute(derivatives)`.
pub fn dershap(derivatives: DerivativesView<'_>) -> Result<DerShapValues, DerShapError> {
    DerShapAggregator::default().compute(derivatives)
}
