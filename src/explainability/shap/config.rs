//! DerSHAP configuration with builder pattern.
//!
//! # Example
//!
//! ```
//! use dershap::explainability::{DerShapConfig, ScoreRule};
//!
//! // Published behavior, auto thread count for batches
//! let config = DerShapConfig::builder().build();
//!
//! // Row-mean rule, sequential batches
//! let config = DerShapConfig::builder()
//!     .rule(ScoreRule::RowMean)
//!     .n_threads(1)
//!     .build();
//! assert_eq!(config.rule, ScoreRule::RowMean);
//! ```

use bon::Builder;

use super::scores::ScoreRule;

/// Configuration for [`DerShapAggregator`](super::DerShapAggregator).
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(derive(Clone, Debug))]
pub struct DerShapConfig {
    /// Cross-sensitivity rule. Default: [`ScoreRule::LastColumn`].
    #[builder(default)]
    pub rule: ScoreRule,

    /// Reject NaN/Inf derivatives before computing. Default: `true`.
    ///
    /// Disabling skips one pass over the input. Non-finite totals are still
    /// reported as [`DerShapError::DegenerateInput`](super::DerShapError::DegenerateInput).
    #[builder(default = true)]
    pub check_finite: bool,

    /// Threads for batch computation. Default: 0.
    ///
    /// - `0` = auto (all available cores)
    /// - `1` = sequential
    /// - `n > 1` = exactly `n` threads
    #[builder(default = 0)]
    pub n_threads: usize,
}

impl Default for DerShapConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
