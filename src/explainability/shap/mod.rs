//! DerSHAP: feature importance from sampled partial derivatives.
//!
//! The pipeline is split so each stage can be inspected on its own:
//! [`gram_matrix`] → [`raw_scores`] → [`normalize`]. [`DerShapAggregator`]
//! runs all three with input validation and logging.

mod aggregator;
mod config;
mod error;
mod gram;
mod scores;
mod values;

pub use aggregator::{dershap, DerShapAggregator};
pub use config::DerShapConfig;
pub use error::DerShapError;
pub use gram::gram_matrix;
pub use scores::{normalize, raw_scores, ScoreRule};
pub use values::DerShapValues;
