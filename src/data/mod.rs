//! Derivative sample containers.
//!
//! Gradient samples arrive as an `M × d` matrix: one row per sample, one column
//! per input feature. Two types cover the ownership split:
//!
//! - [`DerivativeMatrix`]: owned storage, built from flat vectors, row vectors,
//!   or an existing [`ndarray::Array2`]
//! - [`DerivativesView`]: borrowed, read-only access used by the algorithms
//!
//! Both are validated on construction, so a view always has at least one
//! sample and one feature.
//!
//! # Terminology
//!
//! - **Samples**: independent gradient evaluations (rows)
//! - **Features**: input dimensions (columns), in caller-defined order

mod error;
mod matrix;
mod views;

pub use error::ShapeError;
pub use matrix::DerivativeMatrix;
pub use views::DerivativesView;
