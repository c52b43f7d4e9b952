//! Parameter-grid sweeps.
//!
//! [`GridEvaluator`] fixes spot and rate and sweeps strike × volatility
//! (and expiry for European options), building a fresh model per cell.
//! Results are [`ResultMatrix`] values labelled by strike (rows) and
//! volatility (columns).

mod evaluator;
mod matrix;

pub use evaluator::GridEvaluator;
pub use matrix::{ExpiryMatrix, Measure, ResultMatrix};
