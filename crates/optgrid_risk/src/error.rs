//! Error types for sweep and Greek configuration.

use thiserror::Error;

/// Errors raised while setting up sweeps.
///
/// Evaluation itself never fails; these cover inputs that would make a
/// sweep meaningless (a backwards mesh, a zero step, an empty axis).
///
/// # Examples
/// ```
/// use optgrid_risk::RiskError;
///
/// let err = RiskError::InvalidStep { step: 0.0 };
/// assert!(err.to_string().contains("step"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RiskError {
    /// Spot mesh bounds or step are unusable.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Finite-difference step is not a positive finite number.
    #[error("Invalid finite-difference step: h = {step}")]
    InvalidStep {
        /// The offending step
        step: f64,
    },

    /// A sweep axis (strikes, volatilities, expiries, steps) is empty.
    #[error("Empty axis: {axis}")]
    EmptyAxis {
        /// Name of the empty axis
        axis: &'static str,
    },
}
