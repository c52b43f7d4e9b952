//! Step-size configuration for finite-difference Greeks.
//!
//! Provides [`GreeksConfig`] holding the comparison steps and the step
//! used by the approximate sensitivity mesh.

use super::sweep::DELTA_APPROX_STEP;
use crate::error::RiskError;

/// Default comparison steps, coarse to fine.
pub const DEFAULT_STEPS: [f64; 4] = [0.1, 0.01, 0.001, 0.0001];

/// Configuration for finite-difference Greek comparisons.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `steps` | `[0.1, 0.01, 0.001, 0.0001]` | Steps for `compare_*` |
/// | `approx_step` | 0.01 | Step for [`delta_approx`](super::delta_approx) |
///
/// # Examples
///
/// ```rust
/// use optgrid_risk::greeks::GreeksConfig;
///
/// let config = GreeksConfig::default();
/// assert_eq!(config.steps.len(), 4);
///
/// let config = GreeksConfig::builder()
///     .steps(vec![0.5, 0.05])
///     .approx_step(0.001)
///     .build()
///     .unwrap();
/// assert_eq!(config.approx_step, 0.001);
///
/// assert!(GreeksConfig::builder().steps(vec![]).build().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksConfig {
    /// Finite-difference steps, compared in this order.
    pub steps: Vec<f64>,

    /// Step for the approximate sensitivity mesh.
    pub approx_step: f64,
}

impl Default for GreeksConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS.to_vec(),
            approx_step: DELTA_APPROX_STEP,
        }
    }
}

impl GreeksConfig {
    /// Creates a new builder.
    pub fn builder() -> GreeksConfigBuilder {
        GreeksConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// - `RiskError::EmptyAxis` if `steps` is empty
    /// - `RiskError::InvalidStep` for the first step (or `approx_step`)
    ///   that is not positive and finite
    pub fn validate(&self) -> Result<(), RiskError> {
        if self.steps.is_empty() {
            return Err(RiskError::EmptyAxis { axis: "steps" });
        }
        self.steps
            .iter()
            .chain(std::iter::once(&self.approx_step))
            .try_for_each(|&step| check_step(step))
    }
}

pub(crate) fn check_step(step: f64) -> Result<(), RiskError> {
    if step.is_finite() && step > 0.0 {
        Ok(())
    } else {
        Err(RiskError::InvalidStep { step })
    }
}

/// Builder for [`GreeksConfig`].
#[derive(Debug, Default)]
pub struct GreeksConfigBuilder {
    steps: Option<Vec<f64>>,
    approx_step: Option<f64>,
}

impl GreeksConfigBuilder {
    /// Sets the comparison steps (default: `[0.1, 0.01, 0.001, 0.0001]`).
    pub fn steps(mut self, steps: Vec<f64>) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Sets the approximate-mesh step (default: 0.01).
    pub fn approx_step(mut self, step: f64) -> Self {
        self.approx_step = Some(step);
        self
    }

    /// Builds the configuration, validating all parameters.
    ///
    /// # Errors
    ///
    /// See [`GreeksConfig::validate`].
    pub fn build(self) -> Result<GreeksConfig, RiskError> {
        let config = GreeksConfig {
            steps: self.steps.unwrap_or_else(|| DEFAULT_STEPS.to_vec()),
            approx_step: self.approx_step.unwrap_or(DELTA_APPROX_STEP),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GreeksConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.steps, vec![0.1, 0.01, 0.001, 0.0001]);
        assert_eq!(config.approx_step, 0.01);
    }

    #[test]
    fn test_builder_defaults_match_default() {
        assert_eq!(GreeksConfig::builder().build().unwrap(), GreeksConfig::default());
    }

    #[test]
    fn test_rejects_empty_steps() {
        let err = GreeksConfig::builder().steps(vec![]).build().unwrap_err();
        assert_eq!(err, RiskError::EmptyAxis { axis: "steps" });
    }

    #[test]
    fn test_rejects_non_positive_step() {
        let err = GreeksConfig::builder()
            .steps(vec![0.1, 0.0, 0.01])
            .build()
            .unwrap_err();
        assert_eq!(err, RiskError::InvalidStep { step: 0.0 });

        let err = GreeksConfig::builder().approx_step(-0.01).build().unwrap_err();
        assert_eq!(err, RiskError::InvalidStep { step: -0.01 });
    }

    #[test]
    fn test_rejects_nan_step() {
        let config = GreeksConfig {
            steps: vec![f64::NAN],
            approx_step: 0.01,
        };
        assert!(matches!(
            config.validate(),
            Err(RiskError::InvalidStep { .. })
        ));
    }
}
