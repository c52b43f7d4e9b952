//! Analytic and finite-difference Greeks over one borrowed model.

use optgrid_core::traits::PricingModel;
use tracing::trace;

use super::result::{FiniteDifferencePoint, Greek, GreekComparison};

/// Evaluates Greeks of a borrowed model.
///
/// Finite differences reprice the same model at shifted spots, so they
/// inherit its current option type. The engine never mutates the model.
///
/// # Examples
///
/// ```
/// use optgrid_core::types::{OptionType, ParameterSet};
/// use optgrid_models::EuropeanModel;
/// use optgrid_risk::greeks::GreekEngine;
///
/// let p = ParameterSet::new(102.0, 122.0, 1.65, 0.045, 0.43, 0.0, OptionType::Call);
/// let model = EuropeanModel::new(p);
/// let engine = GreekEngine::new(&model);
///
/// let cmp = engine.compare_delta(102.0, &[0.1, 0.01]);
/// assert_eq!(cmp.points.len(), 2);
/// assert!(cmp.points[1].abs_error < 1e-6);
/// ```
#[derive(Debug)]
pub struct GreekEngine<'a, M: PricingModel> {
    model: &'a M,
}

impl<'a, M: PricingModel> GreekEngine<'a, M> {
    /// Wraps `model`.
    pub fn new(model: &'a M) -> Self {
        Self { model }
    }

    /// The wrapped model.
    pub fn model(&self) -> &'a M {
        self.model
    }

    /// Closed-form Delta at `spot`.
    #[inline]
    pub fn analytic_delta(&self, spot: f64) -> f64 {
        self.model.delta(spot)
    }

    /// Closed-form Gamma at `spot`.
    #[inline]
    pub fn analytic_gamma(&self, spot: f64) -> f64 {
        self.model.gamma(spot)
    }

    /// Central-difference Delta with step `h`.
    ///
    /// `h = 0` yields NaN.
    #[inline]
    pub fn finite_difference_delta(&self, spot: f64, h: f64) -> f64 {
        (self.model.price(spot + h) - self.model.price(spot - h)) / (2.0 * h)
    }

    /// Three-point Gamma with step `h`.
    ///
    /// `h = 0` yields NaN.
    #[inline]
    pub fn finite_difference_gamma(&self, spot: f64, h: f64) -> f64 {
        let up = self.model.price(spot + h);
        let mid = self.model.price(spot);
        let down = self.model.price(spot - h);
        (up - 2.0 * mid + down) / (h * h)
    }

    /// Analytic Delta against the finite-difference estimate for each step.
    pub fn compare_delta(&self, spot: f64, steps: &[f64]) -> GreekComparison {
        self.compare(Greek::Delta, spot, steps)
    }

    /// Analytic Gamma against the finite-difference estimate for each step.
    pub fn compare_gamma(&self, spot: f64, steps: &[f64]) -> GreekComparison {
        self.compare(Greek::Gamma, spot, steps)
    }

    fn compare(&self, greek: Greek, spot: f64, steps: &[f64]) -> GreekComparison {
        let analytic = match greek {
            Greek::Delta => self.analytic_delta(spot),
            Greek::Gamma => self.analytic_gamma(spot),
        };

        let points = steps
            .iter()
            .map(|&step| {
                let value = match greek {
                    Greek::Delta => self.finite_difference_delta(spot, step),
                    Greek::Gamma => self.finite_difference_gamma(spot, step),
                };
                let abs_error = (value - analytic).abs();
                trace!(%greek, step, value, abs_error, "finite-difference point");
                FiniteDifferencePoint {
                    step,
                    value,
                    abs_error,
                }
            })
            .collect();

        GreekComparison {
            greek,
            option_type: self.model.option_type(),
            spot,
            analytic,
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use optgrid_core::types::{OptionType, ParameterSet};
    use optgrid_models::{AmericanPerpetualModel, EuropeanModel};

    fn greek_params(option_type: OptionType) -> ParameterSet {
        ParameterSet::new(102.0, 122.0, 1.65, 0.045, 0.43, 0.0, option_type)
    }

    // ========================================
    // Finite-difference accuracy
    // ========================================

    #[test]
    fn test_fd_delta_matches_analytic() {
        for t in [OptionType::Call, OptionType::Put] {
            let model = EuropeanModel::new(greek_params(t));
            let engine = GreekEngine::new(&model);
            assert_relative_eq!(
                engine.finite_difference_delta(102.0, 0.01),
                engine.analytic_delta(102.0),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn test_fd_gamma_matches_analytic() {
        let model = EuropeanModel::new(greek_params(OptionType::Call));
        let engine = GreekEngine::new(&model);
        assert_relative_eq!(
            engine.finite_difference_gamma(102.0, 0.01),
            engine.analytic_gamma(102.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_zero_step_is_nan() {
        let model = EuropeanModel::new(greek_params(OptionType::Call));
        let engine = GreekEngine::new(&model);
        assert!(engine.finite_difference_delta(102.0, 0.0).is_nan());
        assert!(engine.finite_difference_gamma(102.0, 0.0).is_nan());
    }

    // ========================================
    // Comparisons
    // ========================================

    #[test]
    fn test_compare_delta_preserves_step_order() {
        let model = EuropeanModel::new(greek_params(OptionType::Put));
        let engine = GreekEngine::new(&model);
        let steps = [0.001, 0.1, 0.01];
        let cmp = engine.compare_delta(102.0, &steps);

        assert_eq!(cmp.greek, Greek::Delta);
        assert_eq!(cmp.option_type, OptionType::Put);
        assert_eq!(cmp.spot, 102.0);
        assert_eq!(cmp.analytic, model.delta(102.0));
        let got: Vec<f64> = cmp.points.iter().map(|p| p.step).collect();
        assert_eq!(got, steps);
    }

    #[test]
    fn test_compare_gamma_abs_error_consistent() {
        let model = EuropeanModel::new(greek_params(OptionType::Call));
        let engine = GreekEngine::new(&model);
        let cmp = engine.compare_gamma(102.0, &[0.1, 0.01]);
        for p in &cmp.points {
            assert_eq!(p.abs_error, (p.value - cmp.analytic).abs());
        }
    }

    #[test]
    fn test_compare_empty_steps() {
        let model = EuropeanModel::new(greek_params(OptionType::Call));
        let cmp = GreekEngine::new(&model).compare_delta(102.0, &[]);
        assert!(cmp.points.is_empty());
        assert!(cmp.analytic.is_finite());
    }

    #[test]
    fn test_perpetual_fd_differs_from_european_analytic() {
        // Perpetual Greeks are the European kernels; the perpetual price
        // surface is a different function, so the two do not agree.
        let p = ParameterSet::perpetual(110.0, 100.0, 0.1, 0.1, 0.02, OptionType::Call)
            .with_expiry(1.0);
        let model = AmericanPerpetualModel::new(p);
        let engine = GreekEngine::new(&model);
        let fd = engine.finite_difference_delta(110.0, 0.01);
        assert!(fd.is_finite());
        assert!((fd - engine.analytic_delta(110.0)).abs() > 1e-3);
    }
}
