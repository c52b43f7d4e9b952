//! Strike × volatility (× expiry) sweeps at a fixed spot.

use optgrid_core::types::{OptionType, ParameterSet};
use optgrid_models::{AmericanPerpetualModel, EuropeanModel};
use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::matrix::{ExpiryMatrix, Measure, ResultMatrix};
use crate::error::RiskError;

/// Sweeps option measures over parameter grids.
///
/// Spot and rate are fixed for the whole sweep. The cost of carry defaults
/// to the rate (`b = r`, non-dividend stock) and the option type to Call.
///
/// # Examples
///
/// ```
/// use optgrid_risk::grid::{GridEvaluator, Measure};
///
/// let grid = GridEvaluator::new(100.0, 0.05);
/// let out = grid
///     .european(&[90.0, 100.0, 110.0], &[0.1, 0.2], &[0.5, 1.0], Measure::Price)
///     .unwrap();
///
/// assert_eq!(out.len(), 2);
/// assert_eq!(out[0].expiry, 0.5);
/// assert_eq!((out[0].matrix.rows(), out[0].matrix.cols()), (3, 2));
/// // Deeper in the money is worth more.
/// assert!(out[1].matrix.get(0, 0).unwrap() > out[1].matrix.get(2, 0).unwrap());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridEvaluator {
    spot: f64,
    rate: f64,
    cost_of_carry: Option<f64>,
    option_type: OptionType,
}

impl GridEvaluator {
    /// Evaluator at `spot` with risk-free `rate`.
    pub fn new(spot: f64, rate: f64) -> Self {
        Self {
            spot,
            rate,
            cost_of_carry: None,
            option_type: OptionType::Call,
        }
    }

    /// Option type for European sweeps (default Call).
    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Cost of carry for European sweeps (default: the rate).
    pub fn with_cost_of_carry(mut self, cost_of_carry: f64) -> Self {
        self.cost_of_carry = Some(cost_of_carry);
        self
    }

    /// Fixed spot.
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Fixed rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Cost of carry used by European sweeps.
    pub fn cost_of_carry(&self) -> f64 {
        self.cost_of_carry.unwrap_or(self.rate)
    }

    /// Option type used by European sweeps.
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// One strike × volatility matrix per expiry, in input order.
    ///
    /// N strikes, M volatilities and L expiries give L matrices of N × M.
    /// An empty axis is rejected rather than yielding empty matrices.
    ///
    /// # Errors
    /// `RiskError::EmptyAxis` if any axis is empty.
    pub fn european(
        &self,
        strikes: &[f64],
        volatilities: &[f64],
        expiries: &[f64],
        measure: Measure,
    ) -> Result<Vec<ExpiryMatrix>, RiskError> {
        non_empty(expiries, "expiries")?;
        let base = ParameterSet::new(
            self.spot,
            0.0,
            0.0,
            self.rate,
            0.0,
            self.cost_of_carry(),
            self.option_type,
        );

        expiries
            .iter()
            .map(|&expiry| {
                let matrix = sweep(measure, strikes, volatilities, |strike, vol| {
                    let params = base
                        .with_strike(strike)
                        .with_volatility(vol)
                        .with_expiry(expiry);
                    measure.evaluate(&EuropeanModel::new(params), self.spot)
                })?;
                report("european", expiry, &matrix);
                Ok(ExpiryMatrix { expiry, matrix })
            })
            .collect()
    }

    /// Perpetual American strike × volatility matrix with `T = 0`.
    ///
    /// Uses the evaluator's spot and rate with the given carry and type.
    /// As with [`european`](Self::european), an empty axis is an error.
    ///
    /// # Errors
    /// `RiskError::EmptyAxis` if either axis is empty.
    pub fn perpetual(
        &self,
        strikes: &[f64],
        volatilities: &[f64],
        cost_of_carry: f64,
        option_type: OptionType,
        measure: Measure,
    ) -> Result<ResultMatrix, RiskError> {
        let base = ParameterSet::perpetual(
            self.spot,
            0.0,
            self.rate,
            0.0,
            cost_of_carry,
            option_type,
        );
        let matrix = sweep(measure, strikes, volatilities, |strike, vol| {
            let params = base.with_strike(strike).with_volatility(vol);
            measure.evaluate(&AmericanPerpetualModel::new(params), self.spot)
        })?;
        report("perpetual", 0.0, &matrix);
        Ok(matrix)
    }
}

fn non_empty(axis: &[f64], name: &'static str) -> Result<(), RiskError> {
    if axis.is_empty() {
        Err(RiskError::EmptyAxis { axis: name })
    } else {
        Ok(())
    }
}

fn report(kind: &str, expiry: f64, matrix: &ResultMatrix) {
    debug!(
        kind,
        expiry,
        measure = %matrix.measure(),
        rows = matrix.rows(),
        cols = matrix.cols(),
        "grid evaluated"
    );
    let bad = matrix.non_finite_count();
    if bad > 0 {
        warn!(
            kind,
            expiry,
            measure = %matrix.measure(),
            cells = bad,
            "grid contains non-finite values"
        );
    }
}

fn sweep<F>(
    measure: Measure,
    strikes: &[f64],
    volatilities: &[f64],
    cell: F,
) -> Result<ResultMatrix, RiskError>
where
    F: Fn(f64, f64) -> f64 + Sync,
{
    non_empty(strikes, "strikes")?;
    non_empty(volatilities, "volatilities")?;

    let row = |&strike: &f64| -> Vec<f64> {
        volatilities.iter().map(|&vol| cell(strike, vol)).collect()
    };

    #[cfg(feature = "parallel")]
    let rows: Vec<Vec<f64>> = strikes.par_iter().map(row).collect();
    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Vec<f64>> = strikes.iter().map(row).collect();

    Ok(ResultMatrix::from_parts(
        measure,
        strikes.to_vec(),
        volatilities.to_vec(),
        rows.into_iter().flatten().collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use optgrid_core::traits::PricingModel;

    const STRIKES: [f64; 3] = [90.0, 100.0, 110.0];
    const VOLS: [f64; 2] = [0.2, 0.3];

    #[test]
    fn test_default_carry_is_rate() {
        let grid = GridEvaluator::new(100.0, 0.05);
        assert_eq!(grid.cost_of_carry(), 0.05);
        assert_eq!(grid.with_cost_of_carry(0.0).cost_of_carry(), 0.0);
        assert_eq!(grid.option_type(), OptionType::Call);
    }

    #[test]
    fn test_european_cells_match_direct_pricing() {
        let grid = GridEvaluator::new(100.0, 0.05).with_option_type(OptionType::Put);
        let out = grid
            .european(&STRIKES, &VOLS, &[0.25, 1.0], Measure::Delta)
            .unwrap();

        for em in &out {
            for (i, &k) in STRIKES.iter().enumerate() {
                for (j, &v) in VOLS.iter().enumerate() {
                    let p = ParameterSet::new(100.0, k, em.expiry, 0.05, v, 0.05, OptionType::Put);
                    let expected = EuropeanModel::new(p).delta(100.0);
                    assert_eq!(em.matrix.get(i, j), Some(expected));
                }
            }
        }
    }

    #[test]
    fn test_european_gamma_type_independent() {
        let call = GridEvaluator::new(100.0, 0.05)
            .european(&STRIKES, &VOLS, &[1.0], Measure::Gamma)
            .unwrap();
        let put = GridEvaluator::new(100.0, 0.05)
            .with_option_type(OptionType::Put)
            .european(&STRIKES, &VOLS, &[1.0], Measure::Gamma)
            .unwrap();
        assert_eq!(call, put);
    }

    #[test]
    fn test_perpetual_matches_model() {
        let grid = GridEvaluator::new(110.0, 0.1);
        let m = grid
            .perpetual(&[100.0], &[0.1], 0.02, OptionType::Call, Measure::Price)
            .unwrap();
        let model =
            AmericanPerpetualModel::perpetual(110.0, 100.0, 0.1, 0.1, 0.02, OptionType::Call);
        assert_relative_eq!(m.get(0, 0).unwrap(), model.price(110.0), epsilon = 1e-14);
    }

    #[test]
    fn test_perpetual_greeks_non_finite() {
        // T = 0 feeds the European kernels a zero time
        let m = GridEvaluator::new(110.0, 0.1)
            .perpetual(&STRIKES, &VOLS, 0.02, OptionType::Put, Measure::Gamma)
            .unwrap();
        assert_eq!(m.non_finite_count(), STRIKES.len() * VOLS.len());
    }

    #[test]
    fn test_empty_axes_rejected() {
        let grid = GridEvaluator::new(100.0, 0.05);
        assert_eq!(
            grid.european(&[], &VOLS, &[1.0], Measure::Price),
            Err(RiskError::EmptyAxis { axis: "strikes" })
        );
        assert_eq!(
            grid.european(&STRIKES, &[], &[1.0], Measure::Price),
            Err(RiskError::EmptyAxis { axis: "volatilities" })
        );
        assert_eq!(
            grid.european(&STRIKES, &VOLS, &[], Measure::Price),
            Err(RiskError::EmptyAxis { axis: "expiries" })
        );
        assert_eq!(
            grid.perpetual(&STRIKES, &[], 0.02, OptionType::Call, Measure::Price),
            Err(RiskError::EmptyAxis { axis: "volatilities" })
        );
    }
}
