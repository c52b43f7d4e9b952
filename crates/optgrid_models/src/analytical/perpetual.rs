//! Perpetual American option with constant cost of carry.
//!
//! ## Mathematical Formulas
//!
//! With `tmp = b/σ²` and `disc = √((tmp − ½)² + 2r/σ²)`:
//! - y₁ = ½ − tmp + disc (calls), y₂ = ½ − tmp − disc (puts)
//! - **Call Price**: C = K/(y₁ − 1) · ((y₁ − 1)/y₁ · U/K)^y₁
//! - **Put Price**: P = K/(1 − y₂) · ((y₂ − 1)/y₂ · U/K)^y₂
//!
//! The horizon is infinite, so `T` does not enter the price. The call only
//! has a finite value for `b < r` (y₁ > 1).
//!
//! Delta and Gamma reuse the finite-maturity lognormal kernels with this
//! instance's `(T, σ, b, r)`. With the usual `T = 0` they are non-finite.

use optgrid_core::traits::PricingModel;
use optgrid_core::types::{OptionType, ParameterSet};

use super::european::{lognormal_delta, lognormal_gamma};

/// Perpetual American option.
///
/// # Examples
/// ```
/// use optgrid_core::traits::PricingModel;
/// use optgrid_core::types::{OptionType, ParameterSet};
/// use optgrid_models::AmericanPerpetualModel;
///
/// let params = ParameterSet::perpetual(110.0, 100.0, 0.1, 0.1, 0.02, OptionType::Call);
/// let model = AmericanPerpetualModel::new(params);
///
/// let call = model.price(110.0);
/// assert!(call > 10.0); // above intrinsic
/// assert!(model.price(120.0) > call);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmericanPerpetualModel {
    params: ParameterSet,
}

impl AmericanPerpetualModel {
    /// Creates a model holding a copy of `params`. `T` is kept but unused
    /// by the price.
    pub fn new(params: ParameterSet) -> Self {
        Self { params }
    }

    /// Creates a model with `T = 0` from the perpetual inputs.
    pub fn perpetual(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        cost_of_carry: f64,
        option_type: OptionType,
    ) -> Self {
        Self::new(ParameterSet::perpetual(
            spot,
            strike,
            rate,
            volatility,
            cost_of_carry,
            option_type,
        ))
    }

    #[inline]
    fn roots(&self) -> (f64, f64) {
        let p = &self.params;
        let sigma2 = p.volatility * p.volatility;
        let tmp = p.cost_of_carry / sigma2;
        let disc = ((tmp - 0.5) * (tmp - 0.5) + 2.0 * p.rate / sigma2).sqrt();
        (0.5 - tmp + disc, 0.5 - tmp - disc)
    }

    /// Positive root y₁ of the characteristic quadratic (calls).
    #[inline]
    pub fn y1(&self) -> f64 {
        self.roots().0
    }

    /// Negative root y₂ of the characteristic quadratic (puts).
    #[inline]
    pub fn y2(&self) -> f64 {
        self.roots().1
    }

    /// Perpetual call value at underlying `u`.
    #[inline]
    pub fn call_price(&self, u: f64) -> f64 {
        let k = self.params.strike;
        let y1 = self.y1();
        k / (y1 - 1.0) * ((y1 - 1.0) / y1 * u / k).powf(y1)
    }

    /// Perpetual put value at underlying `u`.
    #[inline]
    pub fn put_price(&self, u: f64) -> f64 {
        let k = self.params.strike;
        let y2 = self.y2();
        k / (1.0 - y2) * ((y2 - 1.0) / y2 * u / k).powf(y2)
    }
}

impl From<ParameterSet> for AmericanPerpetualModel {
    fn from(params: ParameterSet) -> Self {
        Self::new(params)
    }
}

impl PricingModel for AmericanPerpetualModel {
    #[inline]
    fn params(&self) -> &ParameterSet {
        &self.params
    }

    #[inline]
    fn set_option_type(&mut self, option_type: OptionType) {
        self.params.option_type = option_type;
    }

    #[inline]
    fn price_as(&self, u: f64, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call_price(u),
            OptionType::Put => self.put_price(u),
        }
    }

    // Same kernels as the European model, evaluated with this instance's T.
    #[inline]
    fn delta_as(&self, u: f64, option_type: OptionType) -> f64 {
        lognormal_delta(u, &self.params, option_type)
    }

    #[inline]
    fn gamma(&self, u: f64) -> f64 {
        lognormal_gamma(u, &self.params)
    }
}
