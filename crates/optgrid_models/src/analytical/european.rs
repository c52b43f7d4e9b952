//! Generalised Black-Scholes model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = U·e^((b−r)T)·N(d₁) − K·e^(−rT)·N(d₂)
//! **Put Price**: P = K·e^(−rT)·N(−d₂) − U·e^((b−r)T)·N(−d₁)
//!
//! Where:
//! - d₁ = (ln(U/K) + (b + σ²/2)T) / (σ√T)
//! - d₂ = d₁ − σ√T
//!
//! The cost of carry `b` covers the common cases: `b = r` for a
//! non-dividend stock, `b = r − q` with continuous dividend yield `q`,
//! `b = 0` for options on futures.
//!
//! `T = 0` is not guarded. The division by σ√T then yields infinite or NaN
//! values; use [`AmericanPerpetualModel`](super::AmericanPerpetualModel)
//! for the perpetual case.

use optgrid_core::math::{norm_cdf, norm_pdf};
use optgrid_core::traits::PricingModel;
use optgrid_core::types::{OptionType, ParameterSet};

/// d₁ for underlying `u` under the parameters' strike, expiry, carry and vol.
#[inline]
pub(crate) fn d1(u: f64, p: &ParameterSet) -> f64 {
    let vol_sqrt_t = p.volatility * p.expiry.sqrt();
    let drift = (p.cost_of_carry + 0.5 * p.volatility * p.volatility) * p.expiry;
    ((u / p.strike).ln() + drift) / vol_sqrt_t
}

/// Lognormal Delta: e^((b−r)T)·N(d₁) for calls, e^((b−r)T)·(N(d₁) − 1) for puts.
#[inline]
pub(crate) fn lognormal_delta(u: f64, p: &ParameterSet, option_type: OptionType) -> f64 {
    let n_d1 = norm_cdf(d1(u, p));
    match option_type {
        OptionType::Call => p.carry_factor() * n_d1,
        OptionType::Put => p.carry_factor() * (n_d1 - 1.0),
    }
}

/// Lognormal Gamma: n(d₁)·e^((b−r)T) / (U·σ·√T), identical for calls and puts.
#[inline]
pub(crate) fn lognormal_gamma(u: f64, p: &ParameterSet) -> f64 {
    let vol_sqrt_t = p.volatility * p.expiry.sqrt();
    norm_pdf(d1(u, p)) * p.carry_factor() / (u * vol_sqrt_t)
}

/// European option under the lognormal diffusion with cost of carry.
///
/// # Examples
/// ```
/// use optgrid_core::traits::PricingModel;
/// use optgrid_core::types::{OptionType, ParameterSet};
/// use optgrid_models::EuropeanModel;
///
/// let params = ParameterSet::new(60.0, 65.0, 0.25, 0.08, 0.30, 0.08, OptionType::Call);
/// let mut model = EuropeanModel::new(params);
///
/// let call = model.price(60.0);
/// assert!((call - 2.1334).abs() < 1e-3);
///
/// model.toggle_type();
/// let put = model.price(60.0);
///
/// // Put-call parity: C + K·e^(−rT) = P + S·e^((b−r)T)
/// let lhs = call + 65.0 * (-0.08_f64 * 0.25).exp();
/// let rhs = put + 60.0;
/// assert!((lhs - rhs).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuropeanModel {
    params: ParameterSet,
}

impl EuropeanModel {
    /// Creates a model holding a copy of `params`.
    pub fn new(params: ParameterSet) -> Self {
        Self { params }
    }

    /// d₁ at underlying `u`.
    #[inline]
    pub fn d1(&self, u: f64) -> f64 {
        d1(u, &self.params)
    }

    /// d₂ = d₁ − σ√T at underlying `u`.
    #[inline]
    pub fn d2(&self, u: f64) -> f64 {
        self.d1(u) - self.params.volatility * self.params.expiry.sqrt()
    }

    /// Call value at underlying `u`.
    #[inline]
    pub fn call_price(&self, u: f64) -> f64 {
        let p = &self.params;
        u * p.carry_factor() * norm_cdf(self.d1(u))
            - p.strike * p.discount_factor() * norm_cdf(self.d2(u))
    }

    /// Put value at underlying `u`.
    #[inline]
    pub fn put_price(&self, u: f64) -> f64 {
        let p = &self.params;
        p.strike * p.discount_factor() * norm_cdf(-self.d2(u))
            - u * p.carry_factor() * norm_cdf(-self.d1(u))
    }
}

impl From<ParameterSet> for EuropeanModel {
    fn from(params: ParameterSet) -> Self {
        Self::new(params)
    }
}

impl PricingModel for EuropeanModel {
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

    #[inline]
    fn delta_as(&self, u: f64, option_type: OptionType) -> f64 {
        lognormal_delta(u, &self.params, option_type)
    }

    #[inline]
    fn gamma(&self, u: f64) -> f64 {
        lognormal_gamma(u, &self.params)
    }
}
