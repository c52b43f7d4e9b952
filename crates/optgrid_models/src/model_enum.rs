//! Static dispatch enum over the closed-form models.
//!
//! `OptionModel` implements [`PricingModel`] by matching on the variant, so
//! callers can hold either model behind one concrete type without boxing.
//!
//! ## Example
//!
//! ```
//! use optgrid_core::traits::PricingModel;
//! use optgrid_core::types::{OptionType, ParameterSet};
//! use optgrid_models::{ModelKind, OptionModel};
//!
//! let p = ParameterSet::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.05, OptionType::Call);
//! let models = [
//!     OptionModel::european(p),
//!     OptionModel::perpetual(p.with_expiry(0.0).with_cost_of_carry(0.02)),
//! ];
//!
//! assert_eq!(models[0].kind(), ModelKind::European);
//! assert_eq!(models[1].kind(), ModelKind::AmericanPerpetual);
//! for m in &models {
//!     assert!(m.price(100.0) > 0.0);
//! }
//! ```

use std::fmt;

use optgrid_core::traits::PricingModel;
use optgrid_core::types::{OptionType, ParameterSet};

use crate::analytical::{AmericanPerpetualModel, EuropeanModel};

/// Model family discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelKind {
    /// Finite-maturity European option
    European,
    /// Perpetual American option
    AmericanPerpetual,
}

impl ModelKind {
    /// Human-readable model name.
    pub fn model_name(&self) -> &'static str {
        match self {
            ModelKind::European => "European",
            ModelKind::AmericanPerpetual => "AmericanPerpetual",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model_name())
    }
}

/// Closed-form option model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionModel {
    /// Generalised Black-Scholes
    European(EuropeanModel),
    /// Perpetual American option
    AmericanPerpetual(AmericanPerpetualModel),
}

impl OptionModel {
    /// European model from `params`.
    pub fn european(params: ParameterSet) -> Self {
        OptionModel::European(EuropeanModel::new(params))
    }

    /// Perpetual model from `params`.
    pub fn perpetual(params: ParameterSet) -> Self {
        OptionModel::AmericanPerpetual(AmericanPerpetualModel::new(params))
    }

    /// Which variant this is.
    pub fn kind(&self) -> ModelKind {
        match self {
            OptionModel::European(_) => ModelKind::European,
            OptionModel::AmericanPerpetual(_) => ModelKind::AmericanPerpetual,
        }
    }
}

impl PricingModel for OptionModel {
    #[inline]
    fn params(&self) -> &ParameterSet {
        match self {
            OptionModel::European(m) => m.params(),
            OptionModel::AmericanPerpetual(m) => m.params(),
        }
    }

    #[inline]
    fn set_option_type(&mut self, option_type: OptionType) {
        match self {
            OptionModel::European(m) => m.set_option_type(option_type),
            OptionModel::AmericanPerpetual(m) => m.set_option_type(option_type),
        }
    }

    #[inline]
    fn price_as(&self, u: f64, option_type: OptionType) -> f64 {
        match self {
            OptionModel::European(m) => m.price_as(u, option_type),
            OptionModel::AmericanPerpetual(m) => m.price_as(u, option_type),
        }
    }

    #[inline]
    fn delta_as(&self, u: f64, option_type: OptionType) -> f64 {
        match self {
            OptionModel::European(m) => m.delta_as(u, option_type),
            OptionModel::AmericanPerpetual(m) => m.delta_as(u, option_type),
        }
    }

    #[inline]
    fn gamma(&self, u: f64) -> f64 {
        match self {
            OptionModel::European(m) => m.gamma(u),
            OptionModel::AmericanPerpetual(m) => m.gamma(u),
        }
    }
}
