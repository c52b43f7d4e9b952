//! The shared pricing-model contract.

use crate::types::{OptionType, ParameterSet};

/// Capability set shared by every closed-form model:
/// price, Delta, Gamma and the call/put toggle.
///
/// Implementors provide the pure two-argument forms
/// ([`price_as`](PricingModel::price_as), [`delta_as`](PricingModel::delta_as));
/// the single-argument forms dispatch on the instance's current type flag.
///
/// # Contract
///
/// - All pricing methods are pure in the instance's parameters and type flag.
/// - [`toggle_type`](PricingModel::toggle_type) flips only the flag.
/// - No input validation: invalid domains give non-finite results.
///
/// # Examples
///
/// ```
/// use optgrid_core::traits::PricingModel;
/// use optgrid_core::types::{OptionType, ParameterSet};
///
/// struct Intrinsic {
///     params: ParameterSet,
/// }
///
/// impl PricingModel for Intrinsic {
///     fn params(&self) -> &ParameterSet {
///         &self.params
///     }
///     fn set_option_type(&mut self, option_type: OptionType) {
///         self.params.option_type = option_type;
///     }
///     fn price_as(&self, u: f64, t: OptionType) -> f64 {
///         match t {
///             OptionType::Call => (u - self.params.strike).max(0.0),
///             OptionType::Put => (self.params.strike - u).max(0.0),
///         }
///     }
///     fn delta_as(&self, u: f64, t: OptionType) -> f64 {
///         match t {
///             OptionType::Call if u > self.params.strike => 1.0,
///             OptionType::Put if u < self.params.strike => -1.0,
///             _ => 0.0,
///         }
///     }
///     fn gamma(&self, _u: f64) -> f64 {
///         0.0
///     }
/// }
///
/// let mut m = Intrinsic {
///     params: ParameterSet::new(100.0, 90.0, 1.0, 0.0, 0.2, 0.0, OptionType::Call),
/// };
/// assert_eq!(m.price(100.0), 10.0);
/// m.toggle_type();
/// assert_eq!(m.price(100.0), 0.0);
/// ```
pub trait PricingModel {
    /// Parameters held by this instance.
    fn params(&self) -> &ParameterSet;

    /// Overwrites the type flag.
    fn set_option_type(&mut self, option_type: OptionType);

    /// Option value at underlying `u` for the given type.
    fn price_as(&self, u: f64, option_type: OptionType) -> f64;

    /// First derivative of the price in `u` for the given type.
    fn delta_as(&self, u: f64, option_type: OptionType) -> f64;

    /// Second derivative of the price in `u` (type independent).
    fn gamma(&self, u: f64) -> f64;

    /// Current type flag.
    #[inline]
    fn option_type(&self) -> OptionType {
        self.params().option_type
    }

    /// Option value at underlying `u` for the current type.
    #[inline]
    fn price(&self, u: f64) -> f64 {
        self.price_as(u, self.option_type())
    }

    /// Delta at underlying `u` for the current type.
    #[inline]
    fn delta(&self, u: f64) -> f64 {
        self.delta_as(u, self.option_type())
    }

    /// Flips Call↔Put in place.
    #[inline]
    fn toggle_type(&mut self) {
        let toggled = self.option_type().toggled();
        self.set_option_type(toggled);
    }
}
