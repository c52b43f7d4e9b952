//! Market and contract parameters shared by every model.

use super::error::PricingError;
use super::option_type::OptionType;

/// Market/contract inputs consumed by every pricing model.
///
/// A plain value type: constructed once per pricing request (a batch entry
/// or a grid cell) and copied into a model. No derived fields are cached.
///
/// Construction performs no validation. Inputs outside a model's domain
/// produce non-finite prices rather than errors; callers that want an early
/// failure use [`ParameterSet::validate_european`] or
/// [`ParameterSet::validate_perpetual`].
///
/// # Examples
/// ```
/// use optgrid_core::types::{OptionType, ParameterSet};
///
/// let base = ParameterSet::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.05, OptionType::Call);
/// let cell = base.with_strike(110.0).with_volatility(0.3);
///
/// assert_eq!(cell.strike, 110.0);
/// assert_eq!(cell.volatility, 0.3);
/// assert_eq!(base.strike, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSet {
    /// Spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiry in years (T)
    pub expiry: f64,
    /// Risk-free interest rate (r)
    pub rate: f64,
    /// Volatility (σ)
    pub volatility: f64,
    /// Cost of carry (b)
    pub cost_of_carry: f64,
    /// Call or put
    #[cfg_attr(feature = "serde", serde(default))]
    pub option_type: OptionType,
}

impl ParameterSet {
    /// Creates a parameter set without validation.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
        cost_of_carry: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            cost_of_carry,
            option_type,
        }
    }

    /// Creates a parameter set for a perpetual option (`T = 0`).
    ///
    /// # Examples
    /// ```
    /// use optgrid_core::types::{OptionType, ParameterSet};
    ///
    /// let p = ParameterSet::perpetual(110.0, 100.0, 0.1, 0.1, 0.02, OptionType::Call);
    /// assert_eq!(p.expiry, 0.0);
    /// ```
    pub fn perpetual(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        cost_of_carry: f64,
        option_type: OptionType,
    ) -> Self {
        Self::new(spot, strike, 0.0, rate, volatility, cost_of_carry, option_type)
    }

    /// Returns a copy with a different spot.
    #[inline]
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Returns a copy with a different strike.
    #[inline]
    pub fn with_strike(self, strike: f64) -> Self {
        Self { strike, ..self }
    }

    /// Returns a copy with a different expiry.
    #[inline]
    pub fn with_expiry(self, expiry: f64) -> Self {
        Self { expiry, ..self }
    }

    /// Returns a copy with a different volatility.
    #[inline]
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Returns a copy with a different cost of carry.
    #[inline]
    pub fn with_cost_of_carry(self, cost_of_carry: f64) -> Self {
        Self {
            cost_of_carry,
            ..self
        }
    }

    /// Returns a copy with a different option type.
    #[inline]
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    /// Discount factor `e^{-rT}`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Carry factor `e^{(b-r)T}`.
    #[inline]
    pub fn carry_factor(&self) -> f64 {
        ((self.cost_of_carry - self.rate) * self.expiry).exp()
    }

    /// Checks the inputs required by the European closed form.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` if spot, strike, volatility or expiry is
    /// not strictly positive, or any field is non-finite.
    pub fn validate_european(&self) -> Result<(), PricingError> {
        self.validate_common()?;
        if self.expiry <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "European pricing requires T > 0, got T = {}",
                self.expiry
            )));
        }
        Ok(())
    }

    /// Checks the inputs required by the perpetual closed form.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` if spot, strike or volatility is not
    /// strictly positive, or the characteristic roots are complex.
    pub fn validate_perpetual(&self) -> Result<(), PricingError> {
        self.validate_common()?;
        let sigma2 = self.volatility * self.volatility;
        let tmp = self.cost_of_carry / sigma2;
        let discriminant = (tmp - 0.5) * (tmp - 0.5) + 2.0 * self.rate / sigma2;
        if discriminant < 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "perpetual roots are complex (discriminant = {discriminant})"
            )));
        }
        Ok(())
    }

    fn validate_common(&self) -> Result<(), PricingError> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("expiry", self.expiry),
            ("rate", self.rate),
            ("volatility", self.volatility),
            ("cost_of_carry", self.cost_of_carry),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PricingError::InvalidInput(format!(
                "{name} must be finite, got {value}"
            )));
        }
        for (name, value) in [
            ("spot", self.spot),
            ("strike", self.strike),
            ("volatility", self.volatility),
        ] {
            if value <= 0.0 {
                return Err(PricingError::InvalidInput(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.expiry < 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "expiry must be non-negative, got {}",
                self.expiry
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn textbook() -> ParameterSet {
        ParameterSet::new(60.0, 65.0, 0.25, 0.08, 0.30, 0.08, OptionType::Call)
    }

    #[test]
    fn test_modifiers_leave_other_fields() {
        let base = textbook();
        let moved = base.with_spot(70.0).with_option_type(OptionType::Put);
        assert_eq!(moved.spot, 70.0);
        assert_eq!(moved.option_type, OptionType::Put);
        assert_eq!(moved.strike, base.strike);
        assert_eq!(moved.expiry, base.expiry);
        assert_eq!(moved.rate, base.rate);
        assert_eq!(moved.volatility, base.volatility);
        assert_eq!(moved.cost_of_carry, base.cost_of_carry);
    }

    #[test]
    fn test_factors() {
        let p = textbook();
        assert_relative_eq!(p.discount_factor(), (-0.02_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(p.carry_factor(), 1.0, epsilon = 1e-15);

        let q = p.with_cost_of_carry(0.0);
        assert_relative_eq!(q.carry_factor(), (-0.02_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_validate_european() {
        assert!(textbook().validate_european().is_ok());
        assert!(textbook().with_expiry(0.0).validate_european().is_err());
        assert!(textbook().with_spot(-1.0).validate_european().is_err());
        assert!(textbook().with_strike(0.0).validate_european().is_err());
        assert!(textbook().with_volatility(0.0).validate_european().is_err());
        assert!(textbook().with_spot(f64::NAN).validate_european().is_err());
    }

    #[test]
    fn test_validate_perpetual() {
        let p = ParameterSet::perpetual(110.0, 100.0, 0.1, 0.1, 0.02, OptionType::Call);
        assert!(p.validate_perpetual().is_ok());

        // Strongly negative rate makes the roots complex
        let complex = p.with_cost_of_carry(0.005);
        let complex = ParameterSet {
            rate: -1.0,
            ..complex
        };
        assert!(matches!(
            complex.validate_perpetual(),
            Err(PricingError::InvalidInput(_))
        ));
    }
}
