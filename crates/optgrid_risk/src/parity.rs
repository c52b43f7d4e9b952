//! Put-call parity for European options with cost of carry.
//!
//! ```text
//! C + K·e^{−rT} = P + S·e^{(b−r)T}
//! ```

use optgrid_core::traits::PricingModel;
use optgrid_core::types::{OptionType, ParameterSet};
use optgrid_models::EuropeanModel;
use tracing::debug;

/// Largest accepted gap between the two sides.
pub const PARITY_TOLERANCE: f64 = 1e-4;

/// Outcome of a parity check on one parameter set.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParityReport {
    /// Parameters checked (type forced to Call).
    pub params: ParameterSet,
    /// Closed-form call.
    pub call: f64,
    /// Closed-form put.
    pub put: f64,
    /// Call implied by the put through parity.
    pub call_from_put: f64,
    /// Put implied by the call through parity.
    pub put_from_call: f64,
    /// `C + K·e^{−rT}`.
    pub call_side: f64,
    /// `P + S·e^{(b−r)T}`.
    pub put_side: f64,
}

impl ParityReport {
    /// `|call_side − put_side|`.
    pub fn gap(&self) -> f64 {
        (self.call_side - self.put_side).abs()
    }

    /// Whether the gap is below [`PARITY_TOLERANCE`]. NaN never holds.
    pub fn holds(&self) -> bool {
        self.gap() < PARITY_TOLERANCE
    }
}

/// Prices the call, toggles the same model and prices the put, then
/// compares both sides of parity.
///
/// # Examples
///
/// ```
/// use optgrid_core::types::{OptionType, ParameterSet};
/// use optgrid_risk::parity::check_put_call_parity;
///
/// let p = ParameterSet::new(100.0, 100.0, 1.0, 0.0, 0.2, 0.0, OptionType::Call);
/// let report = check_put_call_parity(&p);
/// assert!(report.holds());
/// assert!((report.call - report.put).abs() < 1e-12);
/// ```
pub fn check_put_call_parity(params: &ParameterSet) -> ParityReport {
    let params = params.with_option_type(OptionType::Call);
    let spot = params.spot;
    let mut model = EuropeanModel::new(params);

    let call = model.price(spot);
    model.toggle_type();
    let put = model.price(spot);

    let discounted_strike = params.strike * params.discount_factor();
    let carried_spot = spot * params.carry_factor();

    let report = ParityReport {
        params,
        call,
        put,
        call_from_put: put + carried_spot - discounted_strike,
        put_from_call: call + discounted_strike - carried_spot,
        call_side: call + discounted_strike,
        put_side: put + carried_spot,
    };
    debug!(
        spot,
        strike = params.strike,
        gap = report.gap(),
        holds = report.holds(),
        "put-call parity checked"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn batch() -> [ParameterSet; 4] {
        [
            ParameterSet::new(102.0, 122.0, 1.65, 0.045, 0.43, 0.0, OptionType::Call),
            ParameterSet::new(100.0, 100.0, 1.0, 0.0, 0.2, 0.0, OptionType::Call),
            ParameterSet::new(5.0, 10.0, 1.0, 0.12, 0.5, 0.12, OptionType::Call),
            ParameterSet::new(100.0, 100.0, 30.0, 0.08, 0.3, 0.08, OptionType::Call),
        ]
    }

    #[test]
    fn test_default_batch_holds() {
        for p in batch() {
            let r = check_put_call_parity(&p);
            assert!(r.holds(), "gap {} for {:?}", r.gap(), p);
        }
    }

    #[test]
    fn test_implied_prices_round_trip() {
        for p in batch() {
            let r = check_put_call_parity(&p);
            assert_relative_eq!(r.call_from_put, r.call, epsilon = 1e-9);
            assert_relative_eq!(r.put_from_call, r.put, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_put_input_is_normalised() {
        let p = batch()[0];
        let a = check_put_call_parity(&p);
        let b = check_put_call_parity(&p.with_option_type(OptionType::Put));
        assert_eq!(a, b);
        assert_eq!(b.params.option_type, OptionType::Call);
    }

    #[test]
    fn test_zero_expiry_does_not_hold() {
        let p = batch()[1].with_expiry(0.0);
        assert!(!check_put_call_parity(&p).holds());
    }
}
