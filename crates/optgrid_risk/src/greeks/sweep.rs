//! Spot sweeps and the two-leg Greek comparison.

use optgrid_core::traits::PricingModel;
use optgrid_core::types::{OptionType, ParameterSet};
use optgrid_models::EuropeanModel;
use tracing::debug;

use super::engine::GreekEngine;
use super::result::{AllGreeksComparison, GreekLeg, LadderPoint, SpotSensitivity};

/// Step used by [`delta_approx`].
pub const DELTA_APPROX_STEP: f64 = 0.01;

fn leg<M: PricingModel>(model: &M, spot: f64, steps: &[f64]) -> GreekLeg {
    let engine = GreekEngine::new(model);
    GreekLeg {
        option_type: engine.model().option_type(),
        delta: engine.compare_delta(spot, steps),
        gamma: engine.compare_gamma(spot, steps),
    }
}

/// Delta and Gamma comparisons for the model's current type, then for the
/// toggled type.
///
/// The model is toggled once and toggled back, so its type flag is the
/// same on return as on entry.
///
/// # Examples
///
/// ```
/// use optgrid_core::traits::PricingModel;
/// use optgrid_core::types::{OptionType, ParameterSet};
/// use optgrid_models::EuropeanModel;
/// use optgrid_risk::greeks::compare_all_greeks;
///
/// let p = ParameterSet::new(102.0, 122.0, 1.65, 0.045, 0.43, 0.0, OptionType::Call);
/// let mut model = EuropeanModel::new(p);
/// let all = compare_all_greeks(102.0, &[0.01], &mut model);
///
/// assert_eq!(all.current.option_type, OptionType::Call);
/// assert_eq!(all.toggled.option_type, OptionType::Put);
/// assert_eq!(model.option_type(), OptionType::Call);
/// ```
pub fn compare_all_greeks<M: PricingModel>(
    spot: f64,
    steps: &[f64],
    model: &mut M,
) -> AllGreeksComparison {
    let current = leg(model, spot, steps);
    model.toggle_type();
    let toggled = leg(model, spot, steps);
    model.toggle_type();

    AllGreeksComparison { current, toggled }
}

/// Call and put price, Delta and Gamma at each spot.
///
/// A fresh [`EuropeanModel`] is built per spot from `base` with the spot
/// replaced and the type forced to Call; it is toggled to read the put leg.
pub fn compute_greeks(spots: &[f64], base: &ParameterSet) -> Vec<SpotSensitivity> {
    debug!(points = spots.len(), "computing analytic sensitivities");
    spots
        .iter()
        .map(|&spot| {
            let mut model =
                EuropeanModel::new(base.with_spot(spot).with_option_type(OptionType::Call));
            let call_price = model.price(spot);
            let call_delta = model.delta(spot);
            let gamma = model.gamma(spot);
            model.toggle_type();

            SpotSensitivity {
                spot,
                call_price,
                call_delta,
                put_price: model.price(spot),
                put_delta: model.delta(spot),
                gamma,
            }
        })
        .collect()
}

/// Like [`compute_greeks`] but with Delta and Gamma from central
/// differences of step [`DELTA_APPROX_STEP`].
pub fn delta_approx(spots: &[f64], base: &ParameterSet) -> Vec<SpotSensitivity> {
    delta_approx_with_step(spots, base, DELTA_APPROX_STEP)
}

/// [`delta_approx`] with an explicit step. Gamma is read from the call leg.
pub fn delta_approx_with_step(
    spots: &[f64],
    base: &ParameterSet,
    step: f64,
) -> Vec<SpotSensitivity> {
    debug!(points = spots.len(), step, "computing finite-difference sensitivities");
    spots
        .iter()
        .map(|&spot| {
            let mut model =
                EuropeanModel::new(base.with_spot(spot).with_option_type(OptionType::Call));
            let (call_price, call_delta, gamma) = {
                let engine = GreekEngine::new(&model);
                (
                    model.price(spot),
                    engine.finite_difference_delta(spot, step),
                    engine.finite_difference_gamma(spot, step),
                )
            };
            model.toggle_type();
            let put_delta = GreekEngine::new(&model).finite_difference_delta(spot, step);

            SpotSensitivity {
                spot,
                call_price,
                call_delta,
                put_price: model.price(spot),
                put_delta,
                gamma,
            }
        })
        .collect()
}

/// Call and put price per spot on a single model.
///
/// Prices the current type, toggles, prices the other type and toggles
/// back. The model's flag is unchanged on return.
pub fn price_ladder<M: PricingModel>(spots: &[f64], model: &mut M) -> Vec<LadderPoint> {
    spots
        .iter()
        .map(|&spot| {
            let first = model.price(spot);
            model.toggle_type();
            let second = model.price(spot);
            model.toggle_type();

            let (call, put) = if model.option_type().is_call() {
                (first, second)
            } else {
                (second, first)
            };
            LadderPoint { spot, call, put }
        })
        .collect()
}
