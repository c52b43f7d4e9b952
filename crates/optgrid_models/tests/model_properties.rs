//! Property-based tests for the closed-form models.
//!
//! # Test Categories
//!
//! 1. **Put-call parity** for European options with cost of carry
//! 2. **Toggle involution** for both models
//! 3. **Gamma symmetry** between calls and puts
//! 4. **Perpetual monotonicity** of the call in spot

use optgrid_core::traits::PricingModel;
use optgrid_core::types::{OptionType, ParameterSet};
use optgrid_models::{AmericanPerpetualModel, EuropeanModel, OptionModel};
use proptest::prelude::*;

fn european_params() -> impl Strategy<Value = ParameterSet> {
    (
        10.0..200.0_f64,  // spot
        10.0..200.0_f64,  // strike
        0.05..5.0_f64,    // expiry
        0.0..0.15_f64,    // rate
        0.05..0.8_f64,    // volatility
        -0.1..0.15_f64,   // cost of carry
    )
        .prop_map(|(s, k, t, r, v, b)| ParameterSet::new(s, k, t, r, v, b, OptionType::Call))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_put_call_parity(p in european_params()) {
        let mut model = EuropeanModel::new(p);
        let call = model.price(p.spot);
        model.toggle_type();
        let put = model.price(p.spot);

        let lhs = call + p.strike * (-p.rate * p.expiry).exp();
        let rhs = put + p.spot * ((p.cost_of_carry - p.rate) * p.expiry).exp();
        prop_assert!((lhs - rhs).abs() < 1e-4, "lhs = {}, rhs = {}", lhs, rhs);
    }

    #[test]
    fn prop_toggle_involution(p in european_params(), put in any::<bool>()) {
        let start = if put { OptionType::Put } else { OptionType::Call };
        let perpetual = p.with_expiry(0.0).with_cost_of_carry(p.rate * 0.5);
        for mut model in [
            OptionModel::european(p.with_option_type(start)),
            OptionModel::perpetual(perpetual.with_option_type(start)),
        ] {
            let u = p.spot;
            let before = (model.price(u), model.delta(u), model.gamma(u));
            model.toggle_type();
            model.toggle_type();
            let after = (model.price(u), model.delta(u), model.gamma(u));

            prop_assert_eq!(model.option_type(), start);
            // NaN-aware bitwise comparison
            prop_assert_eq!(before.0.to_bits(), after.0.to_bits());
            prop_assert_eq!(before.1.to_bits(), after.1.to_bits());
            prop_assert_eq!(before.2.to_bits(), after.2.to_bits());
        }
    }

    #[test]
    fn prop_gamma_symmetry(p in european_params()) {
        let call = EuropeanModel::new(p.with_option_type(OptionType::Call));
        let put = EuropeanModel::new(p.with_option_type(OptionType::Put));
        prop_assert_eq!(call.gamma(p.spot), put.gamma(p.spot));
    }

    #[test]
    fn prop_perpetual_call_increasing_in_spot(
        k in 50.0..150.0_f64,
        sigma in 0.05..0.5_f64,
        r in 0.02..0.15_f64,
        carry_share in 0.05..0.9_f64,
    ) {
        // 0 < b < r keeps y1 > 1
        let b = r * carry_share;
        let model = AmericanPerpetualModel::perpetual(k, k, r, sigma, b, OptionType::Call);
        let spots: Vec<f64> = (1..=20).map(|i| k * (0.5 + 0.025 * i as f64)).collect();
        for pair in spots.windows(2) {
            let (lo, hi) = (model.price(pair[0]), model.price(pair[1]));
            prop_assert!(hi > lo, "C({}) = {} !< C({}) = {}", pair[0], lo, pair[1], hi);
        }
    }
}

#[test]
fn test_textbook_call_value() {
    let p = ParameterSet::new(60.0, 65.0, 0.25, 0.08, 0.30, 0.08, OptionType::Call);
    let model = EuropeanModel::new(p);
    assert!((model.price(60.0) - 2.1334).abs() < 1e-3);
}
