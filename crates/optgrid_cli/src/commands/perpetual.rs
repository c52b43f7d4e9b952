//! Perpetual command implementation
//!
//! Perpetual American call/put ladder over the spot mesh, then call and put
//! price matrices over the grid strikes and volatilities.

use std::io::Write;

use optgrid_core::types::OptionType;
use optgrid_models::OptionModel;
use optgrid_risk::greeks::price_ladder;
use optgrid_risk::grid::{GridEvaluator, Measure};
use tracing::info;

use crate::config::AppConfig;
use crate::render;
use crate::Result;

/// Run the perpetual command
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> Result<()> {
    let perp = &config.perpetual;
    let spots = config.mesh.spots()?;
    let precision = config.format.greek_precision;

    info!(
        strike = perp.strike,
        rate = perp.rate,
        volatility = perp.volatility,
        cost_of_carry = perp.cost_of_carry,
        "Pricing perpetual American ladder"
    );
    let mut model = OptionModel::perpetual(perp.params(OptionType::Call));
    let ladder = price_ladder(&spots, &mut model);

    writeln!(out, "\n\nPerpetual American Options:")?;
    render::write_ladder(out, &config.format, &ladder)?;

    let evaluator = GridEvaluator::new(perp.spot, perp.rate);
    for option_type in [OptionType::Call, OptionType::Put] {
        let matrix = evaluator.perpetual(
            &config.grid.strikes,
            &config.grid.volatilities,
            perp.cost_of_carry,
            option_type,
            Measure::Price,
        )?;
        writeln!(out, "\nPerpetual {option_type} Option Price Matrix:")?;
        render::write_matrix(out, &config.format, &matrix, precision)?;
    }
    Ok(())
}
