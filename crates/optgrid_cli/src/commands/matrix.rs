//! Matrix command implementation
//!
//! European strike × volatility matrices, one per expiry, for price, Delta
//! or Gamma.

use std::io::Write;

use optgrid_risk::grid::{GridEvaluator, Measure};
use tracing::info;

use crate::config::AppConfig;
use crate::render;
use crate::Result;

/// Run the matrix command for one measure, or all three when `None`.
pub fn run<W: Write>(config: &AppConfig, measure: Option<Measure>, out: &mut W) -> Result<()> {
    match measure {
        Some(m) => write_measure(config, m, out),
        None => Measure::ALL
            .into_iter()
            .try_for_each(|m| write_measure(config, m, out)),
    }
}

/// Writes the matrices for a single measure under a title line.
pub fn write_measure<W: Write>(config: &AppConfig, measure: Measure, out: &mut W) -> Result<()> {
    let grid = &config.grid;
    let mut evaluator =
        GridEvaluator::new(grid.spot, grid.rate).with_option_type(grid.option_type);
    if let Some(b) = grid.cost_of_carry {
        evaluator = evaluator.with_cost_of_carry(b);
    }

    info!(
        %measure,
        option_type = %evaluator.option_type(),
        cost_of_carry = evaluator.cost_of_carry(),
        "Evaluating European grid"
    );
    let matrices = evaluator.european(&grid.strikes, &grid.volatilities, &grid.expiries, measure)?;

    let precision = match measure {
        Measure::Price => config.format.price_precision,
        Measure::Delta | Measure::Gamma => config.format.greek_precision,
    };
    writeln!(out, "\n\n{measure} matrix")?;
    render::write_expiry_matrices(out, &config.format, &matrices, precision)?;
    Ok(())
}
