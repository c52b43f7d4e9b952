//! Run command implementation
//!
//! Every report in sequence: parity batch, European ladder, price matrix,
//! Greek comparison, both sensitivity tables, Delta and Gamma matrices,
//! perpetual output.

use std::io::Write;

use optgrid_risk::grid::Measure;
use tracing::info;

use super::{greeks, ladder, matrix, parity, perpetual, sensitivities};
use crate::config::AppConfig;
use crate::Result;

/// Run the full report
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> Result<()> {
    info!("Running full report");

    parity::run(config, out)?;
    ladder::run(config, out)?;
    matrix::write_measure(config, Measure::Price, out)?;
    greeks::run(config, out)?;
    sensitivities::run(config, false, out)?;
    sensitivities::run(config, true, out)?;
    matrix::write_measure(config, Measure::Delta, out)?;
    matrix::write_measure(config, Measure::Gamma, out)?;
    perpetual::run(config, out)?;

    info!("Full report complete");
    Ok(())
}
