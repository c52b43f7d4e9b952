//! Greeks command implementation
//!
//! Compares analytic Delta and Gamma with central finite differences for
//! the configured option and its toggled counterpart.

use std::io::Write;

use optgrid_models::OptionModel;
use optgrid_risk::greeks::compare_all_greeks;
use tracing::info;

use crate::config::AppConfig;
use crate::render;
use crate::Result;

/// Run the greeks command
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> Result<()> {
    let section = &config.greeks;
    let steps = section.greeks_config();
    steps.validate()?;

    info!(
        spot = section.spot,
        steps = ?steps.steps,
        "Comparing analytic and finite-difference Greeks"
    );
    let mut model = OptionModel::european(section.params);
    let all = compare_all_greeks(section.spot, &steps.steps, &mut model);

    render::write_all_greeks(out, &config.format, &all)?;
    Ok(())
}
