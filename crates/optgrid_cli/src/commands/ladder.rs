//! Ladder command implementation
//!
//! European call and put prices over the spot mesh, from one model that is
//! toggled between the two legs.

use std::io::Write;

use optgrid_models::OptionModel;
use optgrid_risk::greeks::price_ladder;
use tracing::info;

use crate::config::AppConfig;
use crate::render;
use crate::Result;

/// Run the ladder command
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> Result<()> {
    let spots = config.mesh.spots()?;
    info!(points = spots.len(), "Pricing European spot ladder");

    let mut model = OptionModel::european(config.greeks.params);
    let ladder = price_ladder(&spots, &mut model);

    writeln!(out)?;
    render::write_ladder(out, &config.format, &ladder)?;
    Ok(())
}
