//! Sensitivities command implementation
//!
//! Call/put prices with Delta and Gamma over the spot mesh, either closed
//! form or from central differences.

use std::io::Write;

use optgrid_risk::greeks::{compute_greeks, delta_approx_with_step};
use tracing::info;

use crate::config::AppConfig;
use crate::render;
use crate::Result;

/// Run the sensitivities command
pub fn run<W: Write>(config: &AppConfig, approx: bool, out: &mut W) -> Result<()> {
    let spots = config.mesh.spots()?;
    let base = &config.greeks.params;

    let rows = if approx {
        info!(
            points = spots.len(),
            step = config.greeks.approx_step,
            "Finite-difference sensitivities"
        );
        writeln!(
            out,
            "\n\nSpot ladder with sensitivities estimated using divided differences\n"
        )?;
        delta_approx_with_step(&spots, base, config.greeks.approx_step)
    } else {
        info!(points = spots.len(), "Analytic sensitivities");
        writeln!(out, "\n\nSpot ladder with sensitivities\n")?;
        compute_greeks(&spots, base)
    };

    render::write_sensitivities(out, &config.format, &rows)?;
    Ok(())
}
