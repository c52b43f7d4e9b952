//! Parity command implementation
//!
//! Checks put-call parity for every parameter set in the batch.

use std::io::Write;

use optgrid_risk::parity::check_put_call_parity;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::render;
use crate::Result;

/// Run the parity command
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> Result<()> {
    info!(cases = config.parity.batch.len(), "Checking put-call parity");

    for params in &config.parity.batch {
        let report = check_put_call_parity(params);
        if !report.holds() {
            warn!(
                spot = params.spot,
                strike = params.strike,
                gap = report.gap(),
                "Parity violated"
            );
        }
        render::write_parity(out, &config.format, &report)?;
    }
    Ok(())
}
