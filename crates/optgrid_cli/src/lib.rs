//! # optgrid_cli: Console Driver
//!
//! Library half of the `optgrid` binary. Each command reads an
//! [`AppConfig`](config::AppConfig), runs the pricing layer and writes a
//! fixed-precision table to any [`std::io::Write`].
//!
//! # Commands
//!
//! - `optgrid parity` - put-call parity for the configured batch
//! - `optgrid ladder` - European call/put prices over the spot mesh
//! - `optgrid matrix [--measure M]` - strike × volatility matrices per expiry
//! - `optgrid greeks` - analytic vs finite-difference Delta/Gamma
//! - `optgrid sensitivities [--approx]` - prices and Greeks over the spot mesh
//! - `optgrid perpetual` - perpetual American ladder and matrices
//! - `optgrid run` - everything above in sequence
//!
//! ## Configuration
//!
//! Defaults, then `optgrid.toml` (or `--config`), then `OPTGRID_LOG_LEVEL`,
//! then command-line flags.

#![deny(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod render;

pub use error::{CliError, Result};
