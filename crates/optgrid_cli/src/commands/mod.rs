//! CLI command implementations
//!
//! Each submodule implements one subcommand against an [`AppConfig`] and a
//! writer, so the same code serves stdout and tests.
//!
//! [`AppConfig`]: crate::config::AppConfig

pub mod greeks;
pub mod ladder;
pub mod matrix;
pub mod parity;
pub mod perpetual;
pub mod run;
pub mod sensitivities;
