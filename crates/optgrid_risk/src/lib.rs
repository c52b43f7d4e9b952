//! # optgrid_risk: Sensitivities and Sweeps
//!
//! Consumers of the closed-form models:
//!
//! - [`greeks`]: analytic vs finite-difference Delta/Gamma comparison,
//!   spot ladders with sensitivities
//! - [`grid`]: strike × volatility (× expiry) matrices of price, Delta or Gamma
//! - [`parity`]: European put-call parity check
//! - [`mesh`]: evenly spaced spot meshes
//!
//! Every sweep builds a fresh model per cell or per spot; nothing is shared
//! between evaluations except the caller's inputs.
//!
//! ## Feature Flags
//!
//! - `parallel`: evaluate grid rows with rayon (results are identical)
//! - `serde`: serialisation for result types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod greeks;
pub mod grid;
pub mod mesh;
pub mod parity;

pub use error::RiskError;
