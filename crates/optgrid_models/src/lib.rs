//! # optgrid_models: Closed-Form Option Models
//!
//! This crate provides:
//! - `EuropeanModel`: generalised Black-Scholes with cost of carry
//! - `AmericanPerpetualModel`: perpetual American option closed form
//! - `OptionModel`: enum over both for static dispatch
//!
//! ## Design Principles
//!
//! - **Enum-based dispatch** over the two model variants
//! - **Copy-in parameters**: a model owns its own `ParameterSet`
//! - **No validation** inside the formulas: invalid inputs show up as
//!   non-finite results

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod model_enum;

pub use analytical::{AmericanPerpetualModel, EuropeanModel};
pub use model_enum::{ModelKind, OptionModel};
