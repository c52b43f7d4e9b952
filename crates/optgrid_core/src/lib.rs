//! # optgrid_core: Foundation Layer
//!
//! Bottom layer of the optgrid workspace, providing:
//! - Option type flag and market/contract parameters (`types`)
//! - The shared pricing-model contract (`traits`)
//! - Standard normal distribution functions (`math`)
//! - Error types: `PricingError` (`types::error`)
//!
//! No other optgrid crate is a dependency of this one.
//!
//! ## Usage Examples
//!
//! ```rust
//! use optgrid_core::types::{OptionType, ParameterSet};
//!
//! let params = ParameterSet::new(60.0, 65.0, 0.25, 0.08, 0.30, 0.08, OptionType::Call);
//! assert!(params.validate_european().is_ok());
//!
//! let put: OptionType = "P".parse().unwrap();
//! assert_eq!(put.toggled(), OptionType::Call);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionType` and `ParameterSet`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
