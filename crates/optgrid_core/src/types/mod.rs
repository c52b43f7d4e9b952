//! Core value types.
//!
//! - `OptionType`: call/put flag with strict parsing
//! - `ParameterSet`: spot, strike, expiry, rate, volatility, cost of carry
//! - `PricingError`: construction-time errors

pub mod error;
pub mod option_type;
pub mod params;

pub use error::PricingError;
pub use option_type::OptionType;
pub use params::ParameterSet;
