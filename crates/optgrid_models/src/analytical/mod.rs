//! Analytical pricing formulas.
//!
//! - `european`: generalised Black-Scholes (cost of carry `b`)
//! - `perpetual`: perpetual American option under the same diffusion
//!
//! Both share the lognormal Delta/Gamma kernels defined in `european`.

pub mod european;
pub mod perpetual;

pub use european::EuropeanModel;
pub use perpetual::AmericanPerpetualModel;
