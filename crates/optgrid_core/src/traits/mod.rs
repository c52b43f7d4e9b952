//! Core traits.
//!
//! - `PricingModel`: price/Delta/Gamma/toggle contract implemented by
//!   every closed-form model
//!
//! Concrete models live in `optgrid_models` and are wrapped in an enum for
//! static dispatch; the trait is what sweeps and Greek comparisons are
//! generic over.

pub mod pricing_model;

pub use pricing_model::PricingModel;
