//! Analytic vs finite-difference Greeks.
//!
//! - [`GreekEngine`]: borrows one model, evaluates analytic and central
//!   finite-difference Delta/Gamma and compares them across step sizes
//! - [`compare_all_greeks`]: both Greeks for the current and the toggled
//!   option type, restoring the model's flag
//! - [`compute_greeks`], [`delta_approx`]: per-spot call/put sensitivities
//!   from fresh European models
//! - [`price_ladder`]: call and put price per spot on one model
//!
//! ## Finite differences
//!
//! ```text
//! Δ ≈ (P(S+h) − P(S−h)) / 2h
//! Γ ≈ (P(S+h) − 2P(S) + P(S−h)) / h²
//! ```
//!
//! Both schemes have O(h²) truncation error; Gamma's h² denominator
//! amplifies round-off, so its error grows again for very small h.

mod config;
mod engine;
mod result;
mod sweep;

pub use config::{GreeksConfig, GreeksConfigBuilder, DEFAULT_STEPS};
pub use engine::GreekEngine;
pub use result::{
    AllGreeksComparison, FiniteDifferencePoint, Greek, GreekComparison, GreekLeg, LadderPoint,
    SpotSensitivity,
};
pub use sweep::{
    compare_all_greeks, compute_greeks, delta_approx, delta_approx_with_step, price_ladder,
    DELTA_APPROX_STEP,
};
