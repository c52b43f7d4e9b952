//! Numerical building blocks.

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
