//! Error types for structured error handling.
//!
//! The pricing formulas themselves never return errors: invalid domains
//! surface as non-finite numbers. These errors cover construction-time
//! checks made by callers before a model is built.

use thiserror::Error;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidOptionType`: Option type marker is neither a call nor a put
/// - `InvalidInput`: Parameter outside the domain of the requested model
///
/// # Examples
/// ```
/// use optgrid_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Option type marker could not be parsed.
    #[error("Invalid option type: '{0}' (expected C/Call or P/Put)")]
    InvalidOptionType(String),

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_type_display() {
        let err = PricingError::InvalidOptionType("X".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid option type: 'X' (expected C/Call or P/Put)"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidInput("sigma".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
