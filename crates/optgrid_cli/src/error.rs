//! CLI error types.

use optgrid_risk::RiskError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Sweep setup failed.
    #[error(transparent)]
    Risk(#[from] RiskError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_error_is_transparent() {
        let err: CliError = RiskError::EmptyAxis { axis: "strikes" }.into();
        assert_eq!(err.to_string(), "Empty axis: strikes");
    }

    #[test]
    fn test_io_error_wrapped() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: CliError = io.into();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
