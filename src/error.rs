// src/error.rs
use std::fmt;

/// Custom error types for the cabin-sway library
#[derive(Debug, Clone)]
pub enum FdError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// Explicit-scheme stability bound violated
    UnstableScheme {
        epsilon: f64,
        alpha: f64,
        limit: f64,
    },
}

impl fmt::Display for FdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FdError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            FdError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            FdError::UnstableScheme {
                epsilon,
                alpha,
                limit,
            } => {
                write!(
                    f,
                    "Unstable scheme: ε√α = {:.6} exceeds {} (ε={}, α={}). Refine the grid or reduce the stiffness.",
                    epsilon * alpha.sqrt(),
                    limit,
                    epsilon,
                    alpha
                )
            }
        }
    }
}

impl std::error::Error for FdError {}

/// Result type alias for cabin-sway operations
pub type FdResult<T> = Result<T, FdError>;

/// Validation utilities
pub mod validation {
    use super::{FdError, FdResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> FdResult<()> {
        if value <= 0.0 {
            Err(FdError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> FdResult<()> {
        if value < 0.0 {
            Err(FdError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> FdResult<()> {
        if !value.is_finite() {
            Err(FdError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate grid step count
    ///
    /// Fewer than two samples leaves nothing for the recurrence to compute,
    /// and absurdly large grids indicate a misconfigured end time.
    pub fn validate_steps(steps: usize) -> FdResult<()> {
        if steps < 2 {
            Err(FdError::InvalidConfiguration {
                field: "steps".to_string(),
                reason: "must be at least 2 (two seed values are required)".to_string(),
            })
        } else if steps > 100_000_000 {
            Err(FdError::InvalidConfiguration {
                field: "steps".to_string(),
                reason: "exceeds maximum allowed (100 million)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("alpha", 1.2).is_ok());
        assert!(validate_positive("alpha", 0.0).is_err());
        assert!(validate_positive("alpha", -0.1).is_err());
    }

    #[test]
    fn test_validate_steps() {
        assert!(validate_steps(2).is_ok());
        assert!(validate_steps(6000).is_ok());
        assert!(validate_steps(0).is_err());
        assert!(validate_steps(1).is_err());
        assert!(validate_steps(200_000_000).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("value", 1.0).is_ok());
        assert!(validate_finite("value", f64::NAN).is_err());
        assert!(validate_finite("value", f64::INFINITY).is_err());
        assert!(validate_finite("value", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = FdError::InvalidParameters {
            parameter: "alpha".to_string(),
            value: -0.1,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("alpha"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("positive"));
    }

    #[test]
    fn test_unstable_scheme_error() {
        let error = FdError::UnstableScheme {
            epsilon: 1.0,
            alpha: 9.0,
            limit: 2.0,
        };

        let display = format!("{}", error);
        assert!(display.contains("Unstable scheme"));
        assert!(display.contains("3.0"));
    }
}
