//! Error types for pricing and grid construction.
//!
//! The core only fails on invalid domain input. Outer surfaces (configuration
//! loading, rendering, export) use `anyhow` and wrap [`PricingError`] with context.

use thiserror::Error;

/// Errors raised by the pricer and the sensitivity grid builder.
///
/// # Examples
/// ```
/// use bsm_heatmap::PricingError;
///
/// let err = PricingError::invalid_input("spot", -1.0, "must be > 0");
/// assert!(err.to_string().contains("spot"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// A parameter is outside the domain of the closed-form model.
    #[error("Invalid input: {field} = {value} ({reason})")]
    InvalidInput {
        /// Name of the offending parameter
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },
}

impl PricingError {
    pub fn invalid_input(field: &'static str, value: f64, reason: &'static str) -> Self {
        PricingError::InvalidInput {
            field,
            value,
            reason,
        }
    }

    /// Name of the parameter that caused the error.
    pub fn field(&self) -> &'static str {
        match self {
            PricingError::InvalidInput { field, .. } => field,
        }
    }
}
