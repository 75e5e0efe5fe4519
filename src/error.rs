//! Error types for pricing, sensitivity and implied volatility operations.

use thiserror::Error;

/// Errors raised by the pricing engine and the implied volatility solver.
///
/// # Variants
/// - `InvalidInput`: unrecognised option label, contract fields outside their domain,
///   or an inconsistent configuration
/// - `NoSolution`: the observed premium cannot be reproduced by any volatility in the
///   solver's search interval
///
/// # Examples
/// ```
/// use greeks_lib::PricingError;
///
/// let err = PricingError::InvalidInput {
///     message: "option type must be either Call or Put, got 'straddle'".to_string(),
/// };
/// assert!(err.to_string().contains("straddle"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// Input rejected before any computation took place.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the rejected input
        message: String,
    },

    /// Observed premium lies outside the range reachable within the volatility bounds.
    #[error(
        "No implied volatility in [{lower_bound}, {upper_bound}] reproduces premium {premium} \
         (reachable premiums: {low_premium:.6} to {high_premium:.6})"
    )]
    NoSolution {
        /// Premium the caller asked the solver to match
        premium: f64,
        /// Lower end of the volatility search interval
        lower_bound: f64,
        /// Upper end of the volatility search interval
        upper_bound: f64,
        /// Model premium at the lower volatility bound
        low_premium: f64,
        /// Model premium at the upper volatility bound
        high_premium: f64,
    },
}

impl PricingError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        PricingError::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PricingError>;
