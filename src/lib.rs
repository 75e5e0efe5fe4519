//! # Greeks-Lib: Black-Scholes-Merton Pricing, Greeks and Implied Volatility
//!
//! `greeks-lib` prices a single European option under the Black-Scholes-Merton model,
//! derives its risk sensitivities by bump-and-reprice, and inverts the model to recover
//! the volatility implied by an observed premium.
//!
//! ## Core Features
//!
//! - **Closed-form pricing**: call and put premiums with an intrinsic-value shortcut at expiry
//! - **Finite-difference Greeks**: delta, one-percent gamma, vega and rho, one-day theta
//! - **Implied volatility**: bracketed bisection over `[0.0001, 2.0]` with explicit
//!   `NoSolution` reporting
//! - **Sensitivity grids**: any measure over a spot × trading-day grid, evaluated in parallel
//!
//! ## Quick Start
//!
//! ```rust
//! use greeks_lib::{solve_implied_volatility, value_option, OptionType};
//!
//! // 60 trading days to expiry, 2% rate, 30% volatility
//! let t = 60.0 / 260.0;
//! let valuation = value_option(100.0, 105.0, t, 0.02, 0.30, OptionType::Call)?;
//! println!("premium {:.4}, delta {:.4}", valuation.premium, valuation.greeks.delta);
//!
//! // Recover the volatility from the premium
//! let iv = solve_implied_volatility(100.0, 105.0, t, 0.02, valuation.premium, OptionType::Call)?;
//! assert!((iv - 0.30).abs() < 1e-4);
//! # Ok::<(), greeks_lib::PricingError>(())
//! ```
//!
//! ## Conventions
//!
//! - Maturities are year fractions of a 260 trading-day year
//! - Gamma, vega and rho are differences across a ±0.5% band ("per 1%"), not derivatives
//! - Theta is the raw premium change after one trading day passes
//!
//! ## Configuration Presets
//!
//! Bump sizes and solver bounds live in [`EngineConfig`]; see [`default_configs`]:
//! - `standard()`: the published pricing constants
//! - `fine()`: smaller bumps and a tighter solver tolerance
//! - `coarse()`: loose solver tolerance for quick scans

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod scenario;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Configuration and errors
pub use config::{
    BumpConfig, EngineConfig, SolverConfig, RATE_BUMP, SOLVER_ACCURACY, SPOT_BUMP,
    TRADING_DAYS_PER_YEAR, VOLATILITY_BUMP, VOLATILITY_UPPER_BOUND,
};
pub use error::{PricingError, Result};

// Pricing model types
pub use models::bs::{Greeks, OptionContract, OptionType, PricingModel, Valuation};

// Implied volatility
pub use models::implied_vol::{ImpliedVolSolution, ImpliedVolSolver};

// Sensitivity grids
pub use scenario::{
    build_sensitivity_grid, GridAxes, Measure, SensitivityGrid, MAX_GRID_SPOTS,
};

pub use models::utils::{norm_cdf, years_from_trading_days};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured engine settings for common use cases.
///
/// # Available Configurations
///
/// - [`standard()`]: 260-day year, 0.5% bumps, solver over `[0.0001, 2.0]`
/// - [`fine()`]: 0.1% bumps, solver over `[1e-6, 5.0]`
/// - [`coarse()`]: solver tolerance `1e-3`
pub mod default_configs {
    use crate::config::EngineConfig;

    /// The named pricing constants.
    ///
    /// **Characteristics:**
    /// - 260 trading days per year
    /// - ±0.5% spot, volatility and rate bumps
    /// - Solver tolerance 0.0001, volatility ceiling 2.0 (at most 14 bisection steps)
    ///
    /// # Example
    ///
    /// ```rust
    /// use greeks_lib::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.solver.upper_bound, 2.0);
    /// ```
    pub fn standard() -> EngineConfig {
        EngineConfig::standard()
    }

    /// Smaller bumps and a tighter solver for research and validation.
    ///
    /// **Characteristics:**
    /// - ±0.1% spot, volatility and rate bumps
    /// - Solver tolerance 1e-6, volatility ceiling 5.0
    ///
    /// Greeks produced with these bumps are not comparable with the standard
    /// "per 1%" figures.
    pub fn fine() -> EngineConfig {
        EngineConfig::fine()
    }

    /// Loose solver tolerance for quick scans.
    ///
    /// **Characteristics:**
    /// - Standard bumps
    /// - Solver tolerance 0.001, volatility ceiling 2.0
    pub fn coarse() -> EngineConfig {
        EngineConfig::coarse()
    }
}

// ================================================================================================
// TOP-LEVEL API
// ================================================================================================

/// Price a European option and compute its Greeks with the standard bumps.
///
/// # Arguments
///
/// * `spot` - Current underlying price, must be positive
/// * `strike` - Exercise price, must be positive
/// * `time_to_maturity` - Years to expiry (trading days / 260), must be non-negative
/// * `risk_free_rate` - Continuously compounded annual rate
/// * `volatility` - Annualised volatility, must be positive before expiry
/// * `option_type` - Call or Put
///
/// # Errors
///
/// `PricingError::InvalidInput` when the inputs violate the domain constraints above.
///
/// # Example
///
/// ```rust
/// use greeks_lib::{value_option, OptionType};
///
/// let expired = value_option(100.0, 90.0, 0.0, 0.02, 0.30, OptionType::Call)?;
/// assert_eq!(expired.premium, 10.0);
/// assert_eq!(expired.greeks.delta, 1.0);
/// # Ok::<(), greeks_lib::PricingError>(())
/// ```
pub fn value_option(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> Result<Valuation> {
    let contract = OptionContract::new(
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        volatility,
        option_type,
    )?;
    Ok(PricingModel::new(contract).valuation())
}

/// Recover the volatility that reproduces `observed_premium`, searching `[0.0001, 2.0]`.
///
/// The result is within `0.0001` of the true implied volatility whenever one exists in
/// the search interval.
///
/// # Errors
///
/// * `PricingError::InvalidInput` for out-of-domain contract inputs or a non-finite premium
/// * `PricingError::NoSolution` when the premium is below the low-volatility premium or
///   above the 200%-volatility premium, which includes any premium on an expired contract
///
/// # Example
///
/// ```rust
/// use greeks_lib::{solve_implied_volatility, OptionType, PricingError};
///
/// // A call can never be worth more than the underlying
/// let result = solve_implied_volatility(100.0, 105.0, 0.25, 0.02, 150.0, OptionType::Call);
/// assert!(matches!(result, Err(PricingError::NoSolution { .. })));
/// ```
pub fn solve_implied_volatility(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    observed_premium: f64,
    option_type: OptionType,
) -> Result<f64> {
    ImpliedVolSolver::new().solve(
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        observed_premium,
        option_type,
    )
}
