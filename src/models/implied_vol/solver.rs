use tracing::{debug, trace};

use crate::config::SolverConfig;
use crate::error::{PricingError, Result};
use crate::models::bs::{OptionContract, OptionType, PricingModel};

/// Converged implied volatility and the number of bisection steps taken
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVolSolution {
    pub volatility: f64,
    pub iterations: u32,
}

/// Bisection solver recovering the volatility that reproduces an observed premium.
///
/// The search interval is `[accuracy, upper_bound]` (by default `[0.0001, 2.0]`). The
/// observed premium must be bracketed by the premiums at the two bounds, otherwise the
/// solver fails with [`PricingError::NoSolution`] instead of searching.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImpliedVolSolver {
    config: SolverConfig,
}

impl ImpliedVolSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Solver with a custom search interval. Fails with `InvalidInput` when the
    /// tolerance is not positive or not below the upper bound.
    pub fn with_config(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Implied volatility for the given inputs.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` if spot, strike, maturity, rate or premium are outside their domain
    /// * `NoSolution` if no volatility in the search interval reproduces `observed_premium`
    pub fn solve(
        &self,
        spot: f64,
        strike: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        observed_premium: f64,
        option_type: OptionType,
    ) -> Result<f64> {
        self.solve_detailed(
            spot,
            strike,
            time_to_maturity,
            risk_free_rate,
            observed_premium,
            option_type,
        )
        .map(|solution| solution.volatility)
    }

    /// Same as [`ImpliedVolSolver::solve`] but also reports the iteration count.
    pub fn solve_detailed(
        &self,
        spot: f64,
        strike: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        observed_premium: f64,
        option_type: OptionType,
    ) -> Result<ImpliedVolSolution> {
        let contract = OptionContract::new(
            spot,
            strike,
            time_to_maturity,
            risk_free_rate,
            self.config.accuracy,
            option_type,
        )?;
        self.solve_for_contract(&contract, observed_premium)
    }

    /// Solve using every field of `contract` except its volatility.
    pub fn solve_for_contract(
        &self,
        contract: &OptionContract,
        observed_premium: f64,
    ) -> Result<ImpliedVolSolution> {
        if !observed_premium.is_finite() {
            return Err(PricingError::invalid_input(format!(
                "observed premium must be finite, got {observed_premium}"
            )));
        }

        let premium_at = |volatility: f64| -> f64 {
            PricingModel::new(contract.with_volatility(volatility)).premium()
        };

        let accuracy = self.config.accuracy;
        let mut low_bound = accuracy;
        let mut up_bound = self.config.upper_bound;
        let mut low_premium = premium_at(low_bound);
        let mut up_premium = premium_at(up_bound);

        if (low_premium - observed_premium) * (up_premium - observed_premium) >= 0.0 {
            debug!(
                observed_premium,
                low_premium, up_premium, "premium outside the reachable volatility range"
            );
            return Err(PricingError::NoSolution {
                premium: observed_premium,
                lower_bound: low_bound,
                upper_bound: up_bound,
                low_premium,
                high_premium: up_premium,
            });
        }

        let mut iterations = 0;
        while (up_bound - low_bound) / 2.0 >= accuracy {
            let mid = (up_bound + low_bound) / 2.0;
            let mid_premium = premium_at(mid);
            iterations += 1;
            trace!(iterations, low_bound, up_bound, mid, mid_premium, "bisection step");

            if (mid_premium - observed_premium) * (low_premium - observed_premium) < 0.0 {
                up_bound = mid;
                up_premium = mid_premium;
            } else if (mid_premium - observed_premium) * (up_premium - observed_premium) < 0.0 {
                low_bound = mid;
                low_premium = mid_premium;
            } else {
                // mid reproduces the premium exactly
                up_bound = mid;
                low_bound = mid;
            }
        }

        let volatility = (up_bound + low_bound) / 2.0;
        debug!(observed_premium, volatility, iterations, "implied volatility converged");
        Ok(ImpliedVolSolution {
            volatility,
            iterations,
        })
    }
}
