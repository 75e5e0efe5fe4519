pub mod bs;
pub mod implied_vol;

/// Utility functions shared by the pricing and solver modules
pub mod utils {
    use statrs::function::erf::erfc;
    use std::f64::consts::SQRT_2;

    /// Standard normal cumulative distribution function, `0.5 * erfc(-x / sqrt(2))`
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * erfc(-x / SQRT_2)
    }

    /// Convert a trading-day count into a year fraction
    pub fn years_from_trading_days(days: f64, trading_days_per_year: f64) -> f64 {
        days / trading_days_per_year
    }

}
