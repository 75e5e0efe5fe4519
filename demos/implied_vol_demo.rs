// demos/implied_vol_demo.rs

//! Implied volatility recovery with the bisection solver
//!
//! Prices a set of options at known volatilities, recovers those volatilities from the
//! premiums, and shows how unreachable premiums are reported. Run with
//! `RUST_LOG=greeks_lib=trace` to see each bisection step.

use anyhow::Result;
use greeks_lib::{
    default_configs, value_option, ImpliedVolSolver, OptionType, PricingError,
    TRADING_DAYS_PER_YEAR,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("Implied Volatility Demo");
    println!("=======================");

    let spot = 100.0;
    let rate = 0.02;
    let t = 60.0 / TRADING_DAYS_PER_YEAR;
    let solver = ImpliedVolSolver::new();

    println!("\nRound trips (60 trading days, r = 2%):");
    println!(
        "{:<6} {:<8} {:>10} {:>10} {:>12} {:>6}",
        "Type", "Strike", "True vol", "Premium", "Implied vol", "Steps"
    );
    println!("{}", "-".repeat(58));

    for (strike, volatility, option_type) in [
        (90.0, 0.15, OptionType::Put),
        (95.0, 0.22, OptionType::Put),
        (100.0, 0.30, OptionType::Call),
        (105.0, 0.45, OptionType::Call),
        (120.0, 0.80, OptionType::Call),
    ] {
        let premium = value_option(spot, strike, t, rate, volatility, option_type)?.premium;
        let solution = solver.solve_detailed(spot, strike, t, rate, premium, option_type)?;
        println!(
            "{:<6} {:<8.1} {:>10.4} {:>10.4} {:>12.4} {:>6}",
            option_type.label(),
            strike,
            volatility,
            premium,
            solution.volatility,
            solution.iterations
        );
    }

    println!("\nUnreachable premiums:");
    for (label, premium) in [("below intrinsic", 0.5), ("above spot", 150.0)] {
        match solver.solve(spot, 90.0, t, rate, premium, OptionType::Call) {
            Ok(iv) => println!("  {label}: unexpectedly solved to {iv:.4}"),
            Err(PricingError::NoSolution {
                low_premium,
                high_premium,
                ..
            }) => println!(
                "  {label} ({premium}): no solution, reachable range [{low_premium:.4}, {high_premium:.4}]"
            ),
            Err(e) => return Err(e.into()),
        }
    }

    println!("\nBeyond the default ceiling:");
    let premium = value_option(spot, 100.0, t, rate, 2.6, OptionType::Call)?.premium;
    let fine = ImpliedVolSolver::with_config(default_configs::fine().solver)?;
    match solver.solve(spot, 100.0, t, rate, premium, OptionType::Call) {
        Ok(iv) => println!("  standard solver: {iv:.4}"),
        Err(e) => println!("  standard solver: {e}"),
    }
    let iv = fine.solve(spot, 100.0, t, rate, premium, OptionType::Call)?;
    println!("  fine solver:     {iv:.6}");

    Ok(())
}
