// demos/pricing_demo.rs

//! Demonstration of Black-Scholes-Merton pricing and bump-and-reprice Greeks
//!
//! This example shows how to:
//! 1. Build validated option contracts
//! 2. Price calls and puts and compute their Greeks
//! 3. Check put-call parity on the results
//! 4. Value an expired contract at intrinsic value

use anyhow::Result;
use greeks_lib::{
    value_option, OptionContract, OptionType, PricingModel, TRADING_DAYS_PER_YEAR,
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

    println!("Black-Scholes-Merton Pricing Demo");
    println!("=================================");

    let spot = 100.0;
    let rate = 0.02;
    let volatility = 0.30;
    let days = 60.0;
    let t = days / TRADING_DAYS_PER_YEAR;

    println!("Underlying price: {spot:.2}");
    println!("Time to expiry:   {days:.0} trading days ({t:.4} years)");
    println!("Risk-free rate:   {:.2}%", rate * 100.0);
    println!("Volatility:       {:.2}%", volatility * 100.0);

    println!("\nStep 1: Pricing a strike ladder...");
    println!(
        "{:<6} {:<8} {:>10} {:>9} {:>11} {:>10} {:>11} {:>9}",
        "Type", "Strike", "Premium", "Delta", "Gamma(1%)", "Vega(1%)", "Theta(1d)", "Rho(1%)"
    );
    println!("{}", "-".repeat(80));

    for strike in [90.0, 95.0, 100.0, 105.0, 110.0] {
        for option_type in [OptionType::Call, OptionType::Put] {
            let valuation = value_option(spot, strike, t, rate, volatility, option_type)?;
            let greeks = valuation.greeks;
            println!(
                "{:<6} {:<8.1} {:>10.4} {:>9.4} {:>11.4} {:>10.4} {:>11.4} {:>9.4}",
                option_type.label(),
                strike,
                valuation.premium,
                greeks.delta,
                greeks.gamma,
                greeks.vega,
                greeks.theta,
                greeks.rho
            );
        }
    }

    println!("\nStep 2: Checking put-call parity at K=105...");
    let call = PricingModel::new(OptionContract::new(
        spot,
        105.0,
        t,
        rate,
        volatility,
        OptionType::Call,
    )?);
    let put = PricingModel::new(OptionContract::from_label(
        spot, 105.0, t, rate, volatility, "put",
    )?);
    let forward_value = spot - 105.0 * call.contract().discount_factor();
    println!("  C - P           = {:.8}", call.premium() - put.premium());
    println!("  S - K·exp(-rT)  = {forward_value:.8}");
    if let (Some(d1), Some(d2)) = (call.d1(), call.d2()) {
        println!("  d1 = {d1:.6}, d2 = {d2:.6}");
    }

    println!("\nStep 3: Valuing an expired contract...");
    let expired = value_option(spot, 90.0, 0.0, rate, volatility, OptionType::Call)?;
    println!("  Premium: {:.4} (intrinsic value)", expired.premium);
    println!("  Greeks:  {:?}", expired.greeks);

    Ok(())
}
