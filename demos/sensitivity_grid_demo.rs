// demos/sensitivity_grid_demo.rs

//! Spot × trading-day sensitivity grids
//!
//! Usage: `cargo run --example sensitivity_grid_demo -- [measure] [max_days]`
//! where `measure` is one of Premium, Delta, Gamma, Theta, Vega, Rho.

use anyhow::{Context, Result};
use greeks_lib::{
    build_sensitivity_grid, BumpConfig, GridAxes, Measure, OptionContract, OptionType,
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

    let mut args = std::env::args().skip(1);
    let measure: Measure = match args.next() {
        Some(label) => label.parse()?,
        None => Measure::Delta,
    };
    let max_days: u32 = match args.next() {
        Some(days) => days
            .parse()
            .with_context(|| format!("max_days must be a whole number, got '{days}'"))?,
        None => 22,
    };

    let base = OptionContract::new(
        100.0,
        110.0,
        f64::from(max_days) / TRADING_DAYS_PER_YEAR,
        0.02,
        0.30,
        OptionType::Call,
    )?;
    let axes = GridAxes::around_spot(base.spot(), max_days)?;
    let grid = build_sensitivity_grid(&base, &axes, measure, &BumpConfig::default())?;

    let (rows, columns) = grid.dimensions();
    println!(
        "{} grid for a {} K={:.0}: {rows} spot levels × {columns} trading days",
        grid.measure(),
        base.option_type(),
        base.strike()
    );

    // Every fifth spot level and a handful of maturities keep the table readable
    let shown_days: Vec<usize> = (0..columns).filter(|i| i % 5 == 0 || *i + 1 == columns).collect();
    print!("{:>8}", "Spot");
    for &day_idx in &shown_days {
        print!(" {:>9}", format!("{}d", grid.trading_days()[day_idx]));
    }
    println!();

    for spot_idx in (0..rows).step_by(5) {
        print!("{:>8.2}", grid.spots()[spot_idx]);
        if let Some(row) = grid.row(spot_idx) {
            for &day_idx in &shown_days {
                print!(" {:>9.4}", row[day_idx]);
            }
        }
        println!();
    }

    Ok(())
}
