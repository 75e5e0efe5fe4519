use rayon::prelude::*;
use tracing::debug;

use super::types::{GridAxes, Measure, SensitivityGrid};
use crate::config::BumpConfig;
use crate::error::Result;
use crate::models::bs::{OptionContract, PricingModel};
use crate::models::utils::years_from_trading_days;

/// Evaluate `measure` for `base` at every spot level and remaining trading-day count
/// of `axes`.
///
/// Each cell reprices an independent contract that takes its spot and maturity
/// (`days / trading_days_per_year`) from the axes and every other field from `base`.
/// Rows are evaluated in parallel; no state is shared between cells.
///
/// # Errors
///
/// `InvalidInput` if the bump sizes are invalid or an axis value produces an invalid
/// contract (for example a non-positive spot level).
///
/// # Example
///
/// ```rust
/// use greeks_lib::{build_sensitivity_grid, BumpConfig, GridAxes, Measure, OptionContract, OptionType};
///
/// let base = OptionContract::new(100.0, 110.0, 22.0 / 260.0, 0.02, 0.30, OptionType::Call)?;
/// let axes = GridAxes::around_spot(base.spot(), 22)?;
/// let grid = build_sensitivity_grid(&base, &axes, Measure::Delta, &BumpConfig::default())?;
///
/// assert_eq!(grid.dimensions(), (61, 22));
/// # Ok::<(), greeks_lib::PricingError>(())
/// ```
pub fn build_sensitivity_grid(
    base: &OptionContract,
    axes: &GridAxes,
    measure: Measure,
    bumps: &BumpConfig,
) -> Result<SensitivityGrid> {
    bumps.validate()?;

    let values = axes
        .spots
        .par_iter()
        .map(|&spot| {
            axes.trading_days
                .iter()
                .map(|&days| -> Result<f64> {
                    let contract = OptionContract::new(
                        spot,
                        base.strike(),
                        years_from_trading_days(f64::from(days), bumps.trading_days_per_year),
                        base.risk_free_rate(),
                        base.volatility(),
                        base.option_type(),
                    )?;
                    Ok(measure.evaluate(&PricingModel::from_parts(contract, *bumps)))
                })
                .collect::<Result<Vec<f64>>>()
        })
        .collect::<Result<Vec<Vec<f64>>>>()?;

    debug!(
        %measure,
        rows = axes.spots.len(),
        columns = axes.trading_days.len(),
        "built sensitivity grid"
    );

    Ok(SensitivityGrid {
        measure,
        axes: axes.clone(),
        values,
    })
}
