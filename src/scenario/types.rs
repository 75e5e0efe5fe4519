use std::fmt;
use std::str::FromStr;

use crate::error::{PricingError, Result};
use crate::models::bs::PricingModel;

/// Lowest spot level of a default grid, as a fraction of the base spot
pub const GRID_SPOT_FLOOR: f64 = 0.7;

/// Highest spot level of a default grid, as a fraction of the base spot
pub const GRID_SPOT_CEILING: f64 = 1.3;

/// Most spot levels [`GridAxes::around_spot`] will build
pub const MAX_GRID_SPOTS: usize = 10_000;

/// Quantity reported in each cell of a sensitivity grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Measure {
    #[default]
    Premium,
    Delta,
    /// Delta change across a ±0.5% spot band
    Gamma,
    /// Premium change over one trading day
    Theta,
    /// Premium change across a ±0.5 vol-point band
    Vega,
    /// Premium change across a ±0.5% rate band
    Rho,
}

impl Measure {
    pub const ALL: [Measure; 6] = [
        Measure::Premium,
        Measure::Delta,
        Measure::Gamma,
        Measure::Theta,
        Measure::Vega,
        Measure::Rho,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Measure::Premium => "Premium",
            Measure::Delta => "Delta",
            Measure::Gamma => "Gamma(1%)",
            Measure::Theta => "Theta(1d)",
            Measure::Vega => "Vega(1%)",
            Measure::Rho => "Rho(1%)",
        }
    }

    pub fn evaluate(&self, model: &PricingModel) -> f64 {
        match self {
            Measure::Premium => model.premium(),
            Measure::Delta => model.delta(),
            Measure::Gamma => model.gamma_one_percent(),
            Measure::Theta => model.theta_one_day(),
            Measure::Vega => model.vega_one_percent(),
            Measure::Rho => model.rho_one_percent(),
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-insensitive; the `(1%)`/`(1d)` suffixes are optional.
impl FromStr for Measure {
    type Err = PricingError;

    fn from_str(label: &str) -> Result<Self> {
        let normalized = label.trim().to_ascii_lowercase();
        let name = normalized
            .strip_suffix("(1%)")
            .or_else(|| normalized.strip_suffix("(1d)"))
            .unwrap_or(&normalized)
            .trim();
        match name {
            "premium" => Ok(Measure::Premium),
            "delta" => Ok(Measure::Delta),
            "gamma" => Ok(Measure::Gamma),
            "theta" => Ok(Measure::Theta),
            "vega" => Ok(Measure::Vega),
            "rho" => Ok(Measure::Rho),
            _ => Err(PricingError::invalid_input(format!(
                "unknown measure '{label}'"
            ))),
        }
    }
}

/// Spot levels (rows) and remaining trading days (columns) of a grid
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridAxes {
    pub spots: Vec<f64>,
    pub trading_days: Vec<u32>,
}

impl GridAxes {
    pub fn new(spots: Vec<f64>, trading_days: Vec<u32>) -> Self {
        Self {
            spots,
            trading_days,
        }
    }

    /// Unit-step spot ladder from 70% to 130% of `spot`, and days `1..=max_trading_days`.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `spot` is not positive and finite, or if the ladder would hold
    /// more than [`MAX_GRID_SPOTS`] levels.
    ///
    /// ```rust
    /// use greeks_lib::GridAxes;
    ///
    /// let axes = GridAxes::around_spot(100.0, 22)?;
    /// assert_eq!(axes.spots.first(), Some(&70.0));
    /// assert_eq!(axes.spots.last(), Some(&130.0));
    /// assert_eq!(axes.spots.len(), 61);
    /// assert_eq!(axes.trading_days, (1..=22).collect::<Vec<_>>());
    /// # Ok::<(), greeks_lib::PricingError>(())
    /// ```
    pub fn around_spot(spot: f64, max_trading_days: u32) -> Result<Self> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(PricingError::invalid_input(format!(
                "grid spot must be positive, got {spot}"
            )));
        }
        let low = spot * GRID_SPOT_FLOOR;
        let high = spot * GRID_SPOT_CEILING;
        let steps = (high - low + 1e-9).floor();
        if steps >= MAX_GRID_SPOTS as f64 {
            return Err(PricingError::invalid_input(format!(
                "spot {spot} needs {} grid levels, at most {MAX_GRID_SPOTS} allowed",
                steps + 1.0
            )));
        }

        // steps < MAX_GRID_SPOTS, so the cast is exact
        let spots = (0..=steps as usize).map(|i| low + i as f64).collect();
        Ok(Self {
            spots,
            trading_days: (1..=max_trading_days).collect(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty() || self.trading_days.is_empty()
    }
}

/// One measure evaluated over every (spot, trading day) pair of a [`GridAxes`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityGrid {
    pub(crate) measure: Measure,
    pub(crate) axes: GridAxes,
    /// Row-major: `values[spot_idx][day_idx]`
    pub(crate) values: Vec<Vec<f64>>,
}

impl SensitivityGrid {
    pub fn measure(&self) -> Measure {
        self.measure
    }

    pub fn spots(&self) -> &[f64] {
        &self.axes.spots
    }

    pub fn trading_days(&self) -> &[u32] {
        &self.axes.trading_days
    }

    /// `(rows, columns)`, i.e. `(spot levels, trading days)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.axes.spots.len(), self.axes.trading_days.len())
    }

    pub fn value(&self, spot_idx: usize, day_idx: usize) -> Option<f64> {
        self.values.get(spot_idx)?.get(day_idx).copied()
    }

    pub fn row(&self, spot_idx: usize) -> Option<&[f64]> {
        self.values.get(spot_idx).map(Vec::as_slice)
    }

    pub fn column(&self, day_idx: usize) -> Option<Vec<f64>> {
        if day_idx >= self.axes.trading_days.len() {
            return None;
        }
        Some(self.values.iter().map(|row| row[day_idx]).collect())
    }

    /// Cells as `(spot, trading_days, value)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (f64, u32, f64)> + '_ {
        self.axes
            .spots
            .iter()
            .zip(&self.values)
            .flat_map(move |(&spot, row)| {
                self.axes
                    .trading_days
                    .iter()
                    .zip(row)
                    .map(move |(&days, &value)| (spot, days, value))
            })
    }
}
