use crate::error::{PricingError, Result};

/// Trading days per year used to annualise day counts.
pub const TRADING_DAYS_PER_YEAR: f64 = 260.0;

/// Relative spot bump (±0.5%) for the one-percent gamma.
pub const SPOT_BUMP: f64 = 0.005;

/// Absolute volatility bump (±0.5 vol points) for the one-percent vega.
pub const VOLATILITY_BUMP: f64 = 0.005;

/// Absolute rate bump (±0.5%) for the one-percent rho.
pub const RATE_BUMP: f64 = 0.005;

/// Bisection stopping tolerance, also the lowest volatility searched.
pub const SOLVER_ACCURACY: f64 = 0.0001;

/// Highest volatility the implied volatility solver searches (200%).
pub const VOLATILITY_UPPER_BOUND: f64 = 2.0;

/// Bump sizes used by the finite-difference Greeks
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BumpConfig {
    /// Day count used to turn one trading day into a year fraction
    pub trading_days_per_year: f64,
    /// Relative spot move applied up and down for gamma
    pub spot_bump: f64,
    /// Absolute volatility move applied up and down for vega
    pub volatility_bump: f64,
    /// Absolute rate move applied up and down for rho
    pub rate_bump: f64,
}

impl Default for BumpConfig {
    fn default() -> Self {
        Self {
            trading_days_per_year: TRADING_DAYS_PER_YEAR,
            spot_bump: SPOT_BUMP,
            volatility_bump: VOLATILITY_BUMP,
            rate_bump: RATE_BUMP,
        }
    }
}

impl BumpConfig {
    /// Year fraction of a single trading day
    pub fn one_day(&self) -> f64 {
        1.0 / self.trading_days_per_year
    }

    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("trading_days_per_year", self.trading_days_per_year),
            ("spot_bump", self.spot_bump),
            ("volatility_bump", self.volatility_bump),
            ("rate_bump", self.rate_bump),
        ];
        for (name, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(PricingError::invalid_input(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        if self.spot_bump >= 1.0 {
            return Err(PricingError::invalid_input(format!(
                "spot_bump must be below 1.0 so the bumped spot stays positive, got {}",
                self.spot_bump
            )));
        }
        Ok(())
    }
}

/// Search interval and tolerance for the bisection solver
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Stopping tolerance on the half-width of the bracket; also the lower bound
    #[cfg_attr(feature = "serde", serde(default = "default_accuracy"))]
    pub accuracy: f64,

    /// Volatility ceiling of the search interval
    #[cfg_attr(feature = "serde", serde(default = "default_upper_bound"))]
    pub upper_bound: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            accuracy: default_accuracy(),
            upper_bound: default_upper_bound(),
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.accuracy.is_finite() && self.accuracy > 0.0) {
            return Err(PricingError::invalid_input(format!(
                "solver accuracy must be positive and finite, got {}",
                self.accuracy
            )));
        }
        if !(self.upper_bound.is_finite() && self.upper_bound > self.accuracy) {
            return Err(PricingError::invalid_input(format!(
                "solver upper bound must exceed accuracy {}, got {}",
                self.accuracy, self.upper_bound
            )));
        }
        Ok(())
    }

    /// Upper bound on the number of halvings needed to reach the tolerance
    pub fn max_iterations(&self) -> u32 {
        let width = self.upper_bound - self.accuracy;
        let ratio = width / (2.0 * self.accuracy);
        if ratio <= 1.0 {
            0
        } else {
            ratio.log2().ceil() as u32
        }
    }
}

/// Main configuration struct for the pricing engine
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Finite-difference bump sizes
    #[cfg_attr(feature = "serde", serde(default))]
    pub bumps: BumpConfig,

    /// Implied volatility search settings
    #[cfg_attr(feature = "serde", serde(default))]
    pub solver: SolverConfig,
}

impl EngineConfig {
    /// The named pricing constants, unchanged
    pub fn standard() -> Self {
        Self::default()
    }

    /// Tighter tolerance, smaller bumps and a wider volatility ceiling
    pub fn fine() -> Self {
        Self {
            bumps: BumpConfig {
                spot_bump: 0.001,
                volatility_bump: 0.001,
                rate_bump: 0.001,
                ..BumpConfig::default()
            },
            solver: SolverConfig {
                accuracy: 1e-6,
                upper_bound: 5.0,
            },
        }
    }

    /// Loose tolerance for quick scans
    pub fn coarse() -> Self {
        Self {
            bumps: BumpConfig::default(),
            solver: SolverConfig {
                accuracy: 1e-3,
                ..SolverConfig::default()
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bumps.validate()?;
        self.solver.validate()
    }

    /// Parse a TOML document. Missing tables and keys keep their defaults.
    ///
    /// ```rust
    /// use greeks_lib::EngineConfig;
    ///
    /// let config = EngineConfig::from_toml_str("[solver]\nupper_bound = 3.0\n")?;
    /// assert_eq!(config.solver.upper_bound, 3.0);
    /// assert_eq!(config.solver.accuracy, 0.0001);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        let config: EngineConfig = toml::from_str(source)?;
        config.validate()?;
        tracing::debug!(?config, "parsed engine configuration");
        Ok(config)
    }

    /// Read and parse a TOML configuration file
    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("invalid engine configuration in {}", path.display()))
    }
}

fn default_accuracy() -> f64 {
    SOLVER_ACCURACY
}

fn default_upper_bound() -> f64 {
    VOLATILITY_UPPER_BOUND
}
