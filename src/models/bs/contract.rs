use std::fmt;
use std::str::FromStr;

use crate::error::{PricingError, Result};

/// Exercise right of a European option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Right to buy the underlying at the strike
    Call,
    /// Right to sell the underlying at the strike
    Put,
}

impl OptionType {
    pub fn label(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts `call`/`c` and `put`/`p` in any case, with surrounding whitespace ignored.
impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(label: &str) -> Result<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::invalid_input(format!(
                "option type must be either Call or Put, got '{label}'"
            ))),
        }
    }
}

/// Immutable inputs of a single pricing computation.
///
/// Constructed through [`OptionContract::new`], which enforces the domain invariants:
/// positive spot and strike, non-negative maturity, and positive volatility whenever
/// the contract has not expired. Sensitivities derive bumped copies through the
/// crate-internal `with_*` constructors, which replace one field and skip validation
/// so that finite differences reproduce the raw bumped inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionContract {
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    volatility: f64,
    option_type: OptionType,
}

impl OptionContract {
    /// # Arguments
    ///
    /// * `spot` - Current price of the underlying
    /// * `strike` - Exercise price
    /// * `time_to_maturity` - Years to expiry (trading days / 260)
    /// * `risk_free_rate` - Continuously compounded annual rate, may be negative
    /// * `volatility` - Annualised volatility of log-returns
    /// * `option_type` - Call or Put
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidInput` when any field violates the invariants above or is
    /// not finite.
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(PricingError::invalid_input(format!(
                "spot must be positive, got {spot}"
            )));
        }
        if !(strike.is_finite() && strike > 0.0) {
            return Err(PricingError::invalid_input(format!(
                "strike must be positive, got {strike}"
            )));
        }
        if !(time_to_maturity.is_finite() && time_to_maturity >= 0.0) {
            return Err(PricingError::invalid_input(format!(
                "time to maturity must be non-negative, got {time_to_maturity}"
            )));
        }
        if !risk_free_rate.is_finite() {
            return Err(PricingError::invalid_input(format!(
                "risk-free rate must be finite, got {risk_free_rate}"
            )));
        }
        if !volatility.is_finite()
            || volatility < 0.0
            || (time_to_maturity > 0.0 && volatility == 0.0)
        {
            return Err(PricingError::invalid_input(format!(
                "volatility must be positive before expiry, got {volatility}"
            )));
        }

        Ok(Self {
            spot,
            strike,
            time_to_maturity,
            risk_free_rate,
            volatility,
            option_type,
        })
    }

    /// Like [`OptionContract::new`] but resolves the option type from a text label.
    ///
    /// ```rust
    /// use greeks_lib::{OptionContract, OptionType, PricingError};
    ///
    /// let contract = OptionContract::from_label(100.0, 105.0, 0.25, 0.02, 0.3, "C")?;
    /// assert_eq!(contract.option_type(), OptionType::Call);
    ///
    /// let err = OptionContract::from_label(100.0, 105.0, 0.25, 0.02, 0.3, "straddle");
    /// assert!(matches!(err, Err(PricingError::InvalidInput { .. })));
    /// # Ok::<(), PricingError>(())
    /// ```
    pub fn from_label(
        spot: f64,
        strike: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: &str,
    ) -> Result<Self> {
        let option_type = option_type.parse::<OptionType>()?;
        Self::new(
            spot,
            strike,
            time_to_maturity,
            risk_free_rate,
            volatility,
            option_type,
        )
    }

    pub fn spot(&self) -> f64 {
        self.spot
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn time_to_maturity(&self) -> f64 {
        self.time_to_maturity
    }

    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    pub fn is_expired(&self) -> bool {
        self.time_to_maturity == 0.0
    }

    /// Payoff if exercised now: `max(S - K, 0)` for calls, `max(K - S, 0)` for puts
    pub fn intrinsic_value(&self) -> f64 {
        match self.option_type {
            OptionType::Call => (self.spot - self.strike).max(0.0),
            OptionType::Put => (self.strike - self.spot).max(0.0),
        }
    }

    /// Discount factor `exp(-r * T)`
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_maturity).exp()
    }

    pub(crate) fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    pub(crate) fn with_time_to_maturity(self, time_to_maturity: f64) -> Self {
        Self {
            time_to_maturity,
            ..self
        }
    }

    pub(crate) fn with_risk_free_rate(self, risk_free_rate: f64) -> Self {
        Self {
            risk_free_rate,
            ..self
        }
    }

    pub(crate) fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    pub(crate) fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }
}
