use super::contract::{OptionContract, OptionType};
use crate::config::BumpConfig;
use crate::error::Result;
use crate::models::utils::norm_cdf;

/// Finite-difference sensitivities of one contract.
///
/// Gamma, vega and rho are central differences across a ±0.5% (default) band, so each
/// reads as "change per 1% move"; theta is the raw premium change over one trading day.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
}

/// Premium together with its sensitivities
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Valuation {
    pub premium: f64,
    pub greeks: Greeks,
}

/// Black-Scholes-Merton pricer for a single European contract.
///
/// A `PricingModel` is a value: every bumped evaluation builds a fresh peer model from a
/// copy of the contract, so models can be shared across threads freely.
///
/// # Example
///
/// ```rust
/// use greeks_lib::{OptionContract, OptionType, PricingModel};
///
/// let contract = OptionContract::new(100.0, 105.0, 60.0 / 260.0, 0.02, 0.30, OptionType::Call)?;
/// let model = PricingModel::new(contract);
///
/// let premium = model.premium();
/// let delta = model.delta();
/// assert!(premium > 0.0 && premium < 100.0);
/// assert!(delta > 0.0 && delta < 1.0);
/// # Ok::<(), greeks_lib::PricingError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingModel {
    contract: OptionContract,
    bumps: BumpConfig,
}

impl PricingModel {
    /// Model using the standard bump sizes
    pub fn new(contract: OptionContract) -> Self {
        Self {
            contract,
            bumps: BumpConfig::default(),
        }
    }

    /// Model using custom bump sizes. Fails with `InvalidInput` on non-positive bumps.
    pub fn with_bumps(contract: OptionContract, bumps: BumpConfig) -> Result<Self> {
        bumps.validate()?;
        Ok(Self::from_parts(contract, bumps))
    }

    pub(crate) fn from_parts(contract: OptionContract, bumps: BumpConfig) -> Self {
        Self { contract, bumps }
    }

    pub fn contract(&self) -> &OptionContract {
        &self.contract
    }

    pub fn bumps(&self) -> &BumpConfig {
        &self.bumps
    }

    fn reprice(&self, contract: OptionContract) -> Self {
        Self::from_parts(contract, self.bumps)
    }

    /// `(d1, d2)` for a live contract. The caller guarantees `T > 0` and `σ > 0`.
    fn d1_d2(&self) -> (f64, f64) {
        let c = &self.contract;
        let vol_sqrt_t = c.volatility() * c.time_to_maturity().sqrt();
        let d1 = ((c.spot() / c.strike()).ln()
            + (c.risk_free_rate() + c.volatility().powi(2) / 2.0) * c.time_to_maturity())
            / vol_sqrt_t;
        (d1, d1 - vol_sqrt_t)
    }

    fn has_diffusion(&self) -> bool {
        self.contract.time_to_maturity() > 0.0 && self.contract.volatility() > 0.0
    }

    /// `d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T)`; `None` once the contract has expired.
    pub fn d1(&self) -> Option<f64> {
        self.has_diffusion().then(|| self.d1_d2().0)
    }

    /// `d2 = d1 - σ√T`; `None` once the contract has expired.
    pub fn d2(&self) -> Option<f64> {
        self.has_diffusion().then(|| self.d1_d2().1)
    }

    /// Theoretical fair value.
    ///
    /// At expiry the intrinsic value is returned with no volatility or rate effect.
    /// A non-positive volatility before expiry (reachable only through a downward vega
    /// bump) prices at the deterministic limit `max(±(S - K·e^{-rT}), 0)`.
    pub fn premium(&self) -> f64 {
        let c = &self.contract;
        if c.is_expired() {
            return c.intrinsic_value();
        }

        let discounted_strike = c.strike() * c.discount_factor();
        if c.volatility() <= 0.0 {
            return match c.option_type() {
                OptionType::Call => (c.spot() - discounted_strike).max(0.0),
                OptionType::Put => (discounted_strike - c.spot()).max(0.0),
            };
        }

        let (d1, d2) = self.d1_d2();
        match c.option_type() {
            OptionType::Call => norm_cdf(d1) * c.spot() - norm_cdf(d2) * discounted_strike,
            OptionType::Put => norm_cdf(-d2) * discounted_strike - norm_cdf(-d1) * c.spot(),
        }
    }

    /// Sensitivity of the premium to a unit move in spot: `N(d1)` for calls,
    /// `N(d1) - 1` for puts.
    ///
    /// Once expired the intrinsic delta is returned: 1 for an in-the-money call,
    /// -1 for an in-the-money put, 0 otherwise.
    pub fn delta(&self) -> f64 {
        let c = &self.contract;
        if !self.has_diffusion() {
            return match c.option_type() {
                OptionType::Call if c.spot() > c.strike() => 1.0,
                OptionType::Put if c.spot() < c.strike() => -1.0,
                _ => 0.0,
            };
        }

        let (d1, _) = self.d1_d2();
        match c.option_type() {
            OptionType::Call => norm_cdf(d1),
            OptionType::Put => norm_cdf(d1) - 1.0,
        }
    }

    /// Change in delta across a ±0.5% spot band (not normalised by the step).
    pub fn gamma_one_percent(&self) -> f64 {
        let spot = self.contract.spot();
        let up = self.reprice(self.contract.with_spot(spot * (1.0 + self.bumps.spot_bump)));
        let down = self.reprice(self.contract.with_spot(spot * (1.0 - self.bumps.spot_bump)));
        up.delta() - down.delta()
    }

    /// Change in premium across a ±0.5 vol-point band.
    pub fn vega_one_percent(&self) -> f64 {
        let vol = self.contract.volatility();
        let bump = self.bumps.volatility_bump;
        let up = self.reprice(self.contract.with_volatility(vol + bump));
        let down = self.reprice(self.contract.with_volatility(vol - bump));
        up.premium() - down.premium()
    }

    /// Premium after one trading day passes minus the premium today.
    ///
    /// The shortened maturity is floored at zero, so the last day decays to intrinsic
    /// value and an expired contract has zero theta.
    pub fn theta_one_day(&self) -> f64 {
        let remaining = (self.contract.time_to_maturity() - self.bumps.one_day()).max(0.0);
        let tomorrow = self.reprice(self.contract.with_time_to_maturity(remaining));
        tomorrow.premium() - self.premium()
    }

    /// Change in premium across a ±0.5% rate band.
    pub fn rho_one_percent(&self) -> f64 {
        let rate = self.contract.risk_free_rate();
        let bump = self.bumps.rate_bump;
        let up = self.reprice(self.contract.with_risk_free_rate(rate + bump));
        let down = self.reprice(self.contract.with_risk_free_rate(rate - bump));
        up.premium() - down.premium()
    }

    pub fn greeks(&self) -> Greeks {
        Greeks {
            delta: self.delta(),
            gamma: self.gamma_one_percent(),
            vega: self.vega_one_percent(),
            theta: self.theta_one_day(),
            rho: self.rho_one_percent(),
        }
    }

    pub fn valuation(&self) -> Valuation {
        Valuation {
            premium: self.premium(),
            greeks: self.greeks(),
        }
    }
}
