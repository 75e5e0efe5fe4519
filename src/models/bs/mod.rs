//! Black-Scholes-Merton pricing of European options.
//!
//! Closed-form premium, `N(d1)` delta, and bump-and-reprice sensitivities for a
//! single contract. Every bumped evaluation prices an independent copy of the
//! contract with one field replaced.

pub mod contract;
pub mod model;

pub use contract::{OptionContract, OptionType};
pub use model::{Greeks, PricingModel, Valuation};
