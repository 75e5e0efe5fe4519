//! Implied volatility by bisection over a bounded volatility interval.
//!
//! Premium is monotonic in volatility, so a premium bracketed by the premiums at the
//! interval bounds has exactly one root inside it. The bracket halves every step, so
//! the default `[0.0001, 2.0]` interval converges in 14 steps.

pub mod solver;

pub use solver::{ImpliedVolSolution, ImpliedVolSolver};
