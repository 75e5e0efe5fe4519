//! Spot × time sensitivity grids for a single contract.

pub mod grid;
pub mod types;

pub use grid::build_sensitivity_grid;
pub use types::{GridAxes, Measure, SensitivityGrid, MAX_GRID_SPOTS};
