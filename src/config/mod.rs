//! Configuration module for the fury dashboard.

mod chart;
mod types;

pub use chart::CHART_CONFIG;
pub use types::{SolAmount, Timeframe};
