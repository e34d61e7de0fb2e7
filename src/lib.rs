//! Hourly ride-demand forecasting for a fixed set of city zones.

pub mod config;
pub mod io;
/// Demand estimator, forecast generation, and summary KPIs.
pub mod model;
pub mod session;
#[cfg(feature = "tui")]
pub mod tui;
