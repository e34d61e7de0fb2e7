//! Demand model: estimator, forecast window generation, and summary KPIs.

pub mod estimator;
pub mod forecast;
pub mod kpi;
pub mod types;

// Re-export the main types for convenience
pub use estimator::estimate;
pub use forecast::{PredictionRequest, generate};
pub use kpi::{DemandLevel, ForecastSummary};
pub use types::{
    FORECAST_HOURS, ForecastContext, ForecastRow, Season, UnknownCategory, Weather, Zone,
};
