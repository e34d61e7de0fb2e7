//! 24-hour forecast window generation.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike};

use super::estimator::estimate;
use super::types::{FORECAST_HOURS, ForecastContext, ForecastRow, Season, Weather, Zone};

/// Validated inputs for one prediction trigger.
///
/// Constructed fresh from the input surface at prediction time; the model
/// layer never mutates it.
#[derive(Debug, Clone)]
pub struct PredictionRequest {
    /// City zone being forecast.
    pub zone: Zone,
    /// First instant of the forecast window (calendar date plus hour).
    pub start: NaiveDateTime,
    /// Ambient temperature in degrees Celsius (0-45).
    pub temperature_c: f32,
    /// Relative humidity in percent (0-100).
    pub humidity_pct: f32,
    /// Season of the year.
    pub season: Season,
    /// Prevailing weather.
    pub weather: Weather,
}

impl PredictionRequest {
    /// Whether the window starts on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.start.weekday().num_days_from_monday() >= 5
    }

    /// Input-surface time label, e.g. `"9 AM"` (hour unpadded).
    pub fn time_label(&self) -> String {
        let (is_pm, hour12) = self.start.time().hour12();
        format!("{} {}", hour12, if is_pm { "PM" } else { "AM" })
    }

    /// Date label, e.g. `"12-Jun-2024"`.
    pub fn date_label(&self) -> String {
        self.start.date().format("%d-%b-%Y").to_string()
    }
}

/// Generates the 24-hour forecast window for a request.
///
/// Produces exactly [`FORECAST_HOURS`] rows, one per hour starting at
/// `request.start` and crossing midnight as needed. The weekend flag is
/// sampled once from the start day and held for every row, even when the
/// window rolls into a day of different weekend status.
pub fn generate(request: &PredictionRequest) -> Vec<ForecastRow> {
    let is_weekend = request.is_weekend();

    let mut rows = Vec::with_capacity(FORECAST_HOURS);
    for offset in 0..FORECAST_HOURS {
        let at = request.start + Duration::hours(offset as i64);
        let ctx = ForecastContext {
            hour: at.hour(),
            temperature_c: request.temperature_c,
            humidity_pct: request.humidity_pct,
            season: request.season,
            weather: request.weather,
            zone: request.zone,
            is_weekend,
        };
        rows.push(ForecastRow {
            offset,
            hour: at.hour(),
            time_label: at.format("%I %p").to_string(),
            predicted_rides: estimate(&ctx),
        });
    }
    rows
}
