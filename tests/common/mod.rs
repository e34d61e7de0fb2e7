//! Shared test fixtures for integration tests.

use chrono::NaiveDate;
use ola_forecast::model::forecast::PredictionRequest;
use ola_forecast::model::types::{Season, Weather, Zone};

/// Builds a request with the baseline ambient conditions.
pub fn request(zone: Zone, date: NaiveDate, hour: u32) -> PredictionRequest {
    PredictionRequest {
        zone,
        start: date
            .and_hms_opt(hour, 0, 0)
            .unwrap_or_else(|| panic!("hour {hour} out of range")),
        temperature_c: 28.0,
        humidity_pct: 60.0,
        season: Season::Summer,
        weather: Weather::Clear,
    }
}

/// A June weekday (Wednesday 2024-06-12).
pub fn weekday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 12).expect("valid date")
}

/// A December Saturday (2024-12-14).
pub fn saturday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 14).expect("valid date")
}

/// Default weekday-morning request in Andheri.
pub fn default_request() -> PredictionRequest {
    request(Zone::Andheri, weekday(), 9)
}
