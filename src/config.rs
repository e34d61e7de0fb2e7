//! TOML-based prediction scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::forecast::PredictionRequest;
use crate::model::types::{Season, UnknownCategory, Weather, Zone};

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Window start: city, date, and 12-hour clock time.
    #[serde(default)]
    pub request: RequestConfig,
    /// Ambient conditions held constant across the window.
    #[serde(default)]
    pub conditions: ConditionsConfig,
}

/// Window start parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RequestConfig {
    /// City zone name (one of the 10 fixed zones).
    pub city: String,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    /// Clock hour on the 12-hour dial (1-12).
    pub hour: u32,
    /// `"AM"` or `"PM"`.
    pub meridiem: String,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            city: "Andheri".to_string(),
            date: "2024-06-12".to_string(),
            hour: 9,
            meridiem: "AM".to_string(),
        }
    }
}

/// Ambient condition parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConditionsConfig {
    /// Ambient temperature in degrees Celsius (0-45).
    pub temperature_c: f32,
    /// Relative humidity in percent (0-100).
    pub humidity_pct: f32,
    /// Season name (one of the 5 fixed seasons).
    pub season: String,
    /// Weather name (one of the 5 fixed kinds).
    pub weather: String,
}

impl Default for ConditionsConfig {
    fn default() -> Self {
        Self {
            temperature_c: 28.0,
            humidity_pct: 60.0,
            season: "Summer".to_string(),
            weather: "Clear".to_string(),
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"request.hour"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ConfigError {
    fn from_category(field: &str, err: UnknownCategory) -> Self {
        Self {
            field: field.to_string(),
            message: err.to_string(),
        }
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario: Andheri on a June weekday morning.
    pub fn baseline() -> Self {
        Self {
            request: RequestConfig::default(),
            conditions: ConditionsConfig::default(),
        }
    }

    /// Returns the monsoon-rush preset: Bandra in heavy evening rain.
    pub fn monsoon_rush() -> Self {
        Self {
            request: RequestConfig {
                city: "Bandra".to_string(),
                date: "2024-07-18".to_string(),
                hour: 6,
                meridiem: "PM".to_string(),
            },
            conditions: ConditionsConfig {
                temperature_c: 26.0,
                humidity_pct: 88.0,
                season: "Monsoon".to_string(),
                weather: "Rainy".to_string(),
            },
        }
    }

    /// Returns the winter-weekend preset: Colaba on a foggy Saturday night.
    pub fn winter_weekend() -> Self {
        Self {
            request: RequestConfig {
                city: "Colaba".to_string(),
                date: "2024-12-14".to_string(),
                hour: 11,
                meridiem: "PM".to_string(),
            },
            conditions: ConditionsConfig {
                temperature_c: 14.0,
                humidity_pct: 40.0,
                season: "Winter".to_string(),
                weather: "Foggy".to_string(),
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "monsoon_rush", "winter_weekend"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "monsoon_rush" => Ok(Self::monsoon_rush()),
            "winter_weekend" => Ok(Self::winter_weekend()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let r = &self.request;

        if let Err(e) = r.city.parse::<Zone>() {
            errors.push(ConfigError::from_category("request.city", e));
        }
        if NaiveDate::parse_from_str(&r.date, "%Y-%m-%d").is_err() {
            errors.push(ConfigError {
                field: "request.date".into(),
                message: format!("\"{}\" is not a valid YYYY-MM-DD date", r.date),
            });
        }
        if !(1..=12).contains(&r.hour) {
            errors.push(ConfigError {
                field: "request.hour".into(),
                message: format!("must be in [1, 12], got {}", r.hour),
            });
        }
        if r.meridiem != "AM" && r.meridiem != "PM" {
            errors.push(ConfigError {
                field: "request.meridiem".into(),
                message: format!("must be \"AM\" or \"PM\", got \"{}\"", r.meridiem),
            });
        }

        let c = &self.conditions;
        if !(0.0..=45.0).contains(&c.temperature_c) {
            errors.push(ConfigError {
                field: "conditions.temperature_c".into(),
                message: format!("must be in [0, 45], got {}", c.temperature_c),
            });
        }
        if !(0.0..=100.0).contains(&c.humidity_pct) {
            errors.push(ConfigError {
                field: "conditions.humidity_pct".into(),
                message: format!("must be in [0, 100], got {}", c.humidity_pct),
            });
        }
        if let Err(e) = c.season.parse::<Season>() {
            errors.push(ConfigError::from_category("conditions.season", e));
        }
        if let Err(e) = c.weather.parse::<Weather>() {
            errors.push(ConfigError::from_category("conditions.weather", e));
        }

        errors
    }

    /// Builds a typed prediction request from a validated configuration.
    ///
    /// Converts the 12-hour input clock to the 24-hour dial (12 AM maps to
    /// hour 0, 12 PM to hour 12).
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` encountered; a configuration that
    /// passed [`ScenarioConfig::validate`] builds without error.
    pub fn build(&self) -> Result<PredictionRequest, ConfigError> {
        let r = &self.request;

        let zone: Zone = r
            .city
            .parse()
            .map_err(|e| ConfigError::from_category("request.city", e))?;
        let date = NaiveDate::parse_from_str(&r.date, "%Y-%m-%d").map_err(|_| ConfigError {
            field: "request.date".into(),
            message: format!("\"{}\" is not a valid YYYY-MM-DD date", r.date),
        })?;
        if !(1..=12).contains(&r.hour) {
            return Err(ConfigError {
                field: "request.hour".into(),
                message: format!("must be in [1, 12], got {}", r.hour),
            });
        }
        let hour = match r.meridiem.as_str() {
            "AM" => r.hour % 12,
            "PM" => r.hour % 12 + 12,
            other => {
                return Err(ConfigError {
                    field: "request.meridiem".into(),
                    message: format!("must be \"AM\" or \"PM\", got \"{other}\""),
                });
            }
        };
        let start = date.and_hms_opt(hour, 0, 0).ok_or_else(|| ConfigError {
            field: "request.hour".into(),
            message: format!("hour {hour} is not a valid time of day"),
        })?;

        let c = &self.conditions;
        let season: Season = c
            .season
            .parse()
            .map_err(|e| ConfigError::from_category("conditions.season", e))?;
        let weather: Weather = c
            .weather
            .parse()
            .map_err(|e| ConfigError::from_category("conditions.weather", e))?;

        Ok(PredictionRequest {
            zone,
            start,
            temperature_c: c.temperature_c,
            humidity_pct: c.humidity_pct,
            season,
            weather,
        })
    }
}
