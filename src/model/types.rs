//! Core forecast types: categorical inputs, per-hour context, and row records.

use std::fmt;
use std::str::FromStr;

/// Number of hourly rows in a generated forecast window.
pub const FORECAST_HOURS: usize = 24;

/// Error raised when a categorical input matches no known variant.
///
/// The input surfaces (config file, scenario presets) restrict selection to
/// the fixed enumerations, so hitting this means programmatic misuse; it is
/// reported loudly instead of falling back to a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory {
    /// Category kind, e.g. `"weather"`.
    pub kind: &'static str,
    /// The rejected input value.
    pub value: String,
    /// Comma-separated list of accepted values.
    pub expected: &'static str,
}

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown {} \"{}\", expected one of: {}",
            self.kind, self.value, self.expected
        )
    }
}

impl std::error::Error for UnknownCategory {}

/// One of the 10 fixed city zones, each carrying an additive demand bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Andheri,
    Bandra,
    Dadar,
    Ghatkopar,
    Thane,
    Borivali,
    Kurla,
    VileParle,
    Colaba,
    Mulund,
}

impl Zone {
    /// All zones, in the order the input surface lists them.
    pub const ALL: [Zone; 10] = [
        Zone::Andheri,
        Zone::Bandra,
        Zone::Dadar,
        Zone::Ghatkopar,
        Zone::Thane,
        Zone::Borivali,
        Zone::Kurla,
        Zone::VileParle,
        Zone::Colaba,
        Zone::Mulund,
    ];

    /// Fixed additive demand bias for this zone.
    pub fn demand_bias(self) -> f32 {
        match self {
            Zone::Andheri => 5.0,
            Zone::Bandra => 50.0,
            Zone::Dadar => 15.0,
            Zone::Ghatkopar => 40.0,
            Zone::Thane => 45.0,
            Zone::Borivali => 30.0,
            Zone::Kurla => 35.0,
            Zone::VileParle => 25.0,
            Zone::Colaba => 20.0,
            Zone::Mulund => 18.0,
        }
    }

    /// Human-readable zone name as shown on the input surface.
    pub fn name(self) -> &'static str {
        match self {
            Zone::Andheri => "Andheri",
            Zone::Bandra => "Bandra",
            Zone::Dadar => "Dadar",
            Zone::Ghatkopar => "Ghatkopar",
            Zone::Thane => "Thane",
            Zone::Borivali => "Borivali",
            Zone::Kurla => "Kurla",
            Zone::VileParle => "Vile Parle",
            Zone::Colaba => "Colaba",
            Zone::Mulund => "Mulund",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Zone {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|z| z.name() == s)
            .ok_or_else(|| UnknownCategory {
                kind: "city",
                value: s.to_string(),
                expected: "Andheri, Bandra, Dadar, Ghatkopar, Thane, Borivali, Kurla, \
                           Vile Parle, Colaba, Mulund",
            })
    }
}

/// Season of the year, with Monsoon as its own category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Monsoon,
    Autumn,
    Winter,
}

impl Season {
    /// All seasons, in input-surface order.
    pub const ALL: [Season; 5] = [
        Season::Spring,
        Season::Summer,
        Season::Monsoon,
        Season::Autumn,
        Season::Winter,
    ];

    /// Fixed additive demand bias for this season.
    pub fn demand_bias(self) -> f32 {
        match self {
            Season::Spring => 0.0,
            Season::Summer => 10.0,
            Season::Monsoon => 35.0,
            Season::Autumn => 5.0,
            Season::Winter => 20.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Monsoon => "Monsoon",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Season {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| UnknownCategory {
                kind: "season",
                value: s.to_string(),
                expected: "Spring, Summer, Monsoon, Autumn, Winter",
            })
    }
}

/// Prevailing weather for the forecast window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weather {
    Clear,
    Cloudy,
    Rainy,
    Stormy,
    Foggy,
}

impl Weather {
    /// All weather kinds, in input-surface order.
    pub const ALL: [Weather; 5] = [
        Weather::Clear,
        Weather::Cloudy,
        Weather::Rainy,
        Weather::Stormy,
        Weather::Foggy,
    ];

    /// Fixed additive demand bias for this weather.
    pub fn demand_bias(self) -> f32 {
        match self {
            Weather::Clear => 0.0,
            Weather::Cloudy => 5.0,
            Weather::Rainy => 35.0,
            Weather::Stormy => 50.0,
            Weather::Foggy => 20.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Weather::Clear => "Clear",
            Weather::Cloudy => "Cloudy",
            Weather::Rainy => "Rainy",
            Weather::Stormy => "Stormy",
            Weather::Foggy => "Foggy",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weather {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| UnknownCategory {
                kind: "weather",
                value: s.to_string(),
                expected: "Clear, Cloudy, Rainy, Stormy, Foggy",
            })
    }
}

/// Immutable inputs for a single hourly demand estimate.
#[derive(Debug, Clone)]
pub struct ForecastContext {
    /// Wall-clock hour of day (0-23).
    pub hour: u32,
    /// Ambient temperature in degrees Celsius.
    pub temperature_c: f32,
    /// Relative humidity in percent (0-100).
    pub humidity_pct: f32,
    /// Season of the year.
    pub season: Season,
    /// Prevailing weather.
    pub weather: Weather,
    /// City zone being forecast.
    pub zone: Zone,
    /// Whether the forecast window started on a Saturday or Sunday.
    pub is_weekend: bool,
}

/// One hour of a generated 24-hour forecast window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRow {
    /// Offset from the window start (0-23).
    pub offset: usize,
    /// Wall-clock hour of day (0-23).
    pub hour: u32,
    /// 12-hour clock label with AM/PM suffix, e.g. `"09 AM"`.
    pub time_label: String,
    /// Estimated ride count for this hour.
    pub predicted_rides: u32,
}

impl fmt::Display for ForecastRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={:>2} | {} | {:>4} rides",
            self.offset, self.time_label, self.predicted_rides
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_biases_match_table() {
        assert_eq!(Zone::Andheri.demand_bias(), 5.0);
        assert_eq!(Zone::Bandra.demand_bias(), 50.0);
        assert_eq!(Zone::Mulund.demand_bias(), 18.0);
    }

    #[test]
    fn zone_roundtrip_through_name() {
        for zone in Zone::ALL {
            let parsed: Zone = zone.name().parse().expect("known name should parse");
            assert_eq!(parsed, zone);
        }
    }

    #[test]
    fn vile_parle_keeps_its_space() {
        assert_eq!(Zone::VileParle.to_string(), "Vile Parle");
        assert_eq!("Vile Parle".parse::<Zone>(), Ok(Zone::VileParle));
    }

    #[test]
    fn unknown_zone_is_rejected() {
        let err = "Atlantis".parse::<Zone>().unwrap_err();
        assert_eq!(err.kind, "city");
        assert!(err.to_string().contains("Atlantis"));
        assert!(err.to_string().contains("Andheri"));
    }

    #[test]
    fn season_roundtrip_and_reject() {
        for season in Season::ALL {
            assert_eq!(season.name().parse::<Season>(), Ok(season));
        }
        assert!("Midwinter".parse::<Season>().is_err());
    }

    #[test]
    fn weather_roundtrip_and_reject() {
        for weather in Weather::ALL {
            assert_eq!(weather.name().parse::<Weather>(), Ok(weather));
        }
        let err = "Drizzle".parse::<Weather>().unwrap_err();
        assert!(err.to_string().contains("expected one of"));
    }

    #[test]
    fn row_display_does_not_panic() {
        let row = ForecastRow {
            offset: 3,
            hour: 12,
            time_label: "12 PM".to_string(),
            predicted_rides: 152,
        };
        let s = format!("{row}");
        assert!(s.contains("12 PM"));
        assert!(s.contains("152"));
    }
}
