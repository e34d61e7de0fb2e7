//! Session-scoped prediction state: the latest forecast and a history log.

use std::fmt;

use chrono::NaiveDate;

use crate::model::forecast::{PredictionRequest, generate};
use crate::model::kpi::ForecastSummary;
use crate::model::types::{ForecastRow, Season, Weather, Zone};

/// Immutable snapshot of one prediction trigger.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// Calendar day of the window start.
    pub date: NaiveDate,
    /// Input-surface time label, e.g. `"9 AM"`.
    pub time_label: String,
    /// City zone that was forecast.
    pub city: Zone,
    /// Weather selected for the trigger.
    pub weather: Weather,
    /// Season selected for the trigger.
    pub season: Season,
    /// Demand at the window's first hour.
    pub current_rides: u32,
    /// Highest hourly demand in the window.
    pub peak_rides: u32,
}

impl HistoryEntry {
    fn new(request: &PredictionRequest, summary: &ForecastSummary) -> Self {
        Self {
            date: request.start.date(),
            time_label: request.time_label(),
            city: request.zone,
            weather: request.weather,
            season: request.season,
            current_rides: summary.current_rides,
            peak_rides: summary.peak_rides,
        }
    }

    /// Date label, e.g. `"12-Jun-2024"`.
    pub fn date_label(&self) -> String {
        self.date.format("%d-%b-%Y").to_string()
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>5} | {:<10} | {:<6} | {:<7} | current={:>4}  peak={:>4}",
            self.date_label(),
            self.time_label,
            self.city,
            self.weather,
            self.season,
            self.current_rides,
            self.peak_rides,
        )
    }
}

/// Outcome of one prediction trigger.
#[derive(Debug, Clone)]
pub struct Prediction {
    /// The request that produced this forecast.
    pub request: PredictionRequest,
    /// The 24-hour forecast window.
    pub series: Vec<ForecastRow>,
    /// KPIs derived from the window.
    pub summary: ForecastSummary,
}

/// Session-scoped state owned by the calling surface (CLI or dashboard).
///
/// Holds the latest forecast and an append-only history of triggers. The
/// history is never deduplicated or reordered; it is emptied only by an
/// explicit [`Session::reset`], and its lifetime is the session's.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<Prediction>,
    history: Vec<HistoryEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a prediction: generates the window, replaces the current
    /// forecast, and appends a history snapshot.
    pub fn predict(&mut self, request: PredictionRequest) -> &Prediction {
        let series = generate(&request);
        let summary = ForecastSummary::from_series(&series);
        self.history.push(HistoryEntry::new(&request, &summary));
        self.current.insert(Prediction {
            request,
            series,
            summary,
        })
    }

    /// The latest prediction, if any has been triggered.
    pub fn current(&self) -> Option<&Prediction> {
        self.current.as_ref()
    }

    /// Whether a forecast has been generated this session.
    pub fn has_forecast(&self) -> bool {
        self.current.is_some()
    }

    /// All history snapshots, in append order.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Clears the current forecast and empties the history.
    pub fn reset(&mut self) {
        self.current = None;
        self.history.clear();
    }
}
