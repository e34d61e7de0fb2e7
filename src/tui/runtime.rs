//! Dashboard application state and editable input form.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::config::ScenarioConfig;
use crate::io::export::{csv_filename, export_csv};
use crate::model::forecast::PredictionRequest;
use crate::model::types::{Season, Weather, Zone};
use crate::session::Session;

/// Temperature adjustment per keypress (degrees Celsius).
const TEMP_STEP: f32 = 1.0;
/// Humidity adjustment per keypress (percent).
const HUMIDITY_STEP: f32 = 5.0;

/// Input fields editable on the dashboard form, in cursor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    City,
    Date,
    Hour,
    Meridiem,
    Temperature,
    Humidity,
    Season,
    Weather,
}

impl InputField {
    /// All fields in cursor order.
    pub const ALL: [InputField; 8] = [
        InputField::City,
        InputField::Date,
        InputField::Hour,
        InputField::Meridiem,
        InputField::Temperature,
        InputField::Humidity,
        InputField::Season,
        InputField::Weather,
    ];
}

/// Picks the entry `step` positions away from `current`, wrapping.
fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: i32) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0) as i32;
    let len = all.len() as i32;
    all[(idx + step).rem_euclid(len) as usize]
}

/// Editable prediction inputs mirrored from a scenario configuration.
#[derive(Debug, Clone)]
pub struct InputForm {
    pub zone: Zone,
    pub date: NaiveDate,
    /// Clock hour on the 12-hour dial (1-12).
    pub hour12: u32,
    /// Whether the selected time is PM.
    pub pm: bool,
    pub temperature_c: f32,
    pub humidity_pct: f32,
    pub season: Season,
    pub weather: Weather,
}

impl InputForm {
    /// Mirrors a typed request into editable form state.
    pub fn from_request(request: &PredictionRequest) -> Self {
        let (pm, hour12) = request.start.time().hour12();
        Self {
            zone: request.zone,
            date: request.start.date(),
            hour12,
            pm,
            temperature_c: request.temperature_c,
            humidity_pct: request.humidity_pct,
            season: request.season,
            weather: request.weather,
        }
    }

    /// Baseline form used when no scenario request is available.
    fn baseline() -> Self {
        Self {
            zone: Zone::Andheri,
            date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap_or_default(),
            hour12: 9,
            pm: false,
            temperature_c: 28.0,
            humidity_pct: 60.0,
            season: Season::Summer,
            weather: Weather::Clear,
        }
    }

    /// Builds the typed request for the current form state.
    pub fn to_request(&self) -> PredictionRequest {
        let hour = self.hour12 % 12 + if self.pm { 12 } else { 0 };
        let time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN);
        PredictionRequest {
            zone: self.zone,
            start: NaiveDateTime::new(self.date, time),
            temperature_c: self.temperature_c,
            humidity_pct: self.humidity_pct,
            season: self.season,
            weather: self.weather,
        }
    }

    /// Applies one adjustment step (`+1` or `-1`) to the given field.
    ///
    /// Categorical fields cycle with wraparound; numeric fields clamp to the
    /// input-surface ranges.
    pub fn adjust(&mut self, field: InputField, step: i32) {
        match field {
            InputField::City => self.zone = cycle(&Zone::ALL, self.zone, step),
            InputField::Date => {
                let next = if step >= 0 {
                    self.date.succ_opt()
                } else {
                    self.date.pred_opt()
                };
                self.date = next.unwrap_or(self.date);
            }
            InputField::Hour => {
                self.hour12 = ((self.hour12 as i32 - 1 + step).rem_euclid(12) + 1) as u32;
            }
            InputField::Meridiem => self.pm = !self.pm,
            InputField::Temperature => {
                self.temperature_c = (self.temperature_c + step as f32 * TEMP_STEP).clamp(0.0, 45.0);
            }
            InputField::Humidity => {
                self.humidity_pct =
                    (self.humidity_pct + step as f32 * HUMIDITY_STEP).clamp(0.0, 100.0);
            }
            InputField::Season => self.season = cycle(&Season::ALL, self.season, step),
            InputField::Weather => self.weather = cycle(&Weather::ALL, self.weather, step),
        }
    }
}

/// Dashboard application state.
pub struct App {
    /// Editable prediction inputs.
    pub form: InputForm,
    /// Currently selected input field.
    pub field: InputField,
    /// Session state: latest forecast plus history.
    pub session: Session,
    /// Whether the history panel replaces the forecast chart.
    pub show_history: bool,
    /// One-line status message from the last action.
    pub status: Option<String>,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates the app seeded from a validated scenario configuration.
    pub fn new(scenario: &ScenarioConfig) -> Self {
        let form = match scenario.build() {
            Ok(request) => InputForm::from_request(&request),
            Err(_) => InputForm::baseline(),
        };
        Self {
            form,
            field: InputField::City,
            session: Session::new(),
            show_history: false,
            status: None,
            quit: false,
        }
    }

    /// Moves the field cursor forward.
    pub fn select_next(&mut self) {
        self.field = cycle(&InputField::ALL, self.field, 1);
    }

    /// Moves the field cursor backward.
    pub fn select_prev(&mut self) {
        self.field = cycle(&InputField::ALL, self.field, -1);
    }

    /// Adjusts the selected field by one step.
    pub fn adjust(&mut self, step: i32) {
        self.form.adjust(self.field, step);
    }

    /// Runs a prediction for the current form state.
    pub fn predict(&mut self) {
        let prediction = self.session.predict(self.form.to_request());
        self.status = Some(format!(
            "Peak at {}: {} rides",
            prediction.summary.peak_label, prediction.summary.peak_rides
        ));
        self.show_history = false;
    }

    /// Clears the forecast and empties the history.
    pub fn reset(&mut self) {
        self.session.reset();
        self.show_history = false;
        self.status = Some("Session cleared".to_string());
    }

    /// Toggles the history panel.
    pub fn toggle_history(&mut self) {
        self.show_history = !self.show_history;
    }

    /// Writes the current forecast CSV into the working directory.
    ///
    /// No-op when no forecast has been generated yet.
    pub fn save_csv(&mut self) {
        let Some(prediction) = self.session.current() else {
            return;
        };
        let filename = csv_filename(prediction.request.zone);
        self.status = match export_csv(&prediction.series, Path::new(&filename)) {
            Ok(()) => Some(format!("Forecast written to {filename}")),
            Err(e) => Some(format!("CSV export failed: {e}")),
        };
    }
}
