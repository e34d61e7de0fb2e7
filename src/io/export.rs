//! CSV export for generated forecast windows.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::model::types::{ForecastRow, Zone};

/// Column header for the forecast CSV download.
const HEADER: &str = "Time,Predicted Rides";

/// File name for a one-shot forecast download, e.g.
/// `ola_24h_Bandra_forecast.csv`. The zone's display name is used verbatim,
/// spaces included.
pub fn csv_filename(zone: Zone) -> String {
    format!("ola_24h_{zone}_forecast.csv")
}

/// Exports a forecast window to a CSV file at the given path.
///
/// Writes the header row followed by one data row per forecast hour.
/// Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(series: &[ForecastRow], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(series, buf)
}

/// Writes a forecast window as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(series: &[ForecastRow], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for row in series {
        let rides = row.predicted_rides.to_string();
        wtr.write_record([row.time_label.as_str(), rides.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
