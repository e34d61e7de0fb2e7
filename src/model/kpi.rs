//! Post-hoc summary KPIs derived from a forecast window.

use std::fmt;

use super::types::ForecastRow;

/// Qualitative demand banding derived from the current-hour estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemandLevel {
    Low,
    Medium,
    High,
}

impl DemandLevel {
    /// Bands a demand value: `Low` below 120, `Medium` below 180, `High` above.
    pub fn from_demand(rides: u32) -> Self {
        if rides < 120 {
            Self::Low
        } else if rides < 180 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregate KPIs for one generated forecast window.
///
/// Computed post-hoc from the row vector so the displayed numbers always
/// agree with the series they summarize.
#[derive(Debug, Clone)]
pub struct ForecastSummary {
    /// Demand at the window's first hour.
    pub current_rides: u32,
    /// Highest hourly demand in the window.
    pub peak_rides: u32,
    /// Time label of the first row reaching the peak.
    pub peak_label: String,
    /// Arithmetic mean over all rows, truncated toward zero.
    pub average_rides: u32,
    /// Qualitative level derived from the current demand.
    pub level: DemandLevel,
}

impl ForecastSummary {
    /// Computes all KPIs from a complete forecast window.
    ///
    /// An empty series yields a zeroed summary.
    pub fn from_series(series: &[ForecastRow]) -> Self {
        let Some(first) = series.first() else {
            return Self {
                current_rides: 0,
                peak_rides: 0,
                peak_label: String::new(),
                average_rides: 0,
                level: DemandLevel::Low,
            };
        };

        let mut peak = first;
        let mut sum = 0_u64;
        for row in series {
            if row.predicted_rides > peak.predicted_rides {
                peak = row;
            }
            sum += u64::from(row.predicted_rides);
        }

        let current_rides = first.predicted_rides;
        Self {
            current_rides,
            peak_rides: peak.predicted_rides,
            peak_label: peak.time_label.clone(),
            average_rides: (sum / series.len() as u64) as u32,
            level: DemandLevel::from_demand(current_rides),
        }
    }
}

impl fmt::Display for ForecastSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Demand Summary ---")?;
        writeln!(f, "Current demand:  {} rides", self.current_rides)?;
        writeln!(
            f,
            "Peak demand:     {} rides at {}",
            self.peak_rides, self.peak_label
        )?;
        writeln!(f, "Average demand:  {} rides", self.average_rides)?;
        write!(f, "Demand level:    {}", self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(offset: usize, rides: u32) -> ForecastRow {
        ForecastRow {
            offset,
            hour: offset as u32,
            time_label: format!("{:02} AM", offset.max(1)),
            predicted_rides: rides,
        }
    }

    #[test]
    fn level_boundaries() {
        assert_eq!(DemandLevel::from_demand(119), DemandLevel::Low);
        assert_eq!(DemandLevel::from_demand(120), DemandLevel::Medium);
        assert_eq!(DemandLevel::from_demand(179), DemandLevel::Medium);
        assert_eq!(DemandLevel::from_demand(180), DemandLevel::High);
    }

    #[test]
    fn first_peak_wins_ties() {
        let series = vec![row(0, 100), row(1, 150), row(2, 150), row(3, 90)];
        let summary = ForecastSummary::from_series(&series);
        assert_eq!(summary.peak_rides, 150);
        assert_eq!(summary.peak_label, series[1].time_label);
    }

    #[test]
    fn current_is_first_row() {
        let series = vec![row(0, 130), row(1, 200)];
        let summary = ForecastSummary::from_series(&series);
        assert_eq!(summary.current_rides, 130);
        assert_eq!(summary.level, DemandLevel::Medium);
    }

    #[test]
    fn average_truncates_toward_zero() {
        // mean of 100, 101, 101 is 100.66..; truncated to 100
        let series = vec![row(0, 100), row(1, 101), row(2, 101)];
        let summary = ForecastSummary::from_series(&series);
        assert_eq!(summary.average_rides, 100);
    }

    #[test]
    fn empty_series_yields_zeroed_summary() {
        let summary = ForecastSummary::from_series(&[]);
        assert_eq!(summary.current_rides, 0);
        assert_eq!(summary.peak_rides, 0);
        assert_eq!(summary.average_rides, 0);
        assert_eq!(summary.level, DemandLevel::Low);
        assert!(summary.peak_label.is_empty());
    }

    #[test]
    fn display_contains_all_kpis() {
        let series = vec![row(0, 185), row(1, 200)];
        let text = ForecastSummary::from_series(&series).to_string();
        assert!(text.contains("185"));
        assert!(text.contains("200"));
        assert!(text.contains("High"));
    }
}
