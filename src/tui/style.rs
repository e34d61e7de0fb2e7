//! Color constants and auto-scaling helpers for the dashboard.

use ratatui::style::Color;

use crate::model::kpi::DemandLevel;

/// Forecast chart line color.
pub const CHART_COLOR: Color = Color::Cyan;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Status line color.
pub const STATUS_FG: Color = Color::Magenta;
/// Hint text shown before the first prediction.
pub const HINT_FG: Color = Color::DarkGray;

/// Returns a color for the qualitative demand level tile.
pub fn level_color(level: DemandLevel) -> Color {
    match level {
        DemandLevel::Low => Color::Green,
        DemandLevel::Medium => Color::Yellow,
        DemandLevel::High => Color::Red,
    }
}

/// Computes Y-axis bounds from chart data points with 10% padding.
pub fn auto_bounds_y(points: &[(f64, f64)]) -> [f64; 2] {
    let all = points.iter().map(|&(_, y)| y);
    let min = all.clone().fold(f64::INFINITY, f64::min);
    let max = all.fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return [-1.0, 1.0];
    }
    let range = (max - min).max(0.1);
    let pad = range * 0.1;
    [min - pad, max + pad]
}
