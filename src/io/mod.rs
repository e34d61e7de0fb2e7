//! Input/output helpers for forecast data.

/// CSV export of generated forecast windows.
pub mod export;
