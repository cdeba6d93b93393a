//! Summary labels shown above the chart.

use super::object::PriceSeries;
use super::utility::format_currency;

/// Current, maximum and minimum close of the last fetched series
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InfoPanel {
    current: Option<f64>,
    max: Option<f64>,
    min: Option<f64>,
}

impl InfoPanel {
    /// Derive the panel values from a series
    pub fn from_series(series: &PriceSeries) -> Self {
        Self {
            current: series.last_close(),
            max: series.max_close(),
            min: series.min_close(),
        }
    }

    pub fn current(&self) -> Option<f64> {
        self.current
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn current_text(&self) -> String {
        label("Current Price", self.current)
    }

    pub fn max_text(&self) -> String {
        label("Max Price", self.max)
    }

    pub fn min_text(&self) -> String {
        label("Min Price", self.min)
    }
}

fn label(name: &str, value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}: {}", name, format_currency(v)),
        None => format!("{}: N/A", name),
    }
}
