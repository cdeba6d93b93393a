//! Base constants and utility functions for the chart module.

use chrono::{Duration, NaiveDate};

/// RGB colour of a plotted element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PlotColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// Price movement colors
pub const UP_COLOR: PlotColor = PlotColor::rgb(0, 128, 0);
pub const DOWN_COLOR: PlotColor = PlotColor::rgb(255, 0, 0);

// Series colors
pub const LINE_COLOR: PlotColor = PlotColor::rgb(31, 119, 180);
pub const VOLUME_COLOR: PlotColor = PlotColor::rgb(0, 0, 255);

// Chart dimensions
pub const CANDLE_WIDTH: f64 = 0.6;
pub const PEN_WIDTH: f32 = 1.0;

// Axis labels
pub const X_LABEL: &str = "Date";

// Layout constants
pub const MARGIN: f32 = 8.0;
pub const TITLE_HEIGHT: f32 = 28.0;
pub const AXIS_X_HEIGHT: f32 = 44.0;
pub const AXIS_Y_WIDTH: f32 = 84.0;
pub const AXIS_PADDING: f64 = 0.05;

/// Convert a calendar date to a numeric axis coordinate (days since 1970-01-01)
pub fn date_to_num(date: NaiveDate) -> f64 {
    (date - NaiveDate::default()).num_days() as f64
}

/// Convert a numeric axis coordinate back to the calendar date it falls on
pub fn num_to_date(value: f64) -> Option<NaiveDate> {
    if !value.is_finite() {
        return None;
    }
    NaiveDate::default().checked_add_signed(Duration::try_days(value.floor() as i64)?)
}

/// Format price with appropriate precision
pub fn format_price(price: f64, decimals: usize) -> String {
    format!("{:.prec$}", price, prec = decimals)
}

/// Format volume with appropriate units (K, M, B)
pub fn format_volume(volume: f64) -> String {
    if volume >= 1_000_000_000.0 {
        format!("{:.2}B", volume / 1_000_000_000.0)
    } else if volume >= 1_000_000.0 {
        format!("{:.2}M", volume / 1_000_000.0)
    } else if volume >= 1_000.0 {
        format!("{:.2}K", volume / 1_000.0)
    } else {
        format!("{:.0}", volume)
    }
}

/// Calculate nice axis tick values
pub fn calculate_axis_ticks(min_val: f64, max_val: f64, max_ticks: usize) -> Vec<f64> {
    if min_val >= max_val || max_ticks == 0 {
        return vec![min_val];
    }

    let range = max_val - min_val;
    let rough_step = range / max_ticks as f64;

    let magnitude = 10.0_f64.powf(rough_step.log10().floor());
    let residual = rough_step / magnitude;

    let nice_step = if residual <= 1.5 {
        magnitude
    } else if residual <= 3.0 {
        2.0 * magnitude
    } else if residual <= 7.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    };

    let mut ticks = Vec::new();
    let mut value = (min_val / nice_step).ceil() * nice_step;
    while value <= max_val {
        ticks.push(value);
        value += nice_step;
    }

    ticks
}

/// Widen a value range by a fraction on both ends; a flat range gets unit padding
pub fn pad_range(min_val: f64, max_val: f64, fraction: f64) -> (f64, f64) {
    let span = max_val - min_val;
    if span <= 0.0 {
        let pad = if min_val == 0.0 { 1.0 } else { min_val.abs() * fraction };
        return (min_val - pad, max_val + pad);
    }
    (min_val - span * fraction, max_val + span * fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_num_conversion() {
        let date = NaiveDate::from_ymd_opt(1970, 1, 11).unwrap();
        assert_eq!(date_to_num(date), 10.0);

        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(num_to_date(date_to_num(date)), Some(date));
        assert_eq!(num_to_date(date_to_num(date) + 0.3), Some(date));
        assert_eq!(num_to_date(f64::NAN), None);
    }

    #[test]
    fn test_format_volume() {
        assert_eq!(format_volume(100.0), "100");
        assert_eq!(format_volume(1500.0), "1.50K");
        assert_eq!(format_volume(1500000.0), "1.50M");
        assert_eq!(format_volume(1500000000.0), "1.50B");
    }

    #[test]
    fn test_calculate_axis_ticks() {
        let ticks = calculate_axis_ticks(0.0, 100.0, 5);
        assert_eq!(ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);

        let ticks = calculate_axis_ticks(9.5, 12.75, 5);
        assert!(!ticks.is_empty());
        for tick in &ticks {
            assert!(*tick >= 9.5 && *tick <= 12.75);
        }
    }

    #[test]
    fn test_pad_range() {
        assert_eq!(pad_range(0.0, 100.0, 0.05), (-5.0, 105.0));
        assert_eq!(pad_range(0.0, 0.0, 0.05), (-1.0, 1.0));
        assert_eq!(pad_range(10.0, 10.0, 0.05), (9.5, 10.5));
    }
}
