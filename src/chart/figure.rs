//! Chart figures built from a price series.
//!
//! `render` is a pure function of the series and the selected chart type. It
//! produces a `ChartFigure` describing everything the canvas needs to paint.

use crate::viewer::constant::ChartType;
use crate::viewer::error::RenderError;
use crate::viewer::object::PriceSeries;

use super::base::{
    date_to_num, PlotColor, CANDLE_WIDTH, DOWN_COLOR, LINE_COLOR, UP_COLOR, VOLUME_COLOR, X_LABEL,
};

/// A point on a line plot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// One open-high-low-close glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    pub x: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub color: PlotColor,
}

/// Drawing primitive for one chart type
#[derive(Debug, Clone, PartialEq)]
pub enum ChartPlot {
    Line { points: Vec<PlotPoint>, color: PlotColor },
    Candlestick { candles: Vec<Candle>, width: f64 },
    Volume { points: Vec<PlotPoint>, color: PlotColor },
}

impl ChartPlot {
    /// Number of data elements drawn
    pub fn len(&self) -> usize {
        match self {
            ChartPlot::Line { points, .. } | ChartPlot::Volume { points, .. } => points.len(),
            ChartPlot::Candlestick { candles, .. } => candles.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything needed to paint one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFigure {
    pub chart_type: ChartType,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub plot: ChartPlot,
}

impl ChartFigure {
    /// Data extent along the date axis, including candle half-widths
    pub fn x_range(&self) -> (f64, f64) {
        match &self.plot {
            ChartPlot::Line { points, .. } | ChartPlot::Volume { points, .. } => {
                min_max(points.iter().map(|p| p.x))
            }
            ChartPlot::Candlestick { candles, width } => {
                let (lo, hi) = min_max(candles.iter().map(|c| c.x));
                (lo - width / 2.0, hi + width / 2.0)
            }
        }
    }

    /// Data extent along the value axis
    pub fn y_range(&self) -> (f64, f64) {
        match &self.plot {
            ChartPlot::Line { points, .. } => min_max(points.iter().map(|p| p.y)),
            ChartPlot::Volume { points, .. } => {
                let (_, hi) = min_max(points.iter().map(|p| p.y));
                (0.0, hi)
            }
            ChartPlot::Candlestick { candles, .. } => {
                let (lo, _) = min_max(candles.iter().map(|c| c.low));
                let (_, hi) = min_max(candles.iter().map(|c| c.high));
                (lo, hi)
            }
        }
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

/// Build the figure for a series in the requested chart type
pub fn render(series: &PriceSeries, chart_type: ChartType) -> Result<ChartFigure, RenderError> {
    if series.is_empty() {
        return Err(RenderError::EmptySeries(series.ticker().to_string()));
    }

    let bars = series.bars();
    let (title, plot) = match chart_type {
        ChartType::Line => {
            let points = bars
                .iter()
                .map(|bar| PlotPoint { x: date_to_num(bar.date), y: bar.close })
                .collect();
            (
                format!("Line Chart for {}", series.ticker()),
                ChartPlot::Line { points, color: LINE_COLOR },
            )
        }
        ChartType::Candlestick => {
            let candles = bars
                .iter()
                .map(|bar| Candle {
                    x: date_to_num(bar.date),
                    open: bar.open,
                    high: bar.high,
                    low: bar.low,
                    close: bar.close,
                    color: if bar.is_up() { UP_COLOR } else { DOWN_COLOR },
                })
                .collect();
            (
                format!("Candlestick Chart for {}", series.ticker()),
                ChartPlot::Candlestick { candles, width: CANDLE_WIDTH },
            )
        }
        ChartType::Volume => {
            let points = bars
                .iter()
                .map(|bar| PlotPoint { x: date_to_num(bar.date), y: bar.volume as f64 })
                .collect();
            (
                "Volume".to_string(),
                ChartPlot::Volume { points, color: VOLUME_COLOR },
            )
        }
    };

    Ok(ChartFigure {
        chart_type,
        title,
        x_label: X_LABEL.to_string(),
        y_label: chart_type.y_label().to_string(),
        plot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::constant::Period;
    use crate::viewer::object::PriceBar;
    use chrono::NaiveDate;

    fn sample_series() -> PriceSeries {
        let day = |d| NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
        PriceSeries::new(
            "MSFT",
            Period::Month1,
            vec![
                PriceBar::new(day(1), 9.0, 10.5, 8.5, 10.00, 1_200),
                PriceBar::new(day(2), 12.5, 13.0, 11.0, 12.50, 3_400),
                PriceBar::new(day(3), 10.0, 10.2, 9.5, 9.75, 2_100),
            ],
        )
    }

    #[test]
    fn test_line_figure() {
        let figure = render(&sample_series(), ChartType::Line).unwrap();
        assert_eq!(figure.title, "Line Chart for MSFT");
        assert_eq!(figure.x_label, "Date");
        assert_eq!(figure.y_label, "Price (USD)");
        match &figure.plot {
            ChartPlot::Line { points, .. } => {
                let closes: Vec<f64> = points.iter().map(|p| p.y).collect();
                assert_eq!(closes, vec![10.00, 12.50, 9.75]);
                assert!(points.windows(2).all(|w| w[0].x < w[1].x));
            }
            other => panic!("unexpected plot {:?}", other),
        }
        assert_eq!(figure.y_range(), (9.75, 12.50));
    }

    #[test]
    fn test_candlestick_colors() {
        let figure = render(&sample_series(), ChartType::Candlestick).unwrap();
        assert_eq!(figure.title, "Candlestick Chart for MSFT");
        assert_eq!(figure.y_label, "Price (USD)");
        match &figure.plot {
            ChartPlot::Candlestick { candles, width } => {
                assert_eq!(*width, CANDLE_WIDTH);
                // close >= open is up, including the flat second bar
                assert_eq!(candles[0].color, UP_COLOR);
                assert_eq!(candles[1].color, UP_COLOR);
                assert_eq!(candles[2].color, DOWN_COLOR);
            }
            other => panic!("unexpected plot {:?}", other),
        }
        assert_eq!(figure.y_range(), (8.5, 13.0));
        let (x_lo, x_hi) = figure.x_range();
        let first = date_to_num(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(x_lo, first - 0.3);
        assert_eq!(x_hi, first + 2.0 + 0.3);
    }

    #[test]
    fn test_volume_figure() {
        let figure = render(&sample_series(), ChartType::Volume).unwrap();
        assert_eq!(figure.title, "Volume");
        assert_eq!(figure.y_label, "Volume");
        match &figure.plot {
            ChartPlot::Volume { points, color } => {
                assert_eq!(*color, VOLUME_COLOR);
                assert_eq!(points.iter().map(|p| p.y).collect::<Vec<_>>(), vec![1200.0, 3400.0, 2100.0]);
            }
            other => panic!("unexpected plot {:?}", other),
        }
        assert_eq!(figure.y_range(), (0.0, 3400.0));
    }

    #[test]
    fn test_empty_series_is_error() {
        let series = PriceSeries::new("MSFT", Period::Day1, Vec::new());
        assert_eq!(
            render(&series, ChartType::Line),
            Err(RenderError::EmptySeries("MSFT".to_string()))
        );
    }
}
