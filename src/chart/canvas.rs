//! The single drawing surface shared by every render.

use super::figure::ChartFigure;

/// Holds at most one figure; every draw replaces whatever was there
#[derive(Debug, Default)]
pub struct ChartCanvas {
    figure: Option<ChartFigure>,
    draw_count: u64,
}

impl ChartCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the current figure
    pub fn clear(&mut self) {
        self.figure = None;
    }

    /// Clear the canvas, then install `figure` as the only content
    pub fn draw(&mut self, figure: ChartFigure) {
        self.clear();
        self.figure = Some(figure);
        self.draw_count += 1;
    }

    pub fn figure(&self) -> Option<&ChartFigure> {
        self.figure.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.figure.is_none()
    }

    /// Number of completed draws since creation
    pub fn draw_count(&self) -> u64 {
        self.draw_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::figure::render;
    use crate::viewer::constant::{ChartType, Period};
    use crate::viewer::object::{PriceBar, PriceSeries};
    use chrono::NaiveDate;

    fn series() -> PriceSeries {
        let date = NaiveDate::from_ymd_opt(2023, 11, 20).unwrap();
        PriceSeries::new("IBM", Period::Day5, vec![PriceBar::new(date, 1.0, 2.0, 0.5, 1.5, 10)])
    }

    #[test]
    fn test_draw_is_idempotent() {
        let mut canvas = ChartCanvas::new();
        let figure = render(&series(), ChartType::Line).unwrap();

        canvas.draw(figure.clone());
        canvas.draw(figure.clone());

        assert_eq!(canvas.figure(), Some(&figure));
        assert_eq!(canvas.draw_count(), 2);
    }

    #[test]
    fn test_draw_replaces_previous_chart() {
        let mut canvas = ChartCanvas::new();
        canvas.draw(render(&series(), ChartType::Line).unwrap());
        canvas.draw(render(&series(), ChartType::Volume).unwrap());

        let figure = canvas.figure().unwrap();
        assert_eq!(figure.chart_type, ChartType::Volume);
        assert_eq!(figure.plot.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut canvas = ChartCanvas::new();
        canvas.draw(render(&series(), ChartType::Candlestick).unwrap());
        canvas.clear();
        assert!(canvas.is_empty());
    }
}
