//! Chart items for painting lines and candlesticks.

use egui::{Color32, Painter, Pos2, Rect, Stroke};

use super::base::{PlotColor, PEN_WIDTH};
use super::figure::{Candle, PlotPoint};

impl From<PlotColor> for Color32 {
    fn from(color: PlotColor) -> Self {
        Color32::from_rgb(color.r, color.g, color.b)
    }
}

/// Maps data coordinates into a screen rectangle
#[derive(Debug, Clone, Copy)]
pub struct PlotTransform {
    rect: Rect,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl PlotTransform {
    pub fn new(rect: Rect, (x_min, x_max): (f64, f64), (y_min, y_max): (f64, f64)) -> Self {
        Self {
            rect,
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn x_range(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    pub fn y_range(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    /// Convert a date coordinate to screen X
    pub fn x_to_screen(&self, x: f64) -> f32 {
        let x_range = self.x_max - self.x_min;
        if x_range == 0.0 {
            return self.rect.center().x;
        }
        let normalized = (x - self.x_min) / x_range;
        self.rect.left() + (normalized as f32 * self.rect.width())
    }

    /// Convert a value to screen Y
    pub fn y_to_screen(&self, y: f64) -> f32 {
        let y_range = self.y_max - self.y_min;
        if y_range == 0.0 {
            return self.rect.center().y;
        }
        let normalized = (y - self.y_min) / y_range;
        self.rect.bottom() - (normalized as f32 * self.rect.height())
    }

    /// Screen width of `dx` data units
    pub fn x_span(&self, dx: f64) -> f32 {
        let x_range = self.x_max - self.x_min;
        if x_range == 0.0 {
            return 0.0;
        }
        (dx / x_range) as f32 * self.rect.width()
    }

    pub fn to_screen(&self, point: &PlotPoint) -> Pos2 {
        Pos2::new(self.x_to_screen(point.x), self.y_to_screen(point.y))
    }
}

/// Trait for chart items that can be drawn
pub trait ChartItem {
    /// Paint the item inside the transform's rectangle
    fn draw(&self, painter: &Painter, transform: &PlotTransform);
}

/// Polyline through a series of points
pub struct LineItem<'a> {
    points: &'a [PlotPoint],
    color: Color32,
}

impl<'a> LineItem<'a> {
    pub fn new(points: &'a [PlotPoint], color: PlotColor) -> Self {
        Self {
            points,
            color: color.into(),
        }
    }
}

impl ChartItem for LineItem<'_> {
    fn draw(&self, painter: &Painter, transform: &PlotTransform) {
        let points: Vec<Pos2> = self.points.iter().map(|p| transform.to_screen(p)).collect();

        match points.as_slice() {
            [] => {}
            [single] => {
                painter.circle_filled(*single, 2.5, self.color);
            }
            _ => {
                painter.add(egui::Shape::line(points, Stroke::new(PEN_WIDTH * 1.5, self.color)));
            }
        }
    }
}

/// Candlestick glyphs
pub struct CandleItem<'a> {
    candles: &'a [Candle],
    width: f64,
}

impl<'a> CandleItem<'a> {
    pub fn new(candles: &'a [Candle], width: f64) -> Self {
        Self { candles, width }
    }
}

impl ChartItem for CandleItem<'_> {
    fn draw(&self, painter: &Painter, transform: &PlotTransform) {
        let candle_width = transform.x_span(self.width).max(1.0);

        for candle in self.candles {
            let color: Color32 = candle.color.into();
            let stroke = Stroke::new(PEN_WIDTH, color);
            let x = transform.x_to_screen(candle.x);

            // Draw high-low line (wick)
            let high_y = transform.y_to_screen(candle.high);
            let low_y = transform.y_to_screen(candle.low);
            painter.line_segment([Pos2::new(x, high_y), Pos2::new(x, low_y)], stroke);

            // Draw candle body
            let open_y = transform.y_to_screen(candle.open);
            let close_y = transform.y_to_screen(candle.close);

            if (open_y - close_y).abs() < 1.0 {
                // Doji: a horizontal tick
                painter.line_segment(
                    [
                        Pos2::new(x - candle_width * 0.5, open_y),
                        Pos2::new(x + candle_width * 0.5, open_y),
                    ],
                    stroke,
                );
            } else {
                let body_rect = Rect::from_min_max(
                    Pos2::new(x - candle_width * 0.5, open_y.min(close_y)),
                    Pos2::new(x + candle_width * 0.5, open_y.max(close_y)),
                );
                painter.rect_filled(body_rect, 0.0, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform() -> PlotTransform {
        let rect = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(100.0, 200.0));
        PlotTransform::new(rect, (10.0, 20.0), (0.0, 50.0))
    }

    #[test]
    fn test_transform_corners() {
        let t = transform();
        assert_eq!(t.x_to_screen(10.0), 0.0);
        assert_eq!(t.x_to_screen(20.0), 100.0);
        assert_eq!(t.y_to_screen(0.0), 200.0);
        assert_eq!(t.y_to_screen(50.0), 0.0);
        assert_eq!(t.to_screen(&PlotPoint { x: 15.0, y: 25.0 }), Pos2::new(50.0, 100.0));
    }

    #[test]
    fn test_transform_span() {
        let t = transform();
        assert!((t.x_span(0.6) - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_flat_ranges_center() {
        let rect = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(100.0, 200.0));
        let t = PlotTransform::new(rect, (5.0, 5.0), (3.0, 3.0));
        assert_eq!(t.x_to_screen(5.0), 50.0);
        assert_eq!(t.y_to_screen(3.0), 100.0);
        assert_eq!(t.x_span(1.0), 0.0);
    }

    #[test]
    fn test_plot_color_conversion() {
        let color: Color32 = PlotColor::rgb(0, 128, 0).into();
        assert_eq!(color, Color32::from_rgb(0, 128, 0));
    }
}
