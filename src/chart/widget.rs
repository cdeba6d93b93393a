//! Chart widget painting a `ChartCanvas` with egui.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Response, Sense, Stroke, StrokeKind, Ui, Vec2};

use crate::viewer::constant::ChartType;

use super::base::{
    calculate_axis_ticks, format_price, format_volume, num_to_date, pad_range, AXIS_PADDING,
    AXIS_X_HEIGHT, AXIS_Y_WIDTH, MARGIN, TITLE_HEIGHT,
};
use super::canvas::ChartCanvas;
use super::figure::{ChartFigure, ChartPlot};
use super::item::{CandleItem, ChartItem, LineItem, PlotTransform};

// Canvas colors
const BACKGROUND_COLOR: Color32 = Color32::WHITE;
const FRAME_COLOR: Color32 = Color32::from_rgb(60, 60, 60);
const TEXT_COLOR: Color32 = Color32::from_rgb(30, 30, 30);
const GRID_COLOR: Color32 = Color32::from_rgb(225, 225, 225);

/// Paints the current figure of a canvas
pub struct ChartWidget {
    /// Decimal places on the price axis
    price_decimals: usize,
    /// Minimum screen distance between X-axis labels
    x_tick_spacing: f32,
    /// Minimum screen distance between Y-axis labels
    y_tick_spacing: f32,
}

impl Default for ChartWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartWidget {
    pub fn new() -> Self {
        Self {
            price_decimals: 2,
            x_tick_spacing: 110.0,
            y_tick_spacing: 40.0,
        }
    }

    /// Paint the canvas into all remaining space of `ui`
    pub fn show(&self, ui: &mut Ui, canvas: &ChartCanvas) -> Response {
        let size = ui.available_size().max(Vec2::new(200.0, 150.0));
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 0.0, BACKGROUND_COLOR);

        let plot_rect = Rect::from_min_max(
            Pos2::new(rect.left() + AXIS_Y_WIDTH, rect.top() + TITLE_HEIGHT),
            Pos2::new(rect.right() - MARGIN * 2.0, rect.bottom() - AXIS_X_HEIGHT),
        );
        if plot_rect.width() <= 0.0 || plot_rect.height() <= 0.0 {
            return response;
        }

        match canvas.figure() {
            Some(figure) => self.draw_figure(&painter, rect, plot_rect, figure),
            None => {
                painter.rect_stroke(plot_rect, 0.0, Stroke::new(1.0, FRAME_COLOR), StrokeKind::Inside);
            }
        }

        response
    }

    fn draw_figure(&self, painter: &Painter, rect: Rect, plot_rect: Rect, figure: &ChartFigure) {
        let (x_lo, x_hi) = figure.x_range();
        let x_range = if x_hi > x_lo {
            pad_range(x_lo, x_hi, AXIS_PADDING)
        } else {
            (x_lo - 1.0, x_hi + 1.0)
        };
        let (y_lo, y_hi) = figure.y_range();
        let y_range = match figure.chart_type {
            // Volume keeps its zero baseline
            ChartType::Volume => (0.0, pad_range(y_lo, y_hi, AXIS_PADDING).1),
            ChartType::Line | ChartType::Candlestick => pad_range(y_lo, y_hi, AXIS_PADDING),
        };
        let transform = PlotTransform::new(plot_rect, x_range, y_range);

        self.draw_y_axis(painter, &transform, figure.chart_type == ChartType::Volume);
        self.draw_x_axis(painter, &transform);

        let plot_painter = painter.with_clip_rect(plot_rect);
        match &figure.plot {
            ChartPlot::Line { points, color } | ChartPlot::Volume { points, color } => {
                LineItem::new(points, *color).draw(&plot_painter, &transform);
            }
            ChartPlot::Candlestick { candles, width } => {
                CandleItem::new(candles, *width).draw(&plot_painter, &transform);
            }
        }

        painter.rect_stroke(plot_rect, 0.0, Stroke::new(1.0, FRAME_COLOR), StrokeKind::Inside);
        self.draw_labels(painter, rect, plot_rect, figure);
    }

    /// Draw the title and both axis labels
    fn draw_labels(&self, painter: &Painter, rect: Rect, plot_rect: Rect, figure: &ChartFigure) {
        painter.text(
            Pos2::new(plot_rect.center().x, rect.top() + TITLE_HEIGHT * 0.5),
            Align2::CENTER_CENTER,
            &figure.title,
            FontId::proportional(15.0),
            TEXT_COLOR,
        );

        painter.text(
            Pos2::new(plot_rect.center().x, rect.bottom() - MARGIN),
            Align2::CENTER_BOTTOM,
            &figure.x_label,
            FontId::proportional(12.0),
            TEXT_COLOR,
        );

        // Y label runs bottom-to-top along the left edge
        let galley = painter.layout_no_wrap(figure.y_label.clone(), FontId::proportional(12.0), TEXT_COLOR);
        let pos = Pos2::new(rect.left() + MARGIN, plot_rect.center().y + galley.size().x * 0.5);
        painter.add(egui::Shape::Text(
            egui::epaint::TextShape::new(pos, galley, TEXT_COLOR).with_angle(-std::f32::consts::FRAC_PI_2),
        ));
    }

    /// Draw Y-axis with tick labels and horizontal grid lines
    fn draw_y_axis(&self, painter: &Painter, transform: &PlotTransform, is_volume: bool) {
        let plot_rect = transform.rect();
        let (y_min, y_max) = transform.y_range();
        let max_ticks = ((plot_rect.height() / self.y_tick_spacing) as usize).max(2);

        for tick in calculate_axis_ticks(y_min, y_max, max_ticks) {
            let y = transform.y_to_screen(tick);

            painter.line_segment(
                [Pos2::new(plot_rect.left(), y), Pos2::new(plot_rect.right(), y)],
                Stroke::new(1.0, GRID_COLOR),
            );
            painter.line_segment(
                [Pos2::new(plot_rect.left() - 4.0, y), Pos2::new(plot_rect.left(), y)],
                Stroke::new(1.0, FRAME_COLOR),
            );

            let label = if is_volume {
                format_volume(tick)
            } else {
                format_price(tick, self.price_decimals)
            };
            painter.text(
                Pos2::new(plot_rect.left() - 6.0, y),
                Align2::RIGHT_CENTER,
                label,
                FontId::proportional(11.0),
                TEXT_COLOR,
            );
        }
    }

    /// Draw X-axis with date labels
    fn draw_x_axis(&self, painter: &Painter, transform: &PlotTransform) {
        let plot_rect = transform.rect();
        let (x_min, x_max) = transform.x_range();
        let max_ticks = ((plot_rect.width() / self.x_tick_spacing) as usize).max(2);

        // Ticks land on whole days so each label names the bar under it
        let ticks = calculate_axis_ticks(x_min, x_max, max_ticks)
            .into_iter()
            .map(f64::round)
            .filter(|tick| *tick >= x_min && *tick <= x_max);

        let mut last: Option<f64> = None;
        for tick in ticks {
            if last == Some(tick) {
                continue;
            }
            last = Some(tick);

            let Some(date) = num_to_date(tick) else {
                continue;
            };
            let x = transform.x_to_screen(tick);
            let y = plot_rect.bottom();

            painter.line_segment([Pos2::new(x, y), Pos2::new(x, y + 4.0)], Stroke::new(1.0, FRAME_COLOR));
            painter.text(
                Pos2::new(x, y + 6.0),
                Align2::CENTER_TOP,
                date.format("%Y-%m-%d").to_string(),
                FontId::proportional(10.0),
                TEXT_COLOR,
            );
        }
    }
}
