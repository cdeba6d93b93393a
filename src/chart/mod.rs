//! Chart module for turning a price series into a drawn chart.
//!
//! This module provides:
//! - `render` - builds a `ChartFigure` for a line, candlestick or volume chart
//! - `ChartCanvas` - the single drawing surface, cleared on every draw
//! - `ChartWidget` - paints the canvas with egui (with `gui` feature)
//!
//! # Example
//!
//! ```ignore
//! use stock_viewer::chart::{render, ChartCanvas};
//! use stock_viewer::viewer::ChartType;
//!
//! let mut canvas = ChartCanvas::new();
//! canvas.draw(render(&series, ChartType::Candlestick)?);
//! ```

mod base;
mod canvas;
mod figure;

#[cfg(feature = "gui")]
mod item;
#[cfg(feature = "gui")]
mod widget;

pub use base::*;
pub use canvas::ChartCanvas;
pub use figure::{render, Candle, ChartFigure, ChartPlot, PlotPoint};

#[cfg(feature = "gui")]
pub use item::{CandleItem, ChartItem, LineItem, PlotTransform};
#[cfg(feature = "gui")]
pub use widget::ChartWidget;
