//! Stock Viewer - a desktop viewer for historical stock prices
//!
//! This crate provides:
//!
//! - An input form for ticker, period and chart type
//! - A Yahoo Finance datafeed returning daily OHLCV history
//! - Line, candlestick and volume charts (painted with `gui` feature)
//! - Current/max/min close summary labels
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stock_viewer::gateway::YahooDatafeed;
//! use stock_viewer::viewer::{ChartType, InputForm, Period, Settings, ViewerState};
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let feed = YahooDatafeed::new(&Settings::with_defaults()).unwrap();
//!
//! let mut state = ViewerState::new(InputForm::new(Period::Year1, ChartType::Candlestick));
//! state.form.ticker = "AAPL".to_string();
//! state.fetch_data(&feed, runtime.handle());
//! println!("{}", state.info().current_text());
//! ```

pub mod chart;
pub mod gateway;
pub mod viewer;

// Re-export commonly used types
pub use chart::{render, ChartCanvas, ChartFigure, ChartPlot};
pub use gateway::YahooDatafeed;
pub use viewer::{
    BaseDatafeed, ChartType, FetchError, HistoryRequest, InfoPanel, InputForm, Notice, NoticeLevel, Period,
    PriceBar, PriceSeries, Settings, ViewerError, ViewerState,
};

#[cfg(feature = "gui")]
pub use chart::ChartWidget;
#[cfg(feature = "gui")]
pub use viewer::ui::MainWindow;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
