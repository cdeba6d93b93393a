//! Application state and the fetch-and-render handler.
//!
//! `ViewerState` owns everything the window shows. The UI binds to it every
//! frame and calls `fetch_data` when the user submits the form.

use tokio::runtime::Handle;
use tracing::{error, info, warn};

use crate::chart::{render, ChartCanvas};

use super::constant::ChartType;
use super::datafeed::BaseDatafeed;
use super::error::ViewerError;
use super::form::InputForm;
use super::info::InfoPanel;
use super::object::PriceSeries;

/// Title of every notice dialog
pub const NOTICE_TITLE: &str = "Error";

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Non-fatal, the form stays usable
    Warning,
    /// A fetch or render failed
    Critical,
}

/// A modal message waiting to be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: NOTICE_TITLE.to_string(),
            message: message.into(),
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Critical,
            title: NOTICE_TITLE.to_string(),
            message: message.into(),
        }
    }
}

/// Everything the main window displays
#[derive(Debug, Default)]
pub struct ViewerState {
    /// Form values, edited directly by the widgets
    pub form: InputForm,
    series: Option<PriceSeries>,
    canvas: ChartCanvas,
    info: InfoPanel,
    notice: Option<Notice>,
}

impl ViewerState {
    pub fn new(form: InputForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Series currently on screen
    pub fn series(&self) -> Option<&PriceSeries> {
        self.series.as_ref()
    }

    pub fn canvas(&self) -> &ChartCanvas {
        &self.canvas
    }

    pub fn info(&self) -> &InfoPanel {
        &self.info
    }

    /// Notice raised by the last submit, if not yet taken
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Remove the pending notice so it is shown once
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Handle the fetch button.
    ///
    /// Blocks the calling thread on `runtime` until the datafeed answers. An
    /// invalid form raises a warning without touching the datafeed; any fetch
    /// or render failure raises a critical notice and leaves the previous
    /// chart, series and labels in place.
    pub fn fetch_data(&mut self, feed: &dyn BaseDatafeed, runtime: &Handle) {
        let req = match self.form.validate() {
            Ok(req) => req,
            Err(e) => {
                warn!("Fetch rejected: {}", e);
                self.notice = Some(Notice::warning(e.to_string()));
                return;
            }
        };

        let chart_type = self.form.chart_type;
        info!("Fetching {} ({}) from {}", req.ticker, req.period, feed.name());

        let result = runtime
            .block_on(feed.query_history(req))
            .map_err(ViewerError::from)
            .and_then(|series| self.show_series(series, chart_type));

        if let Err(e) = result {
            error!("Failed to fetch data: {}", e);
            self.notice = Some(Notice::critical(format!("Failed to fetch data: {}", e)));
        }
    }

    /// Draw a freshly fetched series and refresh the info labels
    pub fn show_series(&mut self, series: PriceSeries, chart_type: ChartType) -> Result<(), ViewerError> {
        let figure = render(&series, chart_type)?;

        self.canvas.draw(figure);
        self.info = InfoPanel::from_series(&series);
        info!("Drew {} {} bars for {}", series.len(), chart_type, series.ticker());
        self.series = Some(series);
        Ok(())
    }
}
