//! Viewer module - the stock price viewer application core.
//!
//! - **constant**: Period and ChartType enumerations
//! - **object**: PriceBar, PriceSeries and HistoryRequest
//! - **error**: Error types
//! - **form**: Input form values and validation
//! - **datafeed**: Abstract datafeed trait for price history sources
//! - **info**: Current/max/min close labels
//! - **engine**: Application state and the fetch-and-render handler
//! - **setting**: Global settings
//! - **logger**: Logging setup
//! - **utility**: Paths and formatting helpers
//! - **ui**: egui window (requires "gui" feature)

pub mod constant;
pub mod datafeed;
pub mod engine;
pub mod error;
pub mod form;
pub mod info;
pub mod logger;
pub mod object;
pub mod setting;
pub mod utility;

#[cfg(feature = "gui")]
pub mod ui;

// Re-exports for convenience
pub use constant::{ChartType, Period};
pub use datafeed::BaseDatafeed;
pub use engine::{Notice, NoticeLevel, ViewerState};
pub use error::{FetchError, RenderError, SettingsError, ValidationError, ViewerError};
pub use form::InputForm;
pub use info::InfoPanel;
pub use logger::{init_logger, CRITICAL, DEBUG, ERROR, INFO, WARNING};
pub use object::{HistoryRequest, PriceBar, PriceSeries};
pub use setting::{SettingValue, Settings, SETTINGS};
pub use utility::{format_currency, get_file_path, get_folder_path, TEMP_DIR};
