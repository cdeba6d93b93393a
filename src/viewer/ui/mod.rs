//! UI module for the stock price viewer.
//!
//! This module provides the egui window: the input form, the fetch button,
//! the summary labels, the chart canvas and the modal notice dialogs.

pub mod dialogs;
pub mod main_window;
pub mod style;

// Re-export commonly used types
pub use dialogs::show_notice;
pub use main_window::MainWindow;
pub use style::*;
