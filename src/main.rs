//! Stock Viewer - Main Application Entry Point
//!
//! A desktop stock price viewer built with egui.

use std::error::Error;
use std::sync::Arc;

use eframe::egui;
use tracing::{info, warn};

use stock_viewer::gateway::YahooDatafeed;
use stock_viewer::viewer::ui::{apply_light_theme, MainWindow};
use stock_viewer::viewer::{init_logger, BaseDatafeed, InputForm, ViewerState, SETTINGS};

/// Application state holding the main window
struct StockViewerApp {
    main_window: MainWindow,
}

impl StockViewerApp {
    /// Create a new application instance
    fn new(cc: &eframe::CreationContext<'_>, datafeed: Arc<dyn BaseDatafeed>, runtime: tokio::runtime::Handle) -> Self {
        let font_size = SETTINGS.get_float("font.size").unwrap_or(12.0) as f32;
        apply_light_theme(&cc.egui_ctx, font_size);

        let state = ViewerState::new(InputForm::from_settings(&SETTINGS));
        info!("✅ Stock Viewer started with datafeed {}", datafeed.name());

        Self {
            main_window: MainWindow::new(state, datafeed, runtime),
        }
    }
}

impl eframe::App for StockViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.main_window.show(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("🛑 Stock Viewer closed");
    }
}

/// Create native window options
fn create_native_options() -> eframe::NativeOptions {
    let width = SETTINGS.get_float("window.width").unwrap_or(800.0) as f32;
    let height = SETTINGS.get_float("window.height").unwrap_or(600.0) as f32;

    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Stock Price Viewer")
            .with_position([100.0, 100.0])
            .with_inner_size([width, height])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Create tokio runtime
    let runtime = tokio::runtime::Runtime::new()?;

    // Setup logging
    init_logger(&SETTINGS)?;
    if let Some(e) = SETTINGS.load_error() {
        warn!("Ignoring settings file {}", e);
    }

    info!("🚀 Starting Stock Viewer...");
    info!("📦 Version: {}", stock_viewer::VERSION);
    info!("🦀 Rust version: {}", rustc_version_runtime::version());

    let datafeed: Arc<dyn BaseDatafeed> = Arc::new(YahooDatafeed::new(&SETTINGS)?);
    let handle = runtime.handle().clone();

    eframe::run_native(
        "Stock Price Viewer",
        create_native_options(),
        Box::new(move |cc| Ok(Box::new(StockViewerApp::new(cc, datafeed, handle)))),
    )
    .map_err(|e| format!("Failed to run application: {}", e))?;

    Ok(())
}
