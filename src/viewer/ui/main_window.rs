//! Main window of the stock price viewer.
//!
//! A grid with the ticker entry and the two dropdowns, a full-width fetch
//! button, a row of summary labels and the chart filling the rest.

use std::sync::Arc;

use egui::{CentralPanel, ComboBox, Context, Grid, Key, RichText, TextEdit, Ui};
use tokio::runtime::Handle;

use super::dialogs::show_notice;
use super::style::{get_button_color, COLOR_TEXT_BUTTON, COLOR_TEXT_LABEL};
use crate::chart::ChartWidget;
use crate::viewer::constant::{ChartType, Period};
use crate::viewer::datafeed::BaseDatafeed;
use crate::viewer::engine::ViewerState;

/// Height of the fetch button
const BUTTON_HEIGHT: f32 = 32.0;

/// Main window state
pub struct MainWindow {
    /// Application state the widgets bind to
    pub state: ViewerState,
    /// Price history source
    datafeed: Arc<dyn BaseDatafeed>,
    /// Runtime the blocking fetch is driven on
    runtime: Handle,
    /// Chart painter
    chart: ChartWidget,
    /// Whether the pointer was over the fetch button last frame
    fetch_hovered: bool,
}

impl MainWindow {
    pub fn new(state: ViewerState, datafeed: Arc<dyn BaseDatafeed>, runtime: Handle) -> Self {
        Self {
            state,
            datafeed,
            runtime,
            chart: ChartWidget::new(),
            fetch_hovered: false,
        }
    }

    /// Show the window and handle a submit, if any
    pub fn show(&mut self, ctx: &Context) {
        let mut submit = false;

        CentralPanel::default().show(ctx, |ui| {
            submit |= self.show_form(ui);
            submit |= self.show_fetch_button(ui);
            ui.add_space(4.0);
            self.show_info(ui);
            ui.add_space(4.0);
            self.chart.show(ui, self.state.canvas());
        });

        if submit {
            self.state.fetch_data(self.datafeed.as_ref(), &self.runtime);
            ctx.request_repaint();
        }

        if let Some(notice) = self.state.take_notice() {
            show_notice(&notice);
        }
    }

    /// Ticker entry and dropdowns; returns true when Enter was pressed in the ticker field
    fn show_form(&mut self, ui: &mut Ui) -> bool {
        let mut submitted = false;
        let form = &mut self.state.form;

        Grid::new("input_form")
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.label(form_label("Ticker Symbol:"));
                let response = ui.add(
                    TextEdit::singleline(&mut form.ticker)
                        .hint_text("e.g. AAPL")
                        .desired_width(f32::INFINITY),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    submitted = true;
                }
                ui.end_row();

                ui.label(form_label("Period:"));
                ComboBox::from_id_salt("period_combo")
                    .selected_text(form.period.value())
                    .show_ui(ui, |ui| {
                        for period in Period::ALL {
                            ui.selectable_value(&mut form.period, period, period.value());
                        }
                    });
                ui.end_row();

                ui.label(form_label("Chart Type:"));
                ComboBox::from_id_salt("chart_type_combo")
                    .selected_text(form.chart_type.display_name())
                    .show_ui(ui, |ui| {
                        for chart_type in ChartType::ALL {
                            ui.selectable_value(&mut form.chart_type, chart_type, chart_type.display_name());
                        }
                    });
                ui.end_row();
            });

        submitted
    }

    /// Full-width fetch button; returns true when clicked
    fn show_fetch_button(&mut self, ui: &mut Ui) -> bool {
        let button = egui::Button::new(RichText::new("Fetch Data").strong().color(COLOR_TEXT_BUTTON))
            .fill(get_button_color(self.fetch_hovered));
        let response = ui.add_sized([ui.available_width(), BUTTON_HEIGHT], button);
        self.fetch_hovered = response.hovered();
        response.clicked()
    }

    /// Current/max/min close labels
    fn show_info(&self, ui: &mut Ui) {
        let info = self.state.info();
        ui.columns(3, |columns| {
            columns[0].label(form_label(&info.current_text()));
            columns[1].label(form_label(&info.max_text()));
            columns[2].label(form_label(&info.min_text()));
        });
    }
}

fn form_label(text: &str) -> RichText {
    RichText::new(text).strong().color(COLOR_TEXT_LABEL)
}
