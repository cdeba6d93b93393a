//! Style constants and theme setup for the UI.

use egui::{Color32, CornerRadius, FontFamily, FontId, Stroke, TextStyle};

// Background colors
pub const COLOR_BG_WINDOW: Color32 = Color32::from_rgb(0xf0, 0xf0, 0xf0);
pub const COLOR_BG_INPUT: Color32 = Color32::WHITE;

// Border colors
pub const COLOR_BORDER: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xcc);

// Text colors
pub const COLOR_TEXT_LABEL: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
pub const COLOR_TEXT_BUTTON: Color32 = Color32::WHITE;

// Fetch button colors
pub const COLOR_BUTTON: Color32 = Color32::from_rgb(0x00, 0x7a, 0xcc);
pub const COLOR_BUTTON_HOVER: Color32 = Color32::from_rgb(0x00, 0x5c, 0x99);

/// Corner radius of inputs and buttons
pub const WIDGET_ROUNDING: u8 = 5;

/// Inner padding of inputs and buttons
pub const WIDGET_PADDING: f32 = 5.0;

/// Apply the light theme with the given base font size
pub fn apply_light_theme(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();

    // Window colors
    style.visuals.window_fill = COLOR_BG_WINDOW;
    style.visuals.panel_fill = COLOR_BG_WINDOW;
    style.visuals.extreme_bg_color = COLOR_BG_INPUT;
    style.visuals.selection.bg_fill = COLOR_BUTTON;
    style.visuals.selection.stroke = Stroke::new(1.0, COLOR_TEXT_BUTTON);

    // Widget colors
    let rounding = CornerRadius::same(WIDGET_ROUNDING);
    let border = Stroke::new(1.0, COLOR_BORDER);
    for widget in [
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
        &mut style.visuals.widgets.open,
    ] {
        widget.bg_fill = COLOR_BG_INPUT;
        widget.weak_bg_fill = COLOR_BG_INPUT;
        widget.bg_stroke = border;
        widget.corner_radius = rounding;
    }
    style.visuals.widgets.inactive.fg_stroke.color = COLOR_TEXT_LABEL;
    style.visuals.widgets.noninteractive.fg_stroke.color = COLOR_TEXT_LABEL;

    style.spacing.button_padding = egui::vec2(WIDGET_PADDING * 2.0, WIDGET_PADDING);

    // Text sizes
    style.text_styles = [
        (TextStyle::Heading, FontId::new(font_size * 1.5, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(font_size, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(font_size, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(font_size, FontFamily::Monospace)),
        (TextStyle::Small, FontId::new(font_size * 0.8, FontFamily::Proportional)),
    ]
    .into();

    ctx.set_style(style);
}

/// Fill of the fetch button
pub fn get_button_color(hovered: bool) -> Color32 {
    if hovered {
        COLOR_BUTTON_HOVER
    } else {
        COLOR_BUTTON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_color() {
        assert_eq!(get_button_color(false), COLOR_BUTTON);
        assert_eq!(get_button_color(true), COLOR_BUTTON_HOVER);
    }
}
