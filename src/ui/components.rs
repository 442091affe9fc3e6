//! Shared UI components.

use eframe::egui::{self, Color32, CornerRadius, Margin, Response, RichText, Ui};

use crate::models::Step;

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 100);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);
    pub const ACTIVE: Color32 = Color32::from_rgb(37, 99, 235);
}

/// Render a panel header with title.
pub fn panel_header(ui: &mut Ui, title: &str) {
    ui.heading(RichText::new(title).size(22.0).strong());
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(15.0);
}

/// Rounded frame used for cards and side sections.
pub fn card_frame(ui: &Ui) -> egui::Frame {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .corner_radius(CornerRadius::same(8))
}

/// Button with a leading phosphor icon.
pub fn button_with_icon(ui: &mut Ui, enabled: bool, icon: &str, text: &str) -> Response {
    ui.add_enabled(enabled, egui::Button::new(format!("{icon}  {text}")))
}

/// Accent-filled variant of [`button_with_icon`].
pub fn primary_button_with_icon(ui: &mut Ui, enabled: bool, icon: &str, text: &str) -> Response {
    let label = RichText::new(format!("{icon}  {text}")).color(Color32::WHITE);
    ui.add_enabled(enabled, egui::Button::new(label).fill(colors::ACTIVE))
}

/// One entry of the progress row: icon in a circle over the step label.
pub fn step_indicator(ui: &mut Ui, step: Step, is_current: bool, width: f32) {
    let color = if is_current { colors::ACTIVE } else { colors::NEUTRAL };
    let fill = if is_current {
        colors::ACTIVE.gamma_multiply(0.15)
    } else {
        ui.style().visuals.faint_bg_color
    };

    ui.allocate_ui_with_layout(
        egui::vec2(width, 64.0),
        egui::Layout::top_down(egui::Align::Center),
        |ui| {
            egui::Frame::new()
                .fill(fill)
                .corner_radius(CornerRadius::same(20))
                .inner_margin(Margin::same(8))
                .show(ui, |ui| {
                    ui.label(RichText::new(step.icon()).size(20.0).color(color));
                });
            ui.add_space(4.0);
            let label = RichText::new(step.label()).small().color(color);
            ui.label(if is_current { label.strong() } else { label });
        },
    );
}
