//! Placeholder for steps without a working panel.

use eframe::egui::{RichText, Ui};

use super::components::panel_header;
use crate::models::Step;

/// Show a "Coming soon" panel for `step`.
pub fn show(ui: &mut Ui, step: Step) {
    panel_header(ui, step.label());

    ui.vertical_centered(|ui| {
        ui.add_space(30.0);
        ui.label(RichText::new(step.icon()).size(48.0).weak());
        ui.add_space(10.0);
        ui.label(RichText::new("Coming soon").size(18.0).weak());
        ui.add_space(10.0);
        ui.label(format!("{} functionality will be implemented here.", step.label()));
    });
}
