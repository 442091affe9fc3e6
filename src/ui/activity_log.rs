//! Recent activity side panel.

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use super::app::ReportApp;

/// Number of entries shown, newest first.
const VISIBLE_ENTRIES: usize = 50;

/// Show the activity log.
pub fn show(app: &mut ReportApp, ui: &mut Ui) {
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("Recent Activity").strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("Clear").clicked() {
                app.clear_log();
            }
        });
    });
    ui.separator();

    if app.log_messages.is_empty() {
        ui.label(RichText::new("No recent activity").weak());
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(64.0))
        .column(Column::remainder())
        .body(|mut body| {
            for entry in app.log_messages.iter().rev().take(VISIBLE_ENTRIES) {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(
                            RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                                .small()
                                .color(Color32::DARK_GRAY),
                        );
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(&entry.message).color(entry.level.color()));
                    });
                });
            }
        });
}
