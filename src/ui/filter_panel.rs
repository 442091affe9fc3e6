//! Report filter checkboxes.

use eframe::egui::{RichText, Ui};

use super::app::ReportApp;
use super::components::panel_header;
use crate::models::ReportFilter;

/// Show the filter panel.
pub fn show(app: &mut ReportApp, ui: &mut Ui) {
    panel_header(ui, "Filter Data");

    let mut toggled = None;

    for row in ReportFilter::ALL.chunks(2) {
        ui.columns(2, |columns| {
            for (column, filter) in columns.iter_mut().zip(row) {
                let mut checked = app.state.filters().contains(*filter);
                if column.checkbox(&mut checked, filter.label()).changed() {
                    toggled = Some(*filter);
                }
            }
        });
        ui.add_space(8.0);
    }

    if let Some(filter) = toggled {
        app.toggle_filter(filter);
    }

    ui.add_space(10.0);
    let labels = app.state.filters().labels();
    let summary = if labels.is_empty() {
        "No filters selected".to_string()
    } else {
        format!("Included: {}", labels.join(", "))
    };
    ui.label(RichText::new(summary).weak());
}
