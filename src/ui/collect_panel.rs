//! Data collection panel with one submission card per department.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{CHECK_CIRCLE, UPLOAD};

use super::app::ReportApp;
use super::components::{card_frame, colors, panel_header, primary_button_with_icon};
use super::forms::DepartmentForm;
use crate::models::{Department, DepartmentRecord};

/// Show the collect panel.
pub fn show(app: &mut ReportApp, ui: &mut Ui) {
    panel_header(ui, "Data Collection");

    let records: Vec<(Department, DepartmentRecord)> =
        app.state.departments().map(|(dept, record)| (dept, record.clone())).collect();
    let mut submit = None;

    for row in records.chunks(2) {
        ui.columns(2, |columns| {
            for (column, (dept, record)) in columns.iter_mut().zip(row) {
                let form = app.forms.entry(*dept).or_default();
                if department_card(column, *dept, record, form) {
                    submit = Some(*dept);
                }
            }
        });
        ui.add_space(15.0);
    }

    if let Some(dept) = submit {
        app.submit_department(dept);
    }
}

/// Render one department card. Returns `true` when "Submit Data" is clicked.
fn department_card(ui: &mut Ui, dept: Department, record: &DepartmentRecord, form: &mut DepartmentForm) -> bool {
    let mut clicked = false;

    card_frame(ui).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(dept.name()).strong().size(16.0));
        ui.add_space(10.0);

        if record.submitted {
            ui.colored_label(colors::SUCCESS, format!("{CHECK_CIRCLE}  Data Submitted"));

            let summary = record.data.as_ref().map(|d| d.summary()).unwrap_or_default();
            if summary.is_empty() {
                ui.label(RichText::new("No figures provided").weak());
            } else {
                egui::Grid::new(("summary", dept.key()))
                    .num_columns(2)
                    .spacing([20.0, 4.0])
                    .show(ui, |ui| {
                        for (label, value) in summary {
                            ui.label(RichText::new(label).weak());
                            ui.label(value);
                            ui.end_row();
                        }
                    });
            }
            return;
        }

        egui::Grid::new(("inputs", dept.key()))
            .num_columns(2)
            .spacing([20.0, 6.0])
            .show(ui, |ui| {
                for spec in dept.fields() {
                    ui.label(spec.label);
                    if ui
                        .add(egui::TextEdit::singleline(form.input_mut(spec.key)).desired_width(120.0))
                        .changed()
                    {
                        form.error = None;
                    }
                    ui.end_row();
                }
            });

        ui.add_space(10.0);

        if let Some(err) = &form.error {
            ui.colored_label(colors::ERROR, err);
            ui.add_space(5.0);
        }

        if primary_button_with_icon(ui, true, UPLOAD, "Submit Data").clicked() {
            clicked = true;
        }
    });

    clicked
}
