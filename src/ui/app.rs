//! Main application UI.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use eframe::egui::{self, Align, Color32, Layout, RichText};
use egui_phosphor::regular::{CARET_LEFT, CARET_RIGHT};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{Department, ReportFilter, Role, Step};
use crate::wizard::WizardState;

use super::components::{button_with_icon, colors, primary_button_with_icon, step_indicator};
use super::forms::DepartmentForm;
use super::{activity_log, collect_panel, filter_panel, placeholder_panel};

/// Maximum activity entries kept in memory.
const MAX_LOG_ENTRIES: usize = 100;

/// Log level for UI messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn color(&self) -> Color32 {
        match self {
            LogLevel::Info => Color32::GRAY,
            LogLevel::Success => colors::SUCCESS,
            LogLevel::Warning => colors::WARNING,
            LogLevel::Error => colors::ERROR,
        }
    }
}

/// Log entry for display in the UI.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// Report wizard window.
pub struct ReportApp {
    pub config: AppConfig,
    pub state: WizardState,

    // Collect step inputs
    pub forms: BTreeMap<Department, DepartmentForm>,

    // Activity
    pub log_messages: Vec<LogEntry>,
    pub show_activity_log: bool,
    pub dark_mode: bool,

    /// Config problem reported at startup.
    pub initial_error: Option<String>,
}

impl ReportApp {
    pub fn new(config: AppConfig, state: WizardState, initial_error: Option<String>) -> Self {
        Self {
            show_activity_log: config.ui.show_activity_log,
            dark_mode: config.ui.dark_mode,
            config,
            state,
            forms: Department::ALL
                .into_iter()
                .map(|dept| (dept, DepartmentForm::default()))
                .collect(),
            log_messages: Vec::new(),
            initial_error,
        }
    }

    /// Log a message to the UI log.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });

        if self.log_messages.len() > MAX_LOG_ENTRIES {
            self.log_messages.remove(0);
        }
    }

    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn log_success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Clear the activity log.
    pub fn clear_log(&mut self) {
        self.log_messages.clear();
    }

    /// Go to the next step if there is one.
    pub fn advance(&mut self) {
        let leaving = self.state.current_step();
        if !self.state.advance() {
            return;
        }
        if leaving == Step::Collect && !self.state.all_submitted() {
            let missing = Department::ALL.len() - self.state.submitted_count();
            self.log_warning(format!("Continuing with {missing} department(s) not submitted"));
        }
        self.log_info(format!("Moved to {}", self.state.current_step()));
    }

    /// Go to the previous step if there is one.
    pub fn retreat(&mut self) {
        if self.state.retreat() {
            self.log_info(format!("Moved back to {}", self.state.current_step()));
        }
    }

    /// Submit the department's form contents.
    pub fn submit_department(&mut self, department: Department) {
        let payload = self.forms.entry(department).or_default().to_payload(department);
        let result = payload.and_then(|payload| {
            self.state
                .submit_department_json(department.key(), payload)
                .map_err(AppError::from)
        });

        match result {
            Ok(()) => {
                self.forms.entry(department).or_default().reset();
                tracing::info!(department = department.key(), "Department data submitted");
                self.log_success(format!("{} data submitted", department.name()));
            }
            Err(e) => {
                tracing::warn!(department = department.key(), "Submission rejected: {}", e);
                self.forms.entry(department).or_default().error = Some(e.to_string());
                self.log_error(format!("{} submission rejected: {}", department.name(), e));
            }
        }
    }

    /// Flip a report filter checkbox.
    pub fn toggle_filter(&mut self, filter: ReportFilter) {
        let selected = self.state.toggle_filter(filter).contains(filter);
        let verb = if selected { "Selected" } else { "Cleared" };
        self.log_info(format!("{} filter: {}", verb, filter.label()));
    }

    /// Change the header role selector.
    pub fn set_role(&mut self, role: Role) {
        if role == self.state.role() {
            return;
        }
        self.state.set_role(role);
        tracing::info!(role = role.id(), "Role changed");
        self.log_info(format!("Role set to {}", role.label()));
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        ctx.set_theme(if self.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
    }

    /// Render header with title, role selector, and menu.
    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("View", |ui| {
                    if ui.checkbox(&mut self.show_activity_log, "Activity Log").changed() {
                        ui.close();
                    }
                    if ui.checkbox(&mut self.dark_mode, "Dark Mode").changed() {
                        self.apply_theme(ui.ctx());
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Clear Activity Log").clicked() {
                        self.clear_log();
                        ui.close();
                    }
                });
            });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(RichText::new("Annual Report Generation System").size(24.0).strong());

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let mut role = self.state.role();
                    egui::ComboBox::from_id_salt("role_selector")
                        .selected_text(role.label())
                        .show_ui(ui, |ui| {
                            for option in Role::ALL {
                                ui.selectable_value(&mut role, option, option.label());
                            }
                        });
                    ui.label("Role:");
                    self.set_role(role);
                });
            });
            ui.add_space(6.0);
        });
    }

    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(28.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!("Role: {}", self.state.role().label()));
                    ui.separator();

                    let submitted = self.state.submitted_count();
                    let color = if self.state.all_submitted() {
                        colors::SUCCESS
                    } else if submitted > 0 {
                        colors::WARNING
                    } else {
                        colors::NEUTRAL
                    };
                    ui.colored_label(
                        color,
                        format!("{} of {} departments submitted", submitted, Department::ALL.len()),
                    );
                    ui.separator();
                    ui.label(format!("Filters: {} selected", self.state.filters().len()));

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(format!(
                            "Step {} of {}",
                            self.state.step_index() + 1,
                            Step::ALL.len()
                        ));
                    });
                });
            });
    }

    /// Render the row of step indicators.
    fn show_progress(&self, ui: &mut egui::Ui) {
        let width = ui.available_width() / Step::ALL.len() as f32;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for step in Step::ALL {
                step_indicator(ui, step, step == self.state.current_step(), width);
            }
        });
    }

    /// Render Previous / Next buttons.
    fn show_navigation(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if button_with_icon(ui, self.state.can_retreat(), CARET_LEFT, "Previous").clicked() {
                self.retreat();
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if primary_button_with_icon(ui, self.state.can_advance(), CARET_RIGHT, "Next").clicked() {
                    self.advance();
                }
            });
        });
    }

    /// Render startup config error dialog.
    fn show_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(err) = self.initial_error.clone() else {
            return;
        };

        egui::Window::new("Configuration Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.colored_label(colors::ERROR, &err);
                ui.add_space(5.0);
                ui.label("Default settings are in use for this session.");
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    self.initial_error = None;
                }
            });
    }
}

impl eframe::App for ReportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Header and status bar
        self.show_header(ctx);
        self.show_status_bar(ctx);

        // Activity log
        if self.show_activity_log {
            egui::SidePanel::right("activity_log")
                .resizable(true)
                .default_width(280.0)
                .show(ctx, |ui| activity_log::show(self, ui));
        }

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);
            self.show_progress(ui);
            ui.add_space(20.0);

            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::same(20))
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());

                    match self.state.current_step() {
                        Step::Collect => collect_panel::show(self, ui),
                        Step::Filter => filter_panel::show(self, ui),
                        step => placeholder_panel::show(ui, step),
                    }

                    ui.add_space(30.0);
                    self.show_navigation(ui);
                });
        });

        self.show_error_dialog(ctx);
    }
}

/// Install phosphor icon glyphs and the configured theme.
pub fn setup_context(ctx: &egui::Context, dark_mode: bool) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    ctx.set_theme(if dark_mode {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    });
}
