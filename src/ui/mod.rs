//! GUI panels and application state.

pub mod activity_log;
pub mod app;
pub mod collect_panel;
pub mod components;
pub mod filter_panel;
pub mod forms;
pub mod placeholder_panel;

pub use app::{ReportApp, setup_context};
