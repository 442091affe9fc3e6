//! Annual Report - desktop wizard for collecting and filtering report data.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use annual_report as app;

use app::config::{AppConfig, ConfigLoadResult};
use app::logging::init_logging;
use app::ui::{ReportApp, setup_context};
use app::wizard::WizardState;

/// Desktop wizard for collecting and filtering annual report data.
#[derive(Parser)]
#[command(name = "annual-report", version)]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Path to the config file
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    config: Option<PathBuf>,

    /// Force debug-level logging
    #[arg(long)]
    debug: bool,

    /// Role selected at startup (admin, department, faculty)
    #[arg(long, value_name = "ROLE")]
    role: Option<String>,

    /// Write a default config file to the config path and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = if let Some(path) = &cli.config {
        path.clone()
    } else if cli.dev {
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };

    if cli.init_config {
        if config_path.exists() {
            anyhow::bail!("Config file already exists: {}", config_path.display());
        }
        AppConfig::default()
            .save(&config_path)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        println!("Wrote default config to {}", config_path.display());
        return Ok(());
    }

    let (config, config_error) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => (config, None),
        ConfigLoadResult::Missing => (AppConfig::default(), None),
        ConfigLoadResult::Invalid(e) => (AppConfig::default(), Some(e.to_string())),
    };

    // Initialize logging
    let logging = init_logging(&config.logging, cli.debug)?;

    tracing::info!("Annual Report starting...");
    tracing::info!("Config path: {:?}", config_path);
    match &config_error {
        Some(e) => tracing::warn!("Config invalid, using defaults: {}", e),
        None if config_path.exists() => tracing::info!("Config loaded successfully"),
        None => tracing::info!("Config missing, using defaults"),
    }
    if let Some(path) = &logging.log_file_path {
        tracing::info!("Logging to {:?}", path);
    }

    let mut state = WizardState::with_role(config.session.default_role);
    if let Some(role) = &cli.role {
        state.set_role_str(role)?;
    }

    run_app(config, state, config_error)
}

/// Open the wizard window.
fn run_app(config: AppConfig, state: WizardState, config_error: Option<String>) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Annual Report Generation System")
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Annual Report Generation System",
        options,
        Box::new(move |cc| {
            setup_context(&cc.egui_ctx, config.ui.dark_mode);
            Ok(Box::new(ReportApp::new(config, state, config_error)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Window error: {e}"))?;

    tracing::info!("Annual Report closed");
    Ok(())
}
