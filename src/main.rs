// PBIX Analyzer - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading and validation
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use pbix_analyzer::app;

pub use pbix_analyzer::core;
pub use pbix_analyzer::platform;
pub use pbix_analyzer::ui;
pub use pbix_analyzer::util;

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// PBIX Analyzer - desktop front-end for Power BI file analysis.
///
/// Select or drop a .pbix file to run the analysis and view the extracted
/// statistics. The analysis engine is a simulated placeholder.
#[derive(Parser, Debug)]
#[command(name = "PBIX Analyzer", version, about)]
struct Cli {
    /// .pbix file to pre-select (starts empty if omitted).
    file: Option<PathBuf>,

    /// Interface locale: pt, en, or es.
    #[arg(short = 'l', long = "language")]
    language: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config first so the configured log
    // level can participate in logging init.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    // Initialise logging subsystem
    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "PBIX Analyzer starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // Interface locale: CLI override > config > default (pt).
    let language = match cli.language.as_deref() {
        Some(code) => match core::i18n::Language::from_code(code) {
            Some(lang) => lang,
            None => {
                tracing::warn!(code, "Unrecognised --language value; using configured locale");
                config.language
            }
        },
        None => config.language,
    };

    let theme = if config.dark_mode {
        core::model::ThemeMode::Dark
    } else {
        core::model::ThemeMode::Light
    };

    // Create application state
    let mut state = app::state::AppState::new(language, theme);
    state.analysis_config = app::analysis::AnalysisConfig {
        tick_interval: Duration::from_millis(config.progress_tick_ms),
        completion_delay: Duration::from_millis(config.completion_delay_ms),
        ..Default::default()
    };

    // If a path was provided on the CLI, queue it for validation.
    if let Some(path) = cli.file {
        state.pending_selection = Some(path);
    }

    tracing::info!(language = language.code(), "Ready to launch GUI");

    // Launch the GUI
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::PbixAnalyzerApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch PBIX Analyzer GUI: {e}");
        std::process::exit(1);
    }
}
