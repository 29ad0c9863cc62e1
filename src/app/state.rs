// PBIX Analyzer - app/state.rs
//
// Application state management. Holds the current selection, analysis
// progress, results, localisation and theme choices, and the request
// flags the panels use to ask the update loop for side effects.
// Owned by the eframe::App implementation.

use crate::app::analysis::AnalysisConfig;
use crate::app::export::ExportConfig;
use crate::core::i18n::{tr, Language, TextKey};
use crate::core::model::{AnalysisReport, SelectedFile, ThemeMode};
use crate::util::constants;
use crate::util::error::ValidationError;
use std::path::PathBuf;
use std::time::{Duration, Instant};

// =============================================================================
// Status notices
// =============================================================================

/// Visual tone of a status notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Success,
    Error,
}

/// A transient toast-style notice shown in the status bar until it expires.
#[derive(Debug, Clone)]
pub struct StatusNotice {
    pub message: String,
    pub tone: StatusTone,
    pub expires_at: Instant,
}

// =============================================================================
// AppState
// =============================================================================

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Current interface locale.
    pub language: Language,

    /// Current visual theme.
    pub theme: ThemeMode,

    /// The validated selection (None until a file passes validation).
    pub selected_file: Option<SelectedFile>,

    /// Whether a simulated analysis is currently running.
    pub analysis_in_progress: bool,

    /// Progress percentage in [0, 100], monotonically non-decreasing
    /// within a run.
    pub analysis_progress: f32,

    /// Whether the most recent analysis completed successfully.
    pub analysis_complete: bool,

    /// Mock counters from the most recent completed analysis.
    pub analysis_report: Option<AnalysisReport>,

    /// Inline validation alert shown beneath the drop zone.
    pub validation_error: Option<ValidationError>,

    /// Whether a simulated export is currently running.
    pub export_in_progress: bool,

    /// Transient status notice; the status bar falls back to the localised
    /// idle text when None or expired.
    pub status: Option<StatusNotice>,

    /// Timing parameters for the simulated analysis (config.toml may
    /// override the defaults).
    pub analysis_config: AnalysisConfig,

    /// Timing parameters for the simulated export.
    pub export_config: ExportConfig,

    // ---- Request flags, set by panels and consumed by the update loop ----
    /// A path was picked (drop, dialog, or CLI) and awaits validation.
    pub pending_selection: Option<PathBuf>,

    /// The Analyze button was pressed.
    pub request_analyze: bool,

    /// The Cancel button was pressed during an analysis.
    pub request_cancel: bool,

    /// The export button was pressed.
    pub request_export: bool,

    /// The new-analysis action was pressed on the results view.
    pub request_reset: bool,
}

impl AppState {
    /// Create initial state with the given locale and theme.
    pub fn new(language: Language, theme: ThemeMode) -> Self {
        Self {
            language,
            theme,
            selected_file: None,
            analysis_in_progress: false,
            analysis_progress: 0.0,
            analysis_complete: false,
            analysis_report: None,
            validation_error: None,
            export_in_progress: false,
            status: None,
            analysis_config: AnalysisConfig::default(),
            export_config: ExportConfig::default(),
            pending_selection: None,
            request_analyze: false,
            request_cancel: false,
            request_export: false,
            request_reset: false,
        }
    }

    /// Localised string for `key` in the current language.
    pub fn tr(&self, key: TextKey) -> &'static str {
        tr(key, self.language)
    }

    /// Show a transient status notice.
    pub fn set_status(&mut self, key: TextKey, tone: StatusTone) {
        self.status = Some(StatusNotice {
            message: self.tr(key).to_string(),
            tone,
            expires_at: Instant::now()
                + Duration::from_millis(constants::STATUS_NOTICE_TTL_MS),
        });
    }

    /// Drop the current notice once its deadline passes.
    pub fn clear_expired_status(&mut self) {
        if let Some(ref notice) = self.status {
            if Instant::now() >= notice.expires_at {
                self.status = None;
            }
        }
    }

    /// Record a new progress value, enforcing the [0, 100] bound and
    /// monotonicity at the UI boundary as well as in the worker.
    pub fn record_progress(&mut self, percent: f32) {
        self.analysis_progress = self
            .analysis_progress
            .max(percent.clamp(0.0, 100.0));
    }

    /// Return to the upload view: clear the selection, progress, results,
    /// and any inline validation alert.
    pub fn reset_analysis(&mut self) {
        self.selected_file = None;
        self.analysis_in_progress = false;
        self.analysis_progress = 0.0;
        self.analysis_complete = false;
        self.analysis_report = None;
        self.validation_error = None;
        self.export_in_progress = false;
    }
}
