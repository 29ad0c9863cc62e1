// PBIX Analyzer - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and manages the simulated analysis and
// export lifecycles: polls both worker channels, applies progress to
// state, and consumes the request flags set by panels.

use crate::app::analysis::AnalysisManager;
use crate::app::export::ExportManager;
use crate::app::state::{AppState, StatusTone};
use crate::core::i18n::TextKey;
use crate::core::model::{AnalysisProgress, ExportProgress};
use crate::core::validate::{validate_selection, ValidationConfig};
use crate::ui;
use crate::util::error::{AnalysisError, AnalyzerError, ExportError};

/// The PBIX Analyzer application.
pub struct PbixAnalyzerApp {
    pub state: AppState,
    pub analysis_manager: AnalysisManager,
    pub export_manager: ExportManager,
}

impl PbixAnalyzerApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            analysis_manager: AnalysisManager::new(),
            export_manager: ExportManager::new(),
        }
    }
}

impl eframe::App for PbixAnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply(ctx, self.state.theme);
        self.state.clear_expired_status();

        // ---- Poll analysis progress ----
        for msg in self.analysis_manager.poll_progress() {
            match msg {
                AnalysisProgress::Started => {
                    self.state.analysis_in_progress = true;
                    self.state.analysis_progress = 0.0;
                    self.state.analysis_complete = false;
                    self.state.analysis_report = None;
                }
                AnalysisProgress::Tick { percent } => {
                    self.state.record_progress(percent);
                }
                AnalysisProgress::Completed { report } => {
                    self.state.record_progress(100.0);
                    self.state.analysis_report = Some(report);
                    self.state.analysis_complete = true;
                    self.state.analysis_in_progress = false;
                    self.state
                        .set_status(TextKey::AnalysisComplete, StatusTone::Success);
                }
                AnalysisProgress::Failed { error } => {
                    let err = AnalyzerError::Analysis(AnalysisError::WorkerFailed {
                        message: error,
                    });
                    tracing::error!(error = %err, "Analysis failed");
                    self.state.analysis_in_progress = false;
                    self.state.analysis_progress = 0.0;
                    self.state
                        .set_status(TextKey::AnalysisFailed, StatusTone::Error);
                }
                AnalysisProgress::Cancelled => {
                    self.state.analysis_in_progress = false;
                    self.state.analysis_progress = 0.0;
                    self.state
                        .set_status(TextKey::AnalysisCancelled, StatusTone::Info);
                }
            }
        }

        // ---- Poll export progress ----
        for msg in self.export_manager.poll_progress() {
            match msg {
                ExportProgress::Started => {
                    self.state.export_in_progress = true;
                    self.state
                        .set_status(TextKey::ExportStarted, StatusTone::Success);
                }
                ExportProgress::Completed => {
                    self.state.export_in_progress = false;
                    self.state.set_status(TextKey::ExportDone, StatusTone::Success);
                }
                ExportProgress::Failed { error } => {
                    let err = AnalyzerError::Export(ExportError::WorkerFailed { message: error });
                    tracing::error!(error = %err, "Export failed");
                    self.state.export_in_progress = false;
                    self.state
                        .set_status(TextKey::AnalysisFailed, StatusTone::Error);
                }
            }
        }

        // ---- Handle flags set by panels ----
        // pending_selection: a path arrived from drop, dialog, or CLI.
        if let Some(path) = self.state.pending_selection.take() {
            match validate_selection(&path, &ValidationConfig::default()) {
                Ok(file) => {
                    tracing::info!(file = %file.path.display(), size = file.size, "File selected");
                    self.state.validation_error = None;
                    self.state.selected_file = Some(file);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Selection rejected");
                    self.state.selected_file = None;
                    self.state.validation_error = Some(e);
                }
            }
        }
        // request_analyze: the Analyze button was pressed.
        if self.state.request_analyze {
            self.state.request_analyze = false;
            if let Some(file) = self.state.selected_file.clone() {
                self.state.analysis_in_progress = true;
                self.state.analysis_progress = 0.0;
                self.state.analysis_complete = false;
                self.state.analysis_report = None;
                self.analysis_manager
                    .start(file, self.state.analysis_config.clone());
            }
        }
        // request_cancel: the Cancel button was pressed during an analysis.
        if self.state.request_cancel {
            self.state.request_cancel = false;
            self.analysis_manager.cancel();
        }
        // request_export: the export button was pressed on the results view.
        if self.state.request_export {
            self.state.request_export = false;
            self.export_manager.start(self.state.export_config.clone());
        }
        // request_reset: return to the upload view.
        if self.state.request_reset {
            self.state.request_reset = false;
            self.state.reset_analysis();
        }

        // ---- Header ----
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui::panels::header::render(ui, &mut self.state);
            ui.add_space(4.0);
        });

        // ---- Status bar ----
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    match self.state.status.as_ref() {
                        Some(notice) => {
                            let colour = match notice.tone {
                                StatusTone::Info => ui.visuals().text_color(),
                                StatusTone::Success => ui::theme::SUCCESS,
                                StatusTone::Error => ui::theme::DANGER,
                            };
                            ui.colored_label(colour, &notice.message);
                        }
                        None => {
                            ui.label(
                                egui::RichText::new(self.state.tr(TextKey::Ready)).weak(),
                            );
                        }
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "v{}",
                                crate::util::constants::APP_VERSION
                            ))
                            .small()
                            .weak(),
                        );
                    });
                });
            });

        // ---- Central content ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);

                    // Hero
                    ui.label(
                        egui::RichText::new(self.state.tr(TextKey::Title))
                            .size(32.0)
                            .strong()
                            .color(ui::theme::ACCENT),
                    );
                    ui.label(
                        egui::RichText::new(self.state.tr(TextKey::Subtitle))
                            .size(16.0)
                            .weak(),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(format!(
                            "\u{25cf} {} \u{2192} {} \u{25cf}",
                            self.state.tr(TextKey::SystemOnline),
                            self.state.tr(TextKey::RealtimeProcessing)
                        ))
                        .small()
                        .weak(),
                    );
                    ui.add_space(24.0);

                    // Upload or results
                    if self.state.analysis_complete {
                        ui::panels::results::render(ui, &mut self.state);
                    } else {
                        ui::panels::upload::render(ui, &mut self.state);
                    }

                    // Features (hidden once an analysis is complete)
                    if !self.state.analysis_complete {
                        ui.add_space(32.0);
                        ui::panels::features::render(ui, &self.state);
                    }

                    ui.add_space(24.0);
                });
            });
        });

        // Keep repainting while a worker is active so progress and notices
        // appear promptly.
        if self.state.analysis_in_progress || self.state.export_in_progress {
            ctx.request_repaint_after(std::time::Duration::from_millis(
                crate::util::constants::WORKER_REPAINT_INTERVAL_MS,
            ));
        } else if self.state.status.is_some() {
            // A notice is pending expiry; tick once a second to clear it.
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }
}
