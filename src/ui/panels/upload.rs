// PBIX Analyzer - ui/panels/upload.rs
//
// File drop zone: drag-and-drop target, click-to-browse dialog, selected
// file display, inline validation alert, and the analysis progress overlay.
//
// Drops are accepted window-wide while this view is visible and no
// analysis is running; only the first dropped path is taken (single-file
// selection). Paths are handed to the update loop via
// `state.pending_selection`, never validated here.

use crate::app::state::AppState;
use crate::core::i18n::TextKey;
use crate::ui::theme;
use crate::util::error::ValidationError;

/// Render the upload widget.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.set_max_width(theme::CONTENT_MAX_WIDTH);

        let analyzing = state.analysis_in_progress;

        // ---- Drag and drop ----
        let drop_hovering = !analyzing
            && ui
                .ctx()
                .input(|i| i.raw.hovered_files.iter().any(|f| f.path.is_some()));

        if !analyzing {
            let dropped = ui.ctx().input(|i| i.raw.dropped_files.clone());
            if let Some(path) = dropped.into_iter().find_map(|f| f.path) {
                tracing::debug!(path = %path.display(), "File dropped");
                state.pending_selection = Some(path);
            }
        }

        // ---- Drop zone ----
        let stroke = if drop_hovering {
            egui::Stroke::new(2.0, theme::ACCENT)
        } else if state.selected_file.is_some() && !analyzing {
            egui::Stroke::new(1.5, theme::SUCCESS)
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke
        };

        let zone = egui::Frame::group(ui.style()).stroke(stroke).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(theme::DROP_ZONE_HEIGHT);
            ui.vertical_centered(|ui| {
                ui.add_space(32.0);
                if analyzing {
                    render_progress(ui, state);
                } else if let Some(file) = state.selected_file.as_ref() {
                    ui.label(
                        egui::RichText::new("\u{2714}")
                            .size(40.0)
                            .color(theme::SUCCESS),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(state.tr(TextKey::FileSelected))
                            .strong()
                            .color(theme::SUCCESS),
                    );
                    ui.label(
                        egui::RichText::new(format!(
                            "\u{1f4c4} {} ({:.1} MB)",
                            file.display_name(),
                            file.size_mb()
                        ))
                        .small()
                        .weak(),
                    );
                } else {
                    let icon_colour = if drop_hovering {
                        theme::ACCENT
                    } else {
                        ui.visuals().weak_text_color()
                    };
                    ui.label(
                        egui::RichText::new("\u{2b06}")
                            .size(40.0)
                            .color(icon_colour),
                    );
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(state.tr(TextKey::UploadArea)).strong());
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new(state.tr(TextKey::MaxSize)).small().weak());
                    ui.label(
                        egui::RichText::new(state.tr(TextKey::SupportedFormat))
                            .small()
                            .weak(),
                    );
                }
                ui.add_space(32.0);
            });
        });

        // ---- Click to browse ----
        if !analyzing {
            let response = ui.interact(
                zone.response.rect,
                ui.id().with("drop_zone"),
                egui::Sense::click(),
            );
            if response.clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Power BI", &["pbix"])
                    .pick_file()
                {
                    tracing::debug!(path = %path.display(), "File picked via dialog");
                    state.pending_selection = Some(path);
                }
            }
        }

        // ---- Inline validation alert ----
        if let Some(ref error) = state.validation_error {
            ui.add_space(8.0);
            ui.colored_label(
                theme::DANGER,
                format!("\u{26a0} {}", state.tr(alert_key(error))),
            );
        }

        // ---- Analyze action ----
        if !analyzing && state.selected_file.is_some() {
            ui.add_space(16.0);
            let analyze = egui::Button::new(
                egui::RichText::new(state.tr(TextKey::Analyze))
                    .size(16.0)
                    .color(egui::Color32::WHITE),
            )
            .fill(theme::ACCENT)
            .min_size(egui::vec2(200.0, 36.0));
            if ui.add(analyze).clicked() {
                state.request_analyze = true;
            }
        }
    });
}

/// Progress overlay shown inside the drop zone while the analysis runs.
fn render_progress(ui: &mut egui::Ui, state: &mut AppState) {
    ui.spinner();
    ui.add_space(8.0);
    ui.label(egui::RichText::new(state.tr(TextKey::Processing)).strong());
    ui.add_space(8.0);
    ui.add(
        egui::ProgressBar::new(state.analysis_progress / 100.0)
            .desired_width(theme::PROGRESS_BAR_WIDTH)
            .text(format!("{:.0}%", state.analysis_progress)),
    );
    ui.add_space(8.0);
    if ui.small_button(state.tr(TextKey::Cancel)).clicked() {
        state.request_cancel = true;
    }
}

/// Map a validation rejection onto its localised alert text.
fn alert_key(error: &ValidationError) -> TextKey {
    match error {
        ValidationError::TooLarge { .. } => TextKey::FileTooLarge,
        ValidationError::InvalidType { .. } => TextKey::InvalidFileType,
    }
}
