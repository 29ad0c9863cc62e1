// PBIX Analyzer - ui/panels/results.rs
//
// Results view: success heading, the four stat cards, and the export card
// with its simulated export-to-Excel action.

use crate::app::state::AppState;
use crate::core::i18n::TextKey;
use crate::core::model::AnalysisReport;
use crate::ui::theme;

/// Render the results widget. Expects `state.analysis_report` to be set;
/// renders nothing otherwise.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(report) = state.analysis_report else {
        return;
    };

    ui.vertical_centered(|ui| {
        ui.set_max_width(theme::CONTENT_MAX_WIDTH);

        // ---- Success heading ----
        ui.label(
            egui::RichText::new(format!(
                "\u{2714} {}",
                state.tr(TextKey::AnalysisComplete)
            ))
            .size(22.0)
            .strong()
            .color(theme::SUCCESS),
        );
        ui.label(
            egui::RichText::new(state.tr(TextKey::AnalysisResults))
                .small()
                .weak(),
        );
        ui.add_space(16.0);

        // ---- Stat cards ----
        render_stat_cards(ui, state, &report);
        ui.add_space(16.0);

        // ---- Export card ----
        render_export_card(ui, state);
        ui.add_space(12.0);

        // ---- Back to the upload view ----
        if ui.button(state.tr(TextKey::NewAnalysis)).clicked() {
            state.request_reset = true;
        }
    });
}

/// One card per counter, in a fixed four-column row.
fn render_stat_cards(ui: &mut egui::Ui, state: &AppState, report: &AnalysisReport) {
    let stats: [(TextKey, u32, egui::Color32); 4] = [
        (TextKey::Tables, report.tables, theme::STAT_TABLES),
        (TextKey::Measures, report.measures, theme::STAT_MEASURES),
        (TextKey::Columns, report.columns, theme::STAT_COLUMNS),
        (
            TextKey::Relationships,
            report.relationships,
            theme::STAT_RELATIONSHIPS,
        ),
    ];

    ui.columns(stats.len(), |columns| {
        for (column, (key, value, colour)) in columns.iter_mut().zip(stats) {
            egui::Frame::group(column.style()).show(column, |ui| {
                ui.set_width(ui.available_width());
                ui.set_min_height(theme::STAT_CARD_MIN_HEIGHT);
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.label(
                        egui::RichText::new(value.to_string())
                            .size(26.0)
                            .strong()
                            .color(colour),
                    );
                    ui.label(egui::RichText::new(state.tr(key)).small().weak());
                    ui.add_space(10.0);
                });
            });
        }
    });
}

/// Export section: description, content badges, and the simulated export
/// trigger. The button is disabled while an export notice is pending.
fn render_export_card(ui: &mut egui::Ui, state: &mut AppState) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "\u{1f4ca} {}",
                    state.tr(TextKey::ExportDataTitle)
                ))
                .strong(),
            );
            ui.label(
                egui::RichText::new(state.tr(TextKey::ExportDataDesc))
                    .small()
                    .weak(),
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                for key in [
                    TextKey::Tables,
                    TextKey::Relationships,
                    TextKey::Measures,
                    TextKey::Columns,
                ] {
                    ui.label(
                        egui::RichText::new(state.tr(key))
                            .small()
                            .background_color(ui.visuals().faint_bg_color),
                    );
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let exporting = state.export_in_progress;
                    ui.add_enabled_ui(!exporting, |ui| {
                        let export = egui::Button::new(
                            egui::RichText::new(format!(
                                "\u{2b07} {}",
                                state.tr(TextKey::ExportExcel)
                            ))
                            .color(egui::Color32::WHITE),
                        )
                        .fill(theme::SUCCESS);
                        if ui.add(export).clicked() {
                            state.request_export = true;
                        }
                    });
                    if exporting {
                        ui.spinner();
                    }
                });
            });
        });
    });
}
