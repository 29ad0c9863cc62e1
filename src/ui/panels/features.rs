// PBIX Analyzer - ui/panels/features.rs
//
// Three feature cards shown beneath the upload widget while no analysis
// is complete.

use crate::app::state::AppState;
use crate::core::i18n::TextKey;
use crate::ui::theme;

/// Render the features section.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    ui.vertical_centered(|ui| {
        ui.set_max_width(theme::CONTENT_MAX_WIDTH);

        ui.label(
            egui::RichText::new(state.tr(TextKey::Features))
                .size(20.0)
                .strong(),
        );
        ui.label(
            egui::RichText::new(state.tr(TextKey::FeaturesIntro))
                .small()
                .weak(),
        );
        ui.add_space(12.0);

        let cards: [(&str, TextKey, TextKey); 3] = [
            ("\u{26a1}", TextKey::Feature1, TextKey::Feature1Desc),
            ("\u{1f4ca}", TextKey::Feature2, TextKey::Feature2Desc),
            ("\u{1f6e1}", TextKey::Feature3, TextKey::Feature3Desc),
        ];

        ui.columns(cards.len(), |columns| {
            for (column, (icon, title, desc)) in columns.iter_mut().zip(cards) {
                egui::Frame::group(column.style()).show(column, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.add_space(10.0);
                        ui.label(egui::RichText::new(icon).size(24.0));
                        ui.add_space(4.0);
                        ui.label(egui::RichText::new(state.tr(title)).strong());
                        ui.label(egui::RichText::new(state.tr(desc)).small().weak());
                        ui.add_space(10.0);
                    });
                });
            }
        });
    });
}
