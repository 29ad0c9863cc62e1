// PBIX Analyzer - ui/panels/header.rs
//
// Top bar: app badge and title on the left, language selector and theme
// toggle on the right.

use crate::app::state::AppState;
use crate::core::i18n::{Language, TextKey};
use crate::ui::theme;

/// Render the header bar contents.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // App badge + title
        egui::Frame::group(ui.style())
            .fill(theme::ACCENT)
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new("PB")
                        .strong()
                        .color(egui::Color32::WHITE),
                );
            });
        ui.label(
            egui::RichText::new(state.tr(TextKey::Title))
                .size(18.0)
                .strong(),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Theme toggle: shows the icon of the theme it switches to.
            let toggle_icon = match state.theme {
                crate::core::model::ThemeMode::Dark => "\u{2600}",   // sun
                crate::core::model::ThemeMode::Light => "\u{1f319}", // moon
            };
            if ui.button(toggle_icon).clicked() {
                state.theme = state.theme.toggled();
                tracing::debug!(theme = ?state.theme, "Theme toggled");
            }

            // Language selector
            let current = state.language;
            egui::ComboBox::from_id_salt("language_selector")
                .selected_text(format!("\u{1f310} {}", current.flag()))
                .show_ui(ui, |ui| {
                    for &lang in Language::all() {
                        ui.selectable_value(
                            &mut state.language,
                            lang,
                            format!("{} {}", lang.flag(), lang.label()),
                        );
                    }
                });
            if state.language != current {
                tracing::debug!(language = state.language.code(), "Language changed");
            }
        });
    });
}
