// PBIX Analyzer - ui/theme.rs
//
// Visual theme application, accent palette, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::ThemeMode;
use egui::Color32;

/// Apply the given theme to the egui context.
pub fn apply(ctx: &egui::Context, mode: ThemeMode) {
    let visuals = match mode {
        ThemeMode::Dark => egui::Visuals::dark(),
        ThemeMode::Light => egui::Visuals::light(),
    };
    ctx.set_visuals(visuals);
}

/// Primary accent (drop-zone highlight, analyze action).
pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246); // Blue 500

/// Success tone (completed analysis, valid selection).
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94); // Green 500

/// Error tone (validation alerts, failed analysis).
pub const DANGER: Color32 = Color32::from_rgb(220, 38, 38); // Red 600

/// Stat-card accents, one per counter.
pub const STAT_TABLES: Color32 = Color32::from_rgb(59, 130, 246); // Blue 500
pub const STAT_MEASURES: Color32 = Color32::from_rgb(34, 197, 94); // Green 500
pub const STAT_COLUMNS: Color32 = Color32::from_rgb(168, 85, 247); // Purple 500
pub const STAT_RELATIONSHIPS: Color32 = Color32::from_rgb(249, 115, 22); // Orange 500

/// Layout constants.
pub const CONTENT_MAX_WIDTH: f32 = 720.0;
pub const DROP_ZONE_HEIGHT: f32 = 220.0;
pub const PROGRESS_BAR_WIDTH: f32 = 240.0;
pub const STAT_CARD_MIN_HEIGHT: f32 = 96.0;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;
