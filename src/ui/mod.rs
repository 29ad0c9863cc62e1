// PBIX Analyzer - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state), core (read-only models), egui.
// Must NOT depend on: platform, direct I/O (the file dialog in the upload
// panel is the one sanctioned exception).

pub mod panels;
pub mod theme;
