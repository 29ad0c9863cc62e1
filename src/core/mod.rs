// PBIX Analyzer - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, util, and the rand crate (mock counters).
// Must NOT depend on: ui, platform, app, or any I/O beyond validation stat.

pub mod i18n;
pub mod mock;
pub mod model;
pub mod validate;
